use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GravityError {
    /// No stream item with this id exists in the store
    #[error("Item not found: {0}")]
    NotFound(String),
}
