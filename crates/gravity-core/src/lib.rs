pub mod api;
pub mod constants;
pub mod engine;
pub mod error;
pub mod mock_data;
pub mod models;
pub mod repository;
pub mod store;

pub use error::GravityError;
pub use repository::{InMemoryRepository, StreamRepository};
pub use store::ClientStore;
