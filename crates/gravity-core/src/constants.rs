//! Application-wide constants
//!
//! Centralized location for magic strings and limits shared by the server,
//! the client store and the CLI.

/// Error body returned for unknown stream item ids
pub const ITEM_NOT_FOUND: &str = "Item not found";

// Pagination
pub const DEFAULT_STREAM_LIMIT: usize = 20;
pub const MAX_STREAM_LIMIT: usize = 100;

// Id prefixes for synthesized entities
pub const MESSAGE_ID_PREFIX: &str = "msg";
pub const INSIGHT_ID_PREFIX: &str = "insight";

/// Default HTTP address of the backend
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
