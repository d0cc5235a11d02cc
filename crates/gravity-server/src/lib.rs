pub mod config;
pub mod error;
pub mod http;
pub mod tracing_setup;

pub use config::ServerConfig;
pub use http::{router, run_server, AppState};
