pub mod client;
pub mod inbox;

pub use client::{ApiError, GravityClient};
