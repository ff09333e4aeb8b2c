//! Typed HTTP client for the public Fantasy Premier League REST API.

mod client;
mod error;
pub mod types;

pub use client::{FplApi, FplClient};
pub use error::FplError;
