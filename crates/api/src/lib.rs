//! # EasySportsPass API
//!
//! REST client layer for the EasySportsPass backend. Provides the JSON
//! HTTP client, endpoint path constants, the `$values` envelope adapter,
//! and typed record models shared by the dashboard screens.
//!

pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod models;

// Re-export commonly used items at crate root
pub use client::{ApiClient, clear_default_token, normalize_error, set_default_token};
pub use envelope::{deserialize_list, unwrap_nested, unwrap_values};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
