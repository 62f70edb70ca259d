//! # EasySportsPass Core
//!
//! Core types and error handling shared by the EasySportsPass client
//! crates:
//!
//! - **Types**: roles, async operation status, session records
//! - **Errors**: unified error handling with `AppError` and `AppResult`
//!

pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{AppError, AppResult};
pub use types::{AsyncStatus, Credentials, MembershipPlan, OtpChannel, Role, UserProfile};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
