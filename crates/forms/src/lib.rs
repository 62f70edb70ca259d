//! # EasySportsPass Forms
//!
//! Declarative field metadata for the EasySportsPass client. Each screen
//! declares a list of [`FieldDescriptor`]s; the form generator and the
//! editable data table derive their inputs, validation schema, and commit
//! payloads from that single list.
//!

pub mod field;
pub mod validation;

// Re-export commonly used items at crate root
pub use field::{
    FieldDescriptor, InputKind, SelectChoice, ValueKind, adding_fields, editable_fields,
};
pub use validation::{ValidationRule, validate_fields};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
