//! # UI Components
//!
//! Shared building blocks for the dashboard screens: form inputs, the
//! descriptor-driven create form, the editable data table, dialogs,
//! skeletons, and the toast overlay.

pub mod confirm;
pub mod data_table;
pub mod form;
pub mod inputs;
pub mod skeleton;
pub mod toast;

pub use confirm::ConfirmDialog;
pub use data_table::DataTable;
pub use form::MetaForm;
pub use inputs::{Checkbox, Select, TextArea, TextInput};
pub use skeleton::{Skeleton, TableSkeleton};
pub use toast::ToastOverlay;
