//! Application state
//!
//! Global stores backed by Dioxus signals. Each store is a plain struct
//! with a typed action enum and an `apply` reducer, so transitions are
//! unit-testable; the `dispatch_*` helpers route actions through the
//! global signal and handle persistence side effects.

pub mod editing;
pub mod general;
pub mod persist;
pub mod query;
pub mod session;
pub mod toast;

pub use editing::{DraftField, EDITING, EditingAction, EditingState, dispatch_editing};
pub use general::{GENERAL, GeneralAction, GeneralState, dispatch_general, restore_general};
pub use query::{QUERIES, QueryVersions, invalidate_query, use_backend_query, use_query_version};
pub use session::{
    ResetPassMessage, SESSION, SessionAction, SessionState, dispatch_session, restore_session,
};
pub use toast::{TOASTS, Toast, ToastLevel, ToastQueue, toast_error, toast_success};
