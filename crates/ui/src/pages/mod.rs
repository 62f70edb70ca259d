//! # Pages
//!
//! Routed screens. Public and auth pages live at this level; each role's
//! dashboard screens live in their own submodule.

pub mod admin;
pub mod auth;
pub mod corporate;
pub mod profile;
pub mod public;
pub mod supplier;
pub mod user;

use dioxus::prelude::*;
use esp_core::AppResult;
use serde_json::Value;

pub use auth::{Login, Register, ResetLinkMessage, ResetPassword, ResetSuccess, VerifyUser};
pub use profile::Profile;
pub use public::{
    AboutSports, Company, ContactUs, CorporatePlans, Home, Memberships, NotFound, Subscriptions,
};

/// Loading flag, row set, and error banner text for a table-backing query.
pub(crate) fn table_state(
    resource: &Resource<AppResult<Vec<Value>>>,
) -> (bool, Vec<Value>, Option<String>) {
    match &*resource.read() {
        None => (true, Vec::new(), None),
        Some(Ok(rows)) => (false, rows.clone(), None),
        Some(Err(err)) => (
            false,
            Vec::new(),
            Some(err.user_message("Could not load records")),
        ),
    }
}

/// Error banner shown above a table when its query failed.
#[component]
pub(crate) fn QueryErrorBanner(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = &message {
            div { class: "mb-4 rounded-md border border-rose-200 bg-rose-50 px-4 py-3 text-sm text-rose-700",
                "{message}"
            }
        }
    }
}
