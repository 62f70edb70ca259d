//! # EasySportsPass UI
//!
//! The Dioxus web client: routing, layouts, global stores, and the
//! routed screens. [`launch`] is the only thing the binary calls; it
//! boots logging, rehydrates persisted state, and mounts [`App`].

use dioxus::prelude::*;

pub mod components;
pub mod layouts;
pub mod pages;
pub mod router;
pub mod state;
pub mod workflow;

use esp_api::{ApiClient, endpoints};
use serde_json::Value;

use crate::router::Route;
use crate::state::{SESSION, SessionAction, dispatch_session, restore_general, restore_session};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root component. Restores persisted state, makes sure a bearer token
/// exists (anonymous bootstrap token before login), and mounts the
/// router.
#[component]
pub fn App() -> Element {
    use_hook(|| {
        restore_session();
        restore_general();
    });

    // Public endpoints still require a token; fetch the anonymous one
    // when no session token survived the reload.
    use_effect(|| {
        if SESSION.read().token.is_none() {
            spawn(async {
                match ApiClient::public().get(endpoints::auth::INIT).await {
                    Ok(response) => {
                        let token = response
                            .get("token")
                            .and_then(|t| t.get("result").or(Some(t)))
                            .and_then(Value::as_str);
                        match token {
                            Some(token) => {
                                dispatch_session(SessionAction::TokenReady(token.to_string()));
                            }
                            None => {
                                tracing::warn!("anonymous token response had no token");
                            }
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "could not fetch the anonymous token");
                    }
                }
            });
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Entry point called by the binary.
pub fn launch() {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    tracing::info!(version = VERSION, "starting EasySportsPass");
    dioxus::launch(App);
}
