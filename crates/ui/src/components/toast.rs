//! Toast overlay

use dioxus::prelude::*;

use crate::state::{TOASTS, ToastLevel};

/// Renders the toast queue in the top-right corner. Each toast dismisses
/// itself after a few seconds or on click.
#[component]
pub fn ToastOverlay() -> Element {
    let toasts = TOASTS.read().toasts.clone();

    rsx! {
        div { class: "fixed top-4 right-4 z-[100] flex flex-col gap-2",
            for toast in toasts {
                ToastCard { id: toast.id, text: toast.text.clone(), level: toast.level }
            }
        }
    }
}

#[component]
fn ToastCard(id: u64, text: String, level: ToastLevel) -> Element {
    let class = match level {
        ToastLevel::Success => "rounded-md bg-emerald-600 px-4 py-3 text-sm text-white shadow-lg",
        ToastLevel::Error => "rounded-md bg-rose-600 px-4 py-3 text-sm text-white shadow-lg",
    };

    use_effect(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(4000).await;
            TOASTS.write().dismiss(id);
        });
    });

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| TOASTS.write().dismiss(id),
            "{text}"
        }
    }
}
