//! Corporate landing screen

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::SESSION;

#[component]
pub fn CorporateHome() -> Element {
    let name = SESSION
        .read()
        .user
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_default();

    rsx! {
        section {
            h1 { class: "text-2xl font-bold text-gray-900", "Welcome back, {name}" }
            p { class: "mt-2 text-sm text-gray-600",
                "Manage the members enrolled under your company's plan."
            }
            div { class: "mt-8 grid grid-cols-1 gap-4 sm:grid-cols-2",
                Link { class: "block rounded-lg bg-white p-6 shadow hover:shadow-md", to: Route::CorporateMembers {},
                    h2 { class: "text-base font-semibold text-gray-900", "Members" }
                    p { class: "mt-1 text-sm text-gray-600", "Employees enrolled under the corporate plan." }
                }
                Link { class: "block rounded-lg bg-white p-6 shadow hover:shadow-md", to: Route::CorporatePlanAttributes {},
                    h2 { class: "text-base font-semibold text-gray-900", "Plan attributes" }
                    p { class: "mt-1 text-sm text-gray-600", "What the company's plan includes." }
                }
            }
        }
    }
}
