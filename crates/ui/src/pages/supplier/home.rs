//! Supplier landing screen

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::SESSION;

#[component]
pub fn SupplierHome() -> Element {
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
                "Keep your activities up to date and see who checked in today."
            }
            div { class: "mt-8 grid grid-cols-1 gap-4 sm:grid-cols-3",
                Link { class: "block rounded-lg bg-white p-6 shadow hover:shadow-md", to: Route::SupplierActivities {},
                    h2 { class: "text-base font-semibold text-gray-900", "Activities" }
                    p { class: "mt-1 text-sm text-gray-600", "What members can do at your facility." }
                }
                Link { class: "block rounded-lg bg-white p-6 shadow hover:shadow-md", to: Route::SupplierCheckIn {},
                    h2 { class: "text-base font-semibold text-gray-900", "Check-ins" }
                    p { class: "mt-1 text-sm text-gray-600", "Members who visited, most recent first." }
                }
                Link { class: "block rounded-lg bg-white p-6 shadow hover:shadow-md", to: Route::SupplierProfile {},
                    h2 { class: "text-base font-semibold text-gray-900", "Your listing" }
                    p { class: "mt-1 text-sm text-gray-600", "How your facility appears to members." }
                }
            }
        }
    }
}
