//! Administrator landing screen

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::SESSION;

#[component]
pub fn AdminHome() -> Element {
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
                "Manage plans, members, partners, and reference data from the sidebar."
            }
            div { class: "mt-8 grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3",
                DashboardCard {
                    title: "Membership plans",
                    body: "Create and price the plans members can sign up for.",
                    route: Route::AdminMembershipPlans {},
                }
                DashboardCard {
                    title: "Manage users",
                    body: "Create member accounts and attach their plans.",
                    route: Route::AdminManageUsers {},
                }
                DashboardCard {
                    title: "Corporate users",
                    body: "Companies whose employees get corporate plans.",
                    route: Route::AdminCorporateUsers {},
                }
                DashboardCard {
                    title: "Suppliers",
                    body: "Partner facilities members can check in at.",
                    route: Route::AdminSuppliers {},
                }
                DashboardCard {
                    title: "Geography",
                    body: "Countries, states, and cities used across the platform.",
                    route: Route::AdminCountry {},
                }
                DashboardCard {
                    title: "Plan attributes",
                    body: "The feature list attached to membership plans.",
                    route: Route::AdminPlanAttributes {},
                }
            }
        }
    }
}

#[component]
fn DashboardCard(title: &'static str, body: &'static str, route: Route) -> Element {
    rsx! {
        Link { class: "block rounded-lg bg-white p-6 shadow hover:shadow-md", to: route,
            h2 { class: "text-base font-semibold text-gray-900", "{title}" }
            p { class: "mt-1 text-sm text-gray-600", "{body}" }
        }
    }
}
