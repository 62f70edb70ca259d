//! Member landing screen

use dioxus::prelude::*;
use esp_core::MembershipPlan;

use crate::pages::profile::fetch_user_plan;
use crate::router::Route;
use crate::state::SESSION;

#[component]
pub fn UserHome() -> Element {
    use_effect(|| fetch_user_plan());

    let session = SESSION.read();
    let name = session
        .user
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_default();
    let plan = session.user.as_ref().and_then(|u| u.plan.clone());
    drop(session);

    rsx! {
        section {
            h1 { class: "text-2xl font-bold text-gray-900", "Welcome back, {name}" }
            p { class: "mt-2 text-sm text-gray-600",
                "Find a facility near you and check in with your pass."
            }
            div { class: "mt-8 grid grid-cols-1 gap-4 sm:grid-cols-2",
                PlanCard { plan: plan }
                Link { class: "block rounded-lg bg-white p-6 shadow hover:shadow-md", to: Route::UserActivities {},
                    h2 { class: "text-base font-semibold text-gray-900", "Browse activities" }
                    p { class: "mt-1 text-sm text-gray-600",
                        "Gyms, pools, courts, and studios in the partner network."
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: Option<MembershipPlan>) -> Element {
    rsx! {
        div { class: "rounded-lg bg-white p-6 shadow",
            h2 { class: "text-base font-semibold text-gray-900", "Your plan" }
            match &plan {
                Some(plan) => rsx! {
                    div { class: "mt-1",
                        p { class: "text-lg font-semibold text-blue-600", "{plan.plan_name}" }
                        p { class: "text-sm text-gray-600", "{plan.description}" }
                    }
                },
                None => rsx! {
                    div { class: "mt-2 h-12 animate-pulse rounded-md bg-gray-100" }
                },
            }
        }
    }
}
