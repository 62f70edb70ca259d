//! Public pages
//!
//! The marketing pages plus the two plan pickers. The landing page
//! forwards signed-in users straight to their role's dashboard.

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints, unwrap_nested};
use esp_core::MembershipPlan;
use serde_json::Value;

use crate::router::Route;
use crate::state::{
    GENERAL, GeneralAction, SESSION, SessionAction, dispatch_general, dispatch_session,
    toast_error, toast_success,
};

// ============================================================================
// Landing
// ============================================================================

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    // Signed-in users land on their dashboard, not the marketing page.
    use_effect(move || {
        if let Some(role) = SESSION.read().role() {
            nav.replace(role.home_path());
        }
    });

    rsx! {
        div {
            section { class: "bg-blue-600 py-24 text-center text-white",
                h1 { class: "text-4xl font-bold sm:text-5xl", "One pass. Every sport." }
                p { class: "mx-auto mt-4 max-w-2xl text-lg text-blue-100",
                    "EasySportsPass gives you access to gyms, pools, courts, and wellness studios across the country with a single membership."
                }
                div { class: "mt-8 flex justify-center gap-4",
                    Link {
                        class: "rounded-md bg-white px-5 py-3 text-sm font-semibold text-blue-600 hover:bg-blue-50",
                        to: Route::Memberships {},
                        "Browse memberships"
                    }
                    Link {
                        class: "rounded-md border border-white px-5 py-3 text-sm font-semibold text-white hover:bg-blue-500",
                        to: Route::CorporatePlans {},
                        "Corporate plans"
                    }
                }
            }
            HeroTabSection {}
        }
    }
}

/// Tabbed highlights under the hero.
#[component]
fn HeroTabSection() -> Element {
    let mut active = use_signal(|| 0usize);
    let tabs = [
        ("Sports", "Train across hundreds of partner facilities."),
        ("Wellness", "Saunas, spas, and recovery studios included."),
        ("Community", "Classes and events with other members."),
    ];

    rsx! {
        section { class: "mx-auto max-w-5xl px-6 py-16",
            div { class: "flex gap-2 border-b border-gray-200",
                for (index, (title, _)) in tabs.iter().enumerate() {
                    button {
                        class: if *active.read() == index {
                            "border-b-2 border-blue-600 px-4 py-2 text-sm font-medium text-blue-600"
                        } else {
                            "px-4 py-2 text-sm font-medium text-gray-500 hover:text-gray-700"
                        },
                        onclick: move |_| active.set(index),
                        "{title}"
                    }
                }
            }
            p { class: "mt-6 text-gray-600", "{tabs[*active.read()].1}" }
        }
    }
}

// ============================================================================
// Marketing stubs
// ============================================================================

#[component]
fn MarketingPage(title: &'static str, body: &'static str) -> Element {
    rsx! {
        section { class: "mx-auto max-w-3xl px-6 py-20",
            h1 { class: "text-3xl font-bold text-gray-900", "{title}" }
            p { class: "mt-4 text-gray-600", "{body}" }
        }
    }
}

#[component]
pub fn Company() -> Element {
    rsx! {
        MarketingPage {
            title: "Company",
            body: "EasySportsPass partners with local clubs and studios to make sport accessible for everyone.",
        }
    }
}

#[component]
pub fn AboutSports() -> Element {
    rsx! {
        MarketingPage {
            title: "About Sports",
            body: "From climbing to swimming, discover the disciplines our partner network covers.",
        }
    }
}

#[component]
pub fn Subscriptions() -> Element {
    rsx! {
        MarketingPage {
            title: "Subscription",
            body: "Flexible monthly plans for individuals, families, and companies. Cancel any time.",
        }
    }
}

#[component]
pub fn ContactUs() -> Element {
    rsx! {
        MarketingPage {
            title: "Contact Us",
            body: "Questions about your membership? Write to support@easysportspass.example and we will get back within one business day.",
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section { class: "mx-auto max-w-3xl px-6 py-20 text-center",
            h1 { class: "text-3xl font-bold text-gray-900", "Page not found" }
            p { class: "mt-4 text-gray-600", "There is nothing at /{path}." }
            Link { class: "mt-6 inline-block text-blue-600 hover:text-blue-500", to: Route::Home {}, "Back to home" }
        }
    }
}

// ============================================================================
// Plan pickers
// ============================================================================

fn plans_from_response(response: Value) -> Vec<MembershipPlan> {
    let flattened = unwrap_nested(response);
    match flattened {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Individual membership plan pricing. Picking a plan stores it and moves
/// on to signup.
#[component]
pub fn Memberships() -> Element {
    let nav = use_navigator();

    let plans = use_resource(move || async move {
        let response = ApiClient::public()
            .get(endpoints::membership::GET_NORMAL_PLANS)
            .await?;
        Ok::<_, esp_core::AppError>(plans_from_response(response))
    });

    use_effect(move || {
        if let Some(Ok(plans)) = &*plans.read_unchecked() {
            dispatch_general(GeneralAction::PlansLoaded(plans.clone()));
        }
    });

    let listed = GENERAL.read().plans.clone();

    rsx! {
        section { class: "mx-auto max-w-6xl px-6 py-16",
            h1 { class: "text-3xl font-bold text-gray-900 text-center", "Choose your membership" }
            if listed.is_empty() && plans.read().is_none() {
                div { class: "mt-10 grid grid-cols-1 gap-6 sm:grid-cols-3",
                    for _ in 0..3 {
                        div { class: "h-64 animate-pulse rounded-lg bg-gray-200" }
                    }
                }
            } else {
                div { class: "mt-10 grid grid-cols-1 gap-6 sm:grid-cols-3",
                    for plan in listed {
                        PlanCard {
                            plan: plan.clone(),
                            on_select: move |plan: MembershipPlan| {
                                dispatch_general(GeneralAction::SelectPlan(plan));
                                nav.push(Route::Register {});
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PlanCard(plan: MembershipPlan, on_select: EventHandler<MembershipPlan>) -> Element {
    let selected = plan.clone();
    rsx! {
        div { class: "flex flex-col rounded-lg border-2 border-white bg-white p-6 shadow-lg transition-transform hover:scale-105 hover:border-blue-500",
            h3 { class: "text-2xl font-semibold", "{plan.plan_name}" }
            p { class: "my-4 text-3xl font-bold text-blue-600",
                "{plan.price}"
                span { class: "text-lg", "/mo" }
            }
            p { class: "text-sm text-gray-600", "{plan.description}" }
            if plan.membership_plan_attributes.is_empty() {
                p { class: "mt-4 text-sm text-gray-400", "No additional attributes available." }
            } else {
                ul { class: "mt-4 text-sm text-gray-500",
                    for attribute in plan.membership_plan_attributes.iter() {
                        li {
                            strong { {attribute.get("attributeName").and_then(Value::as_str).unwrap_or("")} }
                            ": "
                            {attribute.get("attributeDetails").and_then(Value::as_str).unwrap_or("")}
                        }
                    }
                }
            }
            button {
                class: "mt-auto rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-500",
                onclick: move |_| on_select.call(selected.clone()),
                "Select plan"
            }
        }
    }
}

/// Corporate plan pricing. The visitor proves their company email first;
/// only then are the corporate plans shown.
#[component]
pub fn CorporatePlans() -> Element {
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut verified = use_signal(|| false);
    let mut verifying = use_signal(|| false);
    let mut plans = use_signal(Vec::<MembershipPlan>::new);

    let verify = move |_| {
        let address = email.read().clone();
        if address.is_empty() {
            toast_error("Please enter your corporate email");
            return;
        }
        verifying.set(true);
        spawn(async move {
            let result = ApiClient::public()
                .post(
                    endpoints::corporate::VERIFY_CORPORATE_USER,
                    serde_json::json!({ "email": address }),
                )
                .await;
            match result {
                Ok(_) => {
                    dispatch_session(SessionAction::SetCorporateEmail(address));
                    match ApiClient::public()
                        .get(endpoints::membership::GET_CORPORATE_PLANS)
                        .await
                    {
                        Ok(response) => {
                            plans.set(plans_from_response(response));
                            verified.set(true);
                            toast_success("Email verified");
                        }
                        Err(err) => toast_error(err.user_message("Could not load corporate plans")),
                    }
                }
                Err(err) => {
                    toast_error(err.user_message("We could not verify this corporate email"));
                }
            }
            verifying.set(false);
        });
    };

    rsx! {
        section { class: "mx-auto max-w-6xl px-6 py-16",
            if !*verified.read() {
                div { class: "mx-auto max-w-md rounded-lg bg-white p-6 shadow",
                    h1 { class: "text-xl font-semibold text-gray-900", "Corporate membership" }
                    p { class: "mt-2 text-sm text-gray-600",
                        "Enter your company email address to see the plans your employer offers."
                    }
                    input {
                        class: "mt-4 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        r#type: "email",
                        placeholder: "you@company.com",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    div { class: "mt-4 flex justify-end gap-3",
                        button {
                            class: "rounded-md border border-gray-300 px-4 py-2 text-sm text-gray-700",
                            onclick: move |_| { nav.push(Route::Home {}); },
                            "Cancel"
                        }
                        button {
                            class: "rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white disabled:opacity-50",
                            disabled: *verifying.read(),
                            onclick: verify,
                            if *verifying.read() { "Verifying..." } else { "Verify email" }
                        }
                    }
                }
            } else {
                h1 { class: "text-3xl font-bold text-gray-900 text-center", "Corporate plans" }
                div { class: "mt-10 grid grid-cols-1 gap-6 sm:grid-cols-3",
                    for plan in plans.read().iter() {
                        PlanCard {
                            plan: plan.clone(),
                            on_select: move |plan: MembershipPlan| {
                                dispatch_general(GeneralAction::SelectPlan(plan));
                                nav.push(Route::Register {});
                            },
                        }
                    }
                }
            }
        }
    }
}
