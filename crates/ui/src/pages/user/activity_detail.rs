//! Facility detail screen
//!
//! One facility's listing and activities, with the check-in action.

use dioxus::prelude::*;
use esp_api::models::{Activity, Supplier};
use esp_api::{ApiClient, deserialize_list, endpoints, unwrap_values};
use serde_json::json;

use crate::components::Skeleton;
use crate::pages::QueryErrorBanner;
use crate::router::Route;
use crate::state::{toast_error, toast_success};

#[component]
pub fn UserActivityDetail(supplier_id: i64) -> Element {
    let detail = use_resource(move || async move {
        let url = format!("{}/{}", endpoints::SUPPLIERS, supplier_id);
        let response = ApiClient::public().get(&url).await?;
        // Detail responses come back as a bare object, list-shaped ones
        // still unwrap.
        let supplier = if response.get("supplierId").is_some() {
            Some(serde_json::from_value::<Supplier>(response)?)
        } else {
            unwrap_values(response)
                .into_iter()
                .next()
                .map(serde_json::from_value::<Supplier>)
                .transpose()?
        };
        let activities = ApiClient::public()
            .get(&format!("{}/{}", endpoints::ACTIVITIES, supplier_id))
            .await
            .map(deserialize_list::<Activity>)
            .unwrap_or(Ok(Vec::new()))?;
        Ok::<_, esp_core::AppError>((supplier, activities))
    });

    let mut checking_in = use_signal(|| false);
    let check_in = move |_| {
        let mut checking_in = checking_in;
        checking_in.set(true);
        spawn(async move {
            let result = ApiClient::public()
                .post(
                    endpoints::check_in::CHECK_IN,
                    json!({ "supplierId": supplier_id }),
                )
                .await;
            checking_in.set(false);
            match result {
                Ok(_) => toast_success("Checked in. Enjoy your session!"),
                Err(err) => toast_error(err.user_message("Check-in failed")),
            }
        });
    };

    rsx! {
        section {
            Link { class: "text-sm text-blue-600 hover:text-blue-500", to: Route::UserActivities {},
                "← All facilities"
            }
            match &*detail.read() {
                None => rsx! {
                    div { class: "mt-6 space-y-4",
                        Skeleton { class: "h-8 w-64" }
                        Skeleton { class: "h-40 w-full" }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "mt-6",
                        QueryErrorBanner { message: err.user_message("Could not load the facility") }
                    }
                },
                Some(Ok((None, _))) => rsx! {
                    p { class: "mt-6 text-sm text-gray-500", "This facility no longer exists." }
                },
                Some(Ok((Some(supplier), activities))) => rsx! {
                    div { class: "mt-6 rounded-lg bg-white p-6 shadow",
                        div { class: "flex items-start justify-between",
                            div {
                                h1 { class: "text-2xl font-bold text-gray-900", "{supplier.supplier_name}" }
                                if let Some(address) = &supplier.address {
                                    p { class: "mt-1 text-sm text-gray-500", "{address}" }
                                }
                            }
                            button {
                                class: "rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-500 disabled:opacity-50",
                                disabled: *checking_in.read(),
                                onclick: check_in,
                                if *checking_in.read() { "Checking in..." } else { "Check in" }
                            }
                        }
                        if let Some(description) = &supplier.description {
                            p { class: "mt-4 text-sm text-gray-600", "{description}" }
                        }
                        if let Some(website) = &supplier.website {
                            a { class: "mt-2 inline-block text-sm text-blue-600 hover:text-blue-500",
                                href: "{website}",
                                "{website}"
                            }
                        }
                    }

                    h2 { class: "mt-8 text-lg font-semibold text-gray-900", "Activities" }
                    if activities.is_empty() {
                        p { class: "mt-2 text-sm text-gray-500", "This facility has not listed activities yet." }
                    } else {
                        ul { class: "mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2",
                            for activity in activities.iter() {
                                li { class: "rounded-lg bg-white p-4 shadow",
                                    p { class: "font-medium text-gray-900", "{activity.activity_name}" }
                                    if let Some(description) = &activity.activity_description {
                                        p { class: "mt-1 text-sm text-gray-600", "{description}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
