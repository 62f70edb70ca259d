//! Facility browser
//!
//! Members browse the partner facilities and open one to see its
//! activities and check in.

use dioxus::prelude::*;
use esp_api::models::Supplier;
use esp_api::{ApiClient, config, deserialize_list, endpoints};

use crate::components::Skeleton;
use crate::pages::QueryErrorBanner;
use crate::router::Route;
use crate::state::use_backend_query;

const QUERY: &str = "facilities";

#[component]
pub fn UserActivities() -> Element {
    let mut search = use_signal(String::new);

    let suppliers = use_backend_query(QUERY, || async {
        let response = ApiClient::public().get(endpoints::SUPPLIERS).await?;
        deserialize_list::<Supplier>(response)
    });

    let (loading, listed, error) = match &*suppliers.read() {
        None => (true, Vec::new(), None),
        Some(Ok(suppliers)) => (false, suppliers.clone(), None),
        Some(Err(err)) => (
            false,
            Vec::new(),
            Some(err.user_message("Could not load facilities")),
        ),
    };

    let needle = search.read().to_lowercase();
    let filtered: Vec<Supplier> = listed
        .into_iter()
        .filter(|s| needle.is_empty() || s.supplier_name.to_lowercase().contains(&needle))
        .collect();

    rsx! {
        section {
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-900", "Facilities" }
                input {
                    class: "block w-64 rounded-md border border-gray-300 px-3 py-2 text-sm",
                    placeholder: "Search facilities",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
            }

            QueryErrorBanner { message: error }

            if loading {
                div { class: "mt-8 grid grid-cols-1 gap-6 sm:grid-cols-3",
                    for _ in 0..6 {
                        Skeleton { class: "h-48 w-full" }
                    }
                }
            } else if filtered.is_empty() {
                p { class: "mt-8 text-sm text-gray-500", "No facilities match your search." }
            } else {
                div { class: "mt-8 grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    for supplier in filtered {
                        FacilityCard { supplier: supplier.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn FacilityCard(supplier: Supplier) -> Element {
    let description = supplier.description.clone().unwrap_or_default();
    rsx! {
        Link {
            class: "block overflow-hidden rounded-lg bg-white shadow hover:shadow-md",
            to: Route::UserActivityDetail { supplier_id: supplier.supplier_id },
            if let Some(url) = &supplier.image_url {
                img { class: "h-32 w-full object-cover", src: "{config::image_url(url)}" }
            } else {
                div { class: "h-32 w-full bg-gray-200" }
            }
            div { class: "p-4",
                h2 { class: "text-base font-semibold text-gray-900", "{supplier.supplier_name}" }
                p { class: "mt-1 line-clamp-2 text-sm text-gray-600", "{description}" }
                if let Some(price) = supplier.max_member_price {
                    p { class: "mt-2 text-sm font-medium text-blue-600", "Up to {price} covered" }
                }
            }
        }
    }
}
