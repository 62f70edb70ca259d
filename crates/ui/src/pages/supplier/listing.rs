//! Supplier listing screen
//!
//! The supplier's public-facing record: the details members see when
//! they browse facilities, plus the listing photo. The backend returns
//! the caller's own record for a token-scoped supplier.

use dioxus::prelude::*;
use esp_api::models::Supplier;
use esp_api::{ApiClient, config, endpoints, unwrap_values};
use serde_json::{Value, json};

use crate::components::{Skeleton, TextArea, TextInput};
use crate::pages::QueryErrorBanner;
use crate::state::{invalidate_query, toast_error, toast_success, use_backend_query};

const QUERY: &str = "supplier-listing";
const PIC_INPUT_ID: &str = "supplier-pic-input";

#[component]
pub fn SupplierProfile() -> Element {
    let listing = use_backend_query(QUERY, || async {
        let response = ApiClient::public().get(endpoints::SUPPLIERS).await?;
        let record = unwrap_values(response)
            .into_iter()
            .next()
            .map(serde_json::from_value::<Supplier>)
            .transpose()?;
        Ok(record)
    });

    match &*listing.read() {
        None => rsx! {
            div { class: "space-y-4",
                Skeleton { class: "h-8 w-64" }
                Skeleton { class: "h-64 w-full" }
            }
        },
        Some(Err(err)) => rsx! {
            QueryErrorBanner { message: err.user_message("Could not load your listing") }
        },
        Some(Ok(None)) => rsx! {
            div { class: "rounded-lg bg-white p-6 shadow text-sm text-gray-600",
                "No listing exists for this account yet. Ask an administrator to create one."
            }
        },
        Some(Ok(Some(supplier))) => rsx! {
            ListingForm { supplier: supplier.clone() }
        },
    }
}

#[component]
fn ListingForm(supplier: Supplier) -> Element {
    let supplier_id = supplier.supplier_id;
    let mut name = use_signal(|| supplier.supplier_name.clone());
    let mut description = use_signal(|| supplier.description.clone().unwrap_or_default());
    let mut email = use_signal(|| supplier.email.clone().unwrap_or_default());
    let mut contact = use_signal(|| supplier.contact.clone().unwrap_or_default());
    let mut website = use_signal(|| supplier.website.clone().unwrap_or_default());
    let mut address = use_signal(|| supplier.address.clone().unwrap_or_default());
    let mut postalcode = use_signal(|| supplier.postalcode.clone().unwrap_or_default());
    let mut max_price = use_signal(|| {
        supplier
            .max_member_price
            .map(|p| p.to_string())
            .unwrap_or_default()
    });
    let mut pending = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if name.read().is_empty() {
            toast_error("Supplier Name is required");
            return;
        }
        let payload = json!({
            "supplierId": supplier_id,
            "supplierName": name.read().clone(),
            "description": description.read().clone(),
            "email": email.read().clone(),
            "contact": contact.read().clone(),
            "website": website.read().clone(),
            "address": address.read().clone(),
            "postalcode": postalcode.read().clone(),
            "maxMemberPrice": max_price.read().trim().parse::<f64>().ok(),
        });
        let mut pending = pending;
        pending.set(true);
        spawn(async move {
            let url = format!("{}/{}", endpoints::SUPPLIERS, supplier_id);
            let result = ApiClient::public().put(&url, payload).await;
            pending.set(false);
            match result {
                Ok(_) => {
                    toast_success("Listing updated");
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Could not update the listing")),
            }
        });
    };

    let upload = move |_| {
        let mut uploading = uploading;
        uploading.set(true);
        spawn(async move {
            let result = upload_listing_pic(supplier_id).await;
            uploading.set(false);
            match result {
                Ok(true) => {
                    toast_success("Listing photo updated");
                    invalidate_query(QUERY);
                }
                Ok(false) => toast_error("Please choose an image first"),
                Err(err) => toast_error(err.user_message("Could not upload the photo")),
            }
        });
    };

    rsx! {
        section { class: "mx-auto max-w-2xl space-y-6",
            form { class: "rounded-lg bg-white p-6 shadow", onsubmit: submit,
                h2 { class: "text-lg font-semibold text-gray-900", "Your listing" }
                div { class: "mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2",
                    TextInput {
                        value: name.read().clone(),
                        label: "Supplier Name".to_string(),
                        required: true,
                        on_change: move |v| name.set(v),
                    }
                    TextInput {
                        value: email.read().clone(),
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                        on_change: move |v| email.set(v),
                    }
                    TextInput {
                        value: contact.read().clone(),
                        label: "Contact".to_string(),
                        on_change: move |v| contact.set(v),
                    }
                    TextInput {
                        value: website.read().clone(),
                        label: "Website".to_string(),
                        on_change: move |v| website.set(v),
                    }
                    TextInput {
                        value: postalcode.read().clone(),
                        label: "Postal Code".to_string(),
                        on_change: move |v| postalcode.set(v),
                    }
                    TextInput {
                        value: max_price.read().clone(),
                        label: "Max Member Price".to_string(),
                        input_type: "number".to_string(),
                        on_change: move |v| max_price.set(v),
                    }
                }
                div { class: "mt-4 space-y-4",
                    TextArea {
                        value: description.read().clone(),
                        label: "Description".to_string(),
                        on_change: move |v| description.set(v),
                    }
                    TextArea {
                        value: address.read().clone(),
                        label: "Address".to_string(),
                        rows: 2,
                        on_change: move |v| address.set(v),
                    }
                }
                button {
                    class: "mt-6 rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-500 disabled:opacity-50",
                    r#type: "submit",
                    disabled: *pending.read(),
                    if *pending.read() { "Saving..." } else { "Save listing" }
                }
            }

            div { class: "rounded-lg bg-white p-6 shadow",
                h2 { class: "text-lg font-semibold text-gray-900", "Listing photo" }
                if let Some(url) = &supplier.image_url {
                    img { class: "mt-4 h-40 w-full rounded-md object-cover", src: "{config::image_url(url)}" }
                }
                input {
                    id: PIC_INPUT_ID,
                    class: "mt-4 block w-full text-sm text-gray-600",
                    r#type: "file",
                    accept: "image/*",
                }
                button {
                    class: "mt-4 rounded-md border border-gray-300 px-4 py-2 text-sm text-gray-700 hover:bg-gray-50 disabled:opacity-50",
                    disabled: *uploading.read(),
                    onclick: upload,
                    if *uploading.read() { "Uploading..." } else { "Upload" }
                }
            }
        }
    }
}

/// POST the selected photo as multipart form data. `Ok(false)` means no
/// file was selected.
#[cfg(target_arch = "wasm32")]
async fn upload_listing_pic(supplier_id: i64) -> esp_core::AppResult<bool> {
    use wasm_bindgen::JsCast;

    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PIC_INPUT_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
    let Some(input) = input else { return Ok(false) };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(false);
    };

    let form = web_sys::FormData::new()
        .map_err(|_| esp_core::AppError::internal("FormData construction failed"))?;
    let _ = form.append_with_blob_and_filename("file", &file, &file.name());
    let _ = form.append_with_str("supplierId", &supplier_id.to_string());

    ApiClient::public()
        .post_form(endpoints::SUPPLIER_PIC, form)
        .await?;
    Ok(true)
}

#[cfg(not(target_arch = "wasm32"))]
async fn upload_listing_pic(_supplier_id: i64) -> esp_core::AppResult<bool> {
    Err(esp_core::AppError::Network)
}
