//! Profile pages
//!
//! The signed-in profile overview plus [`ManageProfileForm`], the shared
//! edit form every role's manage-profile screen wraps. Profile pictures
//! upload as multipart form data; the plan panel lazily fetches the
//! user's membership plan and merges it onto the session user.

use dioxus::prelude::*;
use esp_api::{ApiClient, config, endpoints, unwrap_nested};
use esp_core::{MembershipPlan, Role, UserProfile};
use serde_json::{Value, json};

use crate::router::Route;
use crate::state::{SESSION, SessionAction, dispatch_session, toast_error, toast_success};

/// Merge the freshly fetched plan onto the session user. No-op when a
/// plan is already attached.
pub fn fetch_user_plan() {
    let session = SESSION.read();
    let Some(user) = &session.user else { return };
    if user.plan.is_some() {
        return;
    }
    drop(session);
    spawn(async move {
        match ApiClient::public()
            .get(endpoints::membership::GET_USER_PLAN)
            .await
        {
            Ok(response) => {
                let flattened = unwrap_nested(response);
                if let Ok(plan) = serde_json::from_value::<MembershipPlan>(flattened) {
                    dispatch_session(SessionAction::PlanLoaded(plan));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not fetch the user's plan");
            }
        }
    });
}

// ============================================================================
// Overview
// ============================================================================

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    use_effect(move || {
        if !SESSION.read().is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    use_effect(|| fetch_user_plan());

    let session = SESSION.read();
    let Some(user) = session.user.clone() else {
        return rsx! {};
    };
    let role = session.role();
    drop(session);

    rsx! {
        section { class: "mx-auto max-w-3xl px-6 py-16",
            div { class: "rounded-lg bg-white p-8 shadow",
                div { class: "flex items-center gap-6",
                    ProfileAvatar { user: user.clone() }
                    div {
                        h1 { class: "text-2xl font-bold text-gray-900", "{user.full_name()}" }
                        p { class: "text-sm text-gray-500", "{user.user_type}" }
                    }
                }
                dl { class: "mt-8 grid grid-cols-1 gap-4 sm:grid-cols-2",
                    ProfileFact { label: "Email", value: user.email.clone() }
                    ProfileFact { label: "Mobile", value: user.mobile.clone() }
                }
                if role == Some(Role::Normal) {
                    PlanPanel { plan: user.plan.clone() }
                }
                if let Some(role) = role {
                    Link {
                        class: "mt-8 inline-block rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-500",
                        to: manage_profile_route(role),
                        "Manage profile"
                    }
                }
            }
        }
    }
}

fn manage_profile_route(role: Role) -> Route {
    match role {
        Role::Administrator => Route::AdminManageProfile {},
        Role::Supplier => Route::SupplierManageProfile {},
        Role::Corporate => Route::CorporateManageProfile {},
        Role::Normal => Route::UserManageProfile {},
    }
}

#[component]
fn ProfileFact(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            dt { class: "text-sm font-medium text-gray-500", "{label}" }
            dd { class: "mt-1 text-sm text-gray-900",
                if value.is_empty() { "---" } else { "{value}" }
            }
        }
    }
}

/// Picture if one is set, otherwise initials on a colored disc.
#[component]
fn ProfileAvatar(user: UserProfile) -> Element {
    rsx! {
        match &user.image_url {
            Some(url) if !url.is_empty() => {
                let src = config::image_url(url);
                rsx! {
                    img { class: "h-20 w-20 rounded-full object-cover", src: "{src}" }
                }
            },
            _ => rsx! {
                div { class: "flex h-20 w-20 items-center justify-center rounded-full bg-blue-600 text-2xl font-semibold text-white",
                    "{user.initials()}"
                }
            },
        }
    }
}

#[component]
fn PlanPanel(plan: Option<MembershipPlan>) -> Element {
    rsx! {
        div { class: "mt-8 rounded-lg border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900", "Your membership" }
            match &plan {
                Some(plan) => rsx! {
                    div { class: "mt-2",
                        p { class: "text-xl font-semibold text-blue-600", "{plan.plan_name}" }
                        p { class: "text-sm text-gray-600", "{plan.description}" }
                        p { class: "mt-2 text-sm text-gray-900",
                            strong { "{plan.price}" }
                            " per month"
                        }
                    }
                },
                None => rsx! {
                    div { class: "mt-2 h-16 animate-pulse rounded-md bg-gray-100" }
                },
            }
        }
    }
}

// ============================================================================
// Manage profile
// ============================================================================

const PIC_INPUT_ID: &str = "profile-pic-input";

/// Editable profile form, shared by every role's manage-profile screen.
#[component]
pub fn ManageProfileForm() -> Element {
    let user = SESSION.read().user.clone().unwrap_or_default();

    let mut first_name = use_signal(|| user.first_name.clone());
    let mut last_name = use_signal(|| user.last_name.clone());
    let mut email = use_signal(|| user.email.clone());
    let mut mobile = use_signal(|| user.mobile.clone());
    let mut pending = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    let user_id = user.user_id;
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if first_name.read().is_empty() {
            toast_error("First name is required");
            return;
        }
        let payload = json!({
            "userId": user_id,
            "firstName": first_name.read().clone(),
            "lastName": last_name.read().clone(),
            "email": email.read().clone(),
            "mobile": mobile.read().clone(),
        });
        let mut pending = pending;
        pending.set(true);
        spawn(async move {
            let result = ApiClient::public()
                .put(endpoints::users::UPDATE_USER, payload)
                .await;
            pending.set(false);
            match result {
                Ok(response) => {
                    match serde_json::from_value::<UserProfile>(unwrap_nested(response)) {
                        Ok(mut updated) => {
                            // The update response does not carry the plan.
                            updated.plan = SESSION.read().user.as_ref().and_then(|u| u.plan.clone());
                            dispatch_session(SessionAction::UserUpdated(updated));
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "profile update response did not parse");
                        }
                    }
                    toast_success("Profile updated");
                }
                Err(err) => toast_error(err.user_message("Could not update your profile")),
            }
        });
    };

    let upload = move |_| {
        let mut uploading = uploading;
        uploading.set(true);
        spawn(async move {
            let result = upload_profile_pic(user_id).await;
            uploading.set(false);
            match result {
                Ok(Some(image_url)) => {
                    let mut updated = SESSION.read().user.clone().unwrap_or_default();
                    updated.image_url = Some(image_url);
                    dispatch_session(SessionAction::UserUpdated(updated));
                    toast_success("Profile picture updated");
                }
                Ok(None) => toast_error("Please choose an image first"),
                Err(err) => toast_error(err.user_message("Could not upload the picture")),
            }
        });
    };

    rsx! {
        section { class: "mx-auto max-w-2xl",
            form { class: "rounded-lg bg-white p-6 shadow", onsubmit: submit,
                h2 { class: "text-lg font-semibold text-gray-900", "Manage profile" }
                div { class: "mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2",
                    crate::components::TextInput {
                        value: first_name.read().clone(),
                        label: "First name".to_string(),
                        required: true,
                        on_change: move |v| first_name.set(v),
                    }
                    crate::components::TextInput {
                        value: last_name.read().clone(),
                        label: "Last name".to_string(),
                        on_change: move |v| last_name.set(v),
                    }
                    crate::components::TextInput {
                        value: email.read().clone(),
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                        on_change: move |v| email.set(v),
                    }
                    crate::components::TextInput {
                        value: mobile.read().clone(),
                        label: "Mobile".to_string(),
                        on_change: move |v| mobile.set(v),
                    }
                }
                button {
                    class: "mt-6 rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-500 disabled:opacity-50",
                    r#type: "submit",
                    disabled: *pending.read(),
                    if *pending.read() { "Saving..." } else { "Save changes" }
                }
            }

            div { class: "mt-6 rounded-lg bg-white p-6 shadow",
                h2 { class: "text-lg font-semibold text-gray-900", "Profile picture" }
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

/// Read the selected file off the picker and POST it as multipart form
/// data. Returns the new image URL the backend responds with, or `None`
/// when no file was selected.
#[cfg(target_arch = "wasm32")]
async fn upload_profile_pic(user_id: i64) -> esp_core::AppResult<Option<String>> {
    use wasm_bindgen::JsCast;

    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PIC_INPUT_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
    let Some(input) = input else { return Ok(None) };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };

    let form = web_sys::FormData::new()
        .map_err(|_| esp_core::AppError::internal("FormData construction failed"))?;
    let _ = form.append_with_blob_and_filename("file", &file, &file.name());
    let _ = form.append_with_str("userId", &user_id.to_string());

    let response = ApiClient::public()
        .post_form(endpoints::users::PROFILE_PIC, form)
        .await?;
    Ok(response
        .get("imageUrl")
        .and_then(Value::as_str)
        .map(str::to_string))
}

#[cfg(not(target_arch = "wasm32"))]
async fn upload_profile_pic(_user_id: i64) -> esp_core::AppResult<Option<String>> {
    Err(esp_core::AppError::Network)
}
