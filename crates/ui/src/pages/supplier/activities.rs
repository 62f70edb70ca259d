//! Supplier activities screen
//!
//! The backend scopes the activity list and mutations to the signed-in
//! supplier's token, so no supplier id travels in the payloads.

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints, unwrap_values};
use esp_forms::{FieldDescriptor, InputKind, ValidationRule, adding_fields};
use serde_json::{Map, Value};

use crate::components::{DataTable, MetaForm};
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::{invalidate_query, toast_error, toast_success, use_backend_query};

const QUERY: &str = "activities";

fn activity_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("activityId", "ID"),
        FieldDescriptor::new("activityName", "Activity Name", InputKind::text())
            .with_rule(ValidationRule::required("Activity Name is required"))
            .editable(),
        FieldDescriptor::new("activityDescription", "Description", InputKind::TextArea)
            .editable(),
    ]
}

#[component]
pub fn SupplierActivities() -> Element {
    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public().get(endpoints::ACTIVITIES).await?;
        Ok(unwrap_values(response))
    });
    let (loading, data, error) = table_state(&rows);

    let mut creating = use_signal(|| false);
    let mut reset_epoch = use_signal(|| 0u32);
    let create = move |payload: Map<String, Value>| {
        let mut creating = creating;
        let mut reset_epoch = reset_epoch;
        creating.set(true);
        spawn(async move {
            let result = ApiClient::public()
                .post(endpoints::ACTIVITIES, Value::Object(payload))
                .await;
            creating.set(false);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("Activity created");
                    toast_success(message);
                    let epoch = *reset_epoch.read();
                    reset_epoch.set(epoch + 1);
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Could not create the activity")),
            }
        });
    };

    let fields = activity_fields();

    rsx! {
        section { class: "space-y-6",
            MetaForm {
                fields: adding_fields(&fields),
                title: "Add activity".to_string(),
                pending: *creating.read(),
                reset_epoch: *reset_epoch.read(),
                on_submit: create,
            }
            QueryErrorBanner { message: error }
            DataTable {
                title: "Activities".to_string(),
                fields: fields.clone(),
                rows: data,
                loading: loading,
                id_key: "activityId".to_string(),
                update_url: endpoints::ACTIVITIES.to_string(),
                delete_url: endpoints::ACTIVITIES.to_string(),
                query_key: QUERY,
                filter_keys: vec!["activityName".to_string()],
            }
        }
    }
}
