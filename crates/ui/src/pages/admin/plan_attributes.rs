//! Plan attribute screen

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints, unwrap_values};
use esp_forms::{FieldDescriptor, InputKind, ValidationRule, adding_fields};
use serde_json::{Map, Value};

use crate::components::{DataTable, MetaForm};
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::{invalidate_query, toast_error, toast_success, use_backend_query};

const QUERY: &str = "plan-attributes";

fn attribute_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("attributeId", "ID"),
        FieldDescriptor::new("attributeName", "Attribute Name", InputKind::text())
            .with_rule(ValidationRule::required("Attribute Name is required"))
            .editable(),
        FieldDescriptor::new("attributeDescription", "Description", InputKind::TextArea)
            .editable(),
    ]
}

#[component]
pub fn AdminPlanAttributes() -> Element {
    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public()
            .get(endpoints::membership::ATTRIBUTES)
            .await?;
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
                .post(endpoints::membership::ATTRIBUTES, Value::Object(payload))
                .await;
            creating.set(false);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("Attribute created");
                    toast_success(message);
                    let epoch = *reset_epoch.read();
                    reset_epoch.set(epoch + 1);
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Could not create the attribute")),
            }
        });
    };

    let fields = attribute_fields();

    rsx! {
        section { class: "space-y-6",
            MetaForm {
                fields: adding_fields(&fields),
                title: "Add plan attribute".to_string(),
                pending: *creating.read(),
                reset_epoch: *reset_epoch.read(),
                on_submit: create,
            }
            QueryErrorBanner { message: error }
            DataTable {
                title: "Plan attributes".to_string(),
                fields: fields.clone(),
                rows: data,
                loading: loading,
                id_key: "attributeId".to_string(),
                update_url: endpoints::membership::ATTRIBUTES.to_string(),
                delete_url: endpoints::membership::ATTRIBUTES.to_string(),
                query_key: QUERY,
                filter_keys: vec!["attributeName".to_string()],
            }
        }
    }
}
