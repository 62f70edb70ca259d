//! Membership plan screen

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints, unwrap_nested};
use esp_forms::{
    FieldDescriptor, InputKind, SelectChoice, ValidationRule, ValueKind, adding_fields,
};
use serde_json::{Map, Value};

use crate::components::{DataTable, MetaForm};
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::{invalidate_query, toast_error, toast_success, use_backend_query};

const QUERY: &str = "membership-plans";

fn plan_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("planId", "ID"),
        FieldDescriptor::new("planName", "Plan Name", InputKind::text())
            .with_rule(ValidationRule::required("Plan Name is required"))
            .editable(),
        FieldDescriptor::new("description", "Description", InputKind::TextArea)
            .with_rule(ValidationRule::required("Description is required"))
            .editable(),
        FieldDescriptor::new("price", "Price", InputKind::TypedText("number"))
            .with_rule(ValidationRule::required("Price is required"))
            .with_value_kind(ValueKind::Number)
            .editable(),
        FieldDescriptor::new("planType", "Plan Type", InputKind::Select)
            .with_rule(ValidationRule::required("Plan Type is required"))
            .with_options(vec![
                SelectChoice::new("Normal", "Normal"),
                SelectChoice::new("Corporate", "Corporate"),
            ])
            .editable(),
    ]
}

/// Plan rows arrive with their attributes nested in `$values` envelopes.
fn plan_rows(response: Value) -> Vec<Value> {
    match unwrap_nested(response) {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

#[component]
pub fn AdminMembershipPlans() -> Element {
    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public()
            .get(endpoints::membership::GET_ALL_PLANS)
            .await?;
        Ok(plan_rows(response))
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
                .post(endpoints::membership::GET_NORMAL_PLANS, Value::Object(payload))
                .await;
            creating.set(false);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("Plan created");
                    toast_success(message);
                    let epoch = *reset_epoch.read();
                    reset_epoch.set(epoch + 1);
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Could not create the plan")),
            }
        });
    };

    let fields = plan_fields();

    rsx! {
        section { class: "space-y-6",
            MetaForm {
                fields: adding_fields(&fields),
                title: "Add membership plan".to_string(),
                description: "Plans show up on the public pricing pages immediately.".to_string(),
                pending: *creating.read(),
                reset_epoch: *reset_epoch.read(),
                on_submit: create,
            }
            QueryErrorBanner { message: error }
            DataTable {
                title: "Membership plans".to_string(),
                fields: fields.clone(),
                rows: data,
                loading: loading,
                id_key: "planId".to_string(),
                update_url: endpoints::membership::GET_NORMAL_PLANS.to_string(),
                delete_url: endpoints::membership::GET_NORMAL_PLANS.to_string(),
                query_key: QUERY,
                filter_keys: vec!["planName".to_string(), "planType".to_string()],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_plan_rows_unwrap_nested_envelopes() {
        let response = json!({
            "$values": [
                {
                    "planId": 1,
                    "planName": "Gold",
                    "membershipPlanAttributes": { "$values": [{ "attributeName": "Pool" }] }
                }
            ]
        });
        let rows = plan_rows(response);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["membershipPlanAttributes"][0]["attributeName"], "Pool");
    }
}
