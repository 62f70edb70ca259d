//! Supplier screen (administrator side)

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints, unwrap_values};
use esp_forms::{FieldDescriptor, InputKind, ValidationRule, ValueKind, adding_fields};
use serde_json::{Map, Value};

use crate::components::{DataTable, MetaForm};
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::{invalidate_query, toast_error, toast_success, use_backend_query};

const QUERY: &str = "suppliers";

fn supplier_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("supplierId", "ID"),
        FieldDescriptor::new("supplierName", "Supplier Name", InputKind::text())
            .with_rule(ValidationRule::required("Supplier Name is required"))
            .editable(),
        FieldDescriptor::new("description", "Description", InputKind::TextArea).editable(),
        FieldDescriptor::new("email", "Email", InputKind::TypedText("email"))
            .with_rule(ValidationRule::required_email("Email"))
            .editable(),
        FieldDescriptor::new("contact", "Contact", InputKind::text())
            .with_rule(ValidationRule::phone("Enter a valid mobile number"))
            .editable(),
        FieldDescriptor::new("website", "Website", InputKind::text()).editable(),
        FieldDescriptor::new("address", "Address", InputKind::TextArea).editable(),
        FieldDescriptor::new("postalcode", "Postal Code", InputKind::text())
            .with_rule(ValidationRule::matches(
                r"^\d{6}$",
                "Postal code must be exactly 6 digits",
            ))
            .editable(),
        FieldDescriptor::new("maxMemberPrice", "Max Member Price", InputKind::TypedText("number"))
            .with_value_kind(ValueKind::Number)
            .editable(),
    ]
}

#[component]
pub fn AdminSuppliers() -> Element {
    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public().get(endpoints::SUPPLIERS).await?;
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
                .post(endpoints::SUPPLIERS, Value::Object(payload))
                .await;
            creating.set(false);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("Supplier created");
                    toast_success(message);
                    let epoch = *reset_epoch.read();
                    reset_epoch.set(epoch + 1);
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Could not create the supplier")),
            }
        });
    };

    let fields = supplier_fields();

    rsx! {
        section { class: "space-y-6",
            MetaForm {
                fields: adding_fields(&fields),
                title: "Add supplier".to_string(),
                pending: *creating.read(),
                reset_epoch: *reset_epoch.read(),
                on_submit: create,
            }
            QueryErrorBanner { message: error }
            DataTable {
                title: "Suppliers".to_string(),
                fields: fields.clone(),
                rows: data,
                loading: loading,
                id_key: "supplierId".to_string(),
                update_url: endpoints::SUPPLIERS.to_string(),
                delete_url: endpoints::SUPPLIERS.to_string(),
                query_key: QUERY,
                filter_keys: vec!["supplierName".to_string(), "email".to_string()],
                clipboard_key: Some("email".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_postal_code_rule() {
        let fields = supplier_fields();
        let postal = fields.iter().find(|f| f.key == "postalcode").unwrap();
        let rule = postal.rule.as_ref().unwrap();
        assert!(rule.validate("600001").is_ok());
        assert!(rule.validate("60001").is_err());
        assert!(rule.validate("60000a").is_err());
        // Optional field; blank passes and Required is not attached.
        assert_eq!(rule.validate(""), Ok(()));
    }
}
