//! Corporate user screen
//!
//! A corporate user is the company record. Its email identifier is the
//! domain suffix the public corporate-plans page verifies visitor emails
//! against.

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints, unwrap_values};
use esp_forms::{FieldDescriptor, InputKind, ValidationRule, adding_fields};
use serde_json::{Map, Value};

use crate::components::{DataTable, MetaForm};
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::{invalidate_query, toast_error, toast_success, use_backend_query};

const QUERY: &str = "corporate-users";

fn corporate_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("corporateUserId", "ID"),
        FieldDescriptor::new("corporateName", "Corporate Name", InputKind::text())
            .with_rule(ValidationRule::required("Corporate Name is required"))
            .editable(),
        FieldDescriptor::new("contactPersonName", "Contact Person", InputKind::text())
            .with_rule(ValidationRule::required("Contact Person is required"))
            .editable(),
        FieldDescriptor::new("contactPersonDetail", "Contact Detail", InputKind::text())
            .editable(),
        FieldDescriptor::new("contactPersonMobileNo", "Contact Mobile", InputKind::text())
            .with_rule(ValidationRule::phone("Enter a valid mobile number"))
            .editable(),
        FieldDescriptor::new(
            "contactPersonEmail",
            "Contact Email",
            InputKind::TypedText("email"),
        )
        .with_rule(ValidationRule::required_email("Contact Email"))
        .editable(),
        FieldDescriptor::new("emailIdentifier", "Email Identifier", InputKind::text())
            .with_rule(ValidationRule::required("Email Identifier is required"))
            .with_placeholder("company.com")
            .editable(),
    ]
}

#[component]
pub fn AdminCorporateUsers() -> Element {
    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public()
            .get(endpoints::corporate::CORPORATE)
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
                .post(endpoints::corporate::CORPORATE, Value::Object(payload))
                .await;
            creating.set(false);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("Corporate user created");
                    toast_success(message);
                    let epoch = *reset_epoch.read();
                    reset_epoch.set(epoch + 1);
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Could not create the corporate user")),
            }
        });
    };

    let fields = corporate_fields();

    rsx! {
        section { class: "space-y-6",
            MetaForm {
                fields: adding_fields(&fields),
                title: "Add corporate user".to_string(),
                pending: *creating.read(),
                reset_epoch: *reset_epoch.read(),
                on_submit: create,
            }
            QueryErrorBanner { message: error }
            DataTable {
                title: "Corporate users".to_string(),
                fields: fields.clone(),
                rows: data,
                loading: loading,
                id_key: "corporateUserId".to_string(),
                update_url: endpoints::corporate::CORPORATE.to_string(),
                delete_url: endpoints::corporate::CORPORATE.to_string(),
                query_key: QUERY,
                filter_keys: vec!["corporateName".to_string(), "emailIdentifier".to_string()],
                clipboard_key: Some("emailIdentifier".to_string()),
            }
        }
    }
}
