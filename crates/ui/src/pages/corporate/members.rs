//! Corporate members screen
//!
//! The user list is scoped by the corporate token to employees enrolled
//! under the company's plan.

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints, unwrap_values};
use esp_forms::{FieldDescriptor, InputKind, ValidationRule};

use crate::components::DataTable;
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::use_backend_query;

const QUERY: &str = "corporate-members";

fn member_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("userId", "ID"),
        FieldDescriptor::new("firstname", "First Name", InputKind::text())
            .with_rule(ValidationRule::required("First Name is required"))
            .editable(),
        FieldDescriptor::new("lastName", "Last Name", InputKind::text()).editable(),
        FieldDescriptor::readonly("email", "Email"),
        FieldDescriptor::new("mobile", "Mobile", InputKind::text())
            .with_rule(ValidationRule::phone("Enter a valid mobile number"))
            .editable(),
    ]
}

#[component]
pub fn CorporateMembers() -> Element {
    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public().get(endpoints::users::USERS).await?;
        Ok(unwrap_values(response))
    });
    let (loading, data, error) = table_state(&rows);

    rsx! {
        section { class: "space-y-6",
            QueryErrorBanner { message: error }
            DataTable {
                title: "Members".to_string(),
                fields: member_fields(),
                rows: data,
                loading: loading,
                id_key: "userId".to_string(),
                update_url: endpoints::users::USERS.to_string(),
                delete_url: endpoints::users::USERS.to_string(),
                query_key: QUERY,
                filter_keys: vec!["firstname".to_string(), "email".to_string()],
                clipboard_key: Some("email".to_string()),
            }
        }
    }
}
