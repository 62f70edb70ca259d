//! Country screen

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints, unwrap_values};
use esp_forms::{FieldDescriptor, InputKind, ValidationRule, adding_fields};
use serde_json::{Map, Value};

use crate::components::{DataTable, MetaForm};
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::{invalidate_query, toast_error, toast_success, use_backend_query};

const QUERY: &str = "countries";

fn country_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("countryId", "ID"),
        FieldDescriptor::new("countryName", "Country Name", InputKind::text())
            .with_rule(ValidationRule::required("Country Name is required"))
            .editable(),
    ]
}

#[component]
pub fn AdminCountry() -> Element {
    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public().get(endpoints::COUNTRY).await?;
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
                .post(endpoints::COUNTRY, Value::Object(payload))
                .await;
            creating.set(false);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("Country created");
                    toast_success(message);
                    let epoch = *reset_epoch.read();
                    reset_epoch.set(epoch + 1);
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Could not create the country")),
            }
        });
    };

    let fields = country_fields();

    rsx! {
        section { class: "space-y-6",
            MetaForm {
                fields: adding_fields(&fields),
                title: "Add country".to_string(),
                pending: *creating.read(),
                reset_epoch: *reset_epoch.read(),
                on_submit: create,
            }
            QueryErrorBanner { message: error }
            DataTable {
                title: "Countries".to_string(),
                fields: fields.clone(),
                rows: data,
                loading: loading,
                id_key: "countryId".to_string(),
                update_url: endpoints::COUNTRY.to_string(),
                delete_url: endpoints::COUNTRY.to_string(),
                query_key: QUERY,
                filter_keys: vec!["countryName".to_string()],
                clipboard_key: Some("countryName".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_only_the_name_is_editable_and_creatable() {
        let fields = country_fields();
        let adding = adding_fields(&fields);
        assert_eq!(adding.len(), 1);
        assert_eq!(adding[0].key, "countryName");
        assert!(fields[1].editable);
        assert!(!fields[0].editable);
    }
}
