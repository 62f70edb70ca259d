//! City screen
//!
//! Cities belong to a state; a blank state selection must fail validation
//! before any request goes out.

use dioxus::prelude::*;
use esp_api::models::StateRecord;
use esp_api::{ApiClient, deserialize_list, endpoints, unwrap_values};
use esp_forms::{
    FieldDescriptor, InputKind, SelectChoice, ValidationRule, ValueKind, adding_fields,
};
use serde_json::{Map, Value};

use crate::components::{DataTable, MetaForm};
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::{
    GeneralAction, dispatch_general, invalidate_query, toast_error, toast_success,
    use_backend_query,
};

const QUERY: &str = "cities";

fn city_fields(states: &[SelectChoice], loading: bool) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("cityId", "ID"),
        FieldDescriptor::new("cityName", "City Name", InputKind::text())
            .with_rule(ValidationRule::required("City Name is required"))
            .editable(),
        FieldDescriptor::new("stateId", "State", InputKind::Select)
            .with_rule(ValidationRule::required("State is required"))
            .with_value_kind(ValueKind::Number)
            .with_options(states.to_vec())
            .loading(loading)
            .editable(),
        FieldDescriptor::readonly("stateName", "State Name"),
    ]
}

#[component]
pub fn AdminCity() -> Element {
    let states = use_backend_query("states", || async {
        let response = ApiClient::public().get(endpoints::STATE).await?;
        deserialize_list::<StateRecord>(response)
    });

    use_effect(move || {
        if let Some(Ok(states)) = &*states.read_unchecked() {
            dispatch_general(GeneralAction::StatesLoaded(states.clone()));
        }
    });

    let (options_loading, state_options) = match &*states.read() {
        Some(Ok(states)) => (
            false,
            states
                .iter()
                .map(|s| SelectChoice::new(s.state_id.to_string(), s.state_name.clone()))
                .collect::<Vec<_>>(),
        ),
        Some(Err(_)) => (false, Vec::new()),
        None => (true, Vec::new()),
    };

    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public().get(endpoints::CITY).await?;
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
                .post(endpoints::CITY, Value::Object(payload))
                .await;
            creating.set(false);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("City created");
                    toast_success(message);
                    let epoch = *reset_epoch.read();
                    reset_epoch.set(epoch + 1);
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Could not create the city")),
            }
        });
    };

    let fields = city_fields(&state_options, options_loading);

    rsx! {
        section { class: "space-y-6",
            MetaForm {
                fields: adding_fields(&fields),
                title: "Add city".to_string(),
                pending: *creating.read(),
                reset_epoch: *reset_epoch.read(),
                on_submit: create,
            }
            QueryErrorBanner { message: error }
            DataTable {
                title: "Cities".to_string(),
                fields: fields.clone(),
                rows: data,
                loading: loading,
                id_key: "cityId".to_string(),
                update_url: endpoints::CITY.to_string(),
                delete_url: endpoints::CITY.to_string(),
                query_key: QUERY,
                filter_keys: vec!["cityName".to_string(), "stateName".to_string()],
                clipboard_key: Some("cityName".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esp_forms::validate_fields;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_blank_state_selection_fails_validation() {
        let fields = city_fields(&[SelectChoice::new("4", "Bavaria")], false);
        let mut values = BTreeMap::new();
        values.insert("cityName".to_string(), "Munich".to_string());
        values.insert("stateId".to_string(), String::new());

        let errors = validate_fields(&fields, &values);
        assert_eq!(errors.get("stateId"), Some(&"State is required".to_string()));
        assert_eq!(errors.len(), 1);
    }
}
