//! State screen
//!
//! States belong to a country, so the create form and the inline editor
//! both carry a country select fed by the countries query.

use dioxus::prelude::*;
use esp_api::models::Country;
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

const QUERY: &str = "states";

fn state_fields(countries: &[SelectChoice], loading: bool) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("stateId", "ID"),
        FieldDescriptor::new("stateName", "State Name", InputKind::text())
            .with_rule(ValidationRule::required("State Name is required"))
            .editable(),
        FieldDescriptor::new("countryId", "Country", InputKind::Select)
            .with_rule(ValidationRule::required("Country is required"))
            .with_value_kind(ValueKind::Number)
            .with_options(countries.to_vec())
            .loading(loading)
            .editable(),
        FieldDescriptor::readonly("countryName", "Country Name"),
    ]
}

#[component]
pub fn AdminState() -> Element {
    let countries = use_backend_query("countries", || async {
        let response = ApiClient::public().get(endpoints::COUNTRY).await?;
        deserialize_list::<Country>(response)
    });

    // Share the fetched countries through the general store.
    use_effect(move || {
        if let Some(Ok(countries)) = &*countries.read_unchecked() {
            dispatch_general(GeneralAction::CountriesLoaded(countries.clone()));
        }
    });

    let (options_loading, country_options) = match &*countries.read() {
        Some(Ok(countries)) => (
            false,
            countries
                .iter()
                .map(|c| SelectChoice::new(c.country_id.to_string(), c.country_name.clone()))
                .collect::<Vec<_>>(),
        ),
        Some(Err(_)) => (false, Vec::new()),
        None => (true, Vec::new()),
    };

    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public().get(endpoints::STATE).await?;
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
                .post(endpoints::STATE, Value::Object(payload))
                .await;
            creating.set(false);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("State created");
                    toast_success(message);
                    let epoch = *reset_epoch.read();
                    reset_epoch.set(epoch + 1);
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Could not create the state")),
            }
        });
    };

    let fields = state_fields(&country_options, options_loading);

    rsx! {
        section { class: "space-y-6",
            MetaForm {
                fields: adding_fields(&fields),
                title: "Add state".to_string(),
                pending: *creating.read(),
                reset_epoch: *reset_epoch.read(),
                on_submit: create,
            }
            QueryErrorBanner { message: error }
            DataTable {
                title: "States".to_string(),
                fields: fields.clone(),
                rows: data,
                loading: loading,
                id_key: "stateId".to_string(),
                update_url: endpoints::STATE.to_string(),
                delete_url: endpoints::STATE.to_string(),
                query_key: QUERY,
                filter_keys: vec!["stateName".to_string(), "countryName".to_string()],
                clipboard_key: Some("stateName".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_country_select_coerces_to_number() {
        let options = vec![SelectChoice::new("1", "Germany")];
        let fields = state_fields(&options, false);
        let country = fields.iter().find(|f| f.key == "countryId").unwrap();
        assert_eq!(country.coerce("1"), Value::from(1));
        assert_eq!(country.coerce(""), Value::Null);
    }

    #[test]
    fn test_display_only_country_name_stays_out_of_the_form() {
        let fields = state_fields(&[], true);
        let adding = adding_fields(&fields);
        let keys: Vec<&str> = adding.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["stateName", "countryId"]);
    }
}
