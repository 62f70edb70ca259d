//! Response envelope normalization
//!
//! The backend's serializer wraps collections in a `{"$values": [...]}`
//! envelope. Every list-consuming call site must tolerate both the
//! envelope and a bare array; this module is the single place that quirk
//! is handled so the rest of the client only ever sees plain collections.

use esp_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extract a plain array from a possibly enveloped response.
///
/// `{"$values": [...]}` yields the inner array, a bare array yields
/// itself, and anything else yields an empty list rather than an error.
pub fn unwrap_values(response: Value) -> Vec<Value> {
    match response {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("$values") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Unwrap a list response and deserialize each element into `T`.
pub fn deserialize_list<T: DeserializeOwned>(response: Value) -> AppResult<Vec<T>> {
    unwrap_values(response)
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(AppError::from))
        .collect()
}

/// Recursively unwrap `$values` envelopes nested inside an object.
///
/// Plan lists arrive with each plan's attribute collection enveloped a
/// second time; this flattens every nested envelope in place.
pub fn unwrap_nested(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            if map.len() == 1 && map.contains_key("$values") {
                let inner = map.into_iter().next().map(|(_, v)| v).unwrap_or(Value::Null);
                return unwrap_nested(inner);
            }
            Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, unwrap_nested(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(unwrap_nested).collect()),
        other => other,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_unwraps_values_envelope() {
        let response = json!({ "$values": [{"countryId": 1}, {"countryId": 2}] });
        let items = unwrap_values(response);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["countryId"], 1);
    }

    #[test]
    fn test_bare_array_passes_through() {
        let response = json!([{"countryId": 1}]);
        assert_eq!(unwrap_values(response).len(), 1);
    }

    #[test]
    fn test_unexpected_shapes_default_to_empty() {
        assert!(unwrap_values(json!({"message": "ok"})).is_empty());
        assert!(unwrap_values(json!("nope")).is_empty());
        assert!(unwrap_values(Value::Null).is_empty());
    }

    #[test]
    fn test_deserialize_list() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            id: i64,
        }
        let rows: Vec<Row> =
            deserialize_list(json!({ "$values": [{"id": 1}, {"id": 2}] })).unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_nested_envelopes_flatten() {
        let response = json!({
            "$values": [{
                "planId": 1,
                "membershipPlanAttributes": { "$values": [{"attributeId": 9}] }
            }]
        });
        let flattened = unwrap_nested(response);
        assert_eq!(
            flattened[0]["membershipPlanAttributes"][0]["attributeId"],
            9
        );
    }
}
