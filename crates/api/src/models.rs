//! Backend record types
//!
//! Typed mirrors of the rows the dashboards manage. All records use the
//! backend's camelCase JSON names and default missing fields, since list
//! endpoints omit nullable columns freely.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    pub country_id: i64,
    pub country_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateRecord {
    pub state_id: i64,
    pub state_name: String,
    pub country_id: i64,
    pub country_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct City {
    pub city_id: i64,
    pub city_name: String,
    pub state_id: i64,
    pub state_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanAttribute {
    pub attribute_id: i64,
    pub attribute_name: String,
    pub attribute_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorporateUser {
    pub corporate_user_id: i64,
    pub corporate_name: String,
    pub contact_person_name: String,
    pub contact_person_detail: Option<String>,
    pub contact_person_mobile_no: Option<String>,
    pub contact_person_email: Option<String>,
    /// Email domain used to match self-registering corporate members.
    pub email_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub postalcode: Option<String>,
    pub max_member_price: Option<f64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub activity_id: i64,
    pub activity_name: String,
    pub activity_description: Option<String>,
    pub supplier_id: Option<i64>,
    pub supplier_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckInRecord {
    pub check_in_id: i64,
    pub user_id: i64,
    pub supplier_id: i64,
    pub user_name: Option<String>,
    pub check_in_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCategory {
    pub user_category_id: i64,
    pub category_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_sparse_rows_deserialize_with_defaults() {
        let supplier: Supplier = serde_json::from_value(json!({
            "supplierId": 4,
            "supplierName": "City Gym"
        }))
        .unwrap();
        assert_eq!(supplier.supplier_id, 4);
        assert_eq!(supplier.email, None);
    }

    #[test]
    fn test_camel_case_round_trip() {
        let state = StateRecord {
            state_id: 2,
            state_name: "Bavaria".into(),
            country_id: 1,
            country_name: None,
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["stateName"], "Bavaria");
        assert_eq!(value["countryId"], 1);
    }
}
