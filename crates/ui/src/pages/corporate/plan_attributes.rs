//! Corporate plan attributes screen
//!
//! Read-only view of the attribute catalogue, so the corporate contact
//! can see what the company's plan can include.

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints, unwrap_values};
use serde_json::Value;

use crate::components::TableSkeleton;
use crate::components::data_table::cell_text;
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::use_backend_query;

const QUERY: &str = "plan-attributes";

#[component]
pub fn CorporatePlanAttributes() -> Element {
    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public()
            .get(endpoints::membership::ATTRIBUTES)
            .await?;
        Ok(unwrap_values(response))
    });
    let (loading, data, error) = table_state(&rows);

    rsx! {
        section { class: "space-y-6",
            QueryErrorBanner { message: error }
            div { class: "rounded-lg bg-white shadow",
                div { class: "border-b border-gray-200 px-4 py-3",
                    h3 { class: "text-base font-semibold text-gray-900", "Plan attributes" }
                }
                table { class: "min-w-full divide-y divide-gray-200 text-sm",
                    thead { class: "bg-gray-50",
                        tr {
                            th { class: "px-3 py-2 text-left font-medium text-gray-600", "Attribute" }
                            th { class: "px-3 py-2 text-left font-medium text-gray-600", "Description" }
                        }
                    }
                    if loading {
                        TableSkeleton { columns: 2 }
                    } else {
                        tbody { class: "divide-y divide-gray-100",
                            if data.is_empty() {
                                tr {
                                    td { class: "px-3 py-8 text-center text-gray-500", colspan: "2",
                                        "No records found"
                                    }
                                }
                            }
                            for row in data.iter() {
                                tr {
                                    td { class: "px-3 py-2 text-gray-900",
                                        {cell_text(row, "attributeName")}
                                    }
                                    td { class: "px-3 py-2 text-gray-600",
                                        {cell_text(row, "attributeDescription")}
                                    }
                                }
                            }
                        }
                    }
                }
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
    fn test_attribute_cells_tolerate_missing_description() {
        let row: Value = json!({ "attributeName": "Pool access" });
        assert_eq!(cell_text(&row, "attributeName"), "Pool access");
        assert_eq!(cell_text(&row, "attributeDescription"), "---");
    }
}
