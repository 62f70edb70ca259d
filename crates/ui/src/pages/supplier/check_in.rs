//! Supplier check-in screen
//!
//! Read-only list of members who checked in at this supplier, newest
//! first, plus a small form for checking a member in at the desk.

use chrono::DateTime;
use dioxus::prelude::*;
use esp_api::models::CheckInRecord;
use esp_api::{ApiClient, deserialize_list, endpoints};
use serde_json::json;

use crate::components::TableSkeleton;
use crate::pages::QueryErrorBanner;
use crate::state::{invalidate_query, toast_error, toast_success, use_backend_query};

const QUERY: &str = "check-ins";

/// Human-readable check-in time; timestamps that fail to parse show
/// as-is rather than hiding the record.
fn format_check_in_time(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "---".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(time) => time.format("%d %b %Y, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[component]
pub fn SupplierCheckIn() -> Element {
    let records = use_backend_query(QUERY, || async {
        let response = ApiClient::public()
            .get(endpoints::check_in::GET_CHECK_IN_USERS)
            .await?;
        let mut records = deserialize_list::<CheckInRecord>(response)?;
        records.sort_by(|a, b| b.check_in_time.cmp(&a.check_in_time));
        Ok(records)
    });

    let (loading, rows, error) = match &*records.read() {
        None => (true, Vec::new(), None),
        Some(Ok(rows)) => (false, rows.clone(), None),
        Some(Err(err)) => (
            false,
            Vec::new(),
            Some(err.user_message("Could not load check-ins")),
        ),
    };

    let mut member_id = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let check_in = move |_| {
        let Ok(user_id) = member_id.read().trim().parse::<i64>() else {
            toast_error("Enter the member's numeric id");
            return;
        };
        let mut pending = pending;
        let mut member_id = member_id;
        pending.set(true);
        spawn(async move {
            let result = ApiClient::public()
                .post(endpoints::check_in::CHECK_IN, json!({ "userId": user_id }))
                .await;
            pending.set(false);
            match result {
                Ok(_) => {
                    toast_success("Member checked in");
                    member_id.set(String::new());
                    invalidate_query(QUERY);
                }
                Err(err) => toast_error(err.user_message("Check-in failed")),
            }
        });
    };

    rsx! {
        section { class: "space-y-6",
            div { class: "rounded-lg bg-white p-6 shadow",
                h2 { class: "text-lg font-semibold text-gray-900", "Check a member in" }
                div { class: "mt-4 flex gap-3",
                    input {
                        class: "block w-48 rounded-md border border-gray-300 px-3 py-2 text-sm",
                        inputmode: "numeric",
                        placeholder: "Member id",
                        value: "{member_id}",
                        oninput: move |e| member_id.set(e.value()),
                    }
                    button {
                        class: "rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white disabled:opacity-50",
                        disabled: *pending.read(),
                        onclick: check_in,
                        if *pending.read() { "Checking in..." } else { "Check in" }
                    }
                }
            }

            QueryErrorBanner { message: error }
            div { class: "rounded-lg bg-white shadow",
                div { class: "border-b border-gray-200 px-4 py-3",
                    h3 { class: "text-base font-semibold text-gray-900", "Recent check-ins" }
                }
                table { class: "min-w-full divide-y divide-gray-200 text-sm",
                    thead { class: "bg-gray-50",
                        tr {
                            th { class: "px-3 py-2 text-left font-medium text-gray-600", "Member" }
                            th { class: "px-3 py-2 text-left font-medium text-gray-600", "Member ID" }
                            th { class: "px-3 py-2 text-left font-medium text-gray-600", "Checked in at" }
                        }
                    }
                    if loading {
                        TableSkeleton { columns: 3 }
                    } else {
                        tbody { class: "divide-y divide-gray-100",
                            if rows.is_empty() {
                                tr {
                                    td { class: "px-3 py-8 text-center text-gray-500", colspan: "3",
                                        "No check-ins yet"
                                    }
                                }
                            }
                            for record in rows.iter() {
                                {
                                    let name = record.user_name.clone().unwrap_or_else(|| "---".into());
                                    let time = format_check_in_time(record.check_in_time.as_deref());
                                    rsx! {
                                        tr {
                                            td { class: "px-3 py-2 text-gray-900", "{name}" }
                                            td { class: "px-3 py-2 text-gray-900", "{record.user_id}" }
                                            td { class: "px-3 py-2 text-gray-900", "{time}" }
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_check_in_time_formatting() {
        assert_eq!(
            format_check_in_time(Some("2026-08-20T09:30:00+00:00")),
            "20 Aug 2026, 09:30"
        );
        assert_eq!(format_check_in_time(Some("not a timestamp")), "not a timestamp");
        assert_eq!(format_check_in_time(None), "---");
    }
}
