//! # Editable Data Table
//!
//! The CRUD table every dashboard screen is built on. Rows are plain JSON
//! objects; columns come from the screen's field descriptors. Supports
//! click-to-sort, exact-text column filters, fixed-size pagination, a
//! column show/hide menu, and inline row editing backed by the global
//! editing session. The trailing actions column offers copy, edit,
//! delete (confirmed), and commit/cancel while editing.
//!
//! Mutations go through the shared API client; a successful commit or
//! delete invalidates the backing query so the table refetches. Failed
//! deletes leave the row in place, failed commits keep edit mode open.

use std::collections::{BTreeMap, BTreeSet};

use dioxus::prelude::*;
use esp_api::ApiClient;
use esp_forms::{FieldDescriptor, InputKind, validate_fields};
use serde_json::{Map, Value};

use crate::components::confirm::ConfirmDialog;
use crate::components::inputs::{Select, TextInput};
use crate::components::skeleton::TableSkeleton;
use crate::state::{
    EDITING, EditingAction, dispatch_editing, invalidate_query, toast_error, toast_success,
};

// ============================================================================
// Row helpers
// ============================================================================

/// Cell display text; absent and null values render as "---".
pub fn cell_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Null) | None => "---".to_string(),
        Some(Value::String(_)) => "---".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Keep rows whose cell text equals every active filter exactly.
pub fn apply_filters(rows: &[Value], filters: &BTreeMap<String, String>) -> Vec<Value> {
    rows.iter()
        .filter(|row| {
            filters
                .iter()
                .filter(|(_, wanted)| !wanted.is_empty())
                .all(|(key, wanted)| &cell_text(row, key) == wanted)
        })
        .cloned()
        .collect()
}

/// Sort rows by a column, numbers numerically and everything else as text.
pub fn sort_rows(rows: &mut [Value], key: &str, ascending: bool) {
    rows.sort_by(|a, b| {
        let ordering = match (a.get(key).and_then(Value::as_f64), b.get(key).and_then(Value::as_f64))
        {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
            _ => cell_text(a, key).cmp(&cell_text(b, key)),
        };
        if ascending { ordering } else { ordering.reverse() }
    });
}

/// One page of rows.
pub fn paginate(rows: &[Value], page: usize, page_size: usize) -> &[Value] {
    let start = page * page_size;
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

fn row_id(row: &Value, id_key: &str) -> Option<i64> {
    row.get(id_key).and_then(Value::as_i64)
}

// ============================================================================
// Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub title: String,

    /// Column descriptors; editable ones swap to inputs in edit mode
    pub fields: Vec<FieldDescriptor>,

    /// Row objects as returned by the list endpoint
    pub rows: Vec<Value>,

    #[props(default = false)]
    pub loading: bool,

    /// Accessor of the row's id, appended to the update/delete paths
    pub id_key: String,

    /// Update endpoint base path (`PUT {update_url}/{id}`)
    pub update_url: String,

    /// Delete endpoint base path (`DELETE {delete_url}/{id}`)
    pub delete_url: String,

    /// Query invalidated after a successful mutation
    pub query_key: &'static str,

    /// Columns offering an exact-text filter input
    #[props(default)]
    pub filter_keys: Vec<String>,

    /// Column whose value the copy action puts on the clipboard
    #[props(default)]
    pub clipboard_key: Option<String>,

    /// Audit fields merged into every commit payload
    #[props(default)]
    pub static_payload: Map<String, Value>,

    /// Row fields copied into the commit payload untouched
    #[props(default)]
    pub extra_payload_keys: Vec<String>,

    #[props(default = 10)]
    pub page_size: usize,
}

// ============================================================================
// Component
// ============================================================================

#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    // A session left behind by another screen's table must not bleed
    // into this one: same row index, foreign drafts, enabled Save.
    use_hook(|| dispatch_editing(EditingAction::Reset));

    let mut sort = use_signal(|| Option::<(String, bool)>::None);
    let mut filters = use_signal(BTreeMap::<String, String>::new);
    let mut hidden = use_signal(BTreeSet::<String>::new);
    let mut page = use_signal(|| 0usize);
    let mut show_columns_menu = use_signal(|| false);
    let mut pending = use_signal(|| false);
    // Row waiting on delete confirmation
    let mut delete_target = use_signal(|| Option::<Value>::None);
    // Edited row waiting on commit confirmation
    let mut commit_target = use_signal(|| Option::<Value>::None);

    let editing = EDITING.read().clone();

    // Visible pipeline: filter, sort, paginate.
    let mut visible = apply_filters(&props.rows, &filters.read());
    if let Some((key, ascending)) = sort.read().clone() {
        sort_rows(&mut visible, &key, ascending);
    }
    let total = visible.len();
    let page_count = total.div_ceil(props.page_size).max(1);
    let current_page = (*page.read()).min(page_count - 1);
    let page_rows: Vec<Value> = paginate(&visible, current_page, props.page_size).to_vec();

    let columns: Vec<FieldDescriptor> = props
        .fields
        .iter()
        .filter(|f| !hidden.read().contains(f.key.as_str()))
        .cloned()
        .collect();
    let column_count = columns.len() + 1;

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    let id_key = props.id_key.clone();
    let update_url = props.update_url.clone();
    let query_key = props.query_key;
    let commit_fields = props.fields.clone();
    let static_payload = props.static_payload.clone();
    let extra_payload_keys = props.extra_payload_keys.clone();
    let commit_row = move |row: Value| {
        let session = EDITING.read().clone();
        if !session.can_save() {
            return;
        }
        let Some(id) = row_id(&row, &id_key) else {
            toast_error("Row is missing its identifier");
            return;
        };

        let mut payload = session.collect_payload(&commit_fields);
        for (key, value) in &static_payload {
            payload.insert(key.clone(), value.clone());
        }
        for key in &extra_payload_keys {
            if let Some(value) = row.get(key.as_str()) {
                payload.insert(key.clone(), value.clone());
            }
        }
        payload.insert(id_key.clone(), Value::from(id));

        let url = format!("{}/{}", update_url, id);
        let mut pending = pending;
        let mut commit_target = commit_target;
        pending.set(true);
        spawn(async move {
            let result = ApiClient::public().put(&url, Value::Object(payload)).await;
            pending.set(false);
            commit_target.set(None);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("Updated successfully");
                    toast_success(message);
                    dispatch_editing(EditingAction::Reset);
                    invalidate_query(query_key);
                }
                Err(err) => {
                    // Edit mode stays open so nothing typed is lost.
                    toast_error(err.user_message("Update failed. Please try again."));
                }
            }
        });
    };

    let delete_id_key = props.id_key.clone();
    let delete_url = props.delete_url.clone();
    let delete_row = move |row: Value| {
        let Some(id) = row_id(&row, &delete_id_key) else {
            toast_error("Row is missing its identifier");
            return;
        };
        let url = format!("{}/{}", delete_url, id);
        let mut pending = pending;
        let mut delete_target = delete_target;
        pending.set(true);
        spawn(async move {
            let result = ApiClient::public().delete(&url).await;
            pending.set(false);
            delete_target.set(None);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("Deleted successfully");
                    toast_success(message);
                    invalidate_query(query_key);
                }
                Err(err) => {
                    toast_error(err.user_message("Delete failed. Please try again."));
                }
            }
        });
    };

    // ------------------------------------------------------------------
    // Render
    // ------------------------------------------------------------------

    rsx! {
        section { class: "rounded-lg bg-white shadow",
            div { class: "flex items-center justify-between border-b border-gray-200 px-4 py-3",
                h3 { class: "text-base font-semibold text-gray-900", "{props.title}" }
                div { class: "relative",
                    button {
                        class: "rounded-md border border-gray-300 px-3 py-1.5 text-sm text-gray-700 hover:bg-gray-50",
                        onclick: move |_| {
                            let current = *show_columns_menu.read();
                            show_columns_menu.set(!current);
                        },
                        "Columns"
                    }
                    if *show_columns_menu.read() {
                        div { class: "absolute right-0 z-20 mt-1 w-48 rounded-md border border-gray-200 bg-white p-2 shadow-lg",
                            for field in props.fields.iter() {
                                {
                                    let key = field.key.clone();
                                    let is_hidden = hidden.read().contains(key.as_str());
                                    rsx! {
                                        label { class: "flex items-center gap-2 px-2 py-1 text-sm text-gray-700",
                                            input {
                                                r#type: "checkbox",
                                                checked: !is_hidden,
                                                onchange: move |_| {
                                                    let mut set = hidden.write();
                                                    if !set.remove(key.as_str()) {
                                                        set.insert(key.clone());
                                                    }
                                                },
                                            }
                                            "{field.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Column filters
            if !props.filter_keys.is_empty() {
                div { class: "flex flex-wrap gap-3 border-b border-gray-200 px-4 py-3",
                    for field in props.fields.iter().filter(|f| props.filter_keys.contains(&f.key)) {
                        {
                            let key = field.key.clone();
                            let value = filters.read().get(key.as_str()).cloned().unwrap_or_default();
                            rsx! {
                                TextInput {
                                    value: value,
                                    placeholder: format!("Filter {}", field.label),
                                    on_change: move |text: String| {
                                        filters.write().insert(key.clone(), text);
                                        page.set(0);
                                    },
                                }
                            }
                        }
                    }
                }
            }

            table { class: "min-w-full divide-y divide-gray-200 text-sm",
                thead { class: "bg-gray-50",
                    tr {
                        for field in columns.iter() {
                            {
                                let key = field.key.clone();
                                let indicator = match &*sort.read() {
                                    Some((k, true)) if *k == key => " ▲",
                                    Some((k, false)) if *k == key => " ▼",
                                    _ => "",
                                };
                                rsx! {
                                    th {
                                        class: "cursor-pointer px-3 py-2 text-left font-medium text-gray-600 select-none",
                                        onclick: move |_| {
                                            let next = match &*sort.read() {
                                                Some((k, true)) if *k == key => Some((key.clone(), false)),
                                                Some((k, false)) if *k == key => None,
                                                _ => Some((key.clone(), true)),
                                            };
                                            sort.set(next);
                                        },
                                        "{field.label}{indicator}"
                                    }
                                }
                            }
                        }
                        th { class: "px-3 py-2 text-right font-medium text-gray-600", "Actions" }
                    }
                }
                if props.loading {
                    TableSkeleton { columns: column_count }
                } else {
                    tbody { class: "divide-y divide-gray-100",
                        if page_rows.is_empty() {
                            tr {
                                td {
                                    class: "px-3 py-8 text-center text-gray-500",
                                    colspan: "{column_count}",
                                    "No records found"
                                }
                            }
                        }
                        for (offset, row) in page_rows.iter().enumerate() {
                            {
                                let index = current_page * props.page_size + offset;
                                let row = row.clone();
                                let in_edit = editing.is_editing_row(index);
                                rsx! {
                                    tr { class: if in_edit { "bg-blue-50" } else { "" },
                                        for field in columns.iter() {
                                            td { class: "px-3 py-2 text-gray-900",
                                                if in_edit && field.editable {
                                                    EditCell { field: field.clone(), all_fields: props.fields.clone() }
                                                } else {
                                                    "{cell_text(&row, &field.key)}"
                                                }
                                            }
                                        }
                                        td { class: "px-3 py-2 text-right",
                                            RowActions {
                                                row: row.clone(),
                                                index: index,
                                                in_edit: in_edit,
                                                can_save: editing.can_save(),
                                                fields: props.fields.clone(),
                                                clipboard_key: props.clipboard_key.clone(),
                                                on_delete: move |row| delete_target.set(Some(row)),
                                                on_commit: move |row| commit_target.set(Some(row)),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Pagination
            div { class: "flex items-center justify-between border-t border-gray-200 px-4 py-3 text-sm text-gray-600",
                span { "Page {current_page + 1} of {page_count} ({total} records)" }
                div { class: "flex gap-2",
                    button {
                        class: "rounded-md border border-gray-300 px-3 py-1 disabled:opacity-50",
                        disabled: current_page == 0,
                        onclick: move |_| {
                            let current = *page.read();
                            page.set(current.saturating_sub(1));
                        },
                        "Previous"
                    }
                    button {
                        class: "rounded-md border border-gray-300 px-3 py-1 disabled:opacity-50",
                        disabled: current_page + 1 >= page_count,
                        onclick: move |_| {
                            let current = *page.read();
                            page.set(current + 1);
                        },
                        "Next"
                    }
                }
            }
        }

        if let Some(row) = delete_target.read().clone() {
            ConfirmDialog {
                title: "Delete record".to_string(),
                message: "This record will be permanently removed. This action cannot be undone.".to_string(),
                confirm_label: "Delete".to_string(),
                destructive: true,
                pending: *pending.read(),
                on_confirm: {
                    let delete_row = delete_row.clone();
                    move |_| delete_row(row.clone())
                },
                on_cancel: move |_| delete_target.set(None),
            }
        }

        if let Some(row) = commit_target.read().clone() {
            ConfirmDialog {
                title: "Save changes".to_string(),
                message: "Apply the edited values to this record?".to_string(),
                confirm_label: "Save".to_string(),
                pending: *pending.read(),
                on_confirm: {
                    let commit_row = commit_row.clone();
                    move |_| commit_row(row.clone())
                },
                on_cancel: move |_| commit_target.set(None),
            }
        }
    }
}

// ============================================================================
// Edit cell
// ============================================================================

/// Input bound to the editing session for one editable column.
#[component]
fn EditCell(field: FieldDescriptor, all_fields: Vec<FieldDescriptor>) -> Element {
    let key = field.key.clone();
    let draft = EDITING
        .read()
        .input_values
        .get(key.as_str())
        .cloned()
        .unwrap_or_default();
    let error = EDITING.read().input_errors.get(key.as_str()).cloned();

    let validate = {
        let all_fields = all_fields.clone();
        let key = key.clone();
        move || {
            let current = validate_fields(&all_fields, &EDITING.read().values());
            dispatch_editing(EditingAction::SetError {
                name: key.clone(),
                message: current.get(key.as_str()).cloned(),
            });
        }
    };

    match &field.input {
        InputKind::Select => rsx! {
            Select {
                value: draft.value,
                options: field.options.clone(),
                error: error,
                loading: field.options_loading,
                on_change: {
                    let key = key.clone();
                    let validate = validate.clone();
                    move |value: String| {
                        dispatch_editing(EditingAction::ChangeValue {
                            name: key.clone(),
                            value,
                        });
                        validate();
                    }
                },
            }
        },
        _ => rsx! {
            TextInput {
                value: draft.value,
                error: error,
                input_type: field.input.html_type().to_string(),
                on_change: {
                    let key = key.clone();
                    let validate = validate.clone();
                    move |value: String| {
                        dispatch_editing(EditingAction::ChangeValue {
                            name: key.clone(),
                            value,
                        });
                        // Keep is_valid current so Save cannot fire on a
                        // cleared required field before the blur lands.
                        validate();
                    }
                },
                on_blur: {
                    let key = key.clone();
                    let validate = validate.clone();
                    move |value: String| {
                        dispatch_editing(EditingAction::BlurValue {
                            name: key.clone(),
                            value,
                        });
                        validate();
                    }
                },
            }
        },
    }
}

// ============================================================================
// Row actions
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct RowActionsProps {
    row: Value,
    index: usize,
    in_edit: bool,
    can_save: bool,
    fields: Vec<FieldDescriptor>,
    clipboard_key: Option<String>,
    on_delete: EventHandler<Value>,
    on_commit: EventHandler<Value>,
}

#[component]
fn RowActions(props: RowActionsProps) -> Element {
    let row = props.row.clone();
    let fields = props.fields.clone();

    if props.in_edit {
        let commit_row = props.row.clone();
        return rsx! {
            div { class: "flex justify-end gap-2",
                button {
                    class: "rounded-md bg-blue-600 px-2.5 py-1 text-xs font-medium text-white disabled:opacity-50",
                    disabled: !props.can_save,
                    onclick: move |_| props.on_commit.call(commit_row.clone()),
                    "Save"
                }
                button {
                    class: "rounded-md border border-gray-300 px-2.5 py-1 text-xs text-gray-700",
                    onclick: move |_| dispatch_editing(EditingAction::ExitEdit),
                    "Cancel"
                }
            }
        };
    }

    let delete_row = props.row.clone();
    rsx! {
        div { class: "flex justify-end gap-2",
            if let Some(key) = props.clipboard_key.clone() {
                button {
                    class: "text-xs text-gray-500 hover:text-gray-700",
                    onclick: {
                        let row = props.row.clone();
                        move |_| copy_to_clipboard(&cell_text(&row, &key))
                    },
                    "Copy"
                }
            }
            button {
                class: "text-xs text-blue-600 hover:text-blue-500",
                onclick: move |_| {
                    dispatch_editing(EditingAction::BeginEdit {
                        index: props.index,
                        row: row.clone(),
                        fields: fields.clone(),
                    });
                },
                "Edit"
            }
            button {
                class: "text-xs text-rose-600 hover:text-rose-500",
                onclick: move |_| props.on_delete.call(delete_row.clone()),
                "Delete"
            }
        }
    }
}

fn copy_to_clipboard(text: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = text;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({ "cityId": 1, "cityName": "Munich", "stateName": "Bavaria" }),
            json!({ "cityId": 2, "cityName": "Berlin", "stateName": null }),
            json!({ "cityId": 3, "cityName": "Hamburg" }),
        ]
    }

    #[test]
    fn test_missing_and_null_cells_render_dashes() {
        let rows = rows();
        assert_eq!(cell_text(&rows[0], "stateName"), "Bavaria");
        assert_eq!(cell_text(&rows[1], "stateName"), "---");
        assert_eq!(cell_text(&rows[2], "stateName"), "---");
        assert_eq!(cell_text(&rows[0], "cityId"), "1");
    }

    #[test]
    fn test_exact_filter() {
        let mut filters = BTreeMap::new();
        filters.insert("cityName".to_string(), "Berlin".to_string());
        let filtered = apply_filters(&rows(), &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["cityId"], 2);

        // Partial text does not match; the filter is exact.
        filters.insert("cityName".to_string(), "Ber".to_string());
        assert!(apply_filters(&rows(), &filters).is_empty());

        // Empty filters are ignored.
        filters.insert("cityName".to_string(), String::new());
        assert_eq!(apply_filters(&rows(), &filters).len(), 3);
    }

    #[test]
    fn test_sorting_text_and_numbers() {
        let mut data = rows();
        sort_rows(&mut data, "cityName", true);
        assert_eq!(data[0]["cityName"], "Berlin");
        assert_eq!(data[2]["cityName"], "Munich");

        sort_rows(&mut data, "cityId", false);
        assert_eq!(data[0]["cityId"], 3);
    }

    #[test]
    fn test_pagination_bounds() {
        let data = rows();
        assert_eq!(paginate(&data, 0, 2).len(), 2);
        assert_eq!(paginate(&data, 1, 2).len(), 1);
        assert!(paginate(&data, 2, 2).is_empty());
    }

    #[test]
    fn test_row_id_lookup() {
        let data = rows();
        assert_eq!(row_id(&data[0], "cityId"), Some(1));
        assert_eq!(row_id(&data[0], "missing"), None);
    }
}
