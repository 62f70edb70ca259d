//! Table editing session
//!
//! One row of one table can be in edit mode at a time. The session
//! snapshots the editable fields of the selected row so commits diff
//! against what was actually on screen, and tracks per-field errors and
//! dirtiness for the save button.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use esp_forms::FieldDescriptor;
use serde_json::Value;

/// One editable cell's draft state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftField {
    pub value: String,
    pub touched: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditingState {
    /// Index of the row in edit mode, `None` when viewing
    pub current_row_index: Option<usize>,
    pub edit: bool,
    pub input_values: BTreeMap<String, DraftField>,
    /// Snapshot taken when edit mode began, used for dirtiness
    pub initial_values: BTreeMap<String, DraftField>,
    pub input_errors: BTreeMap<String, String>,
    pub is_valid: bool,
    pub is_dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditingAction {
    /// Enter edit mode on a row. Replaces any session already active.
    BeginEdit {
        index: usize,
        row: Value,
        fields: Vec<FieldDescriptor>,
    },
    /// Leave edit mode, discarding the draft
    ExitEdit,
    ChangeValue {
        name: String,
        value: String,
    },
    BlurValue {
        name: String,
        value: String,
    },
    SetError {
        name: String,
        message: Option<String>,
    },
    Reset,
}

impl EditingState {
    fn recompute_dirty(&mut self) {
        self.is_dirty = self
            .input_values
            .iter()
            .any(|(key, field)| self.initial_values.get(key).map(|i| &i.value) != Some(&field.value));
    }

    pub fn apply(&mut self, action: EditingAction) {
        match action {
            EditingAction::BeginEdit { index, row, fields } => {
                let values: BTreeMap<String, DraftField> = fields
                    .iter()
                    .filter(|field| field.editable)
                    .map(|field| {
                        let value = match row.get(field.key.as_str()) {
                            Some(Value::String(s)) => s.clone(),
                            Some(Value::Null) | None => String::new(),
                            Some(other) => other.to_string(),
                        };
                        (
                            field.key.clone(),
                            DraftField {
                                value,
                                touched: false,
                            },
                        )
                    })
                    .collect();
                *self = EditingState {
                    current_row_index: Some(index),
                    edit: true,
                    initial_values: values.clone(),
                    input_values: values,
                    input_errors: BTreeMap::new(),
                    is_valid: true,
                    is_dirty: false,
                };
            }
            EditingAction::ExitEdit => {
                self.edit = false;
                self.current_row_index = None;
            }
            EditingAction::ChangeValue { name, value } => {
                if let Some(field) = self.input_values.get_mut(&name) {
                    field.value = value;
                    self.recompute_dirty();
                }
            }
            EditingAction::BlurValue { name, value } => {
                if let Some(field) = self.input_values.get_mut(&name) {
                    field.value = value;
                    field.touched = true;
                    self.recompute_dirty();
                }
            }
            EditingAction::SetError { name, message } => {
                match message {
                    Some(text) => {
                        self.input_errors.insert(name, text);
                    }
                    None => {
                        self.input_errors.remove(&name);
                    }
                }
                self.is_valid = self.input_errors.is_empty();
            }
            EditingAction::Reset => *self = EditingState::default(),
        }
    }

    /// Draft values as plain strings, for validation and payload building.
    pub fn values(&self) -> BTreeMap<String, String> {
        self.input_values
            .iter()
            .map(|(k, v)| (k.clone(), v.value.clone()))
            .collect()
    }

    /// Build the commit payload, coercing each draft value per its field's
    /// type tag. Fields without a draft are omitted.
    pub fn collect_payload(&self, fields: &[FieldDescriptor]) -> serde_json::Map<String, Value> {
        let mut payload = serde_json::Map::new();
        for field in fields.iter().filter(|f| f.editable) {
            if let Some(draft) = self.input_values.get(field.key.as_str()) {
                payload.insert(field.key.clone(), field.coerce(&draft.value));
            }
        }
        payload
    }

    pub fn is_editing_row(&self, index: usize) -> bool {
        self.edit && self.current_row_index == Some(index)
    }

    pub fn can_save(&self) -> bool {
        self.edit && self.is_dirty && self.is_valid
    }
}

/// Global editing session
pub static EDITING: GlobalSignal<EditingState> = Signal::global(EditingState::default);

pub fn dispatch_editing(action: EditingAction) {
    EDITING.write().apply(action);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use esp_forms::{FieldDescriptor, InputKind, ValidationRule};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn state_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::readonly("stateId", "ID"),
            FieldDescriptor::new("stateName", "State Name", InputKind::text())
                .editable()
                .with_rule(ValidationRule::required("State Name is required")),
        ]
    }

    fn begin(state: &mut EditingState) {
        state.apply(EditingAction::BeginEdit {
            index: 2,
            row: json!({ "stateId": 9, "stateName": "Bavaria", "countryId": 1 }),
            fields: state_fields(),
        });
    }

    #[test]
    fn test_begin_edit_snapshots_editable_fields_only() {
        let mut state = EditingState::default();
        begin(&mut state);

        assert!(state.is_editing_row(2));
        assert!(!state.is_editing_row(1));
        assert_eq!(state.input_values.len(), 1);
        assert_eq!(state.input_values["stateName"].value, "Bavaria");
        assert!(!state.is_dirty);
    }

    #[test]
    fn test_change_tracks_dirtiness_both_ways() {
        let mut state = EditingState::default();
        begin(&mut state);

        state.apply(EditingAction::ChangeValue {
            name: "stateName".into(),
            value: "Saxony".into(),
        });
        assert!(state.is_dirty);
        assert!(state.can_save());

        // Typing the original value back makes the draft clean again.
        state.apply(EditingAction::ChangeValue {
            name: "stateName".into(),
            value: "Bavaria".into(),
        });
        assert!(!state.is_dirty);
        assert!(!state.can_save());
    }

    #[test]
    fn test_errors_gate_saving() {
        let mut state = EditingState::default();
        begin(&mut state);
        state.apply(EditingAction::ChangeValue {
            name: "stateName".into(),
            value: String::new(),
        });
        state.apply(EditingAction::SetError {
            name: "stateName".into(),
            message: Some("State Name is required".into()),
        });
        assert!(state.is_dirty);
        assert!(!state.is_valid);
        assert!(!state.can_save());

        state.apply(EditingAction::SetError {
            name: "stateName".into(),
            message: None,
        });
        assert!(state.is_valid);
    }

    #[test]
    fn test_begin_edit_replaces_active_session() {
        let mut state = EditingState::default();
        begin(&mut state);
        state.apply(EditingAction::ChangeValue {
            name: "stateName".into(),
            value: "Saxony".into(),
        });

        state.apply(EditingAction::BeginEdit {
            index: 0,
            row: json!({ "stateId": 1, "stateName": "Hesse" }),
            fields: state_fields(),
        });
        assert!(state.is_editing_row(0));
        assert_eq!(state.input_values["stateName"].value, "Hesse");
        assert!(!state.is_dirty);
    }

    #[test]
    fn test_collect_payload_coerces_numbers() {
        use esp_forms::ValueKind;

        let fields = vec![
            FieldDescriptor::new("cityName", "City Name", InputKind::text()).editable(),
            FieldDescriptor::new("stateId", "State", InputKind::Select)
                .editable()
                .with_value_kind(ValueKind::Number),
        ];
        let mut state = EditingState::default();
        state.apply(EditingAction::BeginEdit {
            index: 0,
            row: json!({ "cityName": "Munich", "stateId": 4 }),
            fields: fields.clone(),
        });
        state.apply(EditingAction::ChangeValue {
            name: "stateId".into(),
            value: "7".into(),
        });

        let payload = state.collect_payload(&fields);
        assert_eq!(payload["cityName"], json!("Munich"));
        assert_eq!(payload["stateId"], json!(7));
    }

    #[test]
    fn test_clearing_a_required_field_gates_save_before_blur() {
        use esp_forms::validate_fields;

        let fields = state_fields();
        let mut state = EditingState::default();
        begin(&mut state);

        // Each keystroke runs the schema; emptying the field alone must
        // disable Save, no blur required.
        state.apply(EditingAction::ChangeValue {
            name: "stateName".into(),
            value: String::new(),
        });
        let errors = validate_fields(&fields, &state.values());
        state.apply(EditingAction::SetError {
            name: "stateName".into(),
            message: errors.get("stateName").cloned(),
        });
        assert!(state.is_dirty);
        assert!(!state.can_save());
    }

    #[test]
    fn test_reset_clears_session_left_by_another_screen() {
        let country_fields = vec![
            FieldDescriptor::readonly("countryId", "ID"),
            FieldDescriptor::new("countryName", "Country Name", InputKind::text())
                .editable()
                .with_rule(ValidationRule::required("Country Name is required")),
        ];
        let mut state = EditingState::default();
        state.apply(EditingAction::BeginEdit {
            index: 2,
            row: json!({ "countryId": 5, "countryName": "Germany" }),
            fields: country_fields,
        });
        state.apply(EditingAction::ChangeValue {
            name: "countryName".into(),
            value: "Austria".into(),
        });
        assert!(state.can_save());

        // The next screen's table resets the session when it mounts, so
        // the countries draft cannot show up as an editable states row.
        state.apply(EditingAction::Reset);
        assert!(!state.is_editing_row(2));
        assert!(!state.can_save());
        assert!(state.collect_payload(&state_fields()).is_empty());
    }

    #[test]
    fn test_blur_marks_touched() {
        let mut state = EditingState::default();
        begin(&mut state);
        state.apply(EditingAction::BlurValue {
            name: "stateName".into(),
            value: "Bavaria".into(),
        });
        assert!(state.input_values["stateName"].touched);
        assert!(!state.is_dirty);
    }
}
