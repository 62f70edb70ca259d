//! Field descriptors for forms and editable tables
//!
//! A [`FieldDescriptor`] is the declarative record each screen supplies
//! to the form and table generators: key, label, input kind, validation
//! rule, and rendering/coercion hints. Descriptors are immutable for the
//! lifetime of a screen; the generators derive everything else from them.

use serde_json::Value;

use crate::validation::ValidationRule;

// ============================================================================
// Input Kind
// ============================================================================

/// The kind of input rendered for a field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Single-line input with an HTML input type ("text", "email",
    /// "password", "number", "date", ...)
    #[default]
    Text,
    /// Single-line input with an explicit HTML input type
    TypedText(&'static str),
    /// Multi-line text area
    TextArea,
    /// Single-select dropdown fed by [`FieldDescriptor::options`]
    Select,
    /// Boolean checkbox
    Checkbox,
}

impl InputKind {
    /// Plain single-line text input
    pub fn text() -> Self {
        InputKind::Text
    }

    /// The HTML `type` attribute for text-like kinds
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::TypedText(t) => t,
            _ => "text",
        }
    }
}

// ============================================================================
// Value Kind
// ============================================================================

/// How a field's string value is coerced into the commit payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// Keep the raw string
    #[default]
    Text,
    /// Parse as an integer; unparsable input coerces to null
    Number,
    /// "true"/"1"/"on" become true, everything else false
    Bool,
}

impl ValueKind {
    /// Coerce a raw input string per this type tag
    pub fn coerce(&self, raw: &str) -> Value {
        match self {
            ValueKind::Text => Value::String(raw.to_string()),
            ValueKind::Number => raw
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or(Value::Null),
            ValueKind::Bool => Value::Bool(matches!(raw, "true" | "1" | "on")),
        }
    }
}

// ============================================================================
// Select Choices
// ============================================================================

/// One option of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChoice {
    pub value: String,
    pub label: String,
}

impl SelectChoice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// Declarative description of one form/table field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Accessor key into row data and payloads (backend field name)
    pub key: String,

    /// Column header / input label
    pub label: String,

    /// Which input the generators render for this field
    pub input: InputKind,

    /// Validation rule merged into the screen's schema, if any
    pub rule: Option<ValidationRule>,

    /// Whether the field swaps to an input while its row is in edit mode
    pub editable: bool,

    /// Whether the field appears in the screen's create form
    pub show_when_adding: bool,

    /// Type tag applied when collecting the commit payload
    pub value_kind: ValueKind,

    /// Placeholder text; defaults derive from the label
    pub placeholder: Option<String>,

    /// Options for select inputs
    pub options: Vec<SelectChoice>,

    /// Render the select as a loading skeleton while options are fetched
    pub options_loading: bool,
}

impl FieldDescriptor {
    /// Create a descriptor with the given key, label, and input kind
    pub fn new(key: impl Into<String>, label: impl Into<String>, input: InputKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            input,
            rule: None,
            editable: false,
            show_when_adding: true,
            value_kind: ValueKind::Text,
            placeholder: None,
            options: Vec::new(),
            options_loading: false,
        }
    }

    /// A non-editable display-only column (ids, audit fields)
    pub fn readonly(key: impl Into<String>, label: impl Into<String>) -> Self {
        let mut field = Self::new(key, label, InputKind::Text);
        field.show_when_adding = false;
        field
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    pub fn hidden_when_adding(mut self) -> Self {
        self.show_when_adding = false;
        self
    }

    pub fn with_value_kind(mut self, kind: ValueKind) -> Self {
        self.value_kind = kind;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options(mut self, options: Vec<SelectChoice>) -> Self {
        self.options = options;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.options_loading = loading;
        self
    }

    /// Placeholder shown in the input, derived from the label by default
    pub fn placeholder_text(&self) -> String {
        self.placeholder
            .clone()
            .unwrap_or_else(|| format!("Enter {}", self.label))
    }

    /// Coerce a raw string value per this field's type tag
    pub fn coerce(&self, raw: &str) -> Value {
        self.value_kind.coerce(raw)
    }
}

/// The subset of descriptors rendered by a create form
pub fn adding_fields(descriptors: &[FieldDescriptor]) -> Vec<FieldDescriptor> {
    descriptors
        .iter()
        .filter(|d| d.show_when_adding)
        .cloned()
        .collect()
}

/// The subset of descriptors that swap to inputs in edit mode
pub fn editable_fields(descriptors: &[FieldDescriptor]) -> Vec<&FieldDescriptor> {
    descriptors.iter().filter(|d| d.editable).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults() {
        let field = FieldDescriptor::new("countryName", "Country Name", InputKind::text());
        assert!(!field.editable);
        assert!(field.show_when_adding);
        assert_eq!(field.value_kind, ValueKind::Text);
        assert_eq!(field.placeholder_text(), "Enter Country Name");
    }

    #[test]
    fn test_readonly_hides_from_create_form() {
        let field = FieldDescriptor::readonly("$id", "ID");
        assert!(!field.show_when_adding);
        assert!(!field.editable);
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(ValueKind::Number.coerce("42"), Value::from(42));
        assert_eq!(ValueKind::Number.coerce(" 7 "), Value::from(7));
        assert_eq!(ValueKind::Number.coerce("abc"), Value::Null);
    }

    #[test]
    fn test_bool_coercion() {
        assert_eq!(ValueKind::Bool.coerce("true"), Value::Bool(true));
        assert_eq!(ValueKind::Bool.coerce("on"), Value::Bool(true));
        assert_eq!(ValueKind::Bool.coerce("false"), Value::Bool(false));
        assert_eq!(ValueKind::Bool.coerce(""), Value::Bool(false));
    }

    #[test]
    fn test_field_subsets() {
        let descriptors = vec![
            FieldDescriptor::readonly("$id", "ID"),
            FieldDescriptor::new("cityName", "City Name", InputKind::text()).editable(),
            FieldDescriptor::new("stateId", "State", InputKind::Select),
        ];
        let adding = adding_fields(&descriptors);
        assert_eq!(adding.len(), 2);
        let editable = editable_fields(&descriptors);
        assert_eq!(editable.len(), 1);
        assert_eq!(editable[0].key, "cityName");
    }

    #[test]
    fn test_html_type_for_typed_text() {
        assert_eq!(InputKind::TypedText("password").html_type(), "password");
        assert_eq!(InputKind::Text.html_type(), "text");
    }
}
