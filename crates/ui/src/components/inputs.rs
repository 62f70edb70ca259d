//! # Input Components
//!
//! Reusable form input components shared by the create forms, the editable
//! table cells, and the auth screens:
//! - **TextInput**: Single-line text input
//! - **TextArea**: Multi-line text input
//! - **Select**: Dropdown selection fed by [`SelectChoice`]s
//! - **Checkbox**: Boolean checkbox
//!
//! All components carry consistent Tailwind styling and surface their
//! validation error below the input.
//!

use dioxus::prelude::*;
use esp_forms::SelectChoice;

fn input_class(has_error: bool, disabled: bool) -> String {
    let mut class = String::from(
        "block w-full rounded-md border px-3 py-2 text-sm text-gray-900 shadow-sm focus:outline-none focus:ring-2",
    );
    if has_error {
        class.push_str(" border-rose-500 focus:ring-rose-400");
    } else {
        class.push_str(" border-gray-300 focus:ring-blue-500");
    }
    if disabled {
        class.push_str(" bg-gray-100 text-gray-400 cursor-not-allowed");
    }
    class
}

// ============================================================================
// Text Input
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, password, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Blur handler, called with the current value
    #[props(default)]
    pub on_blur: EventHandler<String>,
}

/// Single-line text input
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let class = input_class(props.error.is_some(), props.disabled);

    rsx! {
        div { class: "input-group",
            if let Some(label) = &props.label {
                label { class: "block text-sm font-medium text-gray-700 mb-1.5",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-500 ml-0.5", "*" }
                    }
                }
            }
            input {
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onblur: {
                    let value = props.value.clone();
                    move |_| props.on_blur.call(value.clone())
                },
            }
            if let Some(error) = &props.error {
                p { class: "mt-1 text-xs text-rose-500", "{error}" }
            }
        }
    }
}

// ============================================================================
// Text Area
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = 3)]
    pub rows: usize,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,

    #[props(default)]
    pub on_blur: EventHandler<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = input_class(props.error.is_some(), props.disabled);

    rsx! {
        div { class: "input-group",
            if let Some(label) = &props.label {
                label { class: "block text-sm font-medium text-gray-700 mb-1.5",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-500 ml-0.5", "*" }
                    }
                }
            }
            textarea {
                class: "{class}",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onblur: {
                    let value = props.value.clone();
                    move |_| props.on_blur.call(value.clone())
                },
            }
            if let Some(error) = &props.error {
                p { class: "mt-1 text-xs text-rose-500", "{error}" }
            }
        }
    }
}

// ============================================================================
// Select
// ============================================================================

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    pub value: String,

    pub options: Vec<SelectChoice>,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// Render a loading placeholder while the options are fetched
    #[props(default = false)]
    pub loading: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select
#[component]
pub fn Select(props: SelectProps) -> Element {
    let class = input_class(props.error.is_some(), props.disabled);

    rsx! {
        div { class: "input-group",
            if let Some(label) = &props.label {
                label { class: "block text-sm font-medium text-gray-700 mb-1.5",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-500 ml-0.5", "*" }
                    }
                }
            }
            if props.loading {
                div { class: "h-9 w-full animate-pulse rounded-md bg-gray-200" }
            } else {
                select {
                    class: "{class}",
                    value: "{props.value}",
                    disabled: props.disabled,
                    onchange: move |e| props.on_change.call(e.value()),
                    option { value: "", disabled: true, selected: props.value.is_empty(),
                        {props.placeholder.clone().unwrap_or_else(|| "Select...".to_string())}
                    }
                    for choice in props.options.iter() {
                        option {
                            value: "{choice.value}",
                            selected: props.value == choice.value,
                            "{choice.label}"
                        }
                    }
                }
            }
            if let Some(error) = &props.error {
                p { class: "mt-1 text-xs text-rose-500", "{error}" }
            }
        }
    }
}

// ============================================================================
// Checkbox
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    pub checked: bool,

    #[props(default)]
    pub label: Option<String>,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Boolean checkbox
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label { class: "inline-flex items-center gap-2 text-sm text-gray-700",
            input {
                r#type: "checkbox",
                class: "h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.checked()),
            }
            if let Some(label) = &props.label {
                span { "{label}" }
            }
        }
    }
}
