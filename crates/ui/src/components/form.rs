//! # Generated Form
//!
//! Renders a create form from a field descriptor list: one input per
//! descriptor, per-keystroke change tracking, blur-based touched state,
//! and a submit gate that runs the merged validation schema. The payload
//! handed to `on_submit` is already coerced per each field's type tag.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use esp_forms::{FieldDescriptor, InputKind, validate_fields};
use serde_json::{Map, Value};

use crate::components::inputs::{Checkbox, Select, TextArea, TextInput};

/// Properties for MetaForm
#[derive(Props, Clone, PartialEq)]
pub struct MetaFormProps {
    /// Descriptors for every input the form renders
    pub fields: Vec<FieldDescriptor>,

    pub title: String,

    #[props(default)]
    pub description: Option<String>,

    /// Disables the submit button while a mutation is in flight
    #[props(default = false)]
    pub pending: bool,

    #[props(default = "Save".to_string())]
    pub submit_label: String,

    /// Bump to clear the form (after a successful create)
    #[props(default = 0)]
    pub reset_epoch: u32,

    /// Called with the coerced payload once validation passes
    pub on_submit: EventHandler<Map<String, Value>>,
}

#[component]
pub fn MetaForm(props: MetaFormProps) -> Element {
    let mut values = use_signal(BTreeMap::<String, String>::new);
    let mut errors = use_signal(BTreeMap::<String, String>::new);
    let mut touched = use_signal(BTreeMap::<String, bool>::new);

    // Reset drafts when the descriptor set changes or the caller asks.
    let field_keys: Vec<String> = props.fields.iter().map(|f| f.key.clone()).collect();
    let reset_epoch = props.reset_epoch;
    use_effect(use_reactive((&field_keys, &reset_epoch), move |_| {
        values.set(BTreeMap::new());
        errors.set(BTreeMap::new());
        touched.set(BTreeMap::new());
    }));

    let fields = props.fields.clone();
    let validate_field = move |key: String, fields: &[FieldDescriptor]| {
        // Rebind so the closure stays Fn; signals are Copy.
        let mut errors = errors;
        let current = validate_fields(fields, &values.read());
        let mut errs = errors.write();
        match current.get(&key) {
            Some(message) => {
                errs.insert(key, message.clone());
            }
            None => {
                errs.remove(&key);
            }
        }
    };

    let submit_fields = props.fields.clone();
    let on_submit_form = move |evt: FormEvent| {
        evt.prevent_default();
        let current = validate_fields(&submit_fields, &values.read());
        if current.is_empty() {
            let mut payload = Map::new();
            for field in &submit_fields {
                let raw = values
                    .read()
                    .get(field.key.as_str())
                    .cloned()
                    .unwrap_or_default();
                payload.insert(field.key.clone(), field.coerce(&raw));
            }
            props.on_submit.call(payload);
        } else {
            let mut all_touched = BTreeMap::new();
            for field in &submit_fields {
                all_touched.insert(field.key.clone(), true);
            }
            touched.set(all_touched);
            errors.set(current);
        }
    };

    rsx! {
        form {
            class: "rounded-lg bg-white p-6 shadow",
            onsubmit: on_submit_form,

            h2 { class: "text-lg font-semibold text-gray-900", "{props.title}" }
            if let Some(description) = &props.description {
                p { class: "mt-1 text-sm text-gray-500", "{description}" }
            }

            div { class: "mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2",
                for field in fields.iter() {
                    {
                        let key = field.key.clone();
                        let raw = values.read().get(key.as_str()).cloned().unwrap_or_default();
                        let error = if touched.read().get(key.as_str()).copied().unwrap_or(false) {
                            errors.read().get(key.as_str()).cloned()
                        } else {
                            None
                        };
                        let required = field.rule.is_some();
                        let placeholder = field.placeholder_text();
                        let validate = validate_field.clone();
                        let blur_fields = props.fields.clone();

                        match &field.input {
                            InputKind::Select => rsx! {
                                Select {
                                    value: raw,
                                    options: field.options.clone(),
                                    label: field.label.clone(),
                                    placeholder: placeholder,
                                    error: error,
                                    required: required,
                                    loading: field.options_loading,
                                    on_change: {
                                        let key = key.clone();
                                        let validate = validate.clone();
                                        let fields = blur_fields.clone();
                                        move |value: String| {
                                            values.write().insert(key.clone(), value);
                                            touched.write().insert(key.clone(), true);
                                            validate(key.clone(), &fields);
                                        }
                                    },
                                }
                            },
                            InputKind::TextArea => rsx! {
                                TextArea {
                                    value: raw,
                                    label: field.label.clone(),
                                    placeholder: placeholder,
                                    error: error,
                                    required: required,
                                    on_change: {
                                        let key = key.clone();
                                        move |value: String| {
                                            values.write().insert(key.clone(), value);
                                        }
                                    },
                                    on_blur: {
                                        let key = key.clone();
                                        let validate = validate.clone();
                                        let fields = blur_fields.clone();
                                        move |_| {
                                            touched.write().insert(key.clone(), true);
                                            validate(key.clone(), &fields);
                                        }
                                    },
                                }
                            },
                            InputKind::Checkbox => rsx! {
                                Checkbox {
                                    checked: raw == "true",
                                    label: field.label.clone(),
                                    on_change: {
                                        let key = key.clone();
                                        move |checked: bool| {
                                            values.write().insert(key.clone(), checked.to_string());
                                        }
                                    },
                                }
                            },
                            kind => rsx! {
                                TextInput {
                                    value: raw,
                                    label: field.label.clone(),
                                    placeholder: placeholder,
                                    error: error,
                                    required: required,
                                    input_type: kind.html_type().to_string(),
                                    on_change: {
                                        let key = key.clone();
                                        move |value: String| {
                                            values.write().insert(key.clone(), value);
                                        }
                                    },
                                    on_blur: {
                                        let key = key.clone();
                                        let validate = validate.clone();
                                        let fields = blur_fields.clone();
                                        move |_| {
                                            touched.write().insert(key.clone(), true);
                                            validate(key.clone(), &fields);
                                        }
                                    },
                                }
                            },
                        }
                    }
                }
            }

            div { class: "mt-6",
                button {
                    class: "rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-500 disabled:opacity-50",
                    r#type: "submit",
                    disabled: props.pending,
                    if props.pending { "Saving..." } else { "{props.submit_label}" }
                }
            }
        }
    }
}
