//! # Confirm Dialog Component
//!
//! Modal confirmation for destructive or irreversible table actions
//! (delete a row, commit an edit). Nothing happens until the user
//! explicitly confirms.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,

    pub message: String,

    #[props(default = "Confirm".to_string())]
    pub confirm_label: String,

    /// Render the confirm button in the destructive style
    #[props(default = false)]
    pub destructive: bool,

    /// Disable the buttons while the confirmed action runs
    #[props(default = false)]
    pub pending: bool,

    pub on_confirm: EventHandler<()>,

    pub on_cancel: EventHandler<()>,
}

/// Confirmation dialog overlay
#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    let confirm_class = if props.destructive {
        "rounded-md bg-rose-600 px-4 py-2 text-sm font-medium text-white hover:bg-rose-500 disabled:opacity-50"
    } else {
        "rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-500 disabled:opacity-50"
    };

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50",
            div { class: "w-full max-w-md rounded-lg bg-white p-6 shadow-xl",
                h3 { class: "text-lg font-semibold text-gray-900", "{props.title}" }
                p { class: "mt-2 text-sm text-gray-600", "{props.message}" }
                div { class: "mt-6 flex justify-end gap-3",
                    button {
                        class: "rounded-md border border-gray-300 px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:opacity-50",
                        disabled: props.pending,
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "{confirm_class}",
                        disabled: props.pending,
                        onclick: move |_| props.on_confirm.call(()),
                        if props.pending { "Working..." } else { "{props.confirm_label}" }
                    }
                }
            }
        }
    }
}
