//! Loading skeletons

use dioxus::prelude::*;

/// Pulsing placeholder block
#[component]
pub fn Skeleton(#[props(default = "h-4 w-full".to_string())] class: String) -> Element {
    rsx! {
        div { class: "animate-pulse rounded bg-gray-200 {class}" }
    }
}

/// Placeholder table body shown while rows load
#[component]
pub fn TableSkeleton(#[props(default = 5)] rows: usize, columns: usize) -> Element {
    rsx! {
        tbody {
            for _ in 0..rows {
                tr {
                    for _ in 0..columns {
                        td { class: "px-3 py-3",
                            Skeleton {}
                        }
                    }
                }
            }
        }
    }
}
