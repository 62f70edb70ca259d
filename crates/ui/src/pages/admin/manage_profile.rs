//! Administrator profile screen

use dioxus::prelude::*;

use crate::pages::profile::ManageProfileForm;

#[component]
pub fn AdminManageProfile() -> Element {
    rsx! {
        ManageProfileForm {}
    }
}
