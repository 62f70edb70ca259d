//! Member profile screen

use dioxus::prelude::*;

use crate::pages::profile::ManageProfileForm;

#[component]
pub fn UserManageProfile() -> Element {
    rsx! {
        ManageProfileForm {}
    }
}
