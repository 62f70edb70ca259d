//! Corporate profile screen

use dioxus::prelude::*;

use crate::pages::profile::ManageProfileForm;

#[component]
pub fn CorporateManageProfile() -> Element {
    rsx! {
        ManageProfileForm {}
    }
}
