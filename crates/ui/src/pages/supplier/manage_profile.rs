//! Supplier account profile screen

use dioxus::prelude::*;

use crate::pages::profile::ManageProfileForm;

#[component]
pub fn SupplierManageProfile() -> Element {
    rsx! {
        ManageProfileForm {}
    }
}
