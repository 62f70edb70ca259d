//! Routing
//!
//! Route table for the whole app. Public pages share the landing layout
//! with navbar and footer; each role's dashboard pages nest under that
//! role's shell, which also enforces the role gate.

use dioxus::prelude::*;

use crate::layouts::{AdminLayout, CorporateLayout, PublicLayout, SupplierLayout, UserLayout};
use crate::pages::admin::{
    AdminCity, AdminCorporateUsers, AdminCountry, AdminHome, AdminManageProfile,
    AdminManageUsers, AdminMembershipPlans, AdminPlanAttributes, AdminState, AdminSuppliers,
};
use crate::pages::corporate::{
    CorporateHome, CorporateManageProfile, CorporateMembers, CorporatePlanAttributes,
};
use crate::pages::supplier::{
    SupplierActivities, SupplierCheckIn, SupplierHome, SupplierManageProfile, SupplierProfile,
};
use crate::pages::user::{UserActivities, UserActivityDetail, UserHome, UserManageProfile};
use crate::pages::{
    AboutSports, Company, ContactUs, CorporatePlans, Home, Login, Memberships, NotFound, Profile,
    Register, ResetLinkMessage, ResetPassword, ResetSuccess, Subscriptions, VerifyUser,
};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Public landing shell with navbar and footer.
    #[layout(PublicLayout)]
    /// Landing page; signed-in users are forwarded to their dashboard.
    #[route("/")]
    Home {},

    #[route("/company")]
    Company {},

    #[route("/about-sports")]
    AboutSports {},

    #[route("/subscription")]
    Subscriptions {},

    #[route("/contact-us")]
    ContactUs {},

    /// Individual membership plan pricing.
    #[route("/memberships")]
    Memberships {},
    #[end_layout]

    #[route("/register")]
    Register {},

    #[route("/login")]
    Login {},

    /// Corporate plan pricing, reached from corporate email verification.
    #[route("/corporateplans")]
    CorporatePlans {},

    /// Post-signup OTP verification.
    #[route("/verifyuser")]
    VerifyUser {},

    /// Set-new-password page, reached from the emailed reset link.
    #[route("/reset-password?:token&:email")]
    ResetPassword { token: String, email: String },

    #[route("/reset-password/reset-pass-message")]
    ResetLinkMessage {},

    #[route("/reset-password/success")]
    ResetSuccess {},

    /// Signed-in profile overview.
    #[route("/profile")]
    Profile {},

    /// Administrator dashboard.
    #[layout(AdminLayout)]
    #[route("/admin")]
    AdminHome {},

    #[route("/admin/country")]
    AdminCountry {},

    #[route("/admin/state")]
    AdminState {},

    #[route("/admin/city")]
    AdminCity {},

    #[route("/admin/membership-plan")]
    AdminMembershipPlans {},

    #[route("/admin/plan-attributes")]
    AdminPlanAttributes {},

    #[route("/admin/manage-users")]
    AdminManageUsers {},

    #[route("/admin/corporate-users")]
    AdminCorporateUsers {},

    #[route("/admin/suppliers")]
    AdminSuppliers {},

    #[route("/admin/manage-profile")]
    AdminManageProfile {},
    #[end_layout]

    /// Supplier dashboard.
    #[layout(SupplierLayout)]
    #[route("/supplier")]
    SupplierHome {},

    #[route("/supplier/activities")]
    SupplierActivities {},

    #[route("/supplier/check-in")]
    SupplierCheckIn {},

    /// Public-facing supplier listing details.
    #[route("/supplier/manage-supplier-profile")]
    SupplierProfile {},

    #[route("/supplier/manage-profile")]
    SupplierManageProfile {},
    #[end_layout]

    /// Corporate dashboard.
    #[layout(CorporateLayout)]
    #[route("/corporate")]
    CorporateHome {},

    #[route("/corporate/manage-members")]
    CorporateMembers {},

    #[route("/corporate/plan-attributes")]
    CorporatePlanAttributes {},

    #[route("/corporate/manage-profile")]
    CorporateManageProfile {},
    #[end_layout]

    /// Member dashboard.
    #[layout(UserLayout)]
    #[route("/user")]
    UserHome {},

    #[route("/user/activities")]
    UserActivities {},

    #[route("/user/activities/:supplier_id")]
    UserActivityDetail { supplier_id: i64 },

    #[route("/user/manage-profile")]
    UserManageProfile {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
