//! Administrator dashboard screens
//!
//! Each screen pairs a create form with an editable table over one
//! backend resource. Reference data for the select inputs (countries,
//! states, plans, user categories) comes from its own query and is
//! shared through the general store where other screens need it too.

mod city;
mod corporate_users;
mod country;
mod home;
mod manage_profile;
mod manage_users;
mod membership_plans;
mod plan_attributes;
mod state;
mod suppliers;

pub use city::AdminCity;
pub use corporate_users::AdminCorporateUsers;
pub use country::AdminCountry;
pub use home::AdminHome;
pub use manage_profile::AdminManageProfile;
pub use manage_users::AdminManageUsers;
pub use membership_plans::AdminMembershipPlans;
pub use plan_attributes::AdminPlanAttributes;
pub use state::AdminState;
pub use suppliers::AdminSuppliers;
