//! Corporate dashboard screens
//!
//! The corporate contact manages the employees enrolled under the
//! company's plan and can review what the plan includes.

mod home;
mod manage_profile;
mod members;
mod plan_attributes;

pub use home::CorporateHome;
pub use manage_profile::CorporateManageProfile;
pub use members::CorporateMembers;
pub use plan_attributes::CorporatePlanAttributes;
