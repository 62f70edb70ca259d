//! Supplier dashboard screens

mod activities;
mod check_in;
mod home;
mod listing;
mod manage_profile;

pub use activities::SupplierActivities;
pub use check_in::SupplierCheckIn;
pub use home::SupplierHome;
pub use listing::SupplierProfile;
pub use manage_profile::SupplierManageProfile;
