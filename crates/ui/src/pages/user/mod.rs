//! Member dashboard screens

mod activities;
mod activity_detail;
mod home;
mod manage_profile;

pub use activities::UserActivities;
pub use activity_detail::UserActivityDetail;
pub use home::UserHome;
pub use manage_profile::UserManageProfile;
