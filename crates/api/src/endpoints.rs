//! REST endpoint paths
//!
//! Path-based resources exposed by the EasySportsPass backend. Grouped
//! the way the backend groups its controllers; all values are joined with
//! the configured base URL by the client layer.

pub mod auth {
    pub const INIT: &str = "/auth/unauthorized-token";
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
}

pub mod membership {
    pub const GET_ALL_PLANS: &str = "/membershipplan/allplans";
    pub const GET_NORMAL_PLANS: &str = "/membershipplan";
    pub const GET_CORPORATE_PLANS: &str = "/membershipplan/getcorporateplans";
    pub const ATTRIBUTES: &str = "/membershipplanattribute";
    pub const USER_DETAIL: &str = "/usermembershipplandetail";
    pub const GET_USER_PLAN: &str = "/usermembershipplandetail/getuserplan";
}

pub mod corporate {
    pub const CORPORATE: &str = "/corporateuser";
    pub const VERIFY_CORPORATE_USER: &str = "/corporateuser/verifycorporateuser";
}

pub mod message {
    pub const VERIFY_EMAIL_OTP: &str = "/message/verifyemailotp";
    pub const VERIFY_MOBILE_OTP: &str = "/message/verifymobileotp";
    pub const SEND_EMAIL_OTP: &str = "/message/sendemailotp";
    pub const SEND_MOBILE_OTP: &str = "/message/sendmobileotp";
    pub const FORGOT_PASSWORD_MOBILE_LINK: &str =
        "/message/send-mobile?type=SEND_RESET_LINK&messageType=FORGOT_PASSWORD";
    pub const FORGOT_PASSWORD_EMAIL_LINK: &str =
        "/message/send-email?type=SEND_RESET_LINK&messageType=FORGOT_PASSWORD";
    pub const SEND_WELCOME_EMAIL: &str =
        "/message/send-email?type=SEND_RESET_LINK&messageType=USER_CREATED";
}

pub mod users {
    pub const USERS: &str = "/users";
    pub const CATEGORY: &str = "/usercategory";
    pub const PROFILE_PIC: &str = "/getProfilePic";
    pub const FORGOT_PASSWORD: &str = "/users/forgot-password";
    pub const UPDATE_USER: &str = "/users/update";
}

pub const COUNTRY: &str = "/country";
pub const STATE: &str = "/state";
pub const CITY: &str = "/city";
pub const SUPPLIERS: &str = "/suppliers";
pub const SUPPLIER_PIC: &str = "/suppliers/getSupplierPic";
pub const ACTIVITIES: &str = "/activities";

pub mod check_in {
    pub const CHECK_IN: &str = "/UserCheckInDetail";
    pub const GET_CHECK_IN_USERS: &str = "/UserCheckInDetail/supplier";
}
