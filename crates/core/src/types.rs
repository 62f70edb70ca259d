//! Shared domain types for the EasySportsPass client
//!
//! Roles, async operation status, and the client-side session records
//! (user profile, credentials, OTP channels). Backend-owned business
//! records live in `esp_api::models`; this module only carries what the
//! session and routing layers need to agree on.

use serde::{Deserialize, Serialize};

// ============================================================================
// Roles
// ============================================================================

/// User roles recognized by the route guards and layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Administrator,
    Supplier,
    Corporate,
    Normal,
}

impl Role {
    /// Backend wire value for this role (the `userType` field)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Supplier => "Supplier",
            Role::Corporate => "Corporate",
            Role::Normal => "Normal",
        }
    }

    /// Parse a backend `userType` value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Administrator" => Some(Role::Administrator),
            "Supplier" => Some(Role::Supplier),
            "Corporate" => Some(Role::Corporate),
            "Normal" => Some(Role::Normal),
            _ => None,
        }
    }

    /// Landing route for a freshly authenticated user of this role
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Administrator => "/admin",
            Role::Supplier => "/supplier",
            Role::Corporate => "/corporate",
            Role::Normal => "/user",
        }
    }
}

// ============================================================================
// Async Status
// ============================================================================

/// Three-phase status of an async session operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AsyncStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl AsyncStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncStatus::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, AsyncStatus::Succeeded | AsyncStatus::Failed)
    }
}

// ============================================================================
// Session Records
// ============================================================================

/// The authenticated user's profile as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    /// Wire value of the user's role; see [`Role::parse`]
    pub user_type: String,
    pub email_verified: i64,
    pub mobile_verified: i64,
    pub image_url: Option<String>,
    /// Plan merged on by `fetch_user_plan`; absent until fetched
    pub plan: Option<MembershipPlan>,
}

impl UserProfile {
    /// The parsed role of this user, if the wire value is recognized
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.user_type)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter initials used by the profile-picture placeholder
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        [first, last].into_iter().flatten().collect()
    }
}

/// A membership plan, as attached to a user or listed publicly
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MembershipPlan {
    pub plan_id: i64,
    pub plan_name: String,
    pub description: String,
    pub price: f64,
    pub plan_type: Option<String>,
    #[serde(default)]
    pub membership_plan_attributes: Vec<serde_json::Value>,
}

/// Login request body. The backend accepts either contact slot; the
/// one the user did not sign in with stays null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: String,
}

impl Credentials {
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "email": self.email,
            "mobile": self.mobile,
            "password": self.password,
        })
    }
}

/// The channel an OTP is sent over, carrying its address
#[derive(Debug, Clone, PartialEq)]
pub enum OtpChannel {
    Email(String),
    Mobile(String),
}

impl OtpChannel {
    /// Request body for the send/verify OTP endpoints
    pub fn to_payload(&self, verification_code: Option<&str>) -> serde_json::Value {
        let (email, mobile) = match self {
            OtpChannel::Email(addr) => (Some(addr.as_str()), None),
            OtpChannel::Mobile(number) => (None, Some(number.as_str())),
        };
        let mut body = serde_json::json!({
            "email": email,
            "mobile": mobile,
        });
        if let Some(code) = verification_code {
            body["verificationCode"] = serde_json::Value::String(code.to_string());
        }
        body
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_credentials_payload_fills_one_contact_slot() {
        let creds = Credentials {
            email: None,
            mobile: Some("9876543210".into()),
            password: "hunter2hunter2".into(),
        };
        let payload = creds.to_payload();
        assert_eq!(payload["email"], serde_json::Value::Null);
        assert_eq!(payload["mobile"], "9876543210");
        assert_eq!(payload["password"], "hunter2hunter2");
    }

    #[test]
    fn test_role_round_trip() {
        for role in [
            Role::Administrator,
            Role::Supplier,
            Role::Corporate,
            Role::Normal,
        ] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("SuperAdmin"), None);
    }

    #[test]
    fn test_role_home_paths() {
        assert_eq!(Role::Administrator.home_path(), "/admin");
        assert_eq!(Role::Normal.home_path(), "/user");
    }

    #[test]
    fn test_async_status() {
        assert!(AsyncStatus::Loading.is_loading());
        assert!(AsyncStatus::Succeeded.is_settled());
        assert!(AsyncStatus::Failed.is_settled());
        assert!(!AsyncStatus::Idle.is_settled());
    }

    #[test]
    fn test_profile_deserializes_camel_case() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "userId": 7,
                "firstName": "Asha",
                "lastName": "Rao",
                "email": "asha@example.com",
                "mobile": "9876543210",
                "userType": "Normal",
                "emailVerified": 1,
                "mobileVerified": 0
            }"#,
        )
        .unwrap();
        assert_eq!(profile.user_id, 7);
        assert_eq!(profile.role(), Some(Role::Normal));
        assert_eq!(profile.full_name(), "Asha Rao");
        assert_eq!(profile.initials(), "AR");
        assert!(profile.plan.is_none());
    }

    #[test]
    fn test_otp_payload_shapes() {
        let send = OtpChannel::Email("a@b.c".into()).to_payload(None);
        assert_eq!(send["email"], "a@b.c");
        assert!(send["mobile"].is_null());
        assert!(send.get("verificationCode").is_none());

        let verify = OtpChannel::Mobile("9876543210".into()).to_payload(Some("4242"));
        assert_eq!(verify["mobile"], "9876543210");
        assert_eq!(verify["verificationCode"], "4242");
    }
}
