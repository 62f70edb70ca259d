//! Session state
//!
//! Holds the authenticated user, the bearer token, and the transient
//! status of auth flows. Mutations go through [`SessionAction`] so every
//! transition is testable without a running app. The token and user are
//! the only fields persisted across reloads.

use dioxus::prelude::*;
use esp_core::{AsyncStatus, UserProfile};
use serde::{Deserialize, Serialize};

use super::persist;

// ============================================================================
// Reset password banner
// ============================================================================

/// Message shown on the reset-link-sent screen, recording which channel
/// the link went out on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResetPassMessage {
    pub kind: String,
    pub email_or_mobile: String,
}

// ============================================================================
// Session state
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Authenticated user, if any
    pub user: Option<UserProfile>,
    /// Bearer token (anonymous bootstrap token before login)
    pub token: Option<String>,
    /// Status of the in-flight auth operation
    pub status: AsyncStatus,
    /// Status of the in-flight OTP send
    pub otp_status: AsyncStatus,
    /// Email captured during corporate verification, carried into signup
    pub corporate_email: Option<String>,
    /// Last auth error, surfaced by the login and signup screens
    pub error: Option<String>,
    /// Reset-link banner contents
    pub reset_pass_message: ResetPassMessage,
}

/// Session transitions
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    AuthPending,
    AuthFailed(String),
    /// Anonymous token fetched at startup
    TokenReady(String),
    /// Login or registration succeeded
    SignedIn {
        user: UserProfile,
        token: String,
    },
    OtpPending,
    OtpSent,
    OtpFailed(String),
    /// Both OTP channels confirmed for the current user
    MarkVerified,
    SetCorporateEmail(String),
    SetResetPassMessage(ResetPassMessage),
    /// Merge updated profile fields over the current user
    UserUpdated(UserProfile),
    /// Attach the fetched membership plan to the current user
    PlanLoaded(esp_core::MembershipPlan),
    Logout,
}

impl SessionState {
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::AuthPending => {
                self.status = AsyncStatus::Loading;
                self.error = None;
            }
            SessionAction::AuthFailed(message) => {
                self.status = AsyncStatus::Failed;
                self.error = Some(message);
            }
            SessionAction::TokenReady(token) => {
                self.status = AsyncStatus::Succeeded;
                self.token = Some(token);
            }
            SessionAction::SignedIn { user, token } => {
                self.status = AsyncStatus::Succeeded;
                self.user = Some(user);
                self.token = Some(token);
                self.error = None;
            }
            SessionAction::OtpPending => self.otp_status = AsyncStatus::Loading,
            SessionAction::OtpSent => self.otp_status = AsyncStatus::Succeeded,
            SessionAction::OtpFailed(message) => {
                self.otp_status = AsyncStatus::Failed;
                self.error = Some(message);
            }
            SessionAction::MarkVerified => {
                if let Some(user) = &mut self.user {
                    user.email_verified = 1;
                    user.mobile_verified = 1;
                }
            }
            SessionAction::SetCorporateEmail(email) => {
                self.corporate_email = Some(email);
            }
            SessionAction::SetResetPassMessage(message) => {
                self.reset_pass_message = message;
            }
            SessionAction::UserUpdated(user) => {
                self.user = Some(user);
                self.status = AsyncStatus::Succeeded;
            }
            SessionAction::PlanLoaded(plan) => {
                if let Some(user) = &mut self.user {
                    user.plan = Some(plan);
                }
            }
            SessionAction::Logout => {
                self.user = None;
                self.token = None;
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<esp_core::Role> {
        self.user.as_ref().and_then(UserProfile::role)
    }
}

// ============================================================================
// Persistence
// ============================================================================

/// Subset of the session that survives reloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionSnapshot {
    user: Option<UserProfile>,
    token: Option<String>,
}

// ============================================================================
// Global signal
// ============================================================================

/// Global session store
pub static SESSION: GlobalSignal<SessionState> = Signal::global(SessionState::default);

/// Rehydrate the session from local storage. Call once at startup.
pub fn restore_session() {
    if let Some(snapshot) = persist::load::<SessionSnapshot>(persist::SESSION_KEY) {
        let mut session = SESSION.write();
        session.user = snapshot.user;
        session.token = snapshot.token.clone();
        if let Some(token) = snapshot.token {
            esp_api::set_default_token(token);
        }
    }
}

/// Apply a session transition through the global store, keeping the
/// persisted snapshot and the API default token in step.
pub fn dispatch_session(action: SessionAction) {
    let mut session = SESSION.write();
    session.apply(action);
    match &session.token {
        Some(token) => esp_api::set_default_token(token.clone()),
        None => esp_api::clear_default_token(),
    }
    let snapshot = SessionSnapshot {
        user: session.user.clone(),
        token: session.token.clone(),
    };
    drop(session);
    if let Err(err) = persist::save(persist::SESSION_KEY, &snapshot) {
        tracing::warn!(error = %err, "failed to persist session");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user() -> UserProfile {
        UserProfile {
            user_id: 7,
            first_name: "Ada".into(),
            last_name: "Marsh".into(),
            email: "ada@example.com".into(),
            user_type: "Normal".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sign_in_then_logout() {
        let mut state = SessionState::default();
        state.apply(SessionAction::AuthPending);
        assert_eq!(state.status, AsyncStatus::Loading);

        state.apply(SessionAction::SignedIn {
            user: user(),
            token: "tkn".into(),
        });
        assert!(state.is_authenticated());
        assert_eq!(state.token.as_deref(), Some("tkn"));
        assert_eq!(state.role(), Some(esp_core::Role::Normal));

        state.apply(SessionAction::Logout);
        assert!(!state.is_authenticated());
        assert_eq!(state.token, None);
    }

    #[test]
    fn test_auth_failure_records_error() {
        let mut state = SessionState::default();
        state.apply(SessionAction::AuthFailed("bad credentials".into()));
        assert_eq!(state.status, AsyncStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("bad credentials"));

        // A fresh attempt clears the stale error.
        state.apply(SessionAction::AuthPending);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_mark_verified_flips_both_flags() {
        let mut state = SessionState::default();
        state.apply(SessionAction::MarkVerified); // no user, no-op
        assert_eq!(state.user, None);

        state.apply(SessionAction::SignedIn {
            user: user(),
            token: "t".into(),
        });
        state.apply(SessionAction::MarkVerified);
        let user = state.user.unwrap();
        assert_eq!(user.email_verified, 1);
        assert_eq!(user.mobile_verified, 1);
    }

    #[test]
    fn test_anonymous_token_does_not_authenticate() {
        let mut state = SessionState::default();
        state.apply(SessionAction::TokenReady("anon".into()));
        assert!(!state.is_authenticated());
        assert_eq!(state.token.as_deref(), Some("anon"));
    }
}
