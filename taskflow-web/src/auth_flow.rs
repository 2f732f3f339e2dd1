//! Outcomes of the sign-in, sign-up and verification steps.
//!
//! The anonymous stages of the flow are the login and register routes
//! themselves; what this module models is everything that happens after a
//! submission succeeds. Each server outcome maps to exactly one
//! [`Transition`] describing the stage to navigate to plus the storage
//! effects it implies. The mapping is pure; pages perform the effects with
//! [`apply`] and then follow [`AuthStage::route`]. A failed request produces
//! no transition at all: the page stays put and shows the error.

use shared::models::{
    LoginResponse, PendingRegistration, RegisterResponse, Session, VerifyOtpResponse,
};
use yew_router::prelude::Navigator;
use yewdux::prelude::Dispatch;

use crate::models::AppState;
use crate::routes::MainRoute;
use crate::session::SessionStore;

/// Where a successful submission lands the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStage {
    /// Registered but waiting for the email code.
    PendingOtp { user_id: String },
    /// Holding a token.
    Authenticated,
}

impl AuthStage {
    /// The route that presents this stage.
    pub fn route(&self) -> MainRoute {
        match self {
            Self::PendingOtp { .. } => MainRoute::VerifyOtp,
            Self::Authenticated => MainRoute::Dashboard,
        }
    }
}

/// A stage change together with the storage writes it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: AuthStage,
    /// Session to persist and publish, when the outcome produced one.
    pub session: Option<Session>,
    /// Pending registration to remember, when verification is still owed.
    pub pending: Option<PendingRegistration>,
    /// Whether any remembered pending registration is now stale.
    pub clear_pending: bool,
}

/// Successful login: straight to authenticated, pending state untouched.
///
/// An unverified account on the same browser keeps its pending marker; the
/// account that just logged in is a different, verified one.
pub fn after_login(response: LoginResponse) -> Transition {
    Transition {
        next: AuthStage::Authenticated,
        session: Some(Session {
            token: response.token,
            user: Some(response.user),
        }),
        pending: None,
        clear_pending: false,
    }
}

/// Successful registration: the server picked one of two contracts.
///
/// Either it returned a token and the account is live immediately, or it
/// returned a `userId` and the visitor owes an email code first.
pub fn after_register(email: &str, response: RegisterResponse) -> Transition {
    match response {
        RegisterResponse::Authenticated(login) => Transition {
            clear_pending: true,
            ..after_login(login)
        },
        RegisterResponse::VerificationRequired(verification) => Transition {
            next: AuthStage::PendingOtp {
                user_id: verification.user_id,
            },
            session: None,
            pending: Some(PendingRegistration {
                email: email.to_string(),
            }),
            clear_pending: false,
        },
    }
}

/// Successful code verification: authenticated, pending marker consumed.
///
/// The verify endpoint may return a token without a profile; the session
/// starts bare and the profile fills in on the next profile fetch.
pub fn after_verify(response: VerifyOtpResponse) -> Transition {
    Transition {
        next: AuthStage::Authenticated,
        session: Some(Session {
            token: response.token,
            user: response.user,
        }),
        pending: None,
        clear_pending: true,
    }
}

/// Perform the storage writes a transition calls for and publish the session.
pub fn apply(transition: &Transition, dispatch: &Dispatch<AppState>) {
    if transition.clear_pending {
        SessionStore::clear_pending();
    }
    if let Some(pending) = &transition.pending {
        SessionStore::set_pending(pending);
    }
    if let Some(session) = &transition.session {
        SessionStore::set(session);
        dispatch.set(AppState::authenticated(session.clone()));
    }
}

/// Drop the session everywhere and return to the login screen.
pub fn sign_out(dispatch: &Dispatch<AppState>, navigator: Option<&Navigator>) {
    SessionStore::clear();
    dispatch.set(AppState::default());
    if let Some(navigator) = navigator {
        navigator.push(&MainRoute::Login);
    }
}

/// A 401 means the stored token is no longer accepted: forced sign-out.
pub fn expire_to_login(dispatch: &Dispatch<AppState>, navigator: Option<&Navigator>) {
    sign_out(dispatch, navigator);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{LoginResponse, UserProfile, VerificationRequired};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Jordan Smith".into(),
            email: "jordan@example.edu".into(),
            university: None,
            major: None,
            year_of_study: None,
            bio: None,
        }
    }

    #[test]
    fn login_goes_straight_to_authenticated() {
        let transition = after_login(LoginResponse {
            token: "tok-1".into(),
            user: profile(),
        });

        assert_eq!(transition.next, AuthStage::Authenticated);
        assert_eq!(transition.next.route(), MainRoute::Dashboard);
        let session = transition.session.expect("login produces a session");
        assert_eq!(session.token, "tok-1");
        assert_eq!(
            session.user.map(|user| user.email),
            Some("jordan@example.edu".to_string())
        );
        assert!(!transition.clear_pending);
        assert!(transition.pending.is_none());
    }

    #[test]
    fn register_with_token_authenticates_and_drops_stale_pending() {
        let transition = after_register(
            "jordan@example.edu",
            RegisterResponse::Authenticated(LoginResponse {
                token: "tok-2".into(),
                user: profile(),
            }),
        );

        assert_eq!(transition.next, AuthStage::Authenticated);
        assert!(transition.session.is_some());
        assert!(transition.pending.is_none());
        assert!(transition.clear_pending);
    }

    #[test]
    fn register_needing_verification_moves_to_pending_otp() {
        let transition = after_register(
            "jordan@example.edu",
            RegisterResponse::VerificationRequired(VerificationRequired {
                user_id: "u1".into(),
                message: Some("Check your inbox".into()),
            }),
        );

        assert_eq!(
            transition.next,
            AuthStage::PendingOtp {
                user_id: "u1".into()
            }
        );
        assert_eq!(transition.next.route(), MainRoute::VerifyOtp);
        assert!(
            transition.session.is_none(),
            "no token until the code is redeemed"
        );
        assert_eq!(
            transition.pending.map(|pending| pending.email),
            Some("jordan@example.edu".to_string())
        );
    }

    #[test]
    fn verify_consumes_the_pending_marker() {
        let transition = after_verify(VerifyOtpResponse {
            token: "tok-3".into(),
            user: None,
        });

        assert_eq!(transition.next, AuthStage::Authenticated);
        assert!(transition.clear_pending);
        let session = transition.session.expect("verify produces a session");
        assert_eq!(session.token, "tok-3");
        assert!(session.user.is_none(), "verify may hand back a bare token");
    }

    #[test]
    fn verify_keeps_a_profile_when_the_server_includes_one() {
        let transition = after_verify(VerifyOtpResponse {
            token: "tok-4".into(),
            user: Some(profile()),
        });

        let session = transition.session.expect("verify produces a session");
        assert_eq!(
            session.user.map(|user| user.name),
            Some("Jordan Smith".to_string())
        );
    }
}
