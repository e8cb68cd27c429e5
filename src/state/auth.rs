//! Reactive sign-in status for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render sign-in / sign-out affordances from this state. The
//! token itself stays in `session::Session`; this only mirrors whether one is
//! present so views can react to sign-in and sign-out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

/// Authentication state tracking whether a token is held, whether a
/// sign-in request is in flight, and a notice for the header to show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub signed_in: bool,
    pub loading: bool,
    pub notice: Option<String>,
}

pub const NOT_REMEMBERED_NOTICE: &str = "Signed in, but this browser will not remember you.";

impl AuthState {
    /// Snapshot of `session` as seen right now.
    pub fn from_session(session: &Session) -> Self {
        Self {
            signed_in: session.has_token(),
            loading: false,
            notice: None,
        }
    }
}

/// Store `token` in `session` and return the resulting state.
///
/// If the token cannot be persisted it is still held in memory for this page
/// load, and the state carries a notice saying so.
pub fn complete_sign_in(session: &Session, token: &str) -> AuthState {
    let persisted = session.sign_in(token);
    let mut state = AuthState::from_session(session);
    if let Err(err) = persisted {
        log::warn!("signed in for this page load only: {err}");
        state.notice = Some(NOT_REMEMBERED_NOTICE.to_owned());
    }
    state
}

/// Forget the token. A storage failure is logged and otherwise ignored since
/// the in-memory holder is already cleared.
pub fn sign_out(session: &Session) -> AuthState {
    if let Err(err) = session.sign_out() {
        log::warn!("failed to clear stored token: {err}");
    }
    AuthState::from_session(session)
}
