//! What the console does with each backend result.
//!
//! The browser pages and the CLI both route call results through these
//! functions, so the user-visible messages and the 401 sign-out rule are
//! defined once.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use crate::error::ApiError;
use crate::hospital::Hospital;
use crate::wire::LoginResponse;

/// Shown when a login is rejected without a backend message.
pub const LOGIN_FAILED: &str = "Failed to login.";
/// Shown when the hospital list cannot be loaded.
pub const FETCH_FAILED: &str = "Could not fetch hospital data.";
/// Logged when a feature update is rejected.
pub const UPDATE_FAILED: &str = "Failed to update feature.";
/// Alert shown before a failed toggle is reverted.
pub const TOGGLE_REVERTED: &str = "Could not update feature settings. Reverting change.";

/// Result of a login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Persist this token and show the dashboard.
    SignedIn(String),
    /// Success without a token; stay on the login form.
    NoToken,
    /// Show this message inline and keep the form.
    Failed(String),
}

/// Result of a hospital-list fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum ListOutcome {
    /// Replace the roster with these records.
    Loaded(Vec<Hospital>),
    /// The token was rejected; sign out silently.
    SignOut,
    /// Show this message.
    Failed(String),
}

#[must_use]
pub fn login_outcome(result: Result<LoginResponse, ApiError>) -> LoginOutcome {
    match result {
        Ok(LoginResponse {
            token: Some(token), ..
        }) if !token.is_empty() => LoginOutcome::SignedIn(token),
        Ok(_) => LoginOutcome::NoToken,
        Err(err) => LoginOutcome::Failed(login_error_message(&err)),
    }
}

/// Backend message verbatim, the transport error text, or the generic fallback.
#[must_use]
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized { .. } | ApiError::Rejected { .. } => err
            .backend_message()
            .filter(|message| !message.is_empty())
            .unwrap_or(LOGIN_FAILED)
            .to_owned(),
        ApiError::Transport(message) | ApiError::Decode(message) => message.clone(),
    }
}

#[must_use]
pub fn list_outcome(result: Result<Vec<Hospital>, ApiError>) -> ListOutcome {
    match result {
        Ok(hospitals) => ListOutcome::Loaded(hospitals),
        Err(err) if err.is_unauthorized() => ListOutcome::SignOut,
        Err(_) => ListOutcome::Failed(FETCH_FAILED.to_owned()),
    }
}
