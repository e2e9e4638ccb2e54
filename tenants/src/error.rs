//! Failure modes of a backend call.
//!
//! ERROR HANDLING
//! ==============
//! Both front ends map transport and status failures into [`ApiError`] so the
//! console flow (`outcome`) can decide between showing a message, signing the
//! operator out, or rolling back an optimistic change.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::wire::ErrorBody;

/// Error returned by any console backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),
    /// The backend answered 401.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    /// The backend answered with another non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-2xx response, pulling `message` from the body if present.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = ErrorBody::parse(body).message;
        if status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Rejected { status, message }
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message supplied by the backend, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
