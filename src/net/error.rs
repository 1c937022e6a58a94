//! Error taxonomy for the REST client and the stores built on it.
//!
//! A 401 is surfaced as `ApiError::Unauthorized` and handled by the
//! session module plus a top-level watcher; the client itself never
//! navigates or touches UI state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Fallback shown when the server gives no usable error message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors produced by the REST client and session/store operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Login responded 2xx but carried no access token.
    #[error("login failed: no token received")]
    MissingToken,
    /// Logout was not confirmed by the server; local state is kept.
    #[error("logout failed: {0}")]
    LogoutFailed(String),
    /// 401 — the session is no longer valid.
    #[error("unauthorized")]
    Unauthorized,
    /// 403 — the resource exists but this user may not see it.
    #[error("forbidden")]
    Forbidden,
    /// 404.
    #[error("not found")]
    NotFound,
    /// Any other non-2xx, with the message extracted from the error envelope.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Transport-level failure (DNS, connection reset, offline).
    #[error("network error: {0}")]
    Network(String),
    /// 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx status plus its raw body into an `ApiError`.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            _ => Self::Api { status, message: envelope_message(body) },
        }
    }

    /// Message suitable for a user-facing banner. Views showing
    /// resource-specific copy (detail page) match on the variant instead.
    pub fn user_message(&self) -> String {
        match self {
            Self::Forbidden => "You do not have access to this expense.".to_owned(),
            Self::NotFound => "Expense not found.".to_owned(),
            Self::Api { message, .. } => message.clone(),
            Self::MissingToken | Self::LogoutFailed(_) => self.to_string(),
            Self::Unauthorized | Self::Network(_) | Self::Decode(_) => {
                FALLBACK_MESSAGE.to_owned()
            }
        }
    }
}

/// Error envelope consumed from the API:
/// `{"errors": [{"code", "message"}], "meta": {"http_status"}}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[allow(dead_code)]
    #[serde(default)]
    code: u32,
    message: String,
}

/// Extract the first error message from an envelope body, falling back
/// to [`FALLBACK_MESSAGE`] when the body is empty or unparseable.
pub fn envelope_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.errors.into_iter().next())
        .map_or_else(|| FALLBACK_MESSAGE.to_owned(), |e| e.message)
}
