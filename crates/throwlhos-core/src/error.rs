use http::StatusCode;
use thiserror::Error;

use crate::ErrorDescriptor;

/// Errors raised while building or querying the thrower table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two catalog entries derive the same thrower name
    #[error("thrower `{thrower}` derived from both `{first}` and `{second}`")]
    DuplicateThrower {
        thrower: String,
        first: &'static str,
        second: &'static str,
    },

    /// No thrower registered under the requested name
    #[error("unknown thrower: {0}")]
    UnknownThrower(String),
}

/// Trait for domain errors that can be converted to HTTP responses
///
/// The server layer turns implementors into actual responses, keeping the
/// descriptor types free of any web framework.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `NOT_FOUND`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

impl HttpError for ErrorDescriptor {
    /// Falls back to 500 when `code` is not a valid HTTP status
    fn status_code(&self) -> StatusCode {
        u16::try_from(self.code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_type(&self) -> &str {
        &self.status
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }
}
