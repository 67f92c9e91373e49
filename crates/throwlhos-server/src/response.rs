use std::any::Any;

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use throwlhos_core::{ErrorDescriptor, ErrorFactory, HttpError};

/// Error descriptor on its way to the wire
///
/// Handlers return `Result<_, ErrorResponse>` and propagate descriptors with
/// `?`. The response status comes from the descriptor's code (500 when that
/// code is not an HTTP status) and the body gains `success: false`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse(pub ErrorDescriptor);

impl ErrorResponse {
    /// Descriptor carried by this response
    pub const fn descriptor(&self) -> &ErrorDescriptor {
        &self.0
    }
}

impl From<ErrorDescriptor> for ErrorResponse {
    fn from(descriptor: ErrorDescriptor) -> Self {
        Self(descriptor)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    #[serde(flatten)]
    descriptor: &'a ErrorDescriptor,
    success: bool,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.0.status_code();

        tracing::debug!(
            code = self.0.code,
            status = %self.0.status,
            "responding with error descriptor"
        );

        let body = ErrorBody {
            descriptor: &self.0,
            success: false,
        };

        (status, Json(body)).into_response()
    }
}

/// Turn a handler panic into an `INTERNAL_SERVER_ERROR` response
///
/// The panic payload is logged, never sent to the client.
pub fn panic_response(factory: &ErrorFactory, panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_owned());

    tracing::error!(panic = %detail, "handler panicked");

    ErrorResponse(factory.internal_server_error(None, None, None)).into_response()
}
