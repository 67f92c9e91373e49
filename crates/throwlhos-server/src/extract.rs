use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::request::Parts;
use throwlhos_core::{ErrorDescriptor, ErrorFactory, HttpStatus};

use crate::ErrorResponse;

/// Extractor for the request's [`ErrorFactory`]
///
/// ```ignore
/// async fn show(throw: Throw, Path(id): Path<u64>) -> Result<Json<Item>, ErrorResponse> {
///     let item = find(id).ok_or_else(|| throw.not_found(Some("no such item"), None, None))?;
///     Ok(Json(item))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Throw(pub ErrorFactory);

impl Deref for Throw {
    type Target = ErrorFactory;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Throw
where
    S: Send + Sync,
{
    type Rejection = MissingFactory;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<ErrorFactory>().cloned().map(Self).ok_or(MissingFactory)
    }
}

/// Rejection for routes mounted without the throwlhos middleware
#[derive(Debug, Clone, Copy)]
pub struct MissingFactory;

impl IntoResponse for MissingFactory {
    fn into_response(self) -> Response {
        tracing::error!("error factory requested on a route without the throwlhos middleware");

        let entry = HttpStatus::InternalServerError.entry();
        let descriptor = ErrorDescriptor {
            code: i64::from(entry.code),
            status: entry.name.to_owned(),
            message: entry.default_text.to_owned(),
            errors: None,
            i18n: None,
        };

        ErrorResponse(descriptor).into_response()
    }
}
