use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{ErrorResponse, Throw};

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// One row of the catalog listing
#[derive(Debug, Serialize)]
struct CatalogItem {
    thrower: String,
    code: u16,
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, Deserialize)]
struct ThrowQuery {
    message: Option<String>,
}

/// Routes exposing the thrower table
///
/// `GET {path}` lists every thrower; `GET {path}/{thrower}` responds with
/// the named thrower's descriptor.
pub fn catalog_router(path: &str) -> Router {
    let base = path.trim_end_matches('/');

    Router::new()
        .route(path, get(list_throwers))
        .route(&format!("{base}/{{thrower}}"), get(throw_named))
}

async fn list_throwers(throw: Throw) -> Json<Vec<CatalogItem>> {
    let items = throw
        .table()
        .iter()
        .map(|(name, thrower)| {
            let entry = thrower.entry();
            CatalogItem {
                thrower: name.to_owned(),
                code: entry.code,
                status: entry.name,
                message: entry.default_text,
            }
        })
        .collect();

    Json(items)
}

async fn throw_named(throw: Throw, Path(name): Path<String>, Query(query): Query<ThrowQuery>) -> ErrorResponse {
    if let Some(thrower) = throw.thrower(&name) {
        return thrower.call(query.message.as_deref(), None, None).into();
    }

    tracing::debug!(thrower = %name, "unknown thrower requested");

    throw
        .not_found(Some("Unknown thrower"), Some(json!({ "thrower": name })), None)
        .into()
}
