use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::Extensions;
use throwlhos_core::{ErrorFactory, ThrowerTable};

/// Attach an [`ErrorFactory`] to a request's extensions
///
/// Replaces any factory already present, so installing twice leaves the
/// same capability behind as installing once.
pub fn install(extensions: &mut Extensions, table: &Arc<ThrowerTable>) {
    extensions.insert(ErrorFactory::from_table(Arc::clone(table)));
}

/// Middleware that hands every request its error factory
///
/// Installation completes before `next` runs, and `next` always runs exactly
/// once.
pub async fn throwlhos_middleware(table: Arc<ThrowerTable>, mut request: Request, next: Next) -> Response {
    install(request.extensions_mut(), &table);
    next.run(request).await
}

/// Layer [`throwlhos_middleware`] onto a router
pub fn with_throwlhos<S>(router: Router<S>, table: Arc<ThrowerTable>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(axum::middleware::from_fn(move |request, next| {
        let table = Arc::clone(&table);
        async move { throwlhos_middleware(table, request, next).await }
    }))
}
