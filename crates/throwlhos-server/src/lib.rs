mod extract;
mod middleware;
mod response;
mod routes;

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use throwlhos_config::Config;
use throwlhos_core::{ErrorFactory, ThrowerTable};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use extract::{MissingFactory, Throw};
pub use middleware::{install, throwlhos_middleware, with_throwlhos};
pub use response::{ErrorResponse, panic_response};
pub use routes::{catalog_router, health_handler};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the thrower table cannot be built from the
    /// status catalog
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_routes(config, Router::new())
    }

    /// Build the server around application routes
    ///
    /// `app_routes` get the same middleware as the built-in endpoints, so their
    /// handlers can extract [`Throw`].
    ///
    /// # Errors
    ///
    /// Returns an error if the thrower table cannot be built from the
    /// status catalog
    pub fn with_routes(config: &Config, app_routes: Router) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        // A name collision here aborts startup
        let table = Arc::new(ThrowerTable::from_catalog()?);
        let factory = ErrorFactory::from_table(Arc::clone(&table));

        let mut app = app_routes;

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(routes::health_handler));
        }

        // Catalog listing
        if config.server.catalog.enabled {
            app = app.merge(routes::catalog_router(&config.server.catalog.path));
        }

        // Apply middleware layers (innermost first)

        // Error factory (innermost, installed before any handler runs)
        app = with_throwlhos(app, table);

        // Panics become INTERNAL_SERVER_ERROR descriptors
        app = app.layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            response::panic_response(&factory, panic)
        }));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
