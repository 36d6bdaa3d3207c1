//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the echo route
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Serve HTTP/1.1 and cleartext HTTP/2 (prior knowledge) on a bound listener
//! - Drain in-flight requests on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::EchoConfig;
use crate::http::echo::{echo_handler, EchoSettings};
use crate::http::request::{request_id_of, X_REQUEST_ID};

/// HTTP server exposing the echo endpoint.
pub struct EchoServer {
    router: Router,
    config: EchoConfig,
}

impl EchoServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Only POST, PUT and PATCH are routed; axum answers other methods on the
    /// path with 405 and unknown paths with 404.
    #[allow(deprecated)]
    fn build_router(config: &EchoConfig) -> Router {
        let settings = Arc::new(EchoSettings::from(&config.echo));

        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id_of(request.headers()),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )));

        Router::new()
            .route(
                &config.echo.path,
                post(echo_handler).put(echo_handler).patch(echo_handler),
            )
            .with_state(settings)
            .layer(DefaultBodyLimit::disable())
            .layer(middleware)
    }

    /// A clone of the router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on the given listener until `shutdown` fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            path = %self.config.echo.path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
