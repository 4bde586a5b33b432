//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the healthcheck handler
//! - Wire up middleware (CORS, request tracing)
//! - Serve on a bound listener until shutdown
//!
//! Request handling beyond the healthcheck belongs to the application
//! routes mounted elsewhere; this module only owns the server shell.

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::schema::DEFAULT_CORS_ORIGIN;
use crate::config::AppConfig;
use crate::lifecycle::shutdown::shutdown_signal;

/// HTTP server for the API application.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Create a new server from the validated configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            router: build_router(config),
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            healthcheck = "/api/v1/healthcheck",
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
fn build_router(config: &AppConfig) -> Router {
    Router::new()
        .route("/api/v1/healthcheck", get(healthcheck))
        .layer(cors_layer(&config.cors_origin))
        .layer(TraceLayer::new_for_http())
}

/// CORS restricted to the configured origin.
fn cors_layer(origin: &str) -> CorsLayer {
    let origin_value = HeaderValue::from_str(origin).unwrap_or_else(|_| {
        tracing::warn!(
            origin = origin,
            "CORS_ORIGIN is not a valid header value, using default"
        );
        HeaderValue::from_static(DEFAULT_CORS_ORIGIN)
    });

    CorsLayer::new()
        .allow_origin(origin_value)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn healthcheck() -> Json<Health> {
    Json(Health { status: "ok" })
}
