//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the .env file underneath the ambient environment
//! - Validate configuration before anything touches the network
//! - Connect to the database, then bind the listener
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, no retries
//! - Steps run in order, never concurrently; the listener starts last
//! - The database connector is injected so the sequence is testable
//!   without a running server

use std::fmt;
use std::future::Future;
use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::validation::ValidationError;
use crate::config::{AppConfig, Environment};
use crate::db::{self, DbError};
use crate::http::ApiServer;

/// Startup pipeline phase, attached to log events.
///
/// `idle → loading → validating → connecting → listening`, with `failed`
/// terminal on any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Validating,
    Connecting,
    Listening,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Validating => "validating",
            Phase::Connecting => "connecting",
            Phase::Listening => "listening",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Error type for the startup sequence.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Fatal configuration problems; each has already been logged.
    #[error("configuration validation failed")]
    Config(Vec<ValidationError>),

    /// The database was unreachable or rejected the connection.
    #[error("database connection failed: {0}")]
    Database(#[from] DbError),

    /// The listener port could not be bound.
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an error while serving.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Validate the environment and establish the database connection.
///
/// The connector receives the configured database URI. Nothing runs after
/// the validating phase when validation fails, and the connector's error
/// short-circuits before any listener exists.
pub async fn initialize<C, Fut, T>(
    env: &Environment,
    connect: C,
) -> Result<(AppConfig, T), StartupError>
where
    C: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, DbError>>,
{
    tracing::debug!(phase = %Phase::Validating, "checking environment variables");
    let (config, report) = AppConfig::from_env(env).map_err(|errors| {
        for error in &errors {
            tracing::error!(phase = %Phase::Validating, %error, "fatal configuration error");
        }
        tracing::error!(
            "check your .env file and ensure all required variables are set; \
             see .env.example for reference"
        );
        StartupError::Config(errors)
    })?;

    for key in &report.missing_optional {
        tracing::warn!(
            name = %key,
            "optional environment variable not set, default applies"
        );
    }
    tracing::info!("environment variables validation passed");

    tracing::info!(phase = %Phase::Connecting, "connecting to database");
    let handle = connect(config.database_uri.clone()).await.map_err(|e| {
        tracing::error!(phase = %Phase::Connecting, error = %e, "database connection failed");
        StartupError::Database(e)
    })?;

    config.log_startup_summary();
    Ok((config, handle))
}

/// Run the full startup sequence: load, validate, connect, listen.
pub async fn run() -> Result<(), StartupError> {
    tracing::debug!(phase = %Phase::Loading, "loading environment");
    let mut env = Environment::from_process();
    match env.merge_env_file(Path::new(".env")) {
        Ok(merged) if merged > 0 => {
            tracing::debug!(merged, "took defaults from .env");
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(error = %e, ".env file could not be parsed, ignoring it");
        }
    }

    run_with_env(env).await
}

/// Run the sequence against an already-loaded environment.
pub async fn run_with_env(env: Environment) -> Result<(), StartupError> {
    let (config, client) = initialize(&env, |uri| async move { db::connect(&uri).await }).await?;

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|source| StartupError::Bind {
            port: config.port,
            source,
        })?;

    tracing::info!(phase = %Phase::Listening, port = config.port, "startup complete");

    let server = ApiServer::new(&config);
    // The connection handle stays alive for as long as the server runs.
    let _client = client;
    server.run(listener).await.map_err(StartupError::Serve)
}
