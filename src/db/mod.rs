//! Database connection establishment.
//!
//! # Responsibilities
//! - Parse the connection URI into driver options
//! - Construct the client and verify it can actually reach the server
//!
//! # Design Decisions
//! - The driver connects lazily, so a `ping` runs at startup to surface
//!   connection failures before the listener binds
//! - No retries and no deadline beyond the driver's own; failure is fatal

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use thiserror::Error;

/// Error type for connection establishment.
#[derive(Debug, Error)]
pub enum DbError {
    /// The URI could not be parsed into client options.
    #[error("invalid connection options: {0}")]
    Options(#[source] mongodb::error::Error),

    /// The server was unreachable or rejected the connection.
    #[error("connection check failed: {0}")]
    Ping(#[source] mongodb::error::Error),
}

/// Connect to the database and confirm the server responds.
pub async fn connect(uri: &str) -> Result<Client, DbError> {
    let options = ClientOptions::parse(uri).await.map_err(DbError::Options)?;
    let client = Client::with_options(options).map_err(DbError::Options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(DbError::Ping)?;

    tracing::info!("database connection established");
    Ok(client)
}
