//! Server entry point.
//!
//! Startup is strictly sequential: load the .env file, validate the
//! environment, connect to the database, then bind the listener. Any
//! failure along the way is logged and the process exits non-zero.

use teamspace_api::lifecycle::{startup, Phase};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teamspace_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("teamspace-api v0.1.0 starting");

    if let Err(error) = startup::run().await {
        tracing::error!(phase = %Phase::Failed, %error, "startup failed");
        std::process::exit(1);
    }
}
