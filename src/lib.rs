//! Teamspace API server startup harness.
//!
//! Loads configuration from the environment (with .env defaults),
//! validates it, connects to MongoDB, and serves the HTTP application.

pub mod config;
pub mod db;
pub mod http;
pub mod lifecycle;

pub use config::{AppConfig, Environment};
pub use http::ApiServer;
pub use lifecycle::{Phase, StartupError};
