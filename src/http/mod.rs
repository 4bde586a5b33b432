//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, CORS, request tracing)
//!     → application routes (healthcheck here; the rest mounted elsewhere)
//! ```

pub mod server;

pub use server::ApiServer;
