//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load .env → Validate → Connect database → Log summary → Listen
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → stop accepting → exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then database, listener last
//! - Any startup failure is terminal; the binary maps it to exit code 1

pub mod shutdown;
pub mod startup;

pub use startup::{Phase, StartupError};
