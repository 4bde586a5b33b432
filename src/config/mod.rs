//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file + ambient environment
//!     → env.rs (snapshot; ambient values win over file values)
//!     → validation.rs (required keys, placeholder secrets, URI scheme)
//!     → schema.rs (typed AppConfig with defaults, immutable)
//!     → consumed by the startup sequencer and HTTP server
//! ```
//!
//! # Design Decisions
//! - The environment is read once at startup and never mutated after
//! - Validation separates diagnosis (pure function) from policy (the
//!   sequencer logs and the binary exits)
//! - Empty variables are equivalent to unset ones everywhere

pub mod env;
pub mod schema;
pub mod validation;

pub use env::Environment;
pub use schema::AppConfig;
pub use validation::{ValidationError, ValidationReport};
