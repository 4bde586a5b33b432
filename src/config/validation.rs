//! Environment validation.
//!
//! # Responsibilities
//! - Check that every required variable is present and non-empty
//! - Collect missing optional variables as non-fatal advisories
//! - Reject placeholder secrets left over from .env.example
//! - Reject database URIs with an unrecognized scheme
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: Environment → Result<report, errors>;
//!   logging and process termination belong to the caller
//! - Value checks only run on values that are present, so a missing key is
//!   reported exactly once and never dereferenced

use thiserror::Error;

use crate::config::env::Environment;

/// Variables whose absence is fatal.
pub const REQUIRED_VARS: [&str; 5] = [
    "MONGODB_URI",
    "ACCESS_TOKEN_SECRET",
    "REFRESH_TOKEN_SECRET",
    "ACCESS_TOKEN_EXPIRY",
    "REFRESH_TOKEN_EXPIRY",
];

/// Variables with documented defaults; absence only warns.
pub const OPTIONAL_VARS: [&str; 7] = [
    "PORT",
    "CORS_ORIGIN",
    "CLIENT_SSR_BASE_URL",
    "SMTP_HOST",
    "SMTP_PORT",
    "SMTP_USER",
    "SMTP_PASS",
];

/// Marker substring of the secrets shipped in .env.example.
pub const PLACEHOLDER_MARKER: &str = "your_super_secret";

/// Accepted database connection scheme prefixes.
pub const ACCEPTED_URI_PREFIXES: [&str; 2] = ["mongodb://", "mongodb+srv://"];

/// A fatal configuration problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required variables are absent or empty.
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    /// A token secret still carries the .env.example placeholder value.
    #[error("{0} is still set to the placeholder value from .env.example")]
    PlaceholderSecret(&'static str),

    /// The database URI does not start with a recognized scheme.
    #[error("Invalid MONGODB_URI format: must start with mongodb:// or mongodb+srv://")]
    InvalidDatabaseUri,
}

/// Outcome of a successful validation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Optional variables that were absent; defaults apply.
    pub missing_optional: Vec<&'static str>,
}

/// Validate the environment, returning every problem found.
pub fn validate(env: &Environment) -> Result<ValidationReport, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let missing: Vec<String> = REQUIRED_VARS
        .iter()
        .filter(|key| env.get(key).is_none())
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        errors.push(ValidationError::MissingRequired(missing));
    }

    for key in ["ACCESS_TOKEN_SECRET", "REFRESH_TOKEN_SECRET"] {
        if let Some(secret) = env.get(key) {
            if secret.contains(PLACEHOLDER_MARKER) {
                errors.push(ValidationError::PlaceholderSecret(key));
            }
        }
    }

    if let Some(uri) = env.get("MONGODB_URI") {
        if !ACCEPTED_URI_PREFIXES.iter().any(|p| uri.starts_with(p)) {
            errors.push(ValidationError::InvalidDatabaseUri);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidationReport {
        missing_optional: OPTIONAL_VARS
            .iter()
            .filter(|key| env.get(key).is_none())
            .copied()
            .collect(),
    })
}
