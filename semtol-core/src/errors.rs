//! errors.rs - Custom error types for the semtol-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! The laws themselves never fail; errors only arise while loading and
//! validating configuration or serializing reports.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `semtol-core` library.
///
/// `#[non_exhaustive]` leaves room for new variants without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SemtolError {
    #[error("Invalid value for '{name}' ({value}): {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Failed to parse law configuration: {0}")]
    ConfigParse(String),

    #[error("Failed to serialize assessment: {0}")]
    Serialization(#[from] serde_json::Error),
}
