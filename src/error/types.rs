//! Error types
//!
//! Defines domain-specific error types for the application and the submit path.

use std::io;
use thiserror::Error;

/// Failures of a single form submission round-trip.
///
/// None of these reach the user verbatim; they collapse into one generic
/// message in the form state.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint answered with HTTP {0}")]
    Status(u16),

    #[error("response body is not a form response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that end a `serve` or `submit` run: bad configuration, or a
/// server that cannot bind or keeps failing I/O.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
