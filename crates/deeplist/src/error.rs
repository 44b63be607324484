//! Error types.

use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Result type for deeplist operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
///
/// Navigation and tree edits never fail: indices are clamped instead. Errors
/// only come from the edges of the crate - painting to a terminal and loading
/// configuration.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("render: {0}")]
    /// Rendering failure.
    Render(String),
    #[error("config: {0}")]
    /// Configuration could not be read or parsed.
    Config(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Render(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
