/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Crate level errors.
//!
//! Per-request failures are not errors of the crate: they travel as
//! [`crate::model::outcome::Rejection`] values. `AppError` covers building the
//! client, the shared instance and the collaborators that touch the filesystem.

use std::fmt;
use std::io;

/// Main error type of the library
#[derive(Debug)]
pub enum AppError {
    /// The underlying HTTP client could not be built
    Network(reqwest::Error),
    /// Filesystem error (file backed local storage)
    Io(io::Error),
    /// JSON encoding or decoding error
    Json(serde_json::Error),
    /// A configuration value or argument is not acceptable
    InvalidInput(String),
    /// The shared client was installed twice
    AlreadyInitialized,
    /// The shared client was requested before being installed
    NotInitialized,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::AlreadyInitialized => write!(f, "shared client already initialized"),
            AppError::NotInitialized => write!(f, "shared client not initialized"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
