//! # Error Types
//!
//! Errors raised while starting the server and connecting to the database.
//! None of them reach an HTTP client: connection failures are recovered by
//! the retry loop and reported in-band.

use std::time::Duration;

use thiserror::Error;

/// Failure of a single database connection attempt.
///
/// All variants are treated identically by the retry loop.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("missing database setting: {0}")]
    MissingSetting(&'static str),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("connection deadline of {0:?} exceeded")]
    Timeout(Duration),
}

/// Errors that abort process startup.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
