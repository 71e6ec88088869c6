//! # Database Connector
//!
//! This module opens database connections with a bounded retry loop.
//! The connector trait allows for easy testing and switching between the real
//! MySQL client and mock implementations.
//!
//! ## Implementations
//!
//! - [`MySqlConnector`] - Production implementation opening a single `sqlx` MySQL connection
//!
//! ## Retry Loop
//!
//! [`acquire`] makes up to [`RetryPolicy::max_attempts`] attempts, pausing for a
//! fixed [`RetryPolicy::delay`] after each failure, within an overall
//! [`RetryPolicy::deadline`]. Every kind of failure is retried the same way, and
//! the loop never returns an error: exhausting the attempts or the deadline
//! yields [`Acquired::Unavailable`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::{
    Connection,
    mysql::{MySqlConnectOptions, MySqlConnection},
};
use tokio::time::{sleep, timeout};
use tracing::{debug, info, instrument, warn};

use crate::error::ConnectError;
use crate::models::DbSettings;
use crate::utils::constant::{CONNECT_ATTEMPTS, CONNECT_DEADLINE, CONNECT_RETRY_DELAY};

/// An open database connection that must be released with [`DbHandle::close`].
#[async_trait]
pub trait DbHandle: Send {
    /// Closes the connection, consuming the handle.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::Database`] if the connection could not be shut
    /// down cleanly. The handle is gone either way.
    async fn close(self: Box<Self>) -> Result<(), ConnectError>;
}

/// Trait for services able to open a database connection.
#[async_trait]
pub trait DbConnector: Send + Sync {
    /// Makes a single connection attempt.
    ///
    /// # Errors
    ///
    /// Returns any [`ConnectError`]; callers do not distinguish between them.
    async fn connect(&self) -> Result<Box<dyn DbHandle>, ConnectError>;
}

/// Constants of the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts. `0` is treated as `1`.
    pub max_attempts: u32,
    /// Pause after each failed attempt, the last one included.
    pub delay: Duration,
    /// Wall-clock bound on the whole loop, attempts and pauses together.
    pub deadline: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: CONNECT_ATTEMPTS,
            delay: CONNECT_RETRY_DELAY,
            deadline: CONNECT_DEADLINE,
        }
    }
}

/// Outcome of [`acquire`].
pub enum Acquired {
    /// A connection was opened; the caller owns it and must close it.
    Connected(Box<dyn DbHandle>),
    /// No connection was obtained.
    Unavailable {
        attempts: u32,
        last_error: ConnectError,
    },
}

impl Acquired {
    pub fn is_connected(&self) -> bool {
        matches!(self, Acquired::Connected(_))
    }
}

impl fmt::Debug for Acquired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acquired::Connected(_) => f.write_str("Connected"),
            Acquired::Unavailable {
                attempts,
                last_error,
            } => f
                .debug_struct("Unavailable")
                .field("attempts", attempts)
                .field("last_error", last_error)
                .finish(),
        }
    }
}

/// Opens a connection, retrying with a fixed delay.
///
/// Returns as soon as one attempt succeeds. Each failed attempt is logged
/// with its error and followed by a pause. Once [`RetryPolicy::deadline`]
/// has elapsed the loop is abandoned, whatever attempt or pause is running,
/// and the outcome carries [`ConnectError::Timeout`].
#[instrument(skip_all, fields(max_attempts = policy.max_attempts))]
pub async fn acquire(connector: &dyn DbConnector, policy: &RetryPolicy) -> Acquired {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempts = 0;

    let retry_loop = async {
        loop {
            attempts += 1;
            let attempt = attempts;
            debug!(attempt, "Attempting database connection");

            match connector.connect().await {
                Ok(handle) => {
                    info!(attempt, "Database connection established");
                    return Ok(handle);
                }
                Err(e) => {
                    let remaining = max_attempts - attempt;
                    warn!(attempt, remaining, error = %e, "Database connection attempt failed");
                    sleep(policy.delay).await;

                    if remaining == 0 {
                        return Err(e);
                    }
                }
            }
        }
    };

    let result = timeout(policy.deadline, retry_loop)
        .await
        .unwrap_or_else(|_| {
            warn!(deadline = ?policy.deadline, "Database connection deadline exceeded");
            Err(ConnectError::Timeout(policy.deadline))
        });

    match result {
        Ok(handle) => Acquired::Connected(handle),
        Err(last_error) => {
            warn!(attempts, error = %last_error, "Giving up on database connection");
            Acquired::Unavailable {
                attempts,
                last_error,
            }
        }
    }
}

/// Production connector backed by a single `sqlx` MySQL connection per attempt.
pub struct MySqlConnector {
    settings: DbSettings,
}

impl MySqlConnector {
    pub fn new(settings: DbSettings) -> Self {
        info!(
            host = ?settings.host,
            port = settings.port,
            database = ?settings.database,
            "Initializing MySQL connector"
        );
        Self { settings }
    }

    /// Builds connect options, failing on the first missing setting.
    fn connect_options(&self) -> Result<MySqlConnectOptions, ConnectError> {
        let s = &self.settings;
        let host = s
            .host
            .as_deref()
            .ok_or(ConnectError::MissingSetting("MYSQL_HOST"))?;
        let user = s
            .user
            .as_deref()
            .ok_or(ConnectError::MissingSetting("MYSQL_USER"))?;
        let password = s
            .password
            .as_ref()
            .ok_or(ConnectError::MissingSetting("MYSQL_PASSWORD"))?;
        let database = s
            .database
            .as_deref()
            .ok_or(ConnectError::MissingSetting("MYSQL_DATABASE"))?;

        Ok(MySqlConnectOptions::new()
            .host(host)
            .port(s.port)
            .username(user)
            .password(password.expose_secret())
            .database(database))
    }
}

#[async_trait]
impl DbConnector for MySqlConnector {
    async fn connect(&self) -> Result<Box<dyn DbHandle>, ConnectError> {
        let options = self.connect_options()?;
        let conn = MySqlConnection::connect_with(&options).await?;
        Ok(Box::new(MySqlHandle { conn }))
    }
}

/// Handle wrapping an open MySQL connection.
struct MySqlHandle {
    conn: MySqlConnection,
}

#[async_trait]
impl DbHandle for MySqlHandle {
    async fn close(self: Box<Self>) -> Result<(), ConnectError> {
        self.conn.close().await?;
        debug!("Database connection closed");
        Ok(())
    }
}
