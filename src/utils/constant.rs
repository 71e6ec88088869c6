//! # Application Constants
//!
//! This module defines configuration constants used throughout the CloudShop backend.
//! These constants control the listener address, the connect retry loop and the
//! fixed texts of the HTTP responses.

use std::time::Duration;

/// Address the HTTP server binds to (all interfaces, port 8080)
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Number of connection attempts made per `/api` request
pub const CONNECT_ATTEMPTS: u32 = 5;

/// Fixed pause after each failed connection attempt
pub const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Wall-clock bound on the whole retry loop of one request
///
/// Equal to the time five fast failures take with their pauses, so a hung
/// attempt cannot hold a request longer than a plain failure does.
pub const CONNECT_DEADLINE: Duration = Duration::from_secs(10);

/// Port used when `MYSQL_PORT` is not set
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Body of the liveness endpoint
pub const LIVENESS_BODY: &str = "Backend is running!";

/// Constant `message` field of the `/api` response
pub const API_MESSAGE: &str = "CloudShop API v1";

/// `db_status` reported when a connection was established
pub const DB_STATUS_CONNECTED: &str = "Succès : Connecté à MySQL !";

/// `db_status` reported when every attempt failed
pub const DB_STATUS_UNREACHABLE: &str = "Erreur : Impossible de joindre MySQL.";
