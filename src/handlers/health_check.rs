//! # Liveness Handler
//!
//! Simple liveness endpoint for monitoring application availability.
//! This endpoint can be used by load balancers, Kubernetes liveness checks or
//! deployment tools to verify that the process is serving requests.

use tracing::{debug, instrument};

use crate::utils::constant::LIVENESS_BODY;

/// Liveness endpoint that returns a fixed plain-text body.
///
/// GET /
///
/// Performs no database checks; it succeeds whenever the server is up.
///
/// # Returns
///
/// Always returns `200 OK` with `Backend is running!`.
#[instrument]
pub async fn health_check() -> &'static str {
    debug!("Liveness endpoint accessed");
    LIVENESS_BODY
}
