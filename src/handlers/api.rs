use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{info, instrument, warn};

use crate::models::{ApiStatus, AppState};
use crate::services::connector::{Acquired, acquire};

/// Reports database connectivity and node identity.
///
/// GET /api
///
/// Opens a connection through the retry loop and closes it again before
/// responding. Database failures are reported in the `db_status` field,
/// never through the HTTP status.
///
/// # Returns
///
/// - `200 OK` with [`ApiStatus`] - in every case
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn api_status(State(state): State<Arc<AppState>>) -> Json<ApiStatus> {
    let connected = match acquire(state.connector.as_ref(), &state.retry_policy).await {
        Acquired::Connected(handle) => {
            if let Err(e) = handle.close().await {
                warn!(error = %e, "Failed to close database connection");
            }
            true
        }
        Acquired::Unavailable { attempts, .. } => {
            info!(attempts, "Database unreachable, reporting failure in-band");
            false
        }
    };

    Json(ApiStatus::new(connected, state.node_name.clone()))
}
