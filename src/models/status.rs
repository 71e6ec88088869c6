use serde::Serialize;

use crate::utils::constant::{API_MESSAGE, DB_STATUS_CONNECTED, DB_STATUS_UNREACHABLE};

/// Body of `GET /api`.
///
/// Always serialized with exactly these three keys; `node` becomes `null`
/// when `MY_NODE_NAME` is unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiStatus {
    pub message: String,
    pub db_status: String,
    pub node: Option<String>,
}

impl ApiStatus {
    pub fn new(connected: bool, node: Option<String>) -> Self {
        let db_status = if connected {
            DB_STATUS_CONNECTED
        } else {
            DB_STATUS_UNREACHABLE
        };

        Self {
            message: API_MESSAGE.to_string(),
            db_status: db_status.to_string(),
            node,
        }
    }
}
