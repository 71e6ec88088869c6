use std::sync::Arc;

use tracing::info;

use crate::models::Config;
use crate::services::connector::{DbConnector, MySqlConnector, RetryPolicy};

/// Application state shared across requests. Immutable once built.
pub struct AppState {
    /// Connector used by `/api` to check the database.
    pub connector: Arc<dyn DbConnector>,
    /// Retry loop constants.
    pub retry_policy: RetryPolicy,
    /// Node identity echoed in `/api` responses.
    pub node_name: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided connector.
    ///
    /// # Arguments
    ///
    /// * `connector` - Service used to open database connections
    /// * `retry_policy` - Attempts, delay and per-attempt timeout
    /// * `node_name` - Value of `MY_NODE_NAME`
    pub fn new(
        connector: Arc<dyn DbConnector>,
        retry_policy: RetryPolicy,
        node_name: Option<String>,
    ) -> Self {
        info!(?retry_policy, ?node_name, "Initializing application state");

        Self {
            connector,
            retry_policy,
            node_name,
        }
    }

    /// Builds the production state: a MySQL connector and the default policy.
    pub fn from_config(config: Config) -> Self {
        let Config { db, node_name } = config;
        Self::new(
            Arc::new(MySqlConnector::new(db)),
            RetryPolicy::default(),
            node_name,
        )
    }
}
