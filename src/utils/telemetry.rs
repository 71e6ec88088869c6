//! # Logging Setup
//!
//! Installs the global `tracing` subscriber. Human-readable output is the
//! default; `LOG_FORMAT=json` switches to Bunyan-style JSON lines, which is
//! what log collectors in the cluster ingest.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "cloudshop=debug,tower_http=info";

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Reads the format from the value of `LOG_FORMAT`. Anything other than
    /// `json` (case-insensitive) selects [`LogFormat::Pretty`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Initializes the global subscriber. Must be called once, before the
/// first log line is emitted.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(
                    env!("CARGO_PKG_NAME").into(),
                    std::io::stdout,
                ))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
