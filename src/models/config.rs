use std::env;

use secrecy::SecretString;
use tracing::{debug, warn};

use crate::utils::constant::DEFAULT_MYSQL_PORT;
use crate::utils::secret::get_secret;

/// Settings used to open a MySQL connection.
///
/// Host, user, password and database are optional here: a missing value is
/// not a startup error, it makes every connection attempt fail instead.
#[derive(Debug)]
pub struct DbSettings {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<SecretString>,
    pub database: Option<String>,
}

/// Process-wide configuration, read once at startup.
#[derive(Debug)]
pub struct Config {
    pub db: DbSettings,
    /// Value of `MY_NODE_NAME`, echoed verbatim in `/api` responses.
    pub node_name: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// # Environment Variables
    ///
    /// - `MYSQL_HOST`, `MYSQL_USER`, `MYSQL_DATABASE` - connection target
    /// - `MYSQL_PASSWORD_FILE` / `MYSQL_PASSWORD` - password, file first
    /// - `MYSQL_PORT` - bare port or `tcp://host:port`, defaults to 3306
    /// - `MY_NODE_NAME` - node identity, passed through verbatim
    ///
    /// Never fails: unusable values are logged and replaced by defaults.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("MYSQL_PORT") {
            Some(value) => parse_port(&value).unwrap_or_else(|| {
                warn!(
                    %value,
                    default = DEFAULT_MYSQL_PORT,
                    "Ignoring unusable `MYSQL_PORT`, using default port"
                );
                DEFAULT_MYSQL_PORT
            }),
            None => DEFAULT_MYSQL_PORT,
        };

        let db = DbSettings {
            host: lookup("MYSQL_HOST"),
            port,
            user: lookup("MYSQL_USER"),
            password: get_secret(&lookup, "MYSQL_PASSWORD_FILE", "MYSQL_PASSWORD")
                .map(SecretString::from),
            database: lookup("MYSQL_DATABASE"),
        };

        for (var, missing) in [
            ("MYSQL_HOST", db.host.is_none()),
            ("MYSQL_USER", db.user.is_none()),
            ("MYSQL_PASSWORD", db.password.is_none()),
            ("MYSQL_DATABASE", db.database.is_none()),
        ] {
            if missing {
                warn!(var, "Database setting is not set, connection attempts will fail");
            }
        }

        let node_name = lookup("MY_NODE_NAME");
        debug!(?node_name, host = ?db.host, port, "Configuration loaded");

        Self { db, node_name }
    }
}

/// Accepts a bare port (`3307`) or the `tcp://10.96.0.12:3306` form that
/// Kubernetes service links inject for a Service named `mysql`.
fn parse_port(value: &str) -> Option<u16> {
    let value = value.trim();
    let port = match value.strip_prefix("tcp://") {
        Some(addr) => addr.rsplit_once(':')?.1,
        None => value,
    };
    port.parse().ok()
}
