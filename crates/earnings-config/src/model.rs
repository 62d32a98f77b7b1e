use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf};

use crate::ConfigError;

pub const ENV_BIND: &str = "EARNINGS_BIND";
pub const ENV_DATABASE: &str = "EARNINGS_DATABASE";
pub const ENV_LOG: &str = "EARNINGS_LOG";

const DATABASE_FILE: &str = "earnings.db";

/// Settings for the earnings server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_bind_address")]
    pub bind_address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Location of the SQLite file. Defaults to `<data dir>/earnings/earnings.db`.
    pub database_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Extra `tracing` filter directive, e.g. `earnings_core=debug`.
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: Self::default_bind_address(),
            database_path: None,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn default_bind_address() -> String {
        "127.0.0.1:5000".into()
    }

    pub fn resolve_database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }

        dirs::data_dir()
            .map(|base| base.join("earnings"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATABASE_FILE)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address
            .trim()
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::Invalid {
                key: "bind_address",
                message: err.to_string(),
            })
    }

    /// Applies `EARNINGS_*` environment variables on top of the loaded values.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let present = |key: &str| lookup(key).filter(|value: &String| !value.trim().is_empty());
        if let Some(bind) = present(ENV_BIND) {
            self.bind_address = bind;
        }
        if let Some(path) = present(ENV_DATABASE) {
            self.database_path = Some(PathBuf::from(path));
        }
        if let Some(filter) = present(ENV_LOG) {
            self.log_filter = Some(filter);
        }
    }
}
