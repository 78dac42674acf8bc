//! Logging configuration.
//!
//! # Environment Variables
//!
//! - `FACULTYHUB_LOG_DIR`: directory for rolling JSON log files (file logging is off when unset)
//! - `RUST_LOG`: standard filter override, read by the subscriber itself

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            log_dir: env::var("FACULTYHUB_LOG_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Default filter directive when `RUST_LOG` is not set.
    pub fn default_filter(crate_name: &str) -> String {
        format!("{}=info,reqwest=warn,hyper=warn", crate_name)
    }
}
