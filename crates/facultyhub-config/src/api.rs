//! Backend API configuration.
//!
//! # Environment Variables
//!
//! - `FACULTYHUB_API_URL`: backend origin (default: `http://localhost:8000`)
//! - `FACULTYHUB_API_PREFIX`: path prefix of the academic API (default: `/api/academic`)
//! - `FACULTYHUB_API_TOKEN`: bearer token for the session (optional)
//! - `FACULTYHUB_TIMEOUT_SECS`: per-request timeout in seconds (default: `30`)

use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_PREFIX: &str = "/api/academic";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,

    /// Prefix prepended to every academic endpoint path.
    pub api_prefix: String,

    /// Bearer token, if the session already has one.
    pub token: Option<String>,

    pub timeout: Duration,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_prefix", &self.api_prefix)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let timeout_secs = match env::var("FACULTYHUB_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid FACULTYHUB_TIMEOUT_SECS, using default");
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Self {
            base_url: normalize_base_url(
                &env::var("FACULTYHUB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            ),
            api_prefix: normalize_prefix(
                &env::var("FACULTYHUB_API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.into()),
            ),
            token: env::var("FACULTYHUB_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Config pointing at `base_url` with default prefix and timeout.
    pub fn for_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Full URL of an academic endpoint, e.g. `endpoint("levels/")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            self.api_prefix,
            path.trim_start_matches('/')
        )
    }

    /// Full URL of a path outside the academic prefix, e.g. `/api/auth/profile/`.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_prefix: DEFAULT_API_PREFIX.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
