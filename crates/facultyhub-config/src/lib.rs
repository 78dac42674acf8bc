//! # FacultyHub Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`api`]: backend location, API prefix, bearer token and request timeout
//! - [`logging`]: log file directory and default filter
//!
//! # Example
//!
//! ```ignore
//! use facultyhub_config::{ApiConfig, LogConfig};
//!
//! dotenvy::dotenv().ok();
//! let api_config = ApiConfig::from_env();
//! let log_config = LogConfig::from_env();
//! ```

pub mod api;
pub mod logging;

pub use api::ApiConfig;
pub use logging::LogConfig;
