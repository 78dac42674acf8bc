use std::fs;
use std::io;

use facultyhub_config::LogConfig;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: a compact console layer filtered by `RUST_LOG`,
/// plus a daily rolling JSON file when a log directory is configured.
pub fn init_tracing(config: &LogConfig) -> io::Result<()> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LogConfig::default_filter(env!("CARGO_CRATE_NAME"))));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_filter(console_filter);

    // Daily JSON file, only when a directory is configured
    let json_layer = match &config.log_dir {
        Some(log_dir) => {
            fs::create_dir_all(log_dir)?;
            let json_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "facultyhub.json");
            Some(
                fmt::layer()
                    .json()
                    .with_writer(json_appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new(LogConfig::default_filter(env!(
                        "CARGO_CRATE_NAME"
                    )))),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();

    if let Some(log_dir) = &config.log_dir {
        info!(log_dir = %log_dir.display(), "File logging enabled");
    }
    Ok(())
}
