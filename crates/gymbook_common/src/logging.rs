//! Logging utilities for the Gymbook service.
//!
//! All crates log through `tracing`; this module installs the subscriber once
//! at startup.

use gymbook_config::LoggingConfig;
use tracing::{error, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix of the rotated log files.
const LOG_FILE_PREFIX: &str = "gymbook.log";

/// Initialize the tracing subscriber at INFO level, stdout only.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level, stdout only.
pub fn init_with_level(level: Level) {
    let config = LoggingConfig {
        level: level.to_string(),
        directory: None,
    };
    // Without a directory there is no file writer and no guard to keep.
    let _ = init_with_config(&config);
}

/// Initialize the tracing subscriber from the logging section of the config.
///
/// `RUST_LOG` wins over `config.level` when set. If `config.directory` is set
/// a daily rotated file is written next to stdout; the returned guard must be
/// held for the life of the process or buffered lines are lost.
pub fn init_with_config(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // try_init: a subscriber may already be installed (tests, embedding)
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(file_layer)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", config.level);
    }
    guard
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
