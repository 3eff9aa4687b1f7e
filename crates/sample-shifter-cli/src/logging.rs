use sample_shifter_core::AppConfig;
use std::env;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";
const DEFAULT_LOG_FILE: &str = "./logs/sample-shifter.log";

/// Console output belongs to the reports, so stderr only carries warnings
/// unless `TRACING_LEVEL` or the settings ask for more.
pub fn init_logger(settings: &AppConfig) -> impl Drop {
    let filter = env::var("TRACING_LEVEL")
        .ok()
        .or_else(|| settings.log_level.clone())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());
    let filter_layer = EnvFilter::new(filter);

    let log_file_path = env::var("LOG_FILE_PATH")
        .ok()
        .or_else(|| settings.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    let log_file_path = Path::new(&log_file_path);
    let directory = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file_path
        .file_name()
        .unwrap_or_else(|| "sample-shifter.log".as_ref());

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .with_ansi(true),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .with(filter_layer)
        .init();

    debug!("Tracing is configured for stderr and {}", log_file_path.display());

    guard
}
