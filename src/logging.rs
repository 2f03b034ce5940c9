use crate::config::{AppConfig, Rotation};
use crate::emit::STEP_TARGET;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation as FileRotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive derived from config (used when `RUST_LOG` is unset)
pub fn filter_directive(config: &AppConfig) -> String {
    if config.enable_tracing {
        config.log_level.clone()
    } else {
        format!("{},{}=off", config.log_level, STEP_TARGET)
    }
}

pub fn file_rotation(rotation: Rotation) -> FileRotation {
    match rotation {
        Rotation::Never => FileRotation::NEVER,
        Rotation::Hourly => FileRotation::HOURLY,
        Rotation::Daily => FileRotation::DAILY,
    }
}

/// Install the global subscriber. Diagnostics go to stderr and, when
/// `log_dir` is set, to a rolling file. stdout carries the sequence only.
///
/// The returned guard must outlive all logging. A subscriber that is
/// already installed is left in place. If the log file cannot be opened,
/// logging continues on stderr only.
pub fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(false);
    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    let Some(log_dir) = config.log_dir.as_deref() else {
        let _ = registry.try_init();
        return None;
    };

    let file_appender = match RollingFileAppender::builder()
        .rotation(file_rotation(config.rotation))
        .filename_prefix(config.log_file.as_str())
        .build(log_dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            let _ = registry.try_init();
            tracing::warn!(log_dir, error = %e, "File logging disabled");
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let _ = if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true) // Keep target in JSON for structured queries
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).try_init()
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).try_init()
    };

    Some(guard)
}
