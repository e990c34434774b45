//! Tracing configuration
//!
//! Installs the global `tracing-subscriber` registry: an env-filter, a
//! non-blocking daily rolling file layer in the logs directory, and a stderr
//! layer in development builds. Stdout belongs to the console UI.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "onehousing.log";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("ohp_app={level}"),
        format!("ohp_infra={level}"),
        // Per-event traces from the state machine are only wanted on request.
        "ohp_core=info".to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// Respects `RUST_LOG`; otherwise debug in development and info in release.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: &Path) -> anyhow::Result<()> {
    let is_dev = is_development();

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let file_layer = match build_file_writer(logs_dir) {
        Ok(writer) => Some(
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                ))
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        ),
        Err(err) => {
            eprintln!("Failed to initialize file logging: {err}");
            None
        }
    };

    let stderr_layer = is_dev.then(|| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new("%H:%M:%S%.3f".to_string()))
            .with_target(true)
            .with_writer(io::stderr)
    });

    registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
