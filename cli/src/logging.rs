//! Operational log setup

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// `RUST_LOG` wins; otherwise the `-v` count picks the level.
fn filter_for(verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the console subscriber, plus a daily-rolling file when
/// `log_dir` is given.
///
/// The returned guard must be held until exit so buffered file lines flush.
pub fn init(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::Layer::new().with_target(false);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter_for(verbose))
            .with(console_layer)
            .try_init()
            .context("Failed to install log subscriber")?;
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(dir, "dual-ai.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter_for(verbose))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(Some(guard))
}
