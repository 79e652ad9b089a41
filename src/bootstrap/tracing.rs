//! Tracing configuration for FluentClip
//!
//! Log lines go to stderr so that `list`/`search` output on stdout stays
//! clean. The watcher daemon additionally writes `fluentclip.log` under the
//! logs directory unless `[logging] file_logging = false`.
//!
//! Format: `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`.
//! `RUST_LOG` overrides the default directives.

use std::{fs, io, path::Path};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

use crate::cli::Command;

const LOG_FILE_NAME: &str = "fluentclip.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogProfile {
    /// Long-running watcher (`run`).
    Daemon,
    /// Single command that prints its result and exits.
    OneShot,
}

impl LogProfile {
    pub fn for_command(command: &Command) -> Self {
        match command {
            Command::Run { .. } => Self::Daemon,
            _ => Self::OneShot,
        }
    }
}

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives.
///
/// One-shot commands only surface warnings so their stdout output is not
/// buried in startup noise.
fn build_filter_directives(profile: LogProfile, is_dev: bool) -> Vec<String> {
    match profile {
        LogProfile::OneShot => vec!["warn".to_string()],
        LogProfile::Daemon => {
            let level = if is_dev { "debug" } else { "info" };
            vec![
                level.to_string(),
                format!("fc_platform={level}"),
                format!("fc_infra={level}"),
                format!("fc_app={level}"),
            ]
        }
    }
}

/// Install the global subscriber.
///
/// `logs_dir` enables the file layer. If the file cannot be opened logging
/// falls back to stderr only. The returned guard must stay alive for the
/// file writer to flush.
///
/// Returns `Err` when a subscriber is already registered.
pub fn init_tracing_subscriber(
    logs_dir: Option<&Path>,
    profile: LogProfile,
) -> anyhow::Result<Option<WorkerGuard>> {
    let filter_directives = build_filter_directives(profile, is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let (file_writer, guard) = match logs_dir.map(build_file_writer).transpose() {
        Ok(Some((writer, guard))) => (Some(writer), Some(guard)),
        Ok(None) => (None, None),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            (None, None)
        }
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(logs_dir)?;
    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(file_appender))
}
