/*
[INPUT]:  Log file path and filter directive
[OUTPUT]: Global tracing subscriber writing to an append-only file
[POS]:    Logging layer - initialised once from main
[UPDATE]: When changing log destination or line format
*/

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::BotConfig;

/// Where and how verbosely to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub level: String,
}

impl From<&BotConfig> for LoggingConfig {
    fn from(config: &BotConfig) -> Self {
        Self {
            file: config.log_file.clone(),
            level: config.log_level.clone(),
        }
    }
}

/// Install the file subscriber; keep the guard alive until exit
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(&config.level).context("invalid log level")?;
    let appender = file_appender(&config.file)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

/// Append-only appender for exactly `path`, never rotated
pub fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .with_context(|| format!("open log file {}", path.display()))
}
