//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend behind the `log` facade once per process.
//! - Route diagnostics to rotating files, or to stderr when no directory is
//!   configured (stdout is reserved for tool results).
//!
//! # Invariants
//! - Re-initialization with the same level and target is a no-op.
//! - Re-initialization with a different level or target is rejected.
//! - Initialization never panics.

use flexi_logger::{
    detailed_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle,
    Naming, WriteMode,
};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "notekeep";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    target: LogTarget,
    _handle: LoggerHandle,
}

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Rotating files named `notekeep*.log` inside this absolute directory.
    Directory(PathBuf),
}

impl Display for LogTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => f.write_str("stderr"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    RelativeLogDir(PathBuf),
    CreateLogDir {
        dir: PathBuf,
        source: std::io::Error,
    },
    Backend(FlexiLoggerError),
    AlreadyInitialized {
        level: &'static str,
        target: LogTarget,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(dir) => {
                write!(f, "log dir must be an absolute path, got `{}`", dir.display())
            }
            Self::CreateLogDir { dir, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                dir.display()
            ),
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::AlreadyInitialized { level, target } => write!(
                f,
                "logging already initialized with level `{level}` at `{target}`; refusing to switch"
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateLogDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FlexiLoggerError> for LoggingError {
    fn from(value: FlexiLoggerError) -> Self {
        Self::Backend(value)
    }
}

/// Initializes logging at `level`, writing to `log_dir` or stderr.
///
/// # Errors
/// - [`LoggingError::UnsupportedLevel`] for unknown level names.
/// - [`LoggingError::RelativeLogDir`] when `log_dir` is not absolute.
/// - [`LoggingError::AlreadyInitialized`] when a different configuration is
///   already active.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;
    let target = match log_dir {
        Some(dir) if !dir.is_absolute() => {
            return Err(LoggingError::RelativeLogDir(dir.to_path_buf()))
        }
        Some(dir) => LogTarget::Directory(dir.to_path_buf()),
        None => LogTarget::Stderr,
    };

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, target.clone()))?;
    if state.level != level || state.target != target {
        return Err(LoggingError::AlreadyInitialized {
            level: state.level,
            target: state.target.clone(),
        });
    }

    Ok(())
}

/// Active `(level, target)`, or `None` before [`init_logging`] succeeded.
pub fn logging_status() -> Option<(&'static str, LogTarget)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.target.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn start_logger(level: &'static str, target: LogTarget) -> Result<LoggingState, LoggingError> {
    let logger = Logger::try_with_str(level)?;
    let handle = match &target {
        LogTarget::Stderr => logger.log_to_stderr().format(detailed_format).start()?,
        LogTarget::Directory(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateLogDir {
                dir: dir.clone(),
                source,
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(detailed_format)
                .start()?
        }
    };

    info!(
        "event=core_init module=logging status=ok level={level} target={target} version={}",
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        target,
        _handle: handle,
    })
}
