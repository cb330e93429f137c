//! Logging backend for the relink library.
//!
//! Library code emits through the `log` macros (`log::debug!` for each
//! deletion, `log::info!` for each link created, `log::warn!` when a working
//! directory cannot be restored). [`Logger`] is the stderr backend the CLI
//! installs; its [`LogLevel`] decides which records get through.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable selecting the default log level.
pub const LOG_MODE_ENV: &str = "RELINK_LOG_MODE";

/// How much the CLI reports, from least to most.
///
/// # Examples
///
/// ```
/// use relink::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing is logged.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug records, tagged with their module.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error unless the string is `quiet`, `normal` or `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level shown at this setting.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// Stderr backend for the `log` facade.
///
/// # Examples
///
/// ```no_run
/// use relink::{Logger, LogLevel};
///
/// Logger::new(LogLevel::Verbose).install().unwrap();
/// log::info!("shown on stderr");
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Install this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let filter = self.level.filter();
        log::set_logger(Box::leak(Box::new(self)))?;
        log::set_max_level(filter);
        Ok(())
    }

    /// The stderr line for `record`, or `None` when it is filtered out.
    ///
    /// At [`LogLevel::Verbose`] the originating module is included, so a
    /// deletion can be told apart from a link creation.
    #[must_use]
    pub fn format_record(&self, record: &Record<'_>) -> Option<String> {
        if !self.enabled(record.metadata()) {
            return None;
        }
        let line = if self.level == LogLevel::Verbose {
            format!("{} [{}]: {}", record.level(), record.target(), record.args())
        } else {
            format!("{}: {}", record.level(), record.args())
        };
        Some(line)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if let Some(line) = self.format_record(record) {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {}
}

/// Picks the logger for the given CLI flags.
///
/// `--verbose` wins over `--quiet`; without either, `RELINK_LOG_MODE` is
/// consulted, and an unset or unparseable value means [`LogLevel::Normal`].
///
/// # Examples
///
/// ```
/// use relink::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|value| LogLevel::parse(&value).ok())
            .unwrap_or_default()
    };
    Logger::new(level)
}
