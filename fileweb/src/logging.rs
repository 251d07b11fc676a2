//! Stderr logging for the library and the CLI.
//!
//! Library components log through the `log` facade (`log::debug!` when a
//! selection entry or listing entry is skipped, `log::warn!` when an archive
//! member cannot be read). [`Logger`] is the backend that prints those
//! records to stderr as `LEVEL: message` lines, filtered by a [`LogLevel`].

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "FILEWEB_LOG_MODE";

/// How much the process reports on stderr.
///
/// ```
/// use fileweb::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl LogLevel {
    const NAMES: [(&'static str, Self); 3] = [
        ("quiet", Self::Quiet),
        ("normal", Self::Normal),
        ("verbose", Self::Verbose),
    ];

    /// The most verbose `log` level let through.
    #[must_use]
    pub fn as_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Self::NAMES
            .iter()
            .find(|(_, level)| level == self)
            .map_or("normal", |(name, _)| name);
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive; accepts `quiet`, `normal` and `verbose`.
    ///
    /// ```
    /// use fileweb::LogLevel;
    ///
    /// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
    /// assert!("loud".parse::<LogLevel>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, level)| *level)
            .ok_or_else(|| format!("invalid log level: {s}"))
    }
}

/// `log` backend writing to stderr.
///
/// ```
/// use fileweb::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Verbose);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger that lets through records allowed at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The level this logger filters at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Register this logger as the process-wide `log` backend.
    ///
    /// Only the first call in a process takes effect.
    pub fn install(&self) {
        if log::set_boxed_logger(Box::new(Self::new(self.level))).is_ok() {
            log::set_max_level(self.level.as_filter());
        }
    }

    /// Write one record as a `LEVEL: message` line.
    fn write_record(out: &mut impl Write, record: &log::Record<'_>) -> io::Result<()> {
        let tag = match record.level() {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN",
            log::Level::Info => "INFO",
            log::Level::Debug | log::Level::Trace => "DEBUG",
        };
        writeln!(out, "{tag}: {}", record.args())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.as_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            // Nowhere left to report a failed stderr write.
            let _ = Self::write_record(&mut io::stderr().lock(), record);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Pick the log level from CLI flags, then `FILEWEB_LOG_MODE`, then the
/// default.
///
/// `verbose` wins over `quiet`. An unparsable `FILEWEB_LOG_MODE` is ignored.
///
/// ```
/// use fileweb::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
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
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default()
    };
    Logger::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    /// Run `f` with `FILEWEB_LOG_MODE` set (or cleared), restoring it afterwards.
    fn with_log_mode(value: Option<&str>, f: impl FnOnce()) {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    fn render(level: log::Level, message: &str) -> String {
        let mut out = Vec::new();
        Logger::write_record(
            &mut out,
            &log::Record::builder()
                .level(level)
                .args(format_args!("{message}"))
                .build(),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_names_round_trip() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Quiet.as_filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Normal.as_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.as_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_record_lines() {
        assert_eq!(
            render(log::Level::Debug, "skipping selection entry '../etc'"),
            "DEBUG: skipping selection entry '../etc'\n"
        );
        assert_eq!(render(log::Level::Warn, "short read"), "WARN: short read\n");
        assert_eq!(render(log::Level::Trace, "x"), "DEBUG: x\n");
    }

    #[test]
    fn test_enabled_by_level() {
        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();

        let normal = Logger::default();
        assert!(normal.enabled(&warn));
        assert!(!normal.enabled(&debug));

        assert!(Logger::new(LogLevel::Verbose).enabled(&debug));
        assert!(!Logger::new(LogLevel::Quiet).enabled(&warn));
    }

    #[test]
    fn test_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_env_mode() {
        with_log_mode(None, || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
        });
        with_log_mode(Some("Verbose"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);
        });
        with_log_mode(Some("chatty"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
        });
        with_log_mode(Some("quiet"), || {
            assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        });
    }
}
