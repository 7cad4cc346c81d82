//! Logging Configuration Types

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::{LogArgs, LogFormat};

/// The rotation of the log files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate the log files every minute.
    Minutely,
    /// Rotate the log files hourly.
    Hourly,
    /// Rotate the log files daily.
    Daily,
    /// Do not rotate the log files.
    #[default]
    Never,
}

/// Configuration for file logging.
#[derive(Debug, Clone)]
pub struct FileLogConfig {
    /// The path to the directory where the log files are stored.
    pub directory_path: PathBuf,
    /// The format of the logs printed to the log file.
    pub format: LogFormat,
    /// The rotation of the log files.
    pub rotation: LogRotation,
}

/// Configuration for console logging.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogConfig {
    /// The format of console logs.
    pub format: LogFormat,
}

/// Resolved logging configuration.
///
/// Defaults to info-level console logs in full format and no file logs.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Verbosity applied to every layer.
    pub global_level: LevelFilter,
    /// Console logging, if enabled.
    pub console_logs: Option<ConsoleLogConfig>,
    /// File logging, if enabled.
    pub file_logs: Option<FileLogConfig>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global_level: LevelFilter::INFO,
            console_logs: Some(ConsoleLogConfig { format: LogFormat::Full }),
            file_logs: None,
        }
    }
}

impl From<LogArgs> for LogConfig {
    fn from(args: LogArgs) -> Self {
        Self::new(args)
    }
}

impl LogConfig {
    /// Resolves [`LogArgs`] into a [`LogConfig`]. A verbosity of `0` disables logging.
    pub fn new(args: LogArgs) -> Self {
        let global_level = match args.level {
            0 => LevelFilter::OFF,
            1 => LevelFilter::ERROR,
            2 => LevelFilter::WARN,
            3 => LevelFilter::INFO,
            4 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };

        let console_logs =
            (!args.console_quiet).then_some(ConsoleLogConfig { format: args.console_format });

        let file_logs = args.file_directory.map(|directory_path| FileLogConfig {
            directory_path,
            format: args.file_format,
            rotation: args.file_rotation,
        });

        Self { global_level, console_logs, file_logs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::off(0, LevelFilter::OFF)]
    #[case::error(1, LevelFilter::ERROR)]
    #[case::warn(2, LevelFilter::WARN)]
    #[case::info(3, LevelFilter::INFO)]
    #[case::debug(4, LevelFilter::DEBUG)]
    #[case::trace(5, LevelFilter::TRACE)]
    #[case::saturates(9, LevelFilter::TRACE)]
    fn test_verbosity_to_level(#[case] level: u8, #[case] expected: LevelFilter) {
        let config = LogConfig::new(LogArgs { level, ..Default::default() });
        assert_eq!(config.global_level, expected);
    }

    #[test]
    fn test_quiet_disables_console() {
        let args = LogArgs { level: 3, console_quiet: true, ..Default::default() };
        let config = LogConfig::new(args);
        assert!(config.console_logs.is_none());
        assert!(config.file_logs.is_none());
    }

    #[test]
    fn test_file_directory_enables_file_logs() {
        let config = LogConfig::new(LogArgs {
            level: 3,
            file_directory: Some(PathBuf::from("/tmp/logs")),
            file_rotation: LogRotation::Hourly,
            ..Default::default()
        });
        let file_logs = config.file_logs.expect("file logging should be enabled");
        assert_eq!(file_logs.directory_path, PathBuf::from("/tmp/logs"));
        assert_eq!(file_logs.rotation, LogRotation::Hourly);
    }
}
