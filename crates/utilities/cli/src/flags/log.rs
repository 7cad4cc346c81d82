//! Logging flags.

use std::path::PathBuf;

use clap::{ArgAction, Args};
use serde::{Deserialize, Serialize};

use crate::{LogFormat, LogRotation};

/// Logging flags shared by the l2ops binaries.
///
/// Console logs are written to stderr. File logs are only written when
/// `--logs.file.directory` is given.
#[derive(Args, Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[command(next_help_heading = "Logging")]
pub struct LogArgs {
    /// Verbosity, counted: `-v` is error, `-vvvvv` is trace. Info (3) when absent.
    #[arg(
        short = 'v',
        global = true,
        default_value = "3",
        env = "L2OPS_LOG_LEVEL",
        action = ArgAction::Count,
    )]
    pub level: u8,
    /// Silences console logs.
    #[arg(
        long = "logs.console.quiet",
        short = 'q',
        global = true,
        env = "L2OPS_LOG_CONSOLE_QUIET"
    )]
    pub console_quiet: bool,
    /// Console log format.
    #[arg(long = "logs.console.format", default_value = "full", env = "L2OPS_LOG_CONSOLE_FORMAT")]
    pub console_format: LogFormat,
    /// Directory for log files.
    #[arg(long = "logs.file.directory", env = "L2OPS_LOG_FILE_DIRECTORY")]
    pub file_directory: Option<PathBuf>,
    /// File log format.
    #[arg(long = "logs.file.format", default_value = "full", env = "L2OPS_LOG_FILE_FORMAT")]
    pub file_format: LogFormat,
    /// How often a new log file is started.
    #[arg(long = "logs.file.rotation", default_value = "never", env = "L2OPS_LOG_FILE_ROTATION")]
    pub file_rotation: LogRotation,
}
