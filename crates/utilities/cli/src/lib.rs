//! Shared CLI utilities for the l2ops binaries: logging and metrics flags, tracing setup,
//! the Prometheus server, and help styling.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod flags;
pub use flags::{LogArgs, MetricsArgs};

mod logs;
pub use logs::{ConsoleLogConfig, FileLogConfig, LogConfig, LogRotation};

mod tracing;
pub use tracing::LogFormat;

mod prometheus;
pub use prometheus::{MetricsError, PrometheusServer};

mod styles;
pub use styles::cli_styles;
