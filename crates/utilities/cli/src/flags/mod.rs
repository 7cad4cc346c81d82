//! Common CLI Flags
//!
//! These are cli flags shared by the gas oracle and the exporter so both binaries expose the same
//! logging and metrics UX.

mod log;
pub use log::LogArgs;

mod metrics;
pub use metrics::MetricsArgs;
