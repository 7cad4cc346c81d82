//! Metrics for the gas-oracle binary.

mod version;
pub use version::VersionInfo;
