//! Prometheus metrics CLI args
//!
//! Specifies the available flags for prometheus metric configuration inside CLI

use crate::{MetricsError, PrometheusServer};
use clap::Args;
use std::net::{IpAddr, Ipv4Addr};

/// Configuration for Prometheus metrics.
#[derive(Debug, Clone, Args, PartialEq, Eq)]
#[command(next_help_heading = "Metrics")]
pub struct MetricsArgs {
    /// Controls whether Prometheus metrics are enabled. Disabled by default.
    #[arg(
        long = "metrics.enabled",
        global = true,
        default_value_t = false,
        env = "L2OPS_METRICS_ENABLED"
    )]
    pub enabled: bool,

    /// The interval for prometheus process metrics collection in seconds.
    #[arg(
        long = "metrics.interval",
        global = true,
        default_value = "30",
        env = "L2OPS_METRICS_INTERVAL"
    )]
    pub interval: u64,

    /// The port to serve Prometheus metrics on.
    #[arg(long = "metrics.port", global = true, default_value = "7300", env = "L2OPS_METRICS_PORT")]
    pub port: u16,

    /// The IP address to use for Prometheus metrics.
    #[arg(
        long = "metrics.addr",
        global = true,
        default_value = "0.0.0.0",
        env = "L2OPS_METRICS_ADDR"
    )]
    pub addr: IpAddr,
}

impl Default for MetricsArgs {
    fn default() -> Self {
        Self { enabled: false, interval: 30, port: 7300, addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED) }
    }
}

impl MetricsArgs {
    /// Installs the Prometheus recorder and HTTP listener if metrics are enabled.
    pub fn init_metrics(&self) -> Result<(), MetricsError> {
        if self.enabled {
            PrometheusServer::init(self.addr, self.port, self.interval)?;
        }
        Ok(())
    }

    /// Installs the Prometheus recorder, then runs `f` to describe and zero crate metrics.
    ///
    /// `f` is skipped when metrics are disabled.
    pub fn init_metrics_with<F: FnOnce()>(&self, f: F) -> Result<(), MetricsError> {
        if self.enabled {
            PrometheusServer::init(self.addr, self.port, self.interval)?;
            f();
        }
        Ok(())
    }
}
