//! Utilities for spinning up a prometheus metrics server.

use std::{
    net::{IpAddr, SocketAddr},
    thread::{self, sleep},
    time::Duration,
};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use metrics_process::Collector;
use tracing::info;

/// An error installing the Prometheus recorder.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// The recorder or its HTTP listener could not be built.
    #[error("failed to install prometheus recorder: {0}")]
    Build(#[from] BuildError),
}

/// A wrapper type that initializes a Prometheus metrics server.
#[derive(Debug, Clone, Copy)]
pub struct PrometheusServer;

impl PrometheusServer {
    /// Initialize a Prometheus metrics server on the given address and port.
    ///
    /// The interval specifies how often process metrics are collected, in seconds.
    pub fn init(addr: IpAddr, metrics_port: u16, interval: u64) -> Result<(), MetricsError> {
        let prometheus_addr = SocketAddr::from((addr, metrics_port));
        PrometheusBuilder::new().with_http_listener(prometheus_addr).install()?;

        // Collector for process metrics e.g. CPU, memory, open fds.
        let collector = Collector::default();
        collector.describe();

        thread::spawn(move || {
            loop {
                collector.collect();
                sleep(Duration::from_secs(interval));
            }
        });

        info!(target: "prometheus", addr = %prometheus_addr, "Serving metrics");
        Ok(())
    }
}
