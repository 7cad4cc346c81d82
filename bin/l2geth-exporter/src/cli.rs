//! Contains the l2geth-exporter CLI.

use crate::flags::ExporterArgs;
use alloy_primitives::U256;
use anyhow::Result;
use clap::Parser;
use l2ops_cli::{LogArgs, LogConfig, MetricsArgs, cli_styles};
use l2ops_ctc::{CanonicalTransactionChain, ChainLengthExporter, TotalElementsSource};
use std::{io::Write, time::Duration};
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

/// Reports the length of the canonical transaction chain.
#[derive(Parser, Debug)]
#[command(
    name = "l2geth-exporter",
    about = "Reports the length of the canonical transaction chain",
    styles = cli_styles()
)]
pub struct Cli {
    /// Logging args
    #[command(flatten)]
    pub logs: LogArgs,

    /// Prometheus metrics args
    #[command(flatten)]
    pub metrics: MetricsArgs,

    /// Exporter args
    #[command(flatten)]
    pub exporter: ExporterArgs,
}

impl Cli {
    /// Runs the CLI.
    pub fn run(self) -> Result<()> {
        self.metrics.init_metrics_with(l2ops_ctc::Metrics::init)?;
        self.init_logs(&self.logs)?;

        let ctc = CanonicalTransactionChain::from_url(
            self.exporter.ovm_ctc_address,
            self.exporter.geth_url.clone(),
        );
        let exporter = ChainLengthExporter::new(ctc);
        let interval = self.exporter.interval();

        Self::run_until_ctrl_c(async move {
            let Some(interval) = interval else {
                return export_once(&exporter, &mut std::io::stdout()).await;
            };

            info!(target: "ctc", interval_secs = interval.as_secs(), "Starting export loop");
            tokio::select! {
                _ = Self::poll(&exporter, interval) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!(target: "ctc", "Ctrl+C received, shutting down");
                }
            }
            Ok(())
        })
    }

    /// Exports the counter every `interval`, printing each reading and logging failures.
    async fn poll<S: TotalElementsSource>(exporter: &ChainLengthExporter<S>, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(err) = export_once(exporter, &mut std::io::stdout()).await {
                error!(target: "ctc", %err, "Failed to export total elements");
            }
        }
    }

    /// Run until ctrl-c is pressed.
    pub fn run_until_ctrl_c<F>(fut: F) -> Result<()>
    where
        F: std::future::Future<Output = Result<()>>,
    {
        let rt = Self::tokio_runtime().map_err(|e| anyhow::anyhow!(e))?;
        rt.block_on(fut)
    }

    /// Creates a new default tokio multi-thread [`Runtime`](tokio::runtime::Runtime) with all
    /// features enabled
    pub fn tokio_runtime() -> Result<tokio::runtime::Runtime, std::io::Error> {
        tokio::runtime::Builder::new_multi_thread().enable_all().build()
    }

    /// Initializes the tracing subscriber.
    pub fn init_logs(&self, args: &LogArgs) -> Result<()> {
        let filter = tracing_subscriber::EnvFilter::from_default_env();

        LogConfig::new(args.clone()).init_tracing_subscriber(Some(filter))?;
        Ok(())
    }
}

/// Reads the counter once and writes it to `out`. Nothing is written if the read fails.
async fn export_once<S, W>(exporter: &ChainLengthExporter<S>, out: &mut W) -> Result<()>
where
    S: TotalElementsSource,
    W: Write,
{
    let total = exporter.export().await?;
    writeln!(out, "{}", format_total(total))?;
    Ok(())
}

/// The line printed for each successful read.
fn format_total(total: U256) -> String {
    format!("Total elements: {total}")
}
