//! Contains the gas-oracle CLI.

use crate::{
    flags::{OracleArgs, SignerArgs},
    metrics::VersionInfo,
};
use anyhow::Result;
use clap::Parser;
use l2ops_cli::{LogArgs, LogConfig, MetricsArgs, cli_styles};
use l2ops_gas_oracle::{GasOracleConfig, UpdateOutcome};
use tracing::info;

/// Updates the L1 base fee stored in the L2 `GasPriceOracle`.
#[derive(Parser, Debug)]
#[command(
    name = "gas-oracle",
    about = "Updates the L1 base fee in the L2 GasPriceOracle",
    styles = cli_styles()
)]
pub struct Cli {
    /// Logging args
    #[command(flatten)]
    pub logs: LogArgs,

    /// Prometheus metrics args
    #[command(flatten)]
    pub metrics: MetricsArgs,

    /// Gas price oracle args
    #[command(flatten)]
    pub oracle: OracleArgs,

    /// Signer args
    #[command(flatten)]
    pub signer: SignerArgs,
}

impl Cli {
    /// Runs the CLI.
    pub fn run(self) -> Result<()> {
        self.metrics.init_metrics_with(|| {
            l2ops_gas_oracle::Metrics::init();
            VersionInfo::from_build().register_version_metrics();
        })?;

        self.init_logs(&self.logs)?;

        let config = self.config();
        let interval = self.oracle.interval();

        Self::run_until_ctrl_c(async move {
            let updater = config.connect().await?;

            let Some(interval) = interval else {
                match updater.update().await? {
                    UpdateOutcome::Unchanged { base_fee } => {
                        info!(target: "gas_oracle", %base_fee, "L1 base fee already up to date");
                    }
                    UpdateOutcome::Submitted { tx, .. } => {
                        info!(target: "gas_oracle", tx_hash = %tx.tx_hash, "L1 base fee updated");
                    }
                }
                return Ok(());
            };

            info!(target: "gas_oracle", interval_secs = interval.as_secs(), "Starting update loop");
            tokio::select! {
                _ = updater.run(interval) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!(target: "gas_oracle", "Ctrl+C received, shutting down");
                }
            }
            Ok(())
        })
    }

    /// Builds the updater configuration from the parsed flags.
    pub fn config(&self) -> GasOracleConfig {
        GasOracleConfig {
            l1_rpc: self.oracle.l1_rpc.clone(),
            l2_rpc: self.oracle.l2_rpc.clone(),
            l2_chain_id: self.oracle.l2_chain_id,
            gas_price_oracle_address: self.oracle.gas_price_oracle_address,
            private_key: self.signer.private_key,
            gas_price: self.oracle.gas_price,
            max_percent_change_l1_base_fee: self.oracle.max_percent_change,
            wait_for_receipt: self.oracle.wait_for_receipt,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::DEFAULT_GAS_PRICE_ORACLE;
    use alloy_primitives::{B256, address};
    use l2ops_gas_oracle::MaxPercentChange;
    use std::time::Duration;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        let mut args = vec![
            "gas-oracle",
            "--l1-rpc",
            "http://localhost:8545",
            "--l2-rpc",
            "http://localhost:9545",
            "--l2-chain-id",
            "420",
            "--signer.private-key",
            KEY,
        ];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args)
    }

    #[test]
    fn test_minimal_args() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.oracle.l1_rpc.as_str(), "http://localhost:8545/");
        assert_eq!(cli.oracle.l2_chain_id, 420);
        assert_eq!(cli.oracle.gas_price_oracle_address, DEFAULT_GAS_PRICE_ORACLE);
        assert_eq!(cli.oracle.gas_price, None);
        assert_eq!(cli.oracle.max_percent_change, None);
        assert!(!cli.oracle.wait_for_receipt);
        assert_eq!(cli.oracle.interval(), None);
        assert_eq!(cli.signer.private_key, KEY.parse::<B256>().unwrap());
    }

    #[test]
    fn test_all_args() {
        let cli = parse(&[
            "--gas-price-oracle.address",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            "--tx.gas-price",
            "1000000000",
            "--base-fee.max-percent-change",
            "0.2",
            "--wait-for-receipt",
            "--loop.interval",
            "15",
        ])
        .unwrap();

        assert_eq!(
            cli.oracle.gas_price_oracle_address,
            address!("5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert_eq!(cli.oracle.gas_price, Some(1_000_000_000));
        assert_eq!(cli.oracle.max_percent_change, Some("0.2".parse().unwrap()));
        assert!(cli.oracle.wait_for_receipt);
        assert_eq!(cli.oracle.interval(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_config_from_args() {
        let cli = parse(&["--base-fee.max-percent-change", "0.05"]).unwrap();
        let config = cli.config();

        assert_eq!(config.l2_rpc.as_str(), "http://localhost:9545/");
        assert_eq!(config.l2_chain_id, 420);
        assert_eq!(config.private_key, cli.signer.private_key);
        assert_eq!(
            config.max_percent_change_l1_base_fee,
            Some("0.05".parse::<MaxPercentChange>().unwrap())
        );
    }

    #[test]
    fn test_key_without_prefix() {
        let cli = Cli::try_parse_from([
            "gas-oracle",
            "--l1-rpc",
            "http://localhost:8545",
            "--l2-rpc",
            "http://localhost:9545",
            "--l2-chain-id",
            "10",
            "--signer.private-key",
            KEY.trim_start_matches("0x"),
        ])
        .unwrap();
        assert_eq!(cli.signer.private_key, KEY.parse::<B256>().unwrap());
    }

    #[test]
    fn test_missing_required_args() {
        assert!(Cli::try_parse_from(["gas-oracle", "--l2-chain-id", "420"]).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse(&["--base-fee.max-percent-change=-0.1"]).is_err());
        assert!(parse(&["--base-fee.max-percent-change", "NaN"]).is_err());
        assert!(parse(&["--base-fee.max-percent-change", "twenty"]).is_err());
        assert!(parse(&["--loop.interval", "0"]).is_err());
        assert!(parse(&["--gas-price-oracle.address", "0x1234"]).is_err());
    }

    #[test]
    fn test_debug_hides_key() {
        let cli = parse(&[]).unwrap();
        let debug = format!("{cli:?}");
        assert!(!debug.contains(KEY.trim_start_matches("0x")));
    }
}
