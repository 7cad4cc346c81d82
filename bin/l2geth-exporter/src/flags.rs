//! Exporter CLI Flags

use alloy_primitives::Address;
use clap::Parser;
use std::time::Duration;
use url::Url;

/// Exporter CLI Flags
#[derive(Debug, Clone, Parser, PartialEq, Eq)]
pub struct ExporterArgs {
    /// RPC endpoint of the L1 node holding the canonical transaction chain.
    #[arg(long = "geth-url", env = "GETH_URL")]
    pub geth_url: Url,

    /// Address of the canonical transaction chain contract.
    #[arg(long = "ovm-ctc-address", env = "OVM_CTC_ADDRESS")]
    pub ovm_ctc_address: Address,

    /// Read the counter every this many seconds instead of once.
    #[arg(
        long = "loop.interval",
        env = "L2GETH_EXPORTER_LOOP_INTERVAL",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub loop_interval: Option<u64>,
}

impl ExporterArgs {
    /// Returns the polling interval, if polling was requested.
    pub fn interval(&self) -> Option<Duration> {
        self.loop_interval.map(Duration::from_secs)
    }
}
