//! Gas price oracle CLI Flags

use alloy_primitives::{Address, address};
use clap::Parser;
use l2ops_gas_oracle::MaxPercentChange;
use std::time::Duration;
use url::Url;

/// The `GasPriceOracle` predeploy address.
pub const DEFAULT_GAS_PRICE_ORACLE: Address = address!("420000000000000000000000000000000000000F");

/// Gas price oracle CLI Flags
#[derive(Debug, Clone, Parser, PartialEq, Eq)]
pub struct OracleArgs {
    /// L1 RPC endpoint to read the latest base fee from.
    #[arg(long = "l1-rpc", env = "GAS_PRICE_ORACLE_L1_RPC")]
    pub l1_rpc: Url,

    /// L2 RPC endpoint hosting the `GasPriceOracle`.
    #[arg(long = "l2-rpc", env = "GAS_PRICE_ORACLE_L2_RPC")]
    pub l2_rpc: Url,

    /// Chain id of the L2. Update transactions are signed for this chain.
    #[arg(long = "l2-chain-id", env = "GAS_PRICE_ORACLE_L2_CHAIN_ID")]
    pub l2_chain_id: u64,

    /// Address of the `GasPriceOracle` on L2.
    #[arg(
        long = "gas-price-oracle.address",
        env = "GAS_PRICE_ORACLE_ADDRESS",
        default_value_t = DEFAULT_GAS_PRICE_ORACLE
    )]
    pub gas_price_oracle_address: Address,

    /// Fixed gas price for update transactions, in wei. Estimated by the L2 node if unset.
    #[arg(long = "tx.gas-price", env = "GAS_PRICE_ORACLE_GAS_PRICE")]
    pub gas_price: Option<u128>,

    /// Largest relative increase of the stored base fee per update, as a decimal fraction
    /// (`0.2` allows +20%). Unlimited if unset or zero.
    #[arg(
        long = "base-fee.max-percent-change",
        env = "GAS_PRICE_ORACLE_MAX_PERCENT_CHANGE_L1_BASE_FEE"
    )]
    pub max_percent_change: Option<MaxPercentChange>,

    /// Wait for each update transaction to be mined and fail if it reverted.
    #[arg(
        long = "wait-for-receipt",
        env = "GAS_PRICE_ORACLE_WAIT_FOR_RECEIPT",
        default_value_t = false
    )]
    pub wait_for_receipt: bool,

    /// Repeat the update every this many seconds instead of running once.
    #[arg(
        long = "loop.interval",
        env = "GAS_PRICE_ORACLE_LOOP_INTERVAL",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub loop_interval: Option<u64>,
}

impl OracleArgs {
    /// Returns the polling interval, if polling was requested.
    pub fn interval(&self) -> Option<Duration> {
        self.loop_interval.map(Duration::from_secs)
    }
}
