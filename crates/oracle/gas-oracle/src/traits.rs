//! Traits at the RPC boundary of the updater.

use crate::GasOracleError;
use alloy_primitives::{TxHash, U256};
use async_trait::async_trait;

/// A source of the latest L1 base fee.
#[async_trait]
pub trait L1HeaderSource: Send + Sync {
    /// Returns the base fee of the latest L1 block.
    ///
    /// Fails with [`GasOracleError::NoBaseFee`] if the header has no base fee.
    async fn latest_base_fee(&self) -> Result<U256, GasOracleError>;
}

/// Read and write access to the L2 `GasPriceOracle`.
#[async_trait]
pub trait GasPriceOracleApi: Send + Sync {
    /// Returns the L1 base fee currently stored by the oracle.
    async fn l1_base_fee(&self) -> Result<U256, GasOracleError>;

    /// Submits a transaction storing `base_fee` in the oracle.
    async fn set_l1_base_fee(&self, base_fee: U256) -> Result<SubmittedTx, GasOracleError>;
}

/// A submitted `setL1BaseFee` transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedTx {
    /// The transaction hash.
    pub tx_hash: TxHash,
    /// The block the transaction was included in, if its receipt was awaited.
    pub block_number: Option<u64>,
}
