//! Errors for the gas price oracle updater.

use alloy_primitives::TxHash;
use alloy_provider::PendingTransactionError;
use alloy_signer::k256::ecdsa;
use alloy_transport::TransportError;

/// An error raised while reading or updating the L1 base fee in the `GasPriceOracle`.
///
/// Errors are surfaced as-is; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum GasOracleError {
    /// An RPC request failed.
    #[error("rpc request failed: {0}")]
    Transport(#[from] TransportError),
    /// A call to the `GasPriceOracle` contract failed.
    #[error("GasPriceOracle.{method} failed: {source}")]
    Contract {
        /// The contract method that was called.
        method: &'static str,
        /// The underlying contract error.
        #[source]
        source: alloy_contract::Error,
    },
    /// Waiting for the update transaction failed.
    #[error("failed to await base fee update: {0}")]
    PendingTransaction(#[from] PendingTransactionError),
    /// The L1 node returned no block for the `latest` tag.
    #[error("latest L1 block not found")]
    BlockNotFound,
    /// The L1 header carries no base fee, i.e. the chain predates the fee market.
    #[error("L1 block {0} has no base fee")]
    NoBaseFee(u64),
    /// The update transaction was mined but reverted.
    #[error("base fee update transaction {0} reverted")]
    Reverted(TxHash),
    /// The L2 node serves a different chain than the one configured.
    #[error("L2 chain id mismatch: configured {expected}, node reports {actual}")]
    ChainIdMismatch {
        /// The configured L2 chain id.
        expected: u64,
        /// The chain id reported by the L2 node.
        actual: u64,
    },
    /// The signing key is not a valid secp256k1 secret key.
    #[error("invalid signing key: {0}")]
    InvalidSigner(#[from] ecdsa::Error),
}
