//! Errors for reading the canonical transaction chain.

use alloy_primitives::Address;

/// An error raised while reading the canonical transaction chain.
#[derive(Debug, thiserror::Error)]
pub enum CtcError {
    /// The `getTotalElements` call failed, whether at the transport, in the node, or while
    /// decoding the result.
    #[error("failed to call getTotalElements on {address}: {source}")]
    Contract {
        /// The CTC address that was called.
        address: Address,
        /// The underlying contract error.
        #[source]
        source: alloy_contract::Error,
    },
}
