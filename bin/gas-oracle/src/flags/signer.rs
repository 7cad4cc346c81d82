//! Signer CLI Flags

use alloy_primitives::B256;
use clap::Parser;

/// Signer CLI Flags
#[derive(Clone, Parser, PartialEq, Eq)]
pub struct SignerArgs {
    /// Hex-encoded private key of the `GasPriceOracle` owner, with or without a `0x` prefix.
    #[arg(
        long = "signer.private-key",
        env = "GAS_PRICE_ORACLE_PRIVATE_KEY",
        hide_env_values = true
    )]
    pub private_key: B256,
}

impl std::fmt::Debug for SignerArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignerArgs").field("private_key", &"<redacted>").finish()
    }
}
