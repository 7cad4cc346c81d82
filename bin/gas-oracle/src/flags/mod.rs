//! CLI flags for the gas-oracle binary.

mod oracle;
pub use oracle::{DEFAULT_GAS_PRICE_ORACLE, OracleArgs};

mod signer;
pub use signer::SignerArgs;
