//! Configuration for the gas price oracle updater.

use crate::{
    AlloyGasPriceOracle, AlloyL1HeaderSource, BaseFeeUpdater, GasOracleError, MaxPercentChange,
};
use alloy_network::EthereumWallet;
use alloy_primitives::{Address, B256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder, RootProvider};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use std::fmt;
use tracing::info;
use url::Url;

/// A [`BaseFeeUpdater`] backed by alloy HTTP providers.
pub type AlloyBaseFeeUpdater =
    BaseFeeUpdater<AlloyL1HeaderSource<RootProvider>, AlloyGasPriceOracle<DynProvider>>;

/// Everything needed to run one base fee update.
#[derive(Clone, PartialEq, Eq)]
pub struct GasOracleConfig {
    /// The L1 RPC endpoint, used to read the latest header.
    pub l1_rpc: Url,
    /// The L2 RPC endpoint, used to read and update the oracle.
    pub l2_rpc: Url,
    /// The L2 chain id. Update transactions are signed for this chain.
    pub l2_chain_id: u64,
    /// The address of the `GasPriceOracle` on L2.
    pub gas_price_oracle_address: Address,
    /// The secp256k1 key of the oracle owner.
    pub private_key: B256,
    /// A fixed gas price for update transactions, in wei.
    pub gas_price: Option<u128>,
    /// The largest relative increase applied in one update.
    pub max_percent_change_l1_base_fee: Option<MaxPercentChange>,
    /// Wait for the update receipt and fail if it reverted.
    pub wait_for_receipt: bool,
}

impl fmt::Debug for GasOracleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GasOracleConfig")
            .field("l1_rpc", &self.l1_rpc.as_str())
            .field("l2_rpc", &self.l2_rpc.as_str())
            .field("l2_chain_id", &self.l2_chain_id)
            .field("gas_price_oracle_address", &self.gas_price_oracle_address)
            .field("private_key", &"<redacted>")
            .field("gas_price", &self.gas_price)
            .field("max_percent_change_l1_base_fee", &self.max_percent_change_l1_base_fee)
            .field("wait_for_receipt", &self.wait_for_receipt)
            .finish()
    }
}

impl GasOracleConfig {
    /// Returns the signer for update transactions, bound to the L2 chain id.
    pub fn signer(&self) -> Result<PrivateKeySigner, GasOracleError> {
        Ok(PrivateKeySigner::from_bytes(&self.private_key)?.with_chain_id(Some(self.l2_chain_id)))
    }

    /// Connects to both chains and returns a ready [`AlloyBaseFeeUpdater`].
    ///
    /// Fails with [`GasOracleError::ChainIdMismatch`] if the L2 node serves another chain.
    pub async fn connect(&self) -> Result<AlloyBaseFeeUpdater, GasOracleError> {
        let signer = self.signer()?;
        let sender = signer.address();

        let l1 = RootProvider::new_http(self.l1_rpc.clone());
        let l2 = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(self.l2_rpc.clone())
            .erased();

        let actual = l2.get_chain_id().await?;
        if actual != self.l2_chain_id {
            return Err(GasOracleError::ChainIdMismatch { expected: self.l2_chain_id, actual });
        }

        info!(
            target: "gas_oracle",
            l2_chain_id = self.l2_chain_id,
            oracle = %self.gas_price_oracle_address,
            %sender,
            "Connected to L1 and L2"
        );

        let oracle = AlloyGasPriceOracle::new(self.gas_price_oracle_address, l2)
            .with_gas_price(self.gas_price)
            .with_wait_for_receipt(self.wait_for_receipt);
        Ok(BaseFeeUpdater::new(
            AlloyL1HeaderSource::new(l1),
            oracle,
            self.max_percent_change_l1_base_fee,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    // Well-known development key.
    const KEY: B256 = b256!("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80");

    fn config() -> GasOracleConfig {
        GasOracleConfig {
            l1_rpc: Url::parse("http://127.0.0.1:1").unwrap(),
            l2_rpc: Url::parse("http://127.0.0.1:1").unwrap(),
            l2_chain_id: 420,
            gas_price_oracle_address: address!("420000000000000000000000000000000000000F"),
            private_key: KEY,
            gas_price: None,
            max_percent_change_l1_base_fee: None,
            wait_for_receipt: false,
        }
    }

    #[test]
    fn test_signer_is_bound_to_chain() {
        let signer = config().signer().unwrap();
        assert_eq!(signer.address(), address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        assert_eq!(signer.chain_id(), Some(420));
    }

    #[test]
    fn test_zero_key_is_rejected() {
        let config = GasOracleConfig { private_key: B256::ZERO, ..config() };
        assert!(matches!(config.signer(), Err(GasOracleError::InvalidSigner(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", config());
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"));
    }

    #[tokio::test]
    async fn test_connect_fails_when_l2_unreachable() {
        assert!(matches!(config().connect().await, Err(GasOracleError::Transport(_))));
    }
}
