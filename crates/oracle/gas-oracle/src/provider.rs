//! Alloy-backed implementations of [`L1HeaderSource`] and [`GasPriceOracleApi`].

use crate::{
    GasOracleError, GasPriceOracleApi, L1HeaderSource, SubmittedTx,
    bindings::GasPriceOracle::{self, GasPriceOracleInstance},
};
use alloy_eips::BlockNumberOrTag;
use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use async_trait::async_trait;
use tracing::debug;

/// Reads the latest L1 header through an alloy [`Provider`].
#[derive(Debug, Clone)]
pub struct AlloyL1HeaderSource<P> {
    provider: P,
}

impl<P> AlloyL1HeaderSource<P> {
    /// Creates a new [`AlloyL1HeaderSource`].
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: Provider> L1HeaderSource for AlloyL1HeaderSource<P> {
    async fn latest_base_fee(&self) -> Result<U256, GasOracleError> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await?
            .ok_or(GasOracleError::BlockNotFound)?;

        let header = &block.header.inner;
        let base_fee = header.base_fee_per_gas.ok_or(GasOracleError::NoBaseFee(header.number))?;
        debug!(target: "gas_oracle", block = header.number, base_fee, "Fetched L1 header");
        Ok(U256::from(base_fee))
    }
}

/// Talks to the `GasPriceOracle` through its generated bindings.
///
/// The provider must carry a wallet for [`GasPriceOracleApi::set_l1_base_fee`] to succeed.
#[derive(Debug, Clone)]
pub struct AlloyGasPriceOracle<P> {
    contract: GasPriceOracleInstance<P>,
    gas_price: Option<u128>,
    wait_for_receipt: bool,
}

impl<P: Provider> AlloyGasPriceOracle<P> {
    /// Binds the oracle deployed at `address`.
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            contract: GasPriceOracle::new(address, provider),
            gas_price: None,
            wait_for_receipt: false,
        }
    }

    /// Uses a fixed legacy gas price for update transactions instead of the provider's estimate.
    pub fn with_gas_price(mut self, gas_price: Option<u128>) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Waits for the receipt of each update transaction before returning.
    pub fn with_wait_for_receipt(mut self, wait_for_receipt: bool) -> Self {
        self.wait_for_receipt = wait_for_receipt;
        self
    }

    /// Returns the oracle address.
    pub fn address(&self) -> &Address {
        self.contract.address()
    }
}

#[async_trait]
impl<P: Provider> GasPriceOracleApi for AlloyGasPriceOracle<P> {
    async fn l1_base_fee(&self) -> Result<U256, GasOracleError> {
        self.contract
            .l1BaseFee()
            .call()
            .await
            .map_err(|source| GasOracleError::Contract { method: "l1BaseFee", source })
    }

    async fn set_l1_base_fee(&self, base_fee: U256) -> Result<SubmittedTx, GasOracleError> {
        let mut call = self.contract.setL1BaseFee(base_fee);
        if let Some(gas_price) = self.gas_price {
            call = call.gas_price(gas_price);
        }

        let pending = call
            .send()
            .await
            .map_err(|source| GasOracleError::Contract { method: "setL1BaseFee", source })?;
        let tx_hash = *pending.tx_hash();
        debug!(target: "gas_oracle", %tx_hash, %base_fee, "Sent base fee update");

        if !self.wait_for_receipt {
            return Ok(SubmittedTx { tx_hash, block_number: None });
        }

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(GasOracleError::Reverted(tx_hash));
        }
        Ok(SubmittedTx { tx_hash, block_number: receipt.block_number() })
    }
}
