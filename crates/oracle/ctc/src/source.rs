//! Sources of the CTC `totalElements` counter.

use crate::{CtcError, bindings::ICanonicalTransactionChain};
use alloy_primitives::{Address, U256};
use alloy_provider::{Provider, RootProvider};
use async_trait::async_trait;
use url::Url;

/// Async trait for reading the length of the canonical transaction chain.
#[async_trait]
pub trait TotalElementsSource: Send + Sync {
    /// Returns the current `totalElements` counter.
    async fn total_elements(&self) -> Result<U256, CtcError>;
}

/// Concrete implementation backed by alloy's sol-generated contract bindings.
#[derive(Debug, Clone)]
pub struct CanonicalTransactionChain<P> {
    contract: ICanonicalTransactionChain::ICanonicalTransactionChainInstance<P>,
}

impl<P: Provider> CanonicalTransactionChain<P> {
    /// Binds the CTC deployed at `address`.
    pub fn new(address: Address, provider: P) -> Self {
        Self { contract: ICanonicalTransactionChain::new(address, provider) }
    }

    /// Returns the CTC address.
    pub fn address(&self) -> &Address {
        self.contract.address()
    }
}

impl CanonicalTransactionChain<RootProvider> {
    /// Binds the CTC at `address` over a plain HTTP provider.
    ///
    /// No request is made until the counter is read.
    pub fn from_url(address: Address, url: Url) -> Self {
        Self::new(address, RootProvider::new_http(url))
    }
}

#[async_trait]
impl<P: Provider> TotalElementsSource for CanonicalTransactionChain<P> {
    async fn total_elements(&self) -> Result<U256, CtcError> {
        self.contract
            .getTotalElements()
            .call()
            .await
            .map_err(|source| CtcError::Contract { address: *self.address(), source })
    }
}
