//! `CanonicalTransactionChain` contract bindings.

use alloy_sol_types::sol;

sol! {
    /// The L1 canonical transaction chain of the rollup.
    #[sol(rpc)]
    interface ICanonicalTransactionChain {
        /// Returns the number of elements appended to the chain.
        function getTotalElements() external view returns (uint256 _totalElements);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_get_total_elements_selector() {
        use ICanonicalTransactionChain::getTotalElementsCall;

        assert_eq!(getTotalElementsCall::SIGNATURE, "getTotalElements()");
        let data = getTotalElementsCall {}.abi_encode();
        assert_eq!(data.len(), 4);
    }
}
