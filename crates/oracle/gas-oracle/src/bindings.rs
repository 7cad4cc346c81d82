//! `GasPriceOracle` contract bindings.

use alloy_sol_types::sol;

sol! {
    /// The L2 `GasPriceOracle` predeploy.
    #[sol(rpc)]
    interface GasPriceOracle {
        /// Returns the L1 base fee currently stored by the oracle.
        function l1BaseFee() external view returns (uint256);

        /// Stores a new L1 base fee. Restricted to the oracle owner.
        function setL1BaseFee(uint256 _baseFee) external;
    }
}
