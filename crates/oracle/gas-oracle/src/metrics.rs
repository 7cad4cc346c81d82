//! Metrics for the gas price oracle updater.

use alloy_primitives::U256;

/// Container for metrics.
#[derive(Debug, Clone)]
pub struct Metrics;

impl Metrics {
    /// Identifier for the gauge that tracks base fees, labelled by `source`.
    ///
    /// `source` is one of `l1_header`, `oracle` or `target`.
    pub const BASE_FEE: &str = "l2ops_gas_oracle_base_fee";

    /// Identifier for the gauge that counts updater invocations, labelled by `result`.
    ///
    /// `result` is one of `submitted`, `unchanged`, `clamped` or `failed`.
    pub const UPDATES: &str = "l2ops_gas_oracle_updates";

    /// Initializes metrics for the gas price oracle updater.
    ///
    /// This does two things:
    /// * Describes various metrics.
    /// * Initializes metrics to 0 so they can be queried immediately.
    #[cfg(feature = "metrics")]
    pub fn init() {
        Self::describe();
        Self::zero();
    }

    /// Describes metrics used in [`l2ops_gas_oracle`][crate].
    #[cfg(feature = "metrics")]
    pub fn describe() {
        metrics::describe_gauge!(Self::BASE_FEE, "Last seen base fee in wei, by source");
        metrics::describe_gauge!(Self::UPDATES, "Number of base fee update attempts, by result");
    }

    /// Initializes metrics to `0` so they can be queried immediately.
    #[cfg(feature = "metrics")]
    pub fn zero() {
        l2ops_macros::set!(gauge, Self::BASE_FEE, "source", "l1_header", 0);
        l2ops_macros::set!(gauge, Self::BASE_FEE, "source", "oracle", 0);
        l2ops_macros::set!(gauge, Self::BASE_FEE, "source", "target", 0);

        l2ops_macros::set!(gauge, Self::UPDATES, "result", "submitted", 0);
        l2ops_macros::set!(gauge, Self::UPDATES, "result", "unchanged", 0);
        l2ops_macros::set!(gauge, Self::UPDATES, "result", "clamped", 0);
        l2ops_macros::set!(gauge, Self::UPDATES, "result", "failed", 0);
    }

    /// Converts a wei amount to a gauge value, saturating at `u128::MAX`.
    #[cfg_attr(not(feature = "metrics"), allow(dead_code))]
    pub(crate) fn wei(value: U256) -> f64 {
        u128::try_from(value).unwrap_or(u128::MAX) as f64
    }
}
