//! The base fee updater: fetch, compare, and maybe submit.

use crate::{
    BaseFeeUpdate, GasOracleError, GasPriceOracleApi, L1HeaderSource, MaxPercentChange,
    SubmittedTx,
};
use alloy_primitives::U256;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

/// The result of a single [`BaseFeeUpdater::update`] invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The oracle already held the target base fee; nothing was submitted.
    Unchanged {
        /// The base fee stored in the oracle.
        base_fee: U256,
    },
    /// An update transaction was submitted.
    Submitted {
        /// The base fee stored in the oracle before the update.
        previous: U256,
        /// The base fee of the latest L1 header.
        observed: U256,
        /// The base fee that was submitted, after the percent change limit.
        target: U256,
        /// The submitted transaction.
        tx: SubmittedTx,
    },
}

/// Keeps the `GasPriceOracle` L1 base fee in line with the L1 chain.
#[derive(Debug, Clone)]
pub struct BaseFeeUpdater<L1, O> {
    l1: L1,
    oracle: O,
    max_percent_change: Option<MaxPercentChange>,
}

impl<L1, O> BaseFeeUpdater<L1, O>
where
    L1: L1HeaderSource,
    O: GasPriceOracleApi,
{
    /// Creates a new [`BaseFeeUpdater`].
    pub const fn new(l1: L1, oracle: O, max_percent_change: Option<MaxPercentChange>) -> Self {
        Self { l1, oracle, max_percent_change }
    }

    /// Returns the configured maximum percent change, if any.
    pub const fn max_percent_change(&self) -> Option<MaxPercentChange> {
        self.max_percent_change
    }

    /// Runs one update: reads the oracle and the latest L1 header, then submits the bounded base
    /// fee if it differs from the stored one.
    pub async fn update(&self) -> Result<UpdateOutcome, GasOracleError> {
        let result = self.try_update().await;
        if result.is_err() {
            l2ops_macros::inc!(gauge, crate::Metrics::UPDATES, "result" => "failed");
        }
        result
    }

    async fn try_update(&self) -> Result<UpdateOutcome, GasOracleError> {
        let current = self.oracle.l1_base_fee().await?;
        let observed = self.l1.latest_base_fee().await?;
        l2ops_macros::set!(
            gauge,
            crate::Metrics::BASE_FEE,
            "source",
            "oracle",
            crate::Metrics::wei(current)
        );
        l2ops_macros::set!(
            gauge,
            crate::Metrics::BASE_FEE,
            "source",
            "l1_header",
            crate::Metrics::wei(observed)
        );

        let target = match BaseFeeUpdate::compute(current, observed, self.max_percent_change) {
            BaseFeeUpdate::Unchanged => {
                debug!(target: "gas_oracle", %current, %observed, "Base fee unchanged, skipping");
                l2ops_macros::inc!(gauge, crate::Metrics::UPDATES, "result" => "unchanged");
                return Ok(UpdateOutcome::Unchanged { base_fee: current });
            }
            BaseFeeUpdate::Update(target) => target,
        };

        if target != observed {
            info!(
                target: "gas_oracle",
                %current,
                %observed,
                bounded = %target,
                limit = ?self.max_percent_change.map(|limit| limit.to_string()),
                "Base fee change exceeds limit, clamping"
            );
            l2ops_macros::inc!(gauge, crate::Metrics::UPDATES, "result" => "clamped");
        }

        let tx = self.oracle.set_l1_base_fee(target).await?;
        l2ops_macros::set!(
            gauge,
            crate::Metrics::BASE_FEE,
            "source",
            "target",
            crate::Metrics::wei(target)
        );
        l2ops_macros::inc!(gauge, crate::Metrics::UPDATES, "result" => "submitted");
        info!(
            target: "gas_oracle",
            tx_hash = %tx.tx_hash,
            block = ?tx.block_number,
            previous = %current,
            base_fee = %target,
            "L1 base fee update sent"
        );

        Ok(UpdateOutcome::Submitted { previous: current, observed, target, tx })
    }

    /// Runs [`Self::update`] every `interval`, logging failures and carrying on.
    ///
    /// Never returns; the caller is expected to race it against a shutdown signal.
    pub async fn run(&self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(err) = self.update().await {
                error!(target: "gas_oracle", %err, "Failed to update L1 base fee");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{B256, TxHash};
    use alloy_transport::TransportErrorKind;
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug, Clone)]
    enum Header {
        BaseFee(u64),
        PreLondon(u64),
        Missing,
    }

    #[derive(Debug, Clone)]
    struct MockL1 {
        header: Header,
        calls: Arc<AtomicUsize>,
    }

    impl MockL1 {
        fn new(header: Header) -> Self {
            Self { header, calls: Arc::new(AtomicUsize::new(0)) }
        }
    }

    #[async_trait]
    impl L1HeaderSource for MockL1 {
        async fn latest_base_fee(&self) -> Result<U256, GasOracleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.header {
                Header::BaseFee(fee) => Ok(U256::from(fee)),
                Header::PreLondon(number) => Err(GasOracleError::NoBaseFee(number)),
                Header::Missing => Err(GasOracleError::BlockNotFound),
            }
        }
    }

    /// An in-memory oracle that applies submitted values immediately.
    #[derive(Debug, Clone, Default)]
    struct MockOracle {
        stored: Arc<Mutex<U256>>,
        submitted: Arc<Mutex<Vec<U256>>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MockOracle {
        fn with_value(value: u64) -> Self {
            Self { stored: Arc::new(Mutex::new(U256::from(value))), ..Default::default() }
        }

        fn stored(&self) -> U256 {
            *self.stored.lock().unwrap()
        }

        fn submitted(&self) -> Vec<U256> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GasPriceOracleApi for MockOracle {
        async fn l1_base_fee(&self) -> Result<U256, GasOracleError> {
            if self.fail_reads {
                return Err(TransportErrorKind::custom_str("connection refused").into());
            }
            Ok(self.stored())
        }

        async fn set_l1_base_fee(&self, base_fee: U256) -> Result<SubmittedTx, GasOracleError> {
            if self.fail_writes {
                return Err(TransportErrorKind::custom_str("insufficient funds for gas").into());
            }
            self.submitted.lock().unwrap().push(base_fee);
            *self.stored.lock().unwrap() = base_fee;
            Ok(SubmittedTx { tx_hash: TxHash::from(B256::with_last_byte(1)), block_number: None })
        }
    }

    fn limit(s: &str) -> Option<MaxPercentChange> {
        Some(s.parse().unwrap())
    }

    #[tokio::test]
    async fn test_update_from_zero_without_limit() {
        let oracle = MockOracle::with_value(0);
        let l1 = MockL1::new(Header::BaseFee(875_000_000));
        let updater = BaseFeeUpdater::new(l1, oracle.clone(), None);

        let outcome = updater.update().await.unwrap();

        let UpdateOutcome::Submitted { previous, observed, target, .. } = outcome else {
            panic!("expected a submission, got {outcome:?}");
        };
        assert_eq!(previous, U256::ZERO);
        assert_eq!(observed, U256::from(875_000_000u64));
        assert_eq!(target, observed);
        assert_eq!(oracle.stored(), U256::from(875_000_000u64));
    }

    #[tokio::test]
    async fn test_update_clamps_to_max_percent_change() {
        let oracle = MockOracle::with_value(100_000);
        let l1 = MockL1::new(Header::BaseFee(677_228_895));
        let updater = BaseFeeUpdater::new(l1, oracle.clone(), limit("0.20"));

        let outcome = updater.update().await.unwrap();

        assert!(matches!(
            outcome,
            UpdateOutcome::Submitted { target, .. } if target == U256::from(120_000u64)
        ));
        assert_eq!(oracle.submitted(), vec![U256::from(120_000u64)]);
    }

    #[tokio::test]
    async fn test_repeated_updates_converge_stepwise() {
        let oracle = MockOracle::with_value(100_000);
        let l1 = MockL1::new(Header::BaseFee(150_000));
        let updater = BaseFeeUpdater::new(l1, oracle.clone(), limit("0.2"));

        for _ in 0..4 {
            updater.update().await.unwrap();
        }

        assert_eq!(
            oracle.submitted(),
            vec![U256::from(120_000u64), U256::from(144_000u64), U256::from(150_000u64)]
        );
        assert_eq!(
            updater.update().await.unwrap(),
            UpdateOutcome::Unchanged { base_fee: U256::from(150_000u64) }
        );
    }

    #[tokio::test]
    async fn test_update_skips_equal_values() {
        let oracle = MockOracle::with_value(30_000_000_000);
        let l1 = MockL1::new(Header::BaseFee(30_000_000_000));
        let updater = BaseFeeUpdater::new(l1, oracle.clone(), None);

        let outcome = updater.update().await.unwrap();

        assert_eq!(outcome, UpdateOutcome::Unchanged { base_fee: U256::from(30_000_000_000u64) });
        assert!(oracle.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_decrease_is_not_limited() {
        let oracle = MockOracle::with_value(100_000);
        let l1 = MockL1::new(Header::BaseFee(7));
        let updater = BaseFeeUpdater::new(l1, oracle.clone(), limit("0.01"));

        updater.update().await.unwrap();

        assert_eq!(oracle.stored(), U256::from(7u64));
    }

    #[tokio::test]
    async fn test_missing_base_fee_is_an_error() {
        let oracle = MockOracle::with_value(1);
        let l1 = MockL1::new(Header::PreLondon(12_964_999));
        let updater = BaseFeeUpdater::new(l1, oracle.clone(), None);

        let err = updater.update().await.unwrap_err();

        assert!(matches!(err, GasOracleError::NoBaseFee(12_964_999)));
        assert!(oracle.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_missing_block_is_an_error() {
        let updater = BaseFeeUpdater::new(MockL1::new(Header::Missing), MockOracle::default(), None);
        assert!(matches!(updater.update().await, Err(GasOracleError::BlockNotFound)));
    }

    #[tokio::test]
    async fn test_oracle_read_failure_skips_header() {
        let l1 = MockL1::new(Header::BaseFee(10));
        let oracle = MockOracle { fail_reads: true, ..Default::default() };
        let updater = BaseFeeUpdater::new(l1.clone(), oracle, None);

        let err = updater.update().await.unwrap_err();

        assert!(matches!(err, GasOracleError::Transport(_)));
        assert_eq!(l1.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_failure_is_surfaced() {
        let oracle = MockOracle { fail_writes: true, ..Default::default() };
        let updater = BaseFeeUpdater::new(MockL1::new(Header::BaseFee(10)), oracle, None);

        let err = updater.update().await.unwrap_err();

        assert!(err.to_string().contains("insufficient funds"), "unexpected error: {err}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_keeps_going_after_failures() {
        let l1 = MockL1::new(Header::Missing);
        let updater = BaseFeeUpdater::new(l1.clone(), MockOracle::default(), None);

        let _ = tokio::time::timeout(Duration::from_secs(35), updater.run(Duration::from_secs(10)))
            .await;

        // Ticks at 0s, 10s, 20s and 30s.
        assert_eq!(l1.calls.load(Ordering::SeqCst), 4);
    }
}
