//! Metrics for the chain-length exporter.

/// Container for metrics.
#[derive(Debug, Clone)]
pub struct Metrics;

impl Metrics {
    /// Identifier for the gauge holding the last read `totalElements`.
    pub const TOTAL_ELEMENTS: &str = "l2ops_ctc_total_elements";

    /// Identifier for the gauge counting failed reads.
    pub const READ_ERRORS: &str = "l2ops_ctc_read_errors";

    /// Initializes metrics for the chain-length exporter.
    ///
    /// This does two things:
    /// * Describes various metrics.
    /// * Initializes metrics to 0 so they can be queried immediately.
    #[cfg(feature = "metrics")]
    pub fn init() {
        Self::describe();
        Self::zero();
    }

    /// Describes metrics used in [`l2ops_ctc`][crate].
    #[cfg(feature = "metrics")]
    pub fn describe() {
        metrics::describe_gauge!(Self::TOTAL_ELEMENTS, "Total elements in the CTC");
        metrics::describe_gauge!(Self::READ_ERRORS, "Number of failed CTC reads");
    }

    /// Initializes metrics to `0` so they can be queried immediately.
    #[cfg(feature = "metrics")]
    pub fn zero() {
        l2ops_macros::set!(gauge, Self::TOTAL_ELEMENTS, 0);
        l2ops_macros::set!(gauge, Self::READ_ERRORS, 0);
    }
}
