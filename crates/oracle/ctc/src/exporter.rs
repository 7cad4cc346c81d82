//! Reads and reports the length of the canonical transaction chain.

use crate::{CtcError, TotalElementsSource};
use alloy_primitives::U256;
use tracing::{debug, warn};

/// Reads the CTC `totalElements` counter and records it.
#[derive(Debug, Clone)]
pub struct ChainLengthExporter<S> {
    source: S,
}

impl<S: TotalElementsSource> ChainLengthExporter<S> {
    /// Creates a new [`ChainLengthExporter`].
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads the counter, publishes it to the `l2ops_ctc_total_elements` gauge, and returns it.
    pub async fn export(&self) -> Result<U256, CtcError> {
        let total = match self.source.total_elements().await {
            Ok(total) => total,
            Err(err) => {
                warn!(target: "ctc", %err, "Failed to read total elements");
                l2ops_macros::inc!(gauge, crate::Metrics::READ_ERRORS);
                return Err(err);
            }
        };

        debug!(target: "ctc", %total, "Read total elements");
        l2ops_macros::set!(
            gauge,
            crate::Metrics::TOTAL_ELEMENTS,
            u128::try_from(total).unwrap_or(u128::MAX) as f64
        );
        Ok(total)
    }
}
