#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod bindings;

mod config;
pub use config::{AlloyBaseFeeUpdater, GasOracleConfig};

mod errors;
pub use errors::GasOracleError;

mod fee;
pub use fee::{
    BaseFeeUpdate, MAX_SCALE, MaxPercentChange, MaxPercentChangeError, bounded_base_fee,
};

mod metrics;
pub use metrics::Metrics;

mod provider;
pub use provider::{AlloyGasPriceOracle, AlloyL1HeaderSource};

mod traits;
pub use traits::{GasPriceOracleApi, L1HeaderSource, SubmittedTx};

mod updater;
pub use updater::{BaseFeeUpdater, UpdateOutcome};
