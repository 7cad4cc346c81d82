#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod bindings;

mod errors;
pub use errors::CtcError;

mod exporter;
pub use exporter::ChainLengthExporter;

mod metrics;
pub use metrics::Metrics;

mod source;
pub use source::{CanonicalTransactionChain, TotalElementsSource};
