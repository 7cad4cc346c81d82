//! Metric recording macros for l2ops crates.
//!
//! Every macro expands to a `metrics` call guarded by `#[cfg(feature = "metrics")]`, evaluated in
//! the calling crate. Callers must declare a `metrics` feature and depend on the `metrics` crate
//! behind it.

/// Sets a metric value, optionally with a specified label.
#[macro_export]
macro_rules! set {
    ($instrument:ident, $metric:path, $key:expr, $value:expr, $amount:expr) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric, $key => $value).set($amount);
    };
    ($instrument:ident, $metric:path, $amount:expr) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric).set($amount);
    };
}

/// Increments a metric value, optionally with labels.
#[macro_export]
macro_rules! inc {
    ($instrument:ident, $metric:path $(, $label_key:expr => $label_value:expr)* $(,)?) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric $(, $label_key => $label_value)*).increment(1);
    };
}
