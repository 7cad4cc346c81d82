//! The bounded L1 base fee update rule.
//!
//! The oracle value is allowed to follow the L1 header base fee, except that a single update may
//! not raise it by more than a configured fraction of its current value. The ceiling is computed
//! in exact integer arithmetic so that large base fees do not lose precision.

use alloy_primitives::U256;
use core::{fmt, str::FromStr};

/// The maximum number of fractional decimal digits a [`MaxPercentChange`] may carry.
pub const MAX_SCALE: u32 = 18;

/// The maximum number of integer decimal digits a [`MaxPercentChange`] may carry.
const MAX_INTEGER_DIGITS: usize = 20;

/// An error parsing a [`MaxPercentChange`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaxPercentChangeError {
    /// The input was empty.
    #[error("max percent change is empty")]
    Empty,
    /// The input was negative.
    #[error("max percent change must not be negative, got {0}")]
    Negative(String),
    /// The input was NaN or infinite.
    #[error("max percent change must be finite")]
    NotFinite,
    /// The input was not a plain decimal number.
    #[error("max percent change is not a decimal number: {0}")]
    Invalid(String),
    /// The input had more than [`MAX_SCALE`] significant fractional digits.
    #[error("max percent change has more than {MAX_SCALE} fractional digits")]
    TooPrecise,
    /// The integer part of the input was unreasonably large.
    #[error("max percent change is too large")]
    TooLarge,
}

/// The largest fraction by which one update may raise the oracle's base fee.
///
/// The value is held exactly as `numerator / 10^scale`, so `0.20` means "at most 20% above the
/// current value". A zero value disables the limit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxPercentChange {
    numerator: U256,
    scale: u32,
}

impl MaxPercentChange {
    /// A zero change, which disables the limit.
    pub const ZERO: Self = Self { numerator: U256::ZERO, scale: 0 };

    /// Returns `true` if this value disables the limit.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `ceil(current * (1 + self))`, saturating at [`U256::MAX`].
    pub fn ceiling(&self, current: U256) -> U256 {
        let denominator = U256::from(10u64.pow(self.scale));
        let factor = denominator + self.numerator;

        // current * factor / denominator == whole * factor + remainder * factor / denominator,
        // and only the second term can be fractional.
        let whole = current / denominator;
        let remainder = current % denominator;
        let scaled = remainder * factor;
        let mut fractional = scaled / denominator;
        if !(scaled % denominator).is_zero() {
            fractional += U256::from(1u8);
        }

        whole.saturating_mul(factor).saturating_add(fractional)
    }
}

impl FromStr for MaxPercentChange {
    type Err = MaxPercentChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MaxPercentChangeError::Empty);
        }
        if s.starts_with('-') {
            return Err(MaxPercentChangeError::Negative(s.to_string()));
        }

        let (integer, fraction) = s.split_once('.').unwrap_or((s, ""));
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction)
        {
            return Err(MaxPercentChangeError::Invalid(s.to_string()));
        }

        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > MAX_SCALE as usize {
            return Err(MaxPercentChangeError::TooPrecise);
        }
        let integer = integer.trim_start_matches('0');
        if integer.len() > MAX_INTEGER_DIGITS {
            return Err(MaxPercentChangeError::TooLarge);
        }

        let digits = format!("{integer}{fraction}");
        let numerator = if digits.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(&digits, 10)
                .map_err(|_| MaxPercentChangeError::Invalid(s.to_string()))?
        };

        Ok(Self { numerator, scale: fraction.len() as u32 })
    }
}

impl TryFrom<f64> for MaxPercentChange {
    type Error = MaxPercentChangeError;

    /// Converts through the shortest decimal representation of `value`, so `0.2` is read as the
    /// decimal `0.2` rather than the nearest binary fraction.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(MaxPercentChangeError::NotFinite);
        }
        if value == 0.0 {
            return Ok(Self::ZERO);
        }
        if value < 0.0 {
            return Err(MaxPercentChangeError::Negative(value.to_string()));
        }
        value.to_string().parse()
    }
}

impl fmt::Display for MaxPercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{}", self.numerator);
        }
        let digits = format!("{:0>width$}", self.numerator.to_string(), width = scale + 1);
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        write!(f, "{integer}.{fraction}")
    }
}

/// Returns the base fee to write to the oracle.
///
/// Without a limit (or with a zero limit) this is `observed`. Otherwise it is `observed` capped at
/// `ceil(current * (1 + limit))`. Decreases are never capped.
pub fn bounded_base_fee(current: U256, observed: U256, limit: Option<MaxPercentChange>) -> U256 {
    match limit.filter(|limit| !limit.is_zero()) {
        Some(limit) => observed.min(limit.ceiling(current)),
        None => observed,
    }
}

/// The outcome of applying the bounded update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseFeeUpdate {
    /// The oracle already holds the target value. No transaction is needed.
    Unchanged,
    /// The oracle should be updated to the contained value.
    Update(U256),
}

impl BaseFeeUpdate {
    /// Applies [`bounded_base_fee`] and decides whether a transaction is needed.
    pub fn compute(current: U256, observed: U256, limit: Option<MaxPercentChange>) -> Self {
        let target = bounded_base_fee(current, observed, limit);
        if target == current { Self::Unchanged } else { Self::Update(target) }
    }

    /// Returns the value to submit, if any.
    pub const fn target(&self) -> Option<U256> {
        match self {
            Self::Unchanged => None,
            Self::Update(target) => Some(*target),
        }
    }
}
