//! Exponentially weighted moving averages.
//!
//! The recurrence is seeded from the first observation and runs over the
//! whole series:
//!
//! ```text
//! ema[0] = x[0]
//! ema[i] = α × x[i] + (1 − α) × ema[i−1],    α = 1 / (1 + com)
//! ```
//!
//! Output positions are reported undefined until `min_periods` observations
//! have been consumed, even though the recurrence itself starts at the first
//! one.

use crate::{DerivedSeries, Price};

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    num::NonZero,
};

/// Center-of-mass parameterization of an EWMA's decay.
///
/// Wraps a non-negative, non-NaN `f64`; the decay factor is
/// `α = 1 / (1 + com)`. The constructor panics if the value is negative or
/// NaN.
///
/// Implements `Eq` and `Hash` via bit-level comparison, which is safe
/// because NaN is rejected at construction.
#[derive(Clone, Copy, Debug)]
pub struct CenterOfMass(f64);

impl CenterOfMass {
    /// Creates a new center-of-mass value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative or NaN.
    #[must_use]
    pub fn new(value: f64) -> Self {
        assert!(!value.is_nan(), "com must not be NaN");
        assert!(value >= 0.0, "com must be non-negative");
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Decay factor `α = 1 / (1 + com)`.
    #[must_use]
    pub fn alpha(self) -> f64 {
        1.0 / (1.0 + self.0)
    }
}

impl PartialEq for CenterOfMass {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for CenterOfMass {}

impl Hash for CenterOfMass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// EWMA parameterization: decay via [`CenterOfMass`] plus the minimum
/// number of observations before the output is considered defined.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct EwmaParams {
    com: CenterOfMass,
    min_periods: usize,
}

impl EwmaParams {
    #[must_use]
    pub fn new(com: CenterOfMass, min_periods: NonZero<usize>) -> Self {
        Self {
            com,
            min_periods: min_periods.get(),
        }
    }

    #[must_use]
    pub fn com(&self) -> CenterOfMass {
        self.com
    }

    /// Observations required before the output is defined.
    #[must_use]
    pub fn min_periods(&self) -> usize {
        self.min_periods
    }
}

impl Display for EwmaParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EWMA({}, {})", self.com.value(), self.min_periods)
    }
}

/// EWMA over a fully defined slice.
///
/// Position `i` is defined iff `i >= min_periods − 1`. A `min_periods`
/// beyond the input length yields an all-undefined series, not an error.
///
/// # Example
///
/// ```
/// use kumo_ta::{CenterOfMass, EwmaParams, ewma};
/// use std::num::NonZero;
///
/// // com = 1 → α = 0.5
/// let params = EwmaParams::new(CenterOfMass::new(1.0), NonZero::new(2).unwrap());
/// let out = ewma(&[2.0, 4.0, 6.0], params);
///
/// assert_eq!(out.values(), &[None, Some(3.0), Some(4.5)]);
/// ```
#[must_use]
pub fn ewma(values: &[Price], params: EwmaParams) -> DerivedSeries {
    weighted(values.iter().map(|&v| Some(v)), params)
}

/// EWMA over a derived series.
///
/// Undefined positions leave the state untouched and stay undefined in the
/// output; the recurrence seeds at the first defined value and
/// `min_periods` counts defined observations only. This is how a signal
/// line runs over a MACD line that has a warm-up prefix.
#[must_use]
pub fn ewma_of(values: &DerivedSeries, params: EwmaParams) -> DerivedSeries {
    weighted(values.iter(), params)
}

fn weighted(values: impl Iterator<Item = Option<Price>>, params: EwmaParams) -> DerivedSeries {
    let alpha = params.com.alpha();
    let mut state: Option<Price> = None;
    let mut consumed = 0usize;

    values
        .map(|value| {
            let x = value?;
            let next = match state {
                None => x,
                Some(prev) => alpha.mul_add(x - prev, prev),
            };
            state = Some(next);
            consumed += 1;
            (consumed >= params.min_periods).then_some(next)
        })
        .collect()
}
