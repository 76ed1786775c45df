//! Rolling-window statistics over price slices.
//!
//! Each function takes a numeric slice and a window size `w` and returns a
//! [`DerivedSeries`] of the same length, where element `i` is the statistic
//! over the closed window `[i - w + 1, i]` once `i >= w - 1`, and undefined
//! before that.

use crate::{DerivedSeries, Price, Result, TaError};

use std::collections::VecDeque;

fn check_window(window: usize, len: usize) -> Result<()> {
    if window == 0 || window > len {
        return Err(TaError::InvalidWindow { window, len });
    }
    Ok(())
}

/// Rolling maximum.
///
/// # Errors
///
/// [`TaError::InvalidWindow`] if `window` is zero or exceeds `values.len()`.
///
/// # Example
///
/// ```
/// use kumo_ta::rolling_max;
///
/// let max = rolling_max(&[1.0, 5.0, 3.0, 4.0, 2.0], 3)?;
/// assert_eq!(max.values(), &[None, None, Some(5.0), Some(5.0), Some(4.0)]);
/// # Ok::<(), kumo_ta::TaError>(())
/// ```
pub fn rolling_max(values: &[Price], window: usize) -> Result<DerivedSeries> {
    rolling_extremum(values, window, |candidate, incumbent| candidate >= incumbent)
}

/// Rolling minimum.
///
/// # Errors
///
/// [`TaError::InvalidWindow`] if `window` is zero or exceeds `values.len()`.
pub fn rolling_min(values: &[Price], window: usize) -> Result<DerivedSeries> {
    rolling_extremum(values, window, |candidate, incumbent| candidate <= incumbent)
}

/// Monotonic-deque sweep, O(N) over the whole slice. The deque holds indices
/// whose values still matter for the current window, best at the front.
fn rolling_extremum(
    values: &[Price],
    window: usize,
    dominates: impl Fn(Price, Price) -> bool,
) -> Result<DerivedSeries> {
    check_window(window, values.len())?;

    let mut deque: VecDeque<usize> = VecDeque::with_capacity(window);
    let mut out = Vec::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        while deque.back().is_some_and(|&j| dominates(value, values[j])) {
            deque.pop_back();
        }
        deque.push_back(i);

        // Front index leaves the window once it is `window` positions behind.
        if deque.front().is_some_and(|&j| j + window <= i) {
            deque.pop_front();
        }
        debug_assert!(
            deque.front().is_some_and(|&j| j + window > i),
            "deque front must be inside the window ending at {i}",
        );

        out.push((i + 1 >= window).then(|| values[deque[0]]));
    }

    Ok(DerivedSeries::new(out))
}

/// Rolling arithmetic mean.
///
/// Maintained as a running sum, so long series accumulate at most a few ulps
/// of drift against a per-window recomputation.
///
/// # Errors
///
/// [`TaError::InvalidWindow`] if `window` is zero or exceeds `values.len()`.
pub fn rolling_mean(values: &[Price], window: usize) -> Result<DerivedSeries> {
    check_window(window, values.len())?;

    #[allow(clippy::cast_precision_loss)]
    let divisor = window as f64;
    let mut sum = 0.0;
    let mut out = Vec::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= values[i - window];
        }
        out.push((i + 1 >= window).then(|| sum / divisor));
    }

    Ok(DerivedSeries::new(out))
}

/// Rolling sample standard deviation (N−1 denominator).
///
/// A window of 1 has no sample deviation; every position of the result is
/// undefined in that case.
///
/// # Errors
///
/// [`TaError::InvalidWindow`] if `window` is zero or exceeds `values.len()`.
pub fn rolling_std_dev(values: &[Price], window: usize) -> Result<DerivedSeries> {
    check_window(window, values.len())?;

    if window == 1 {
        return Ok(DerivedSeries::undefined(values.len()));
    }

    #[allow(clippy::cast_precision_loss)]
    let n = window as f64;
    let mut sum = 0.0;
    let mut sum_of_squares = 0.0;
    let mut out = Vec::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        sum += value;
        sum_of_squares += value * value;
        if i >= window {
            let old = values[i - window];
            sum -= old;
            sum_of_squares -= old * old;
        }
        out.push((i + 1 >= window).then(|| {
            // Sample variance = (Σx² − (Σx)²/n) / (n − 1), clamped against
            // FP cancellation pushing a near-zero variance negative.
            let variance = (sum_of_squares - sum * sum / n) / (n - 1.0);
            variance.max(0.0).sqrt()
        }));
    }

    Ok(DerivedSeries::new(out))
}
