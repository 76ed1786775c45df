use crate::{DerivedSeries, Indicator, PriceSeries, Result, TaError};

use std::fmt::Display;

/// On-Balance Volume (OBV).
///
/// A cumulative volume total signed by the direction of each close-to-close
/// move: volume is added on an up-close, subtracted on a down-close, and
/// carried unchanged when the close repeats. The total starts at zero, so
/// every position of the output is defined; there is no warm-up.
///
/// ```text
/// obv[0] = 0
/// obv[i] = obv[i−1] + volume[i]   if close[i] > close[i−1]
///          obv[i−1] − volume[i]   if close[i] < close[i−1]
///          obv[i−1]               otherwise
/// ```
///
/// OBV has no parameters; construct it with [`Obv::new`].
///
/// # Example
///
/// ```
/// use kumo_ta::{Obv, PriceSeries};
///
/// let series = PriceSeries::from_columns(
///     vec![1.0, 2.0, 3.0, 2.0, 1.0],
///     vec![1.0, 2.0, 3.0, 2.0, 1.0],
///     vec![1.0, 2.0, 3.0, 2.0, 1.0],
///     vec![10.0, 10.0, 10.0, 10.0, 10.0],
/// )?;
///
/// let obv = Obv::new().compute(&series)?;
/// assert_eq!(
///     obv.values(),
///     &[Some(0.0), Some(10.0), Some(20.0), Some(10.0), Some(0.0)],
/// );
/// # Ok::<(), kumo_ta::TaError>(())
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct Obv;

impl Obv {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Indicator for Obv {
    type Output = DerivedSeries;

    fn compute(&self, series: &PriceSeries) -> Result<DerivedSeries> {
        if series.is_empty() {
            return Err(TaError::EmptySeries);
        }

        let close = series.close();
        let volume = series.volume();

        let mut total = 0.0;
        let mut out = Vec::with_capacity(close.len());
        out.push(Some(0.0));

        for i in 1..close.len() {
            if close[i] > close[i - 1] {
                total += volume[i];
            } else if close[i] < close[i - 1] {
                total -= volume[i];
            }
            out.push(Some(total));
        }

        Ok(DerivedSeries::new(out))
    }
}

impl Display for Obv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OBV")
    }
}
