use crate::{PriceSeries, Result};

use std::fmt::{Debug, Display};

/// A batch technical indicator.
///
/// An indicator is configured up front and then applied to a whole
/// [`PriceSeries`] at once. It is a pure function of its input: no internal
/// state, nothing cached, the full series recomputed on every call. Output
/// series are positionally aligned to the input and mark warm-up or shifted
/// positions as undefined.
///
/// Each indicator type also exposes [`compute`](Indicator::compute) as an
/// inherent method, so importing this trait is only needed for generic
/// code.
///
/// # Example
///
/// ```
/// use kumo_ta::{Indicator, Obv, PriceSeries};
///
/// fn describe<I: Indicator>(indicator: &I, series: &PriceSeries) -> String {
///     match indicator.compute(series) {
///         Ok(_) => format!("{indicator}: ok"),
///         Err(err) => format!("{indicator}: {err}"),
///     }
/// }
///
/// let series = PriceSeries::from_close(vec![1.0, 2.0]);
/// assert_eq!(describe(&Obv::new(), &series), "OBV: ok");
/// ```
pub trait Indicator: Sized + Clone + Display + Debug {
    /// Computed output type: a single [`DerivedSeries`](crate::DerivedSeries)
    /// or a bundle of them.
    type Output;

    /// Computes this indicator over the full series.
    ///
    /// # Errors
    ///
    /// Returns a [`TaError`](crate::TaError) if the series is empty, shorter
    /// than a configured window, or otherwise unusable. No partial output is
    /// ever produced.
    fn compute(&self, series: &PriceSeries) -> Result<Self::Output>;
}
