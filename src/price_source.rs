use crate::{Price, PriceSeries};

use std::fmt::{Debug, Display};

/// Price value extracted from each observation before feeding an indicator.
///
/// MACD and Bollinger Bands are configured with a `PriceSource` that
/// determines which column (or derived value) they compute on. Ichimoku and
/// OBV read their conventional columns directly and take no source.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum PriceSource {
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    #[default]
    Close,
    /// Median price: `(high + low) / 2`.
    HL2,
    /// Typical price: `(high + low + close) / 3`.
    HLC3,
}

impl Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl PriceSource {
    #[inline]
    pub(crate) fn at(self, series: &PriceSeries, i: usize) -> Price {
        match self {
            Self::High => series.high()[i],
            Self::Low => series.low()[i],
            Self::Close => series.close()[i],
            Self::HL2 => f64::midpoint(series.high()[i], series.low()[i]),
            Self::HLC3 => (series.high()[i] + series.low()[i] + series.close()[i]) / 3.0,
        }
    }

    /// Extracts the full column for this source.
    pub(crate) fn column(self, series: &PriceSeries) -> Vec<Price> {
        (0..series.len()).map(|i| self.at(series, i)).collect()
    }
}
