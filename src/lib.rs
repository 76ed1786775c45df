//! Batch technical analysis indicators for Rust.
//!
//! Indicators are configured up front and applied to a whole
//! [`PriceSeries`] at once. Every output is a [`DerivedSeries`] aligned
//! position-for-position with the input: element `i` derives from input
//! position `i`, and positions inside a warm-up window or shifted past the
//! series end are explicitly undefined rather than zero or NaN.
//!
//! Each indicator type ([`Ichimoku`], [`Macd`], [`Bollinger`], [`Obv`])
//! exposes `new` and `compute` as inherent methods; no trait import
//! needed. Import [`Indicator`] only for generic code.
//!
//! # Example
//!
//! ```
//! use kumo_ta::{Bollinger, BollingerConfig, PriceSeries};
//!
//! let close: Vec<f64> = (1..=40).map(f64::from).collect();
//! let series = PriceSeries::from_close(close);
//!
//! let bands = Bollinger::new(BollingerConfig::default_20()).compute(&series)?;
//!
//! assert_eq!(bands.middle().len(), series.len());
//! assert_eq!(bands.middle().get(18), None); // warm-up
//! assert_eq!(bands.middle().get(19), Some(10.5));
//! # Ok::<(), kumo_ta::TaError>(())
//! ```

mod analysis;
mod bollinger;
mod derived;
mod error;
mod ewma;
mod ichimoku;
mod indicator;
mod macd;
mod obv;
mod ohlcv;
mod price_source;
mod rolling;
mod series;

pub use crate::analysis::Analysis;
pub use crate::derived::DerivedSeries;
pub use crate::error::{Result, TaError};
pub use crate::indicator::Indicator;
pub use crate::ohlcv::{Ohlcv, Price};
pub use crate::price_source::PriceSource;
pub use crate::series::PriceSeries;

pub use crate::bollinger::{
    Bollinger, BollingerConfig, BollingerConfigBuilder, BollingerSeries, StdDev,
};
pub use crate::ewma::{CenterOfMass, EwmaParams, ewma, ewma_of};
pub use crate::ichimoku::{Ichimoku, IchimokuConfig, IchimokuConfigBuilder, IchimokuSeries};
pub use crate::macd::{Macd, MacdConfig, MacdConfigBuilder, MacdSeries};
pub use crate::obv::Obv;
pub use crate::rolling::{rolling_max, rolling_mean, rolling_min, rolling_std_dev};

macro_rules! impl_indicator_methods {
    ($type:ty, $output:ty) => {
        impl $type {
            /// See [`Indicator::compute`].
            ///
            /// # Errors
            ///
            /// See [`Indicator::compute`].
            #[inline]
            pub fn compute(&self, series: &PriceSeries) -> Result<$output> {
                <Self as Indicator>::compute(self, series)
            }
        }
    };
}

impl_indicator_methods!(Ichimoku, IchimokuSeries);
impl_indicator_methods!(Macd, MacdSeries);
impl_indicator_methods!(Bollinger, BollingerSeries);
impl_indicator_methods!(Obv, DerivedSeries);

#[cfg(test)]
mod test_util;
