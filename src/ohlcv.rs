/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// OHLCV observation data used to build a [`PriceSeries`](crate::PriceSeries).
///
/// Implement this on your own kline/candle type to avoid a conversion step:
/// [`PriceSeries::from_bars`](crate::PriceSeries::from_bars) accepts any
/// `&[impl Ohlcv]`. Observations must be handed over in ascending time
/// order; the series is indexed by position, oldest first.
///
/// # Example
///
/// ```
/// use kumo_ta::{Ohlcv, Price};
///
/// struct MyCandle {
///     h: f64, l: f64, c: f64, v: f64,
/// }
///
/// impl Ohlcv for MyCandle {
///     fn high(&self) -> Price { self.h }
///     fn low(&self) -> Price { self.l }
///     fn close(&self) -> Price { self.c }
///     fn volume(&self) -> f64 { self.v }
/// }
/// ```
pub trait Ohlcv {
    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing price of the bar.
    fn close(&self) -> Price;

    /// Trade volume during the bar. Defaults to `0.0`.
    ///
    /// Override this for volume-dependent indicators (OBV). Indicators that
    /// don't use volume ignore this value.
    fn volume(&self) -> f64 {
        0.0
    }
}
