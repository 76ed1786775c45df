use crate::{
    DerivedSeries, Indicator, PriceSeries, PriceSource, Result, TaError,
    rolling::{rolling_mean, rolling_std_dev},
};

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    num::NonZero,
};

/// Standard deviation multiplier for Bollinger Bands.
///
/// Wraps a positive, non-NaN `f64`. The constructor panics if the value is
/// zero, negative, or NaN.
///
/// Defaults to `2.0` (the standard Bollinger Bands setting).
///
/// Implements `Eq` and `Hash` via bit-level comparison, which is safe because
/// NaN is rejected at construction.
#[derive(Clone, Copy, Debug)]
pub struct StdDev(f64);

impl StdDev {
    /// Creates a new standard deviation multiplier.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero, negative, or NaN.
    #[must_use]
    pub fn new(value: f64) -> Self {
        assert!(!value.is_nan(), "std_dev must not be NaN");
        assert!(value > 0.0, "std_dev must be positive");
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for StdDev {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for StdDev {}

impl Hash for StdDev {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Default for StdDev {
    fn default() -> Self {
        Self(2.0)
    }
}

/// Configuration for the Bollinger Bands ([`Bollinger`]) indicator.
///
/// # Example
///
/// ```
/// use kumo_ta::BollingerConfig;
/// use std::num::NonZero;
///
/// // Default: close, 2.0 std devs
/// let config = BollingerConfig::builder()
///     .length(NonZero::new(20).unwrap())
///     .build();
///
/// assert_eq!(config.length(), 20);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct BollingerConfig {
    length: usize,
    source: PriceSource,
    std_dev: StdDev,
}

impl BollingerConfig {
    /// Returns a new builder with default values.
    #[must_use]
    pub fn builder() -> BollingerConfigBuilder {
        BollingerConfigBuilder::new()
    }

    /// Window length (number of observations).
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Price source the bands are computed over.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &PriceSource {
        &self.source
    }

    /// Standard deviation multiplier for the upper and lower bands.
    #[inline]
    #[must_use]
    pub fn std_dev(&self) -> StdDev {
        self.std_dev
    }

    /// BB(20, Close, 2σ), the standard Bollinger Bands setting.
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn default_20() -> Self {
        Self::builder().length(NonZero::new(20).unwrap()).build()
    }

    /// BB with custom length, close price, 2σ.
    #[must_use]
    pub fn close(length: NonZero<usize>) -> Self {
        Self::builder().length(length).build()
    }
}

impl Display for BollingerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BollingerConfig({}, {}, {})",
            self.length,
            self.source,
            self.std_dev.value()
        )
    }
}

/// Builder for [`BollingerConfig`].
///
/// Defaults: source = [`PriceSource::Close`], `std_dev` = `2.0`.
/// Length must be set before calling [`build`](BollingerConfigBuilder::build).
pub struct BollingerConfigBuilder {
    length: Option<usize>,
    source: PriceSource,
    std_dev: StdDev,
}

impl BollingerConfigBuilder {
    fn new() -> Self {
        Self {
            length: None,
            source: PriceSource::Close,
            std_dev: StdDev(2.0),
        }
    }

    #[inline]
    #[must_use]
    pub fn length(mut self, length: NonZero<usize>) -> Self {
        self.length.replace(length.get());
        self
    }

    #[inline]
    #[must_use]
    pub fn source(mut self, source: PriceSource) -> Self {
        self.source = source;
        self
    }

    #[inline]
    #[must_use]
    pub fn std_dev(mut self, std_dev: StdDev) -> Self {
        self.std_dev = std_dev;
        self
    }

    /// Builds the config. Panics if the length was not set.
    #[inline]
    #[must_use]
    pub fn build(self) -> BollingerConfig {
        BollingerConfig {
            length: self.length.expect("length is required"),
            source: self.source,
            std_dev: self.std_dev,
        }
    }
}

/// Bollinger Bands output: the three bands plus %B.
///
/// ```text
/// upper     = SMA + k × σ
/// middle    = SMA
/// lower     = SMA − k × σ
/// percent_b = (price − lower) / (upper − lower)
/// ```
///
/// where `σ` is the sample standard deviation of the window.
#[derive(Clone, Debug, PartialEq)]
pub struct BollingerSeries {
    middle: DerivedSeries,
    upper: DerivedSeries,
    lower: DerivedSeries,
    percent_b: DerivedSeries,
}

impl BollingerSeries {
    /// Middle band: rolling mean of the window.
    #[inline]
    #[must_use]
    pub fn middle(&self) -> &DerivedSeries {
        &self.middle
    }

    /// Upper band: `middle + k × σ`.
    #[inline]
    #[must_use]
    pub fn upper(&self) -> &DerivedSeries {
        &self.upper
    }

    /// Lower band: `middle − k × σ`.
    #[inline]
    #[must_use]
    pub fn lower(&self) -> &DerivedSeries {
        &self.lower
    }

    /// %B: the source price's position within the bands, 0 at the lower
    /// band, 1 at the upper. Undefined while the bands are, and wherever
    /// they collapse to zero width.
    #[inline]
    #[must_use]
    pub fn percent_b(&self) -> &DerivedSeries {
        &self.percent_b
    }
}

/// Bollinger Bands (BB).
///
/// A volatility indicator: a rolling mean (middle band) with upper and
/// lower bands offset by a configurable number of sample standard
/// deviations, plus %B normalizing the price into that range.
///
/// %B treats a not-yet-defined band as 0, which collapses the denominator
/// during the warm-up; those positions stay undefined rather than becoming
/// infinite. A zero-variance window collapses the bands the same way.
///
/// # Example
///
/// ```
/// use kumo_ta::{Bollinger, BollingerConfig, PriceSeries};
/// use std::num::NonZero;
///
/// let series = PriceSeries::from_close(vec![1.0, 3.0, 2.0]);
/// let config = BollingerConfig::close(NonZero::new(3).unwrap());
///
/// let bands = Bollinger::new(config).compute(&series)?;
///
/// // [1, 3, 2]: mean 2, sample deviation 1, k = 2.
/// assert_eq!(bands.middle().get(2), Some(2.0));
/// assert_eq!(bands.upper().get(2), Some(4.0));
/// assert_eq!(bands.lower().get(2), Some(0.0));
/// assert_eq!(bands.percent_b().get(2), Some(0.5));
/// # Ok::<(), kumo_ta::TaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Bollinger {
    config: BollingerConfig,
}

impl Bollinger {
    #[must_use]
    pub fn new(config: BollingerConfig) -> Self {
        Self { config }
    }
}

impl Indicator for Bollinger {
    type Output = BollingerSeries;

    fn compute(&self, series: &PriceSeries) -> Result<BollingerSeries> {
        if series.is_empty() {
            return Err(TaError::EmptySeries);
        }

        let source = self.config.source.column(series);
        let k = self.config.std_dev.value();

        let middle = rolling_mean(&source, self.config.length)?;
        let deviation = rolling_std_dev(&source, self.config.length)?;
        let upper = middle.zip_with(&deviation, |mean, sd| k.mul_add(sd, mean))?;
        let lower = middle.zip_with(&deviation, |mean, sd| (-k).mul_add(sd, mean))?;

        let percent_b = source
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                // An undefined band reads as 0 here, so the warm-up keeps a
                // zero denominator and stays undefined instead of dividing
                // toward infinity.
                let upper = upper.get(i).unwrap_or(0.0);
                let lower = lower.get(i).unwrap_or(0.0);
                let width = upper - lower;
                (width != 0.0).then(|| (price - lower) / width)
            })
            .collect();

        Ok(BollingerSeries {
            middle,
            upper,
            lower,
            percent_b,
        })
    }
}

impl Display for Bollinger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BB({}, {}, {})",
            self.config.length,
            self.config.source,
            self.config.std_dev.value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::nz;

    fn bb(length: usize) -> Bollinger {
        Bollinger::new(BollingerConfig::close(nz(length)))
    }

    fn bb_with_std_dev(length: usize, std_dev: f64) -> Bollinger {
        Bollinger::new(
            BollingerConfig::builder()
                .length(nz(length))
                .std_dev(StdDev::new(std_dev))
                .build(),
        )
    }

    mod bands {
        use super::*;

        #[test]
        fn basic_bands() {
            // Window [1, 3, 2]: mean 2, sample σ 1, k = 2.
            let series = PriceSeries::from_close(vec![1.0, 3.0, 2.0]);
            let out = bb(3).compute(&series).unwrap();

            assert_eq!(out.middle().get(2), Some(2.0));
            assert_eq!(out.upper().get(2), Some(4.0));
            assert_eq!(out.lower().get(2), Some(0.0));
        }

        #[test]
        fn warm_up_is_undefined() {
            let series = PriceSeries::from_close(vec![1.0, 3.0, 2.0, 4.0]);
            let out = bb(3).compute(&series).unwrap();

            for line in [out.middle(), out.upper(), out.lower()] {
                assert_eq!(line.get(0), None);
                assert_eq!(line.get(1), None);
                assert!(line.get(2).is_some());
            }
        }

        #[test]
        fn constant_input_collapses_the_bands() {
            let series = PriceSeries::from_close(vec![10.0; 4]);
            let out = bb(3).compute(&series).unwrap();

            assert_eq!(out.middle().get(3), Some(10.0));
            assert_eq!(out.upper().get(3), Some(10.0));
            assert_eq!(out.lower().get(3), Some(10.0));
        }

        #[test]
        fn bands_are_symmetric_around_the_middle() {
            let series = PriceSeries::from_close(vec![3.0, 5.0, 4.0, 8.0, 6.0]);
            let out = bb(3).compute(&series).unwrap();

            for i in 2..5 {
                let middle = out.middle().get(i).unwrap();
                let upper = out.upper().get(i).unwrap();
                let lower = out.lower().get(i).unwrap();
                assert!(
                    ((upper - middle) - (middle - lower)).abs() < 1e-12,
                    "asymmetric bands at {i}",
                );
            }
        }

        #[test]
        fn fractional_multiplier() {
            // Window [3, 5]: mean 4, sample σ = √2, k = 1.5.
            let series = PriceSeries::from_close(vec![3.0, 5.0]);
            let out = bb_with_std_dev(2, 1.5).compute(&series).unwrap();

            let sd = 2.0_f64.sqrt();
            let upper = out.upper().get(1).unwrap();
            assert!((upper - 1.5_f64.mul_add(sd, 4.0)).abs() < 1e-12);
        }
    }

    mod percent_b {
        use super::*;

        #[test]
        fn half_when_price_sits_on_the_middle() {
            // [1, 3, 2]: close 2 equals the window mean.
            let series = PriceSeries::from_close(vec![1.0, 3.0, 2.0]);
            let out = bb(3).compute(&series).unwrap();
            assert_eq!(out.percent_b().get(2), Some(0.5));
        }

        #[test]
        fn follows_the_normalization_formula() {
            // [2, 4]: mean 3, σ = √2, k = 1 → bands 3 ± √2.
            let series = PriceSeries::from_close(vec![2.0, 4.0]);
            let out = bb_with_std_dev(2, 1.0).compute(&series).unwrap();

            let b = out.percent_b().get(1).unwrap();
            // close = 4, lower = 3 − √2, width = 2√2
            let expected = (4.0 - (3.0 - 2.0_f64.sqrt())) / (2.0 * 2.0_f64.sqrt());
            assert!((b - expected).abs() < 1e-12);
        }

        #[test]
        fn undefined_during_warm_up() {
            let series = PriceSeries::from_close(vec![1.0, 3.0, 2.0]);
            let out = bb(3).compute(&series).unwrap();
            assert_eq!(out.percent_b().get(0), None);
            assert_eq!(out.percent_b().get(1), None);
        }

        #[test]
        fn undefined_when_the_bands_collapse() {
            let series = PriceSeries::from_close(vec![10.0; 4]);
            let out = bb(3).compute(&series).unwrap();
            // Bands are defined but zero-width: no %B, not an infinity.
            assert!(out.upper().get(3).is_some());
            assert_eq!(out.percent_b().get(3), None);
        }

        #[test]
        fn matches_the_input_length() {
            let series = PriceSeries::from_close(vec![1.0, 3.0, 2.0]);
            let out = bb(3).compute(&series).unwrap();
            assert_eq!(out.percent_b().len(), series.len());
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn empty_series_is_rejected() {
            let series = PriceSeries::from_close(vec![]);
            assert_eq!(bb(3).compute(&series).unwrap_err(), TaError::EmptySeries);
        }

        #[test]
        fn window_wider_than_the_series() {
            let series = PriceSeries::from_close(vec![1.0, 2.0]);
            assert_eq!(
                bb(3).compute(&series).unwrap_err(),
                TaError::InvalidWindow { window: 3, len: 2 },
            );
        }
    }

    mod config {
        use super::*;
        use std::collections::HashSet;

        #[test]
        fn default_std_dev_is_two() {
            let config = BollingerConfig::default_20();
            assert!((config.std_dev().value() - 2.0).abs() < f64::EPSILON);
        }

        #[test]
        fn default_source_is_close() {
            let config = BollingerConfig::default_20();
            assert_eq!(*config.source(), PriceSource::Close);
        }

        #[test]
        #[should_panic(expected = "length is required")]
        fn panics_without_length() {
            let _ = BollingerConfig::builder().build();
        }

        #[test]
        #[should_panic(expected = "std_dev must be positive")]
        fn std_dev_rejects_zero() {
            let _ = StdDev::new(0.0);
        }

        #[test]
        #[should_panic(expected = "std_dev must be positive")]
        fn std_dev_rejects_negative() {
            let _ = StdDev::new(-1.0);
        }

        #[test]
        #[should_panic(expected = "std_dev must not be NaN")]
        fn std_dev_rejects_nan() {
            let _ = StdDev::new(f64::NAN);
        }

        #[test]
        fn eq_and_hash() {
            let a = BollingerConfig::default_20();
            let b = BollingerConfig::default_20();
            let c = BollingerConfig::close(nz(10));

            let mut set = HashSet::new();
            set.insert(a);

            assert!(set.contains(&b));
            assert!(!set.contains(&c));
        }
    }

    mod display {
        use super::*;

        #[test]
        fn formats_correctly() {
            assert_eq!(bb(20).to_string(), "BB(20, Close, 2)");
        }

        #[test]
        fn config_formats_correctly() {
            assert_eq!(
                BollingerConfig::default_20().to_string(),
                "BollingerConfig(20, Close, 2)",
            );
        }
    }
}
