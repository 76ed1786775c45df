use crate::{
    DerivedSeries, Indicator, PriceSeries, Result, TaError,
    rolling::{rolling_max, rolling_min},
};

use std::{fmt::Display, num::NonZero};

/// Configuration for the Ichimoku Kinko Hyo ([`Ichimoku`]) indicator.
///
/// Holds the three look-back periods plus the displacement applied to the
/// shifted lines. The builder defaults to the standard 9/26/52
/// parameterization with a displacement of 26.
///
/// # Example
///
/// ```
/// use kumo_ta::IchimokuConfig;
/// use std::num::NonZero;
///
/// let config = IchimokuConfig::builder()
///     .tenkan(NonZero::new(7).unwrap())
///     .build();
///
/// assert_eq!(config.tenkan(), 7);
/// assert_eq!(config.kijun(), 26);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct IchimokuConfig {
    tenkan: usize,
    kijun: usize,
    senkou_b: usize,
    displacement: usize,
}

impl IchimokuConfig {
    /// Returns a new builder with the standard periods.
    #[must_use]
    pub fn builder() -> IchimokuConfigBuilder {
        IchimokuConfigBuilder::new()
    }

    /// Ichimoku(9, 26, 52) displaced by 26, the standard setting.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder().build()
    }

    /// Tenkan-sen (conversion line) period.
    #[inline]
    #[must_use]
    pub fn tenkan(&self) -> usize {
        self.tenkan
    }

    /// Kijun-sen (base line) period.
    #[inline]
    #[must_use]
    pub fn kijun(&self) -> usize {
        self.kijun
    }

    /// Senkou span B period.
    #[inline]
    #[must_use]
    pub fn senkou_b(&self) -> usize {
        self.senkou_b
    }

    /// Offset applied to the chikou and senkou lines.
    #[inline]
    #[must_use]
    pub fn displacement(&self) -> usize {
        self.displacement
    }
}

impl Display for IchimokuConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IchimokuConfig({}, {}, {}, {})",
            self.tenkan, self.kijun, self.senkou_b, self.displacement
        )
    }
}

/// Builder for [`IchimokuConfig`].
///
/// Defaults: tenkan 9, kijun 26, senkou B 52, displacement 26.
pub struct IchimokuConfigBuilder {
    tenkan: usize,
    kijun: usize,
    senkou_b: usize,
    displacement: usize,
}

impl IchimokuConfigBuilder {
    fn new() -> Self {
        Self {
            tenkan: 9,
            kijun: 26,
            senkou_b: 52,
            displacement: 26,
        }
    }

    #[inline]
    #[must_use]
    pub fn tenkan(mut self, period: NonZero<usize>) -> Self {
        self.tenkan = period.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn kijun(mut self, period: NonZero<usize>) -> Self {
        self.kijun = period.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn senkou_b(mut self, period: NonZero<usize>) -> Self {
        self.senkou_b = period.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn displacement(mut self, offset: NonZero<usize>) -> Self {
        self.displacement = offset.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn build(self) -> IchimokuConfig {
        IchimokuConfig {
            tenkan: self.tenkan,
            kijun: self.kijun,
            senkou_b: self.senkou_b,
            displacement: self.displacement,
        }
    }
}

/// Ichimoku output: five derived series aligned to the input.
#[derive(Clone, Debug, PartialEq)]
pub struct IchimokuSeries {
    tenkan: DerivedSeries,
    kijun: DerivedSeries,
    chikou: DerivedSeries,
    senkou_a: DerivedSeries,
    senkou_b: DerivedSeries,
}

impl IchimokuSeries {
    /// Tenkan-sen: midpoint of the 9-period high/low range.
    #[inline]
    #[must_use]
    pub fn tenkan(&self) -> &DerivedSeries {
        &self.tenkan
    }

    /// Kijun-sen: midpoint of the 26-period high/low range.
    #[inline]
    #[must_use]
    pub fn kijun(&self) -> &DerivedSeries {
        &self.kijun
    }

    /// Chikou span: the close, shifted 26 periods back. Position `i` holds
    /// the close 26 periods in the future, so the tail of the series is
    /// undefined.
    #[inline]
    #[must_use]
    pub fn chikou(&self) -> &DerivedSeries {
        &self.chikou
    }

    /// Senkou span A: tenkan/kijun midpoint, shifted like the chikou.
    #[inline]
    #[must_use]
    pub fn senkou_a(&self) -> &DerivedSeries {
        &self.senkou_a
    }

    /// Senkou span B: midpoint of the 52-period high/low range, shifted 26
    /// periods forward.
    #[inline]
    #[must_use]
    pub fn senkou_b(&self) -> &DerivedSeries {
        &self.senkou_b
    }
}

/// Ichimoku Kinko Hyo.
///
/// Five lines over the high/low/close columns: two range midpoints (tenkan,
/// kijun), the displaced close (chikou), and the two senkou spans bounding
/// the cloud. The shift direction differs per line and decides which
/// positions are plottable as cloud versus lagging span, so it is applied
/// as an explicit offset on each output series.
///
/// # Example
///
/// ```
/// use kumo_ta::{Ichimoku, IchimokuConfig, PriceSeries};
///
/// let close: Vec<f64> = (1..=80).map(f64::from).collect();
/// let series = PriceSeries::from_close(close);
///
/// let lines = Ichimoku::new(IchimokuConfig::standard()).compute(&series)?;
///
/// // Midpoint of a rising 1..=9 window: (9 + 1) / 2.
/// assert_eq!(lines.tenkan().get(8), Some(5.0));
/// // Chikou holds the close 26 periods later.
/// assert_eq!(lines.chikou().get(0), Some(27.0));
/// assert_eq!(lines.chikou().get(79), None);
/// # Ok::<(), kumo_ta::TaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Ichimoku {
    config: IchimokuConfig,
}

impl Ichimoku {
    #[must_use]
    pub fn new(config: IchimokuConfig) -> Self {
        Self { config }
    }

    /// Midpoint of the rolling high/low range over `period` observations.
    fn range_midline(series: &PriceSeries, period: usize) -> Result<DerivedSeries> {
        let highest = rolling_max(series.high(), period)?;
        let lowest = rolling_min(series.low(), period)?;
        highest.zip_with(&lowest, f64::midpoint)
    }
}

impl Indicator for Ichimoku {
    type Output = IchimokuSeries;

    fn compute(&self, series: &PriceSeries) -> Result<IchimokuSeries> {
        if series.is_empty() {
            return Err(TaError::EmptySeries);
        }

        let config = self.config;
        #[allow(clippy::cast_possible_wrap)]
        let displacement = config.displacement as isize;

        let tenkan = Self::range_midline(series, config.tenkan)?;
        let kijun = Self::range_midline(series, config.kijun)?;

        let chikou =
            DerivedSeries::from_defined(series.close().iter().copied()).shift(-displacement);
        let senkou_a = tenkan.zip_with(&kijun, f64::midpoint)?.shift(-displacement);
        let senkou_b = Self::range_midline(series, config.senkou_b)?.shift(displacement);

        Ok(IchimokuSeries {
            tenkan,
            kijun,
            chikou,
            senkou_a,
            senkou_b,
        })
    }
}

impl Display for Ichimoku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ichimoku({}, {}, {})",
            self.config.tenkan, self.config.kijun, self.config.senkou_b
        )
    }
}
