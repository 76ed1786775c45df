use crate::{
    CenterOfMass, DerivedSeries, EwmaParams, Indicator, PriceSeries, PriceSource, Result, TaError,
    ewma::{ewma, ewma_of},
};

use std::{fmt::Display, num::NonZero};

/// Configuration for the Moving Average Convergence Divergence ([`Macd`])
/// indicator.
///
/// Each of the three EWMAs is parameterized by center-of-mass and
/// `min_periods` (see [`EwmaParams`]). The builder defaults to the
/// conventional setting: fast com 5.5 over 12 periods, slow com 12.5 over
/// 26, signal com 4 over 9 (a com of `(period − 1) / 2`).
///
/// # Example
///
/// ```
/// use kumo_ta::{CenterOfMass, EwmaParams, MacdConfig};
/// use std::num::NonZero;
///
/// let config = MacdConfig::builder()
///     .signal(EwmaParams::new(
///         CenterOfMass::new(2.0),
///         NonZero::new(5).unwrap(),
///     ))
///     .build();
///
/// assert_eq!(config.signal().min_periods(), 5);
/// assert_eq!(config.slow().min_periods(), 26);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct MacdConfig {
    fast: EwmaParams,
    slow: EwmaParams,
    signal: EwmaParams,
    source: PriceSource,
}

impl MacdConfig {
    /// Returns a new builder with the conventional parameters.
    #[must_use]
    pub fn builder() -> MacdConfigBuilder {
        MacdConfigBuilder::new()
    }

    /// MACD(12, 26, 9) on the close, the conventional setting.
    #[must_use]
    pub fn default_12_26_9() -> Self {
        Self::builder().build()
    }

    /// Fast EWMA parameters.
    #[inline]
    #[must_use]
    pub fn fast(&self) -> EwmaParams {
        self.fast
    }

    /// Slow EWMA parameters.
    #[inline]
    #[must_use]
    pub fn slow(&self) -> EwmaParams {
        self.slow
    }

    /// Signal-line EWMA parameters.
    #[inline]
    #[must_use]
    pub fn signal(&self) -> EwmaParams {
        self.signal
    }

    /// Price source the EMAs run over.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &PriceSource {
        &self.source
    }
}

impl Display for MacdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MacdConfig({}/{}, {}/{}, {}/{}, {})",
            self.fast.com().value(),
            self.fast.min_periods(),
            self.slow.com().value(),
            self.slow.min_periods(),
            self.signal.com().value(),
            self.signal.min_periods(),
            self.source
        )
    }
}

/// Builder for [`MacdConfig`].
///
/// Defaults: fast `(com 5.5, 12)`, slow `(com 12.5, 26)`,
/// signal `(com 4, 9)`, source = [`PriceSource::Close`].
pub struct MacdConfigBuilder {
    fast: EwmaParams,
    slow: EwmaParams,
    signal: EwmaParams,
    source: PriceSource,
}

impl MacdConfigBuilder {
    #[allow(clippy::missing_panics_doc)]
    fn new() -> Self {
        let pair = |com: f64, periods: usize| {
            EwmaParams::new(CenterOfMass::new(com), NonZero::new(periods).unwrap())
        };

        Self {
            fast: pair(5.5, 12),
            slow: pair(12.5, 26),
            signal: pair(4.0, 9),
            source: PriceSource::Close,
        }
    }

    #[inline]
    #[must_use]
    pub fn fast(mut self, params: EwmaParams) -> Self {
        self.fast = params;
        self
    }

    #[inline]
    #[must_use]
    pub fn slow(mut self, params: EwmaParams) -> Self {
        self.slow = params;
        self
    }

    #[inline]
    #[must_use]
    pub fn signal(mut self, params: EwmaParams) -> Self {
        self.signal = params;
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
    pub fn build(self) -> MacdConfig {
        MacdConfig {
            fast: self.fast,
            slow: self.slow,
            signal: self.signal,
            source: self.source,
        }
    }
}

/// MACD output: the two EMAs, their difference, and the signal line.
#[derive(Clone, Debug, PartialEq)]
pub struct MacdSeries {
    ema_fast: DerivedSeries,
    ema_slow: DerivedSeries,
    macd: DerivedSeries,
    signal: DerivedSeries,
}

impl MacdSeries {
    /// Fast EWMA of the source column.
    #[inline]
    #[must_use]
    pub fn ema_fast(&self) -> &DerivedSeries {
        &self.ema_fast
    }

    /// Slow EWMA of the source column.
    #[inline]
    #[must_use]
    pub fn ema_slow(&self) -> &DerivedSeries {
        &self.ema_slow
    }

    /// MACD line: fast EMA minus slow EMA, defined only where both are.
    #[inline]
    #[must_use]
    pub fn macd(&self) -> &DerivedSeries {
        &self.macd
    }

    /// Signal line: EWMA of the MACD line.
    #[inline]
    #[must_use]
    pub fn signal(&self) -> &DerivedSeries {
        &self.signal
    }
}

/// Moving Average Convergence Divergence (MACD).
///
/// Two exponentially weighted averages of the source column, their
/// difference, and a third EWMA smoothing that difference into the signal
/// line. The slow EMA's `min_periods` dominates the warm-up: the MACD line
/// is defined exactly where both EMAs are.
///
/// # Example
///
/// ```
/// use kumo_ta::{Macd, MacdConfig, PriceSeries};
///
/// let close: Vec<f64> = (1..=60).map(f64::from).collect();
/// let series = PriceSeries::from_close(close);
///
/// let out = Macd::new(MacdConfig::default_12_26_9()).compute(&series)?;
///
/// assert_eq!(out.macd().get(24), None); // slow EMA still warming up
/// assert!(out.macd().get(25).is_some());
/// assert!(out.signal().get(33).is_some());
/// # Ok::<(), kumo_ta::TaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Macd {
    config: MacdConfig,
}

impl Macd {
    #[must_use]
    pub fn new(config: MacdConfig) -> Self {
        Self { config }
    }
}

impl Indicator for Macd {
    type Output = MacdSeries;

    fn compute(&self, series: &PriceSeries) -> Result<MacdSeries> {
        if series.is_empty() {
            return Err(TaError::EmptySeries);
        }

        let source = self.config.source.column(series);
        let ema_fast = ewma(&source, self.config.fast);
        let ema_slow = ewma(&source, self.config.slow);
        let macd = ema_fast.zip_with(&ema_slow, |fast, slow| fast - slow)?;
        let signal = ewma_of(&macd, self.config.signal);

        Ok(MacdSeries {
            ema_fast,
            ema_slow,
            macd,
            signal,
        })
    }
}

impl Display for Macd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MACD({}/{}, {}/{}, {}/{}, {})",
            self.config.fast.com().value(),
            self.config.fast.min_periods(),
            self.config.slow.com().value(),
            self.config.slow.min_periods(),
            self.config.signal.com().value(),
            self.config.signal.min_periods(),
            self.config.source
        )
    }
}
