use crate::{
    Bollinger, BollingerConfig, BollingerSeries, DerivedSeries, Ichimoku, IchimokuConfig,
    IchimokuSeries, Macd, MacdConfig, MacdSeries, Obv, PriceSeries, Result,
};

/// Every indicator family at its conventional parameterization, computed in
/// one call.
///
/// Bundles Ichimoku(9, 26, 52), MACD(12, 26, 9), BB(20, Close, 2σ) and OBV
/// over the same series. Fails as its parts fail, typically
/// [`TaError::InvalidWindow`](crate::TaError::InvalidWindow) when the series
/// is shorter than the 52-observation senkou B window.
///
/// # Example
///
/// ```
/// use kumo_ta::{Analysis, PriceSeries};
///
/// let close: Vec<f64> = (1..=80).map(f64::from).collect();
/// let series = PriceSeries::from_close(close);
///
/// let analysis = Analysis::compute(&series)?;
/// assert_eq!(analysis.obv().len(), series.len());
/// assert!(analysis.bollinger().middle().get(19).is_some());
/// # Ok::<(), kumo_ta::TaError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    ichimoku: IchimokuSeries,
    macd: MacdSeries,
    bollinger: BollingerSeries,
    obv: DerivedSeries,
}

impl Analysis {
    /// Computes all four families over `series`.
    ///
    /// # Errors
    ///
    /// Whatever the individual indicators raise; nothing is returned unless
    /// every family computed.
    pub fn compute(series: &PriceSeries) -> Result<Self> {
        Ok(Self {
            ichimoku: Ichimoku::new(IchimokuConfig::standard()).compute(series)?,
            macd: Macd::new(MacdConfig::default_12_26_9()).compute(series)?,
            bollinger: Bollinger::new(BollingerConfig::default_20()).compute(series)?,
            obv: Obv::new().compute(series)?,
        })
    }

    /// Ichimoku lines.
    #[inline]
    #[must_use]
    pub fn ichimoku(&self) -> &IchimokuSeries {
        &self.ichimoku
    }

    /// MACD lines.
    #[inline]
    #[must_use]
    pub fn macd(&self) -> &MacdSeries {
        &self.macd
    }

    /// Bollinger bands.
    #[inline]
    #[must_use]
    pub fn bollinger(&self) -> &BollingerSeries {
        &self.bollinger
    }

    /// On-balance volume.
    #[inline]
    #[must_use]
    pub fn obv(&self) -> &DerivedSeries {
        &self.obv
    }
}
