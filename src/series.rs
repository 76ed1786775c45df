use crate::{Ohlcv, Price, Result, TaError};

/// An ordered, immutable series of price/volume observations.
///
/// Storage is column-oriented: `high`, `low`, `close` and `volume` vectors
/// of equal length, indexed by position with time ascending. A series is
/// constructed once from caller data and borrowed read-only by every
/// indicator; derived output is always positionally aligned to it.
///
/// The series carries no market-data validation beyond column lengths:
/// ascending order and finite, non-negative values are the caller's
/// contract. Violating it produces nonsensical but defined output.
///
/// # Example
///
/// ```
/// use kumo_ta::PriceSeries;
///
/// let series = PriceSeries::from_columns(
///     vec![11.0, 12.0, 13.0], // high
///     vec![9.0, 10.0, 11.0],  // low
///     vec![10.0, 11.0, 12.0], // close
///     vec![100.0, 90.0, 80.0], // volume
/// )?;
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.close(), &[10.0, 11.0, 12.0]);
/// # Ok::<(), kumo_ta::TaError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PriceSeries {
    high: Vec<Price>,
    low: Vec<Price>,
    close: Vec<Price>,
    volume: Vec<f64>,
}

impl PriceSeries {
    /// Builds a series from caller bars, oldest first.
    #[must_use]
    pub fn from_bars<B: Ohlcv>(bars: &[B]) -> Self {
        Self {
            high: bars.iter().map(Ohlcv::high).collect(),
            low: bars.iter().map(Ohlcv::low).collect(),
            close: bars.iter().map(Ohlcv::close).collect(),
            volume: bars.iter().map(Ohlcv::volume).collect(),
        }
    }

    /// Builds a series from independent, positionally aligned columns.
    ///
    /// # Errors
    ///
    /// [`TaError::LengthMismatch`] if any column disagrees with `high` in
    /// length.
    pub fn from_columns(
        high: Vec<Price>,
        low: Vec<Price>,
        close: Vec<Price>,
        volume: Vec<f64>,
    ) -> Result<Self> {
        let len = high.len();
        for other in [low.len(), close.len(), volume.len()] {
            if other != len {
                return Err(TaError::LengthMismatch { left: len, right: other });
            }
        }

        Ok(Self { high, low, close, volume })
    }

    /// Series whose high, low and close columns all equal `close`, with zero
    /// volume. Convenient for close-only indicators (MACD, Bollinger Bands).
    #[must_use]
    pub fn from_close(close: Vec<Price>) -> Self {
        Self {
            high: close.clone(),
            low: close.clone(),
            volume: vec![0.0; close.len()],
            close,
        }
    }

    /// Number of observations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// `true` if the series holds no observations.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// High column.
    #[inline]
    #[must_use]
    pub fn high(&self) -> &[Price] {
        &self.high
    }

    /// Low column.
    #[inline]
    #[must_use]
    pub fn low(&self) -> &[Price] {
        &self.low
    }

    /// Close column.
    #[inline]
    #[must_use]
    pub fn close(&self) -> &[Price] {
        &self.close
    }

    /// Volume column.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> &[f64] {
        &self.volume
    }
}
