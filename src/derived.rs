use crate::{Price, Result, TaError};

/// A series derived from a [`PriceSeries`](crate::PriceSeries), positionally
/// aligned to it.
///
/// Element `i` corresponds to input position `i`. `None` marks a position
/// that is not defined: a warm-up window that is not yet full, or a shift
/// past either end of the series. A derived series always has exactly the
/// same length as the series it was computed from; undefined positions are
/// explicit, never a silent zero.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedSeries(Vec<Option<Price>>);

impl DerivedSeries {
    pub(crate) fn new(values: Vec<Option<Price>>) -> Self {
        Self(values)
    }

    /// A series of `len` undefined positions.
    pub(crate) fn undefined(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// A series where every position is defined.
    #[must_use]
    pub fn from_defined(values: impl IntoIterator<Item = Price>) -> Self {
        Self(values.into_iter().map(Some).collect())
    }

    /// Number of positions, defined or not.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the series has no positions at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index`, flattened: `None` for an undefined position *and*
    /// for an index past the end.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Price> {
        self.0.get(index).copied().flatten()
    }

    /// All positions in order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Option<Price>] {
        &self.0
    }

    /// Iterates over all positions in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Price>> + '_ {
        self.0.iter().copied()
    }

    /// Number of defined positions.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// Moves every value by `offset` positions, keeping the length.
    ///
    /// A positive offset moves values toward later indices (forward in
    /// time): `shift(k)[i] == self[i - k]`. A negative offset pulls future
    /// values earlier: `shift(-k)[i] == self[i + k]`. Positions whose source
    /// falls outside the series are undefined.
    ///
    /// # Example
    ///
    /// ```
    /// use kumo_ta::DerivedSeries;
    ///
    /// let series = DerivedSeries::from_defined([1.0, 2.0, 3.0]);
    ///
    /// assert_eq!(series.shift(1).values(), &[None, Some(1.0), Some(2.0)]);
    /// assert_eq!(series.shift(-1).values(), &[Some(2.0), Some(3.0), None]);
    /// ```
    #[must_use]
    pub fn shift(&self, offset: isize) -> Self {
        let len = self.0.len();
        let shifted = (0..len)
            .map(|i| {
                offset
                    .checked_neg()
                    .and_then(|back| i.checked_add_signed(back))
                    .filter(|&src| src < len)
                    .and_then(|src| self.0[src])
            })
            .collect();

        Self(shifted)
    }

    /// Combines two aligned series elementwise. The result is defined only
    /// where both operands are defined.
    ///
    /// # Errors
    ///
    /// [`TaError::LengthMismatch`] if the series differ in length.
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(Price, Price) -> Price,
    {
        if self.len() != other.len() {
            return Err(TaError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let combined = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a.zip(b).map(|(a, b)| f(a, b)))
            .collect();

        Ok(Self(combined))
    }
}

impl FromIterator<Option<Price>> for DerivedSeries {
    fn from_iter<I: IntoIterator<Item = Option<Price>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
