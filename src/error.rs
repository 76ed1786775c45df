use thiserror::Error;

/// Errors raised by indicator computations.
///
/// Every variant is a local input-validation failure raised eagerly, before
/// any output is produced. Nothing here is transient: a failed call can only
/// succeed after the caller fixes its input, so there is no retry or
/// partial-output path.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TaError {
    /// A rolling window of zero observations, or one wider than the series
    /// it is applied to.
    #[error("invalid window {window} for series of length {len}")]
    InvalidWindow {
        /// Requested window size.
        window: usize,
        /// Length of the series the window was applied to.
        len: usize,
    },

    /// Two series that must be equally long are not.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// A zero-length input where at least one observation is required.
    #[error("empty series")]
    EmptySeries,
}

/// Result alias for indicator computations.
pub type Result<T> = std::result::Result<T, TaError>;
