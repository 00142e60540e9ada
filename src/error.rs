//! Error type shared by coefficient synthesis and the filter engine.

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when configuring or running a filter.
///
/// All variants describe bad input from the caller. None of them are
/// retryable: fix the argument and call again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Sample rate was zero, negative or not finite
    #[error("invalid sample rate: {0} Hz (must be > 0)")]
    InvalidSampleRate(f64),

    /// Cutoff outside `[0, nyquist)`
    #[error("invalid cutoff frequency: {cutoff_hz} Hz (must be in [0, {nyquist_hz}) Hz)")]
    InvalidCutoff { cutoff_hz: f64, nyquist_hz: f64 },

    /// Q was zero or negative
    #[error("invalid q: {0} (must be > 0)")]
    InvalidQ(f64),

    /// Filter type name not recognized after normalization
    #[error("invalid filter type: '{0}'")]
    InvalidFilterType(String),

    /// Raw coefficients with `a[0]` zero or not finite
    #[error("invalid coefficients: a[0] = {0} (must be finite and non-zero)")]
    InvalidCoefficients(f64),

    /// Streaming block did not match the prepared `(channels, block_length)` shape
    #[error("shape mismatch: expected {expected:?} (channels, samples), found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Streaming filter used before `prepare_streaming`
    #[error("streaming filter used before prepare_streaming")]
    NotPrepared,
}
