//! Musically meaningful filter parameters.

use super::FilterType;
use crate::{Error, Result};

/// Default cutoff / center frequency in Hz.
pub const DEFAULT_CUTOFF_HZ: f64 = 1000.0;
/// Default Q.
pub const DEFAULT_Q: f64 = 1.0;
/// Default gain in dB for the gain-aware types.
pub const DEFAULT_GAIN_DB: f64 = 1.0;

/// Parameters a biquad is designed from.
///
/// `gain_db` is stored for every type but only Peaking and the shelves read it.
///
/// # Examples
///
/// ```
/// use quadfilter::{FilterSpec, FilterType};
///
/// let spec = FilterSpec::new(48000.0, FilterType::Peaking)
///     .with_cutoff(2500.0)
///     .with_q(1.414)
///     .with_gain_db(-6.0);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSpec {
    /// Sample rate in Hz, must be > 0
    pub sample_rate_hz: f64,
    /// Response shape
    pub filter_type: FilterType,
    /// Cutoff or center frequency in Hz, must be in `[0, sample_rate_hz / 2)`
    #[cfg_attr(feature = "serde", serde(default = "default_cutoff"))]
    pub cutoff_hz: f64,
    /// Quality factor, must be > 0
    #[cfg_attr(feature = "serde", serde(default = "default_q"))]
    pub q: f64,
    /// Gain in dB (Peaking, LowShelf, HighShelf)
    #[cfg_attr(feature = "serde", serde(default = "default_gain_db"))]
    pub gain_db: f64,
}

#[cfg(feature = "serde")]
fn default_cutoff() -> f64 {
    DEFAULT_CUTOFF_HZ
}

#[cfg(feature = "serde")]
fn default_q() -> f64 {
    DEFAULT_Q
}

#[cfg(feature = "serde")]
fn default_gain_db() -> f64 {
    DEFAULT_GAIN_DB
}

impl FilterSpec {
    /// Creates a spec with the default cutoff (1 kHz), Q (1.0) and gain (1 dB).
    pub fn new(sample_rate_hz: f64, filter_type: FilterType) -> Self {
        Self {
            sample_rate_hz,
            filter_type,
            cutoff_hz: DEFAULT_CUTOFF_HZ,
            q: DEFAULT_Q,
            gain_db: DEFAULT_GAIN_DB,
        }
    }

    /// Sets the cutoff or center frequency in Hz.
    pub fn with_cutoff(mut self, cutoff_hz: f64) -> Self {
        self.cutoff_hz = cutoff_hz;
        self
    }

    /// Sets the Q factor.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Sets the gain in dB.
    pub fn with_gain_db(mut self, gain_db: f64) -> Self {
        self.gain_db = gain_db;
        self
    }

    /// Half the sample rate.
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    /// Checks sample rate, cutoff and Q, in that order.
    ///
    /// A NaN parameter fails the corresponding check.
    pub fn validate(&self) -> Result<()> {
        validate_sample_rate(self.sample_rate_hz)?;

        let nyquist_hz = self.nyquist_hz();
        if self.cutoff_hz.is_nan() || self.cutoff_hz < 0.0 || self.cutoff_hz >= nyquist_hz {
            return Err(Error::InvalidCutoff {
                cutoff_hz: self.cutoff_hz,
                nyquist_hz,
            });
        }

        if self.q.is_nan() || self.q <= 0.0 {
            return Err(Error::InvalidQ(self.q));
        }

        Ok(())
    }
}

pub(crate) fn validate_sample_rate(sample_rate_hz: f64) -> Result<()> {
    if sample_rate_hz > 0.0 && sample_rate_hz.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidSampleRate(sample_rate_hz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = FilterSpec::new(44100.0, FilterType::LowPass);
        assert_eq!(spec.cutoff_hz, 1000.0);
        assert_eq!(spec.q, 1.0);
        assert_eq!(spec.gain_db, 1.0);
        assert_eq!(spec.nyquist_hz(), 22050.0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_invalid_sample_rate() {
        for sr in [0.0, -48000.0, f64::NAN, f64::INFINITY] {
            let spec = FilterSpec::new(sr, FilterType::LowPass);
            assert!(matches!(
                spec.validate(),
                Err(Error::InvalidSampleRate(_))
            ));
        }
    }

    #[test]
    fn test_cutoff_bounds() {
        let spec = FilterSpec::new(48000.0, FilterType::LowPass);

        assert!(spec.with_cutoff(0.0).validate().is_ok());
        assert!(spec.with_cutoff(23999.9).validate().is_ok());

        assert_eq!(
            spec.with_cutoff(24000.0).validate(),
            Err(Error::InvalidCutoff {
                cutoff_hz: 24000.0,
                nyquist_hz: 24000.0
            })
        );
        assert!(matches!(
            spec.with_cutoff(-1.0).validate(),
            Err(Error::InvalidCutoff { .. })
        ));
        assert!(matches!(
            spec.with_cutoff(f64::NAN).validate(),
            Err(Error::InvalidCutoff { .. })
        ));
    }

    #[test]
    fn test_q_bounds() {
        let spec = FilterSpec::new(48000.0, FilterType::Notch);

        assert_eq!(spec.with_q(0.0).validate(), Err(Error::InvalidQ(0.0)));
        assert_eq!(spec.with_q(-0.5).validate(), Err(Error::InvalidQ(-0.5)));
        assert!(spec.with_q(0.001).validate().is_ok());
    }

    #[test]
    fn test_gain_is_unconstrained() {
        let spec = FilterSpec::new(48000.0, FilterType::LowPass).with_gain_db(-500.0);
        assert!(spec.validate().is_ok());
    }
}
