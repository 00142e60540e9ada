//! Coefficient synthesis.
//!
//! Uses Robert Bristow-Johnson's Audio EQ Cookbook formulas to turn a
//! [`FilterSpec`] into a normalized second-order transfer function
//!
//! ```text
//!         b0 + b1*z^-1 + b2*z^-2
//! H(z) = ------------------------
//!          1 + a1*z^-1 + a2*z^-2
//! ```

use std::f64::consts::PI;

use super::{FilterSpec, FilterType};
use crate::{Error, Result};

/// Normalized biquad coefficients, `a[0] == 1.0`.
///
/// Plain value type: a filter swaps in a whole new `Coefficients` when its
/// parameters change, it never edits one in place. The fields are read-only
/// so every value, deserialized ones included, goes through normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCoefficients", into = "RawCoefficients")
)]
pub struct Coefficients {
    /// Feedforward coefficients for x[n], x[n-1], x[n-2]
    b: [f64; 3],
    /// Feedback coefficients for y[n], y[n-1], y[n-2]
    a: [f64; 3],
}

/// Serialized form, normalized on the way in.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct RawCoefficients {
    b: [f64; 3],
    a: [f64; 3],
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoefficients> for Coefficients {
    type Error = Error;

    fn try_from(raw: RawCoefficients) -> Result<Self> {
        Coefficients::new(raw.b, raw.a)
    }
}

#[cfg(feature = "serde")]
impl From<Coefficients> for RawCoefficients {
    fn from(coeffs: Coefficients) -> Self {
        Self {
            b: coeffs.b,
            a: coeffs.a,
        }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::identity()
    }
}

impl Coefficients {
    /// Passes the signal through unchanged.
    pub const fn identity() -> Self {
        Self {
            b: [1.0, 0.0, 0.0],
            a: [1.0, 0.0, 0.0],
        }
    }

    /// Builds coefficients from raw `b`/`a`, dividing all six by `a[0]`.
    ///
    /// Fails with `InvalidCoefficients` when `a[0]` is zero or not finite,
    /// since the transfer function is undefined there.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadfilter::Coefficients;
    ///
    /// let coeffs = Coefficients::new([2.0, 1.0, 0.0], [2.0, -1.0, 0.5]).unwrap();
    /// assert_eq!(coeffs.b(), [1.0, 0.5, 0.0]);
    /// assert_eq!(coeffs.a(), [1.0, -0.5, 0.25]);
    /// ```
    pub fn new(b: [f64; 3], a: [f64; 3]) -> Result<Self> {
        if a[0] == 0.0 || !a[0].is_finite() {
            return Err(Error::InvalidCoefficients(a[0]));
        }
        Ok(Self::normalized(b, a))
    }

    /// Feedforward coefficients `b0, b1, b2`.
    pub fn b(&self) -> [f64; 3] {
        self.b
    }

    /// Feedback coefficients `a0 (= 1), a1, a2`.
    pub fn a(&self) -> [f64; 3] {
        self.a
    }

    /// Computes normalized coefficients for `spec`.
    ///
    /// Fails with `InvalidSampleRate`, `InvalidCutoff` or `InvalidQ` when the
    /// spec is out of range. Extreme but valid parameters can still yield
    /// non-finite coefficients; those are returned as computed.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadfilter::{Coefficients, FilterSpec, FilterType};
    ///
    /// let spec = FilterSpec::new(48000.0, FilterType::AllPass).with_q(0.707);
    /// let coeffs = Coefficients::synthesize(&spec).unwrap();
    /// assert_eq!(coeffs.a()[0], 1.0);
    /// ```
    pub fn synthesize(spec: &FilterSpec) -> Result<Self> {
        spec.validate()?;

        let amp = 10f64.powf(spec.gain_db / 40.0);
        let omega = 2.0 * PI * spec.cutoff_hz / spec.sample_rate_hz;
        let cos_omega = omega.cos();
        let sin_omega = omega.sin();
        let alpha = 0.5 * sin_omega / spec.q;

        let (b, a) = match spec.filter_type {
            FilterType::LowPass => (
                [
                    (1.0 - cos_omega) * 0.5,
                    1.0 - cos_omega,
                    (1.0 - cos_omega) * 0.5,
                ],
                [1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha],
            ),

            FilterType::HighPass => (
                [
                    (1.0 + cos_omega) * 0.5,
                    -(1.0 + cos_omega),
                    (1.0 + cos_omega) * 0.5,
                ],
                [1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha],
            ),

            // Constant skirt gain, peak gain = Q
            FilterType::BandPass => (
                [sin_omega * 0.5, 0.0, -sin_omega * 0.5],
                [1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha],
            ),

            FilterType::AllPass => (
                [1.0 - alpha, -2.0 * cos_omega, 1.0 + alpha],
                [1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha],
            ),

            FilterType::Notch => (
                [1.0, -2.0 * cos_omega, 1.0],
                [1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha],
            ),

            // amp only underflows to 0 for absurd cuts (below about -12000 dB).
            // The resulting infinities are passed through, not reported.
            FilterType::Peaking => (
                [1.0 + alpha * amp, -2.0 * cos_omega, 1.0 - alpha * amp],
                [1.0 + alpha / amp, -2.0 * cos_omega, 1.0 - alpha / amp],
            ),

            FilterType::LowShelf => {
                let amp_add_1 = amp + 1.0;
                let amp_sub_1 = amp - 1.0;
                let two_sqrt_amp_alpha = 2.0 * amp.sqrt() * alpha;
                (
                    [
                        amp * (amp_add_1 - amp_sub_1 * cos_omega + two_sqrt_amp_alpha),
                        2.0 * amp * (amp_sub_1 - amp_add_1 * cos_omega),
                        amp * (amp_add_1 - amp_sub_1 * cos_omega - two_sqrt_amp_alpha),
                    ],
                    [
                        amp_add_1 + amp_sub_1 * cos_omega + two_sqrt_amp_alpha,
                        -2.0 * (amp_sub_1 + amp_add_1 * cos_omega),
                        amp_add_1 + amp_sub_1 * cos_omega - two_sqrt_amp_alpha,
                    ],
                )
            }

            FilterType::HighShelf => {
                let amp_add_1 = amp + 1.0;
                let amp_sub_1 = amp - 1.0;
                let two_sqrt_amp_alpha = 2.0 * amp.sqrt() * alpha;
                (
                    [
                        amp * (amp_add_1 + amp_sub_1 * cos_omega + two_sqrt_amp_alpha),
                        -2.0 * amp * (amp_sub_1 + amp_add_1 * cos_omega),
                        amp * (amp_add_1 + amp_sub_1 * cos_omega - two_sqrt_amp_alpha),
                    ],
                    [
                        amp_add_1 - amp_sub_1 * cos_omega + two_sqrt_amp_alpha,
                        2.0 * (amp_sub_1 - amp_add_1 * cos_omega),
                        amp_add_1 - amp_sub_1 * cos_omega - two_sqrt_amp_alpha,
                    ],
                )
            }
        };

        let coeffs = Self::normalized(b, a);
        if !coeffs.is_finite() {
            tracing::warn!(
                filter_type = %spec.filter_type,
                cutoff_hz = spec.cutoff_hz,
                q = spec.q,
                gain_db = spec.gain_db,
                "synthesized non-finite coefficients"
            );
        }
        Ok(coeffs)
    }

    /// Divides everything by `a[0]`, leaving `a[0] == 1.0`.
    fn normalized(b: [f64; 3], a: [f64; 3]) -> Self {
        let a0 = a[0];
        Self {
            b: b.map(|v| v / a0),
            a: [1.0, a[1] / a0, a[2] / a0],
        }
    }

    /// Whether all six coefficients are finite.
    pub fn is_finite(&self) -> bool {
        self.b.iter().chain(self.a.iter()).all(|v| v.is_finite())
    }

    /// Gain at DC, `sum(b) / sum(a)`.
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / self.a.iter().sum::<f64>()
    }
}
