//! Per-channel delay lines and the direct-form-I recursion.

use super::Coefficients;

/// The two most recent input and output samples of one channel.
///
/// Both histories are chronological: index 0 is the older sample, index 1
/// the newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelState {
    /// Inputs x[n-2], x[n-1]
    pub x_hist: [f64; 2],
    /// Outputs y[n-2], y[n-1]
    pub y_hist: [f64; 2],
}

impl ChannelState {
    /// Zeroed history, as if two silent samples preceded the signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the history without reallocating.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Filters a single sample and advances the history.
    #[inline]
    pub fn tick(&mut self, coeffs: &Coefficients, x0: f64) -> f64 {
        let [b0, b1, b2] = coeffs.b();
        let [_, a1, a2] = coeffs.a();

        // y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
        let y0 = b0 * x0 + b1 * self.x_hist[1] + b2 * self.x_hist[0]
            - a1 * self.y_hist[1]
            - a2 * self.y_hist[0];

        self.x_hist = [self.x_hist[1], x0];
        self.y_hist = [self.y_hist[1], y0];

        y0
    }

    /// Filters `input` into `output` sample by sample.
    ///
    /// Only `min(input.len(), output.len())` samples are processed.
    pub fn process(&mut self, coeffs: &Coefficients, input: &[f64], output: &mut [f64]) {
        for (y, &x) in output.iter_mut().zip(input) {
            *y = self.tick(coeffs, x);
        }
    }
}

/// Filters every channel of `input` from zeroed history.
///
/// Channels are independent and each output channel has the length of its
/// input channel. Nothing carries over between calls.
///
/// # Examples
///
/// ```
/// use quadfilter::{Coefficients, filters::filter_offline};
///
/// let output = filter_offline(&Coefficients::identity(), &[vec![1.0, 2.0], vec![3.0, 4.0]]);
/// assert_eq!(output, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// ```
pub fn filter_offline<C: AsRef<[f64]>>(coeffs: &Coefficients, input: &[C]) -> Vec<Vec<f64>> {
    input
        .iter()
        .map(|channel| {
            let channel = channel.as_ref();
            let mut output = vec![0.0; channel.len()];
            ChannelState::new().process(coeffs, channel, &mut output);
            output
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coeffs() -> Coefficients {
        Coefficients::new([0.5, 0.25, 0.125], [1.0, -0.5, 0.25]).unwrap()
    }

    #[test]
    fn test_first_samples_see_virtual_zeros() {
        let mut state = ChannelState::new();
        // Unit impulse: h[0] = b0, h[1] = b1 - a1*h[0], h[2] = b2 - a1*h[1] - a2*h[0]
        let h0 = state.tick(&coeffs(), 1.0);
        let h1 = state.tick(&coeffs(), 0.0);
        let h2 = state.tick(&coeffs(), 0.0);

        assert_eq!(h0, 0.5);
        assert_eq!(h1, 0.25 + 0.5 * 0.5);
        assert_eq!(h2, 0.125 + 0.5 * h1 - 0.25 * h0);
    }

    #[test]
    fn test_history_is_chronological() {
        let mut state = ChannelState::new();
        let y0 = state.tick(&coeffs(), 1.0);
        let y1 = state.tick(&coeffs(), 2.0);

        assert_eq!(state.x_hist, [1.0, 2.0]);
        assert_eq!(state.y_hist, [y0, y1]);
    }

    #[test]
    fn test_reset() {
        let mut state = ChannelState::new();
        state.tick(&coeffs(), 1.0);
        state.reset();
        assert_eq!(state, ChannelState::default());
    }

    #[test]
    fn test_offline_zero_in_zero_out() {
        let output = filter_offline(&coeffs(), &[vec![0.0; 100]]);
        assert!(output[0].iter().all(|&y| y == 0.0));
    }

    #[test]
    fn test_offline_preserves_shape() {
        let input = [vec![1.0; 7], vec![0.5; 3], vec![]];
        let output = filter_offline(&coeffs(), &input);

        assert_eq!(output.len(), 3);
        assert_eq!(output[0].len(), 7);
        assert_eq!(output[1].len(), 3);
        assert!(output[2].is_empty());
    }

    #[test]
    fn test_offline_has_no_memory_between_calls() {
        let input = [vec![1.0, -1.0, 0.5, 0.25]];
        let first = filter_offline(&coeffs(), &input);
        let second = filter_offline(&coeffs(), &input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_offline_divides_out_raw_a0() {
        // H = 2 / 2 = 1 once normalized
        let halved = Coefficients::new([2.0, 0.0, 0.0], [2.0, 0.0, 0.0]).unwrap();
        let output = filter_offline(&halved, &[vec![1.0, 1.0]]);
        assert_eq!(output, vec![vec![1.0, 1.0]]);
    }

    #[test]
    fn test_offline_accepts_slices() {
        let left = [1.0, 0.0, 0.0];
        let right = [0.0, 1.0, 0.0];
        let output = filter_offline(&coeffs(), &[&left[..], &right[..]]);
        assert_eq!(output[0][0], 0.5);
        assert_eq!(output[1][0], 0.0);
        assert_eq!(output[1][1], 0.5);
    }
}
