//! Biquad filter instance with offline and streaming processing.
//!
//! A [`QuadFilter`] owns one set of [`Coefficients`] and can run them in two
//! modes that differ only in how long the delay lines live:
//!
//! - **Offline** ([`QuadFilter::filter_offline`]): every call starts from
//!   zeroed history. Use it for whole buffers.
//! - **Streaming** ([`QuadFilter::filter_streaming`]): history persists in the
//!   filter between calls, so consecutive fixed-size blocks join without
//!   clicks. Call [`QuadFilter::prepare_streaming`] first.
//!
//! Changing parameters with [`QuadFilter::set_params`] swaps the coefficients
//! but keeps the streaming history. The next two samples are computed from
//! history produced by the old coefficients, a short bounded transient.

use std::fmt;

use super::spec::validate_sample_rate;
use super::{ChannelState, Coefficients, FilterSpec, FilterType, state};
use crate::{Error, Result};

/// Delay lines and output buffer for streaming mode.
#[derive(Debug, Clone)]
struct Stream {
    channels: Vec<ChannelState>,
    block_length: usize,
    output: Vec<Vec<f64>>,
}

impl Stream {
    fn new(channel_count: usize, block_length: usize) -> Self {
        Self {
            channels: vec![ChannelState::new(); channel_count],
            block_length,
            output: vec![vec![0.0; block_length]; channel_count],
        }
    }

    fn shape(&self) -> (usize, usize) {
        (self.channels.len(), self.block_length)
    }

    fn check_shape<C: AsRef<[f64]>>(&self, input: &[C]) -> Result<()> {
        let expected = self.shape();
        let found_length = input
            .iter()
            .map(|channel| channel.as_ref().len())
            .find(|&len| len != self.block_length)
            .unwrap_or(self.block_length);
        let found = (input.len(), found_length);

        if found == expected {
            Ok(())
        } else {
            Err(Error::ShapeMismatch { expected, found })
        }
    }
}

/// A second-order IIR filter designed from musical parameters.
///
/// # Examples
///
/// ```
/// use quadfilter::{FilterType, QuadFilter};
///
/// let mut filter = QuadFilter::with_params(48000.0, FilterType::LowPass, 1000.0, 0.707, 0.0)?;
///
/// // Offline: whole buffers, history reset each call
/// let output = filter.filter_offline(&[vec![1.0, 0.0, 0.0, 0.0]]);
/// assert_eq!(output[0].len(), 4);
///
/// // Streaming: fixed blocks, history carried across calls
/// filter.prepare_streaming(2, 64);
/// let block = vec![vec![0.0; 64]; 2];
/// let output = filter.filter_streaming(&block)?;
/// assert_eq!(output.len(), 2);
/// # Ok::<(), quadfilter::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuadFilter {
    sample_rate: f64,
    spec: Option<FilterSpec>,
    coeffs: Coefficients,
    stream: Option<Stream>,
}

impl QuadFilter {
    /// Creates an unconfigured filter that passes audio through unchanged
    /// until [`set_params`](Self::set_params) is called.
    pub fn new(sample_rate: f64) -> Result<Self> {
        validate_sample_rate(sample_rate)?;
        Ok(Self {
            sample_rate,
            spec: None,
            coeffs: Coefficients::identity(),
            stream: None,
        })
    }

    /// Creates a filter from a full spec.
    pub fn from_spec(spec: FilterSpec) -> Result<Self> {
        let coeffs = Coefficients::synthesize(&spec)?;
        Ok(Self {
            sample_rate: spec.sample_rate_hz,
            spec: Some(spec),
            coeffs,
            stream: None,
        })
    }

    /// Creates a filter and sets its parameters in one step.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz
    /// * `filter_type` - Response shape
    /// * `cutoff` - Cutoff or center frequency in Hz, below Nyquist
    /// * `q` - Q factor, > 0
    /// * `gain_db` - Gain in dB, only used by Peaking and the shelves
    pub fn with_params(
        sample_rate: f64,
        filter_type: FilterType,
        cutoff: f64,
        q: f64,
        gain_db: f64,
    ) -> Result<Self> {
        Self::from_spec(
            FilterSpec::new(sample_rate, filter_type)
                .with_cutoff(cutoff)
                .with_q(q)
                .with_gain_db(gain_db),
        )
    }

    /// Re-synthesizes the coefficients and returns them.
    ///
    /// On error the previous parameters and coefficients stay in place.
    /// Streaming history is never touched.
    pub fn set_params(
        &mut self,
        filter_type: FilterType,
        cutoff: f64,
        q: f64,
        gain_db: f64,
    ) -> Result<Coefficients> {
        let spec = FilterSpec::new(self.sample_rate, filter_type)
            .with_cutoff(cutoff)
            .with_q(q)
            .with_gain_db(gain_db);
        let coeffs = Coefficients::synthesize(&spec)?;

        tracing::debug!(
            %filter_type,
            cutoff_hz = cutoff,
            q,
            gain_db,
            b = ?coeffs.b(),
            a = ?coeffs.a(),
            "updated filter parameters"
        );

        self.spec = Some(spec);
        self.coeffs = coeffs;
        Ok(coeffs)
    }

    /// Current coefficients.
    pub fn coefficients(&self) -> Coefficients {
        self.coeffs
    }

    /// Feedforward coefficients `b0, b1, b2`.
    pub fn b(&self) -> [f64; 3] {
        self.coeffs.b()
    }

    /// Feedback coefficients `a0 (= 1), a1, a2`.
    pub fn a(&self) -> [f64; 3] {
        self.coeffs.a()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Current parameters, `None` until the filter is configured.
    pub fn spec(&self) -> Option<&FilterSpec> {
        self.spec.as_ref()
    }

    /// Response shape, `None` until configured.
    pub fn filter_type(&self) -> Option<FilterType> {
        self.spec.map(|spec| spec.filter_type)
    }

    /// Cutoff or center frequency in Hz.
    pub fn cutoff(&self) -> Option<f64> {
        self.spec.map(|spec| spec.cutoff_hz)
    }

    /// Q factor.
    pub fn q(&self) -> Option<f64> {
        self.spec.map(|spec| spec.q)
    }

    /// Gain in dB.
    pub fn gain_db(&self) -> Option<f64> {
        self.spec.map(|spec| spec.gain_db)
    }

    /// Filters whole buffers, one `Vec` per channel, from zeroed history.
    ///
    /// Does not read or modify streaming state.
    pub fn filter_offline<C: AsRef<[f64]>>(&self, input: &[C]) -> Vec<Vec<f64>> {
        state::filter_offline(&self.coeffs, input)
    }

    /// Allocates zeroed delay lines for `channel_count` channels and blocks of
    /// `block_length` samples.
    ///
    /// Calling it again discards all history, like starting a new stream.
    pub fn prepare_streaming(&mut self, channel_count: usize, block_length: usize) {
        tracing::debug!(channel_count, block_length, "prepared streaming filter");
        self.stream = Some(Stream::new(channel_count, block_length));
    }

    /// Zeroes the streaming history, keeping the prepared shape.
    pub fn reset_streaming(&mut self) {
        if let Some(stream) = &mut self.stream {
            stream.channels.iter_mut().for_each(ChannelState::reset);
        }
    }

    /// Prepared `(channels, block_length)`, if any.
    pub fn stream_shape(&self) -> Option<(usize, usize)> {
        self.stream.as_ref().map(Stream::shape)
    }

    /// Streaming history of one channel.
    pub fn channel_state(&self, channel: usize) -> Option<&ChannelState> {
        self.stream.as_ref()?.channels.get(channel)
    }

    fn checked_stream<C: AsRef<[f64]>>(&mut self, input: &[C]) -> Result<&mut Stream> {
        let stream = self.stream.as_mut().ok_or(Error::NotPrepared)?;
        stream.check_shape(input)?;
        Ok(stream)
    }

    /// Filters one block, continuing from the previous block's history.
    ///
    /// The input shape must equal the prepared `(channels, block_length)`.
    /// Returns freshly allocated output.
    pub fn filter_streaming<C: AsRef<[f64]>>(&mut self, input: &[C]) -> Result<Vec<Vec<f64>>> {
        let coeffs = self.coeffs;
        let stream = self.checked_stream(input)?;

        let output = stream
            .channels
            .iter_mut()
            .zip(input)
            .map(|(state, channel)| {
                let channel = channel.as_ref();
                let mut filtered = vec![0.0; channel.len()];
                state.process(&coeffs, channel, &mut filtered);
                filtered
            })
            .collect();

        tracing::trace!(shape = ?stream.shape(), "filtered streaming block");
        Ok(output)
    }

    /// Same as [`filter_streaming`](Self::filter_streaming) but writes into
    /// the filter's own output buffer and returns a borrow of it.
    ///
    /// The buffer is overwritten by the next call. The returned borrow ends
    /// before that call can happen, so copy the block out if it must outlive
    /// the next one.
    pub fn filter_streaming_in_place<C: AsRef<[f64]>>(
        &mut self,
        input: &[C],
    ) -> Result<&[Vec<f64>]> {
        let coeffs = self.coeffs;
        let stream = self.checked_stream(input)?;

        for ((state, channel), filtered) in stream
            .channels
            .iter_mut()
            .zip(input)
            .zip(stream.output.iter_mut())
        {
            state.process(&coeffs, channel.as_ref(), filtered);
        }

        tracing::trace!(shape = ?stream.shape(), "filtered streaming block in place");
        Ok(stream.output.as_slice())
    }
}

impl fmt::Display for QuadFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.spec {
            Some(spec) => {
                writeln!(f, "type:    {}", spec.filter_type)?;
                writeln!(f, "fc:      {} Hz", spec.cutoff_hz)?;
                writeln!(f, "q:       {}", spec.q)?;
                writeln!(f, "gain_db: {}", spec.gain_db)?;
            }
            None => writeln!(f, "type:    none")?,
        }
        writeln!(f, "sr:      {} Hz", self.sample_rate)?;
        writeln!(f, "b:       {:?}", self.coeffs.b())?;
        write!(f, "a:       {:?}", self.coeffs.a())
    }
}
