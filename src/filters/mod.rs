//! Biquad filter design and processing.
//!
//! The module is layered in the order data flows through it:
//!
//! - [`FilterType`] and [`FilterSpec`] describe a filter in musical terms
//! - [`Coefficients::synthesize`] turns a spec into normalized coefficients
//! - [`ChannelState`] runs the direct-form-I recursion for one channel
//! - [`QuadFilter`] ties coefficients to offline and streaming processing

mod biquad;
mod coefficients;
mod kind;
mod spec;
mod state;

pub use self::biquad::QuadFilter;
pub use self::coefficients::Coefficients;
pub use self::kind::FilterType;
pub use self::spec::{DEFAULT_CUTOFF_HZ, DEFAULT_GAIN_DB, DEFAULT_Q, FilterSpec};
pub use self::state::{ChannelState, filter_offline};
