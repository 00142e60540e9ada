//! Quadfilter - Audio EQ Cookbook biquad filters for Rust
//!
//! This library designs second-order IIR filters from musical parameters
//! (type, cutoff, Q, gain) and runs them over multi-channel sample buffers,
//! either offline (whole buffers) or streaming (fixed-size blocks with
//! history carried between calls).
//!
//! ```
//! use quadfilter::{FilterType, QuadFilter};
//!
//! let mut filter = QuadFilter::new(48000.0)?;
//! filter.set_params("low-shelf".parse()?, 250.0, 0.707, 4.0)?;
//! assert_eq!(filter.filter_type(), Some(FilterType::LowShelf));
//! assert_eq!(filter.a()[0], 1.0);
//! # Ok::<(), quadfilter::Error>(())
//! ```

pub mod error;
pub mod filters;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use filters::{ChannelState, Coefficients, FilterSpec, FilterType, QuadFilter};

#[cfg(feature = "macros")]
pub use quadfilter_macros::filter_type;
