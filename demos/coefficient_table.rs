//! Prints coefficients for every filter type across a sweep of Q values,
//! ready to paste into a plotting tool.
//!
//! Run with: cargo run --example coefficient_table --features macros

use quadfilter::{FilterType, QuadFilter, filter_type};

const SAMPLE_RATE: f64 = 48000.0;
const CUTOFF: f64 = 1000.0;
const GAIN_DB: f64 = 4.0;
const Q_LIST: [f64; 5] = [0.5, 0.717, 1.0, 1.414, 2.0];

fn main() -> quadfilter::Result<()> {
    let mut filter = QuadFilter::new(SAMPLE_RATE)?;

    for kind in FilterType::ALL {
        println!("# {} (fc = {} Hz, gain = {} dB)", kind, CUTOFF, GAIN_DB);
        for q in Q_LIST {
            let coeffs = filter.set_params(kind, CUTOFF, q, GAIN_DB)?;
            println!("q={:<6} b={:?} a={:?}", q, coeffs.b(), coeffs.a());
        }
        println!();
    }

    // Compile-time checked names work anywhere a FilterType does
    filter.set_params(filter_type!("high-shelf"), 8000.0, 0.707, -3.0)?;
    println!("{}", filter);
    Ok(())
}
