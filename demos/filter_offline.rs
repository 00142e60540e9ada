//! Filters a whole WAV file in one offline call.
//!
//! Usage: cargo run --example filter_offline -- <input.wav> [type] [cutoff] [q] [gain_db]

mod common;

use anyhow::{Context, Result};
use quadfilter::QuadFilter;
use std::path::PathBuf;

fn main() -> Result<()> {
    common::init_logging();

    let mut args = std::env::args().skip(1);
    let input: PathBuf = args.next().context("missing input WAV path")?.into();
    let filter_type = args.next().unwrap_or_else(|| "lowpass".to_string()).parse()?;
    let cutoff: f64 = args.next().map_or(Ok(1000.0), |s| s.parse())?;
    let q: f64 = args.next().map_or(Ok(1.0), |s| s.parse())?;
    let gain_db: f64 = args.next().map_or(Ok(4.0), |s| s.parse())?;

    let (x, spec) = common::read_wav(&input)?;
    println!("Read {} channels x {} samples", x.len(), x[0].len());

    let mut filter = QuadFilter::new(spec.sample_rate as f64)?;
    filter.set_params(filter_type, cutoff, q, gain_db)?;
    println!("{}", filter);

    let y = filter.filter_offline(&x);

    let output = common::filtered_path(&input);
    common::write_wav(&output, &y, spec.sample_rate)?;
    println!("Wrote {}", output.display());
    Ok(())
}
