//! Simulates real-time processing: filters a WAV file block by block with
//! the streaming API, carrying filter history across blocks.
//!
//! Usage: cargo run --example filter_online_sim -- <input.wav> [block_length]

mod common;

use anyhow::{Context, Result, ensure};
use quadfilter::{FilterType, QuadFilter};
use std::path::PathBuf;

fn main() -> Result<()> {
    common::init_logging();

    let mut args = std::env::args().skip(1);
    let input: PathBuf = args.next().context("missing input WAV path")?.into();
    let block_length: usize = args.next().map_or(Ok(256), |s| s.parse())?;
    ensure!(block_length > 0, "block_length must be at least 1");

    let (x, spec) = common::read_wav(&input)?;
    let n_ch = x.len();
    let n_samples = x[0].len();

    let mut filter = QuadFilter::with_params(
        spec.sample_rate as f64,
        FilterType::LowPass,
        1000.0,
        1.0,
        4.0,
    )?;
    filter.prepare_streaming(n_ch, block_length);

    // Trailing samples that do not fill a block are left silent
    let mut y = vec![vec![0.0; n_samples]; n_ch];
    for k in 0..n_samples / block_length {
        let range = k * block_length..(k + 1) * block_length;
        let block: Vec<&[f64]> = x.iter().map(|ch| &ch[range.clone()]).collect();

        let filtered = filter.filter_streaming_in_place(&block)?;
        for (out, part) in y.iter_mut().zip(filtered) {
            out[range.clone()].copy_from_slice(part);
        }
    }

    let output = common::filtered_path(&input);
    common::write_wav(&output, &y, spec.sample_rate)?;
    println!("Wrote {}", output.display());
    Ok(())
}
