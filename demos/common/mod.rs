//! Common utilities for the demos: logging setup and WAV I/O.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Installs a `tracing` subscriber honouring `RUST_LOG`, defaulting to `debug`.
pub fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Reads a WAV file into `[channel][sample]` and returns it with its spec.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<Vec<f64>>, hound::WavSpec)> {
    let path = path.as_ref();
    let mut reader =
        hound::WavReader::open(path).with_context(|| format!("opening {}", path.display()))?;
    let spec = reader.spec();

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_value))
                .collect::<Result<_, _>>()?
        }
    };

    if interleaved.is_empty() {
        bail!("{} contains no samples", path.display());
    }

    let channels = spec.channels as usize;
    let deinterleaved = (0..channels)
        .map(|ch| interleaved.iter().skip(ch).step_by(channels).copied().collect())
        .collect();

    Ok((deinterleaved, spec))
}

/// Writes `[channel][sample]` as a 32-bit float WAV file.
pub fn write_wav<P: AsRef<Path>>(path: P, channels: &[Vec<f64>], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: channels.len() as u16,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;

    let len = channels.iter().map(Vec::len).min().unwrap_or(0);
    for n in 0..len {
        for channel in channels {
            writer.write_sample(channel[n] as f32)?;
        }
    }
    writer.finalize()?;
    Ok(())
}

/// `input.wav` -> `input_filtered.wav`
pub fn filtered_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    input.with_file_name(format!("{}_filtered.wav", stem))
}
