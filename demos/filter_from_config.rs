//! Builds a filter from a TOML spec and prints its coefficients.
//!
//! Run with: cargo run --example filter_from_config --features serde -- [spec.toml]

use anyhow::{Context, Result};
use quadfilter::{FilterSpec, QuadFilter};

const DEFAULT_SPEC: &str = r#"
sample_rate_hz = 48000.0
filter_type = "peaking"
cutoff_hz = 2500.0
q = 1.414
gain_db = -6.0
"#;

fn main() -> Result<()> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?,
        None => DEFAULT_SPEC.to_string(),
    };

    let spec: FilterSpec = toml::from_str(&text)?;
    spec.validate()?;
    let filter = QuadFilter::from_spec(spec)?;

    println!("{}", filter);
    Ok(())
}
