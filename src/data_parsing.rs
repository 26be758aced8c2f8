use anyhow::Context;
use serde::Deserialize;
use std::{fs::File, path::Path};

/// One row of an exported daily price series.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceSample {
    pub date: String,
    pub close: f64,
}

pub fn read_prices_from_json(data_path: impl AsRef<Path>) -> anyhow::Result<Vec<PriceSample>> {
    let file = File::open(&data_path)
        .with_context(|| format!("opening price file {}", data_path.as_ref().display()))?;
    let samples = serde_json::from_reader(file)
        .with_context(|| format!("parsing price file {}", data_path.as_ref().display()))?;

    Ok(samples)
}

pub fn close_series(samples: &[PriceSample]) -> Vec<f64> {
    samples.iter().map(|s| s.close).collect()
}
