use crate::data_parsing;
use crate::estimator::filter_series;
use crate::evaluation::rmse;
use crate::plotting;
use crate::sensitivity;
use itertools::izip;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::path::Path;

/// Synthetic price scenario: a straight-line latent trend observed through
/// additive Gaussian noise, reproducible from the seed.
#[derive(Debug, Clone)]
pub struct SyntheticTrend {
    pub n: usize,
    pub start: f64,
    pub end: f64,
    pub noise_std: f64,
    pub seed: u64,
}

/// One generated scenario: the latent truth and what the filter gets to see.
#[derive(Debug, Clone)]
pub struct SyntheticSeries {
    pub truth: Vec<f64>,
    pub observed: Vec<f64>,
}

impl SyntheticTrend {
    pub fn new(n: usize, start: f64, end: f64, noise_std: f64, seed: u64) -> Self {
        SyntheticTrend {
            n,
            start,
            end,
            noise_std,
            seed,
        }
    }

    pub fn generate(&self) -> SyntheticSeries {
        let truth = linspace(self.start, self.end, self.n);
        let noise = Normal::new(0.0, self.noise_std).expect("noise_std must be non-negative");
        let mut rng = StdRng::seed_from_u64(self.seed);
        let observed = truth.iter().map(|x| x + noise.sample(&mut rng)).collect();
        SyntheticSeries { truth, observed }
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Synthetic demo: filter a noisy linear trend, print the first few steps,
/// score the result against the latent truth and plot the overlay.
pub fn run_synthetic() -> anyhow::Result<()> {
    let series = SyntheticTrend::new(50, 100.0, 110.0, 1.0, 42).generate();
    let filtered = filter_series(0.01, 1.0, &series.observed)?;

    for (t, (z, est)) in izip!(&series.observed, &filtered).take(5).enumerate() {
        println!("t={:2} | price={:7.2} | filtered_trend={:7.2}", t, z, est);
    }
    println!("rmse vs true trend: {:.4}", rmse(&filtered, &series.truth));

    plotting::plot_trend(
        &series.observed,
        Some(&series.truth),
        &[("Kalman trend (q=0.01)".to_string(), filtered)],
    );
    Ok(())
}

/// Sensitivity study: sweep q over a log grid with r held fixed, print the
/// RMSE table and plot a representative subset of the filtered series.
pub fn run_sensitivity() -> anyhow::Result<()> {
    let series = SyntheticTrend::new(80, 100.0, 112.0, 1.0, 42).generate();

    let points = sensitivity::sweep_process_noise(
        &series.observed,
        &series.truth,
        &sensitivity::Q_GRID,
        sensitivity::R_FIXED,
    )?;
    sensitivity::print_rmse_table(&points, sensitivity::R_FIXED);

    let mut overlays = Vec::new();
    for &q in &[1e-3, 1e-2, 1e-1, 1.0] {
        let filtered = filter_series(q, sensitivity::R_FIXED, &series.observed)?;
        overlays.push((format!("Filtered (q={})", q), filtered));
    }
    plotting::plot_trend(&series.observed, Some(&series.truth), &overlays);
    Ok(())
}

/// Price-data demo: filter an exported close series with a few
/// representative q values and plot the overlays. There is no ground truth
/// for real prices, so nothing gets scored here.
pub fn run_prices(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let samples = data_parsing::read_prices_from_json(path)?;
    let closes = data_parsing::close_series(&samples);
    anyhow::ensure!(!closes.is_empty(), "price file contains no samples");

    println!(
        "{} samples, close {:.2} -> {:.2}",
        closes.len(),
        closes[0],
        closes[closes.len() - 1]
    );

    let mut overlays = Vec::new();
    for &q in &[0.01, 0.1, 0.3] {
        let filtered = filter_series(q, 1.0, &closes)?;
        println!(
            "q={:<4} | final trend estimate: {:.2}",
            q,
            filtered[filtered.len() - 1]
        );
        overlays.push((format!("Kalman trend (q={})", q), filtered));
    }
    plotting::plot_trend(&closes, None, &overlays);
    Ok(())
}
