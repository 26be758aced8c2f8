#![allow(non_snake_case)]
use trend_kf::simulator as sim;

fn main() -> anyhow::Result<()> {
    let mode = std::env::args().nth(1);
    match mode.as_deref() {
        Some("sensitivity") => sim::run_sensitivity(),
        Some("prices") => {
            let path = std::env::args()
                .nth(2)
                .unwrap_or_else(|| "data/prices_sample.json".to_string());
            sim::run_prices(path)
        }
        _ => sim::run_synthetic(),
    }
}
