// Example: plot_greeks.rs
// Sweeps delta, gamma, vega and theta over a range of spot prices for calls
// and puts, then writes one CSV table and one SVG chart per Greek.
//
// Usage:
//     cargo run --example plot_greeks -- [config.toml]
//
// Without an argument the standard preset is used (K=100, T=1, t=0, r=5%,
// sigma=20%, 200 spots in [50, 150]) and output goes to ./plots.
// Set RUST_LOG=debug to see per-sweep details.

use std::env;

use anyhow::Result;
use bsm_lib::{default_configs, write_reports, SweepConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!(%path, "Loading sweep config");
            SweepConfig::from_file(&path)?
        }
        None => default_configs::standard(),
    };

    info!(
        strike = config.market.strike,
        points = config.num_points,
        output_dir = %config.output_dir.display(),
        "Writing Greek reports"
    );

    let written = write_reports(&config)?;
    println!("Saved {} files to {}", written.len(), config.output_dir.display());
    Ok(())
}
