#![allow(dead_code)] // Each test binary uses a different subset of helpers

use serde::Deserialize;
use std::path::{Path, PathBuf};
use bsm_lib::{BlackScholesOption, MarketSnapshot, OptionKind};

/// Row layout written by `bsm_lib::write_csv`
#[derive(Debug, Deserialize)]
pub struct CsvRow {
    pub spot: f64,
    pub call: f64,
    pub put: f64,
}

/// Canonical textbook parameter set: K=100, T=1, t=0, r=5%, σ=20%
pub fn canonical_market() -> MarketSnapshot {
    MarketSnapshot::default()
}

/// Build a call/put pair sharing every parameter
pub fn option_pair(
    spot: f64,
    strike: f64,
    maturity: f64,
    valuation_time: f64,
    rate: f64,
    volatility: f64,
) -> (BlackScholesOption, BlackScholesOption) {
    let call = BlackScholesOption::new(
        spot,
        strike,
        maturity,
        valuation_time,
        rate,
        volatility,
        OptionKind::Call,
    )
    .expect("valid call parameters");
    let put = BlackScholesOption::new(
        spot,
        strike,
        maturity,
        valuation_time,
        rate,
        volatility,
        OptionKind::Put,
    )
    .expect("valid put parameters");
    (call, put)
}

/// Fresh, empty scratch directory under the system temp dir
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bsm-lib-{}-{}", name, std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).expect("Failed to clear scratch dir");
    }
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Read back a curve written by `write_csv`
pub fn load_curve_csv(path: &Path) -> Result<Vec<CsvRow>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        rows.push(row);
    }
    Ok(rows)
}
