use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::market::MarketSnapshot;
use crate::models::bs::OptionKind;
use crate::sweep::types::Greek;

/// Settings for sampling the model over a range of spot prices and reporting the results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Lowest spot in the grid (inclusive)
    #[serde(default = "default_spot_min")]
    pub spot_min: f64,

    /// Highest spot in the grid (inclusive)
    #[serde(default = "default_spot_max")]
    pub spot_max: f64,

    /// Number of evenly spaced spot values
    #[serde(default = "default_num_points")]
    pub num_points: usize,

    /// Quantities to sweep, in output order
    #[serde(default = "default_greeks")]
    pub greeks: Vec<Greek>,

    /// Directory that receives the CSV and SVG reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    #[serde(default = "default_chart_height")]
    pub chart_height: u32,

    /// Contract and market parameters held fixed across the sweep
    #[serde(default)]
    pub market: MarketSnapshot,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            spot_min: default_spot_min(),
            spot_max: default_spot_max(),
            num_points: default_num_points(),
            greeks: default_greeks(),
            output_dir: default_output_dir(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            market: MarketSnapshot::default(),
        }
    }
}

impl SweepConfig {
    /// Parameters of the standard report: K=100, T=1, t=0, r=5%, σ=20%, 200 spots in [50, 150]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Same market as [`standard`](Self::standard) with a dense 1,000 point grid
    pub fn fine() -> Self {
        Self {
            num_points: 1000,
            ..Self::default()
        }
    }

    /// Coarse 21 point grid (5.0 spacing) for quick checks
    pub fn quick() -> Self {
        Self {
            num_points: 21,
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing fields fall back to their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SweepConfig = toml::from_str(s).context("Failed to parse sweep config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sweep config {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Check the grid bounds, chart size and market parameters.
    pub fn validate(&self) -> Result<()> {
        if self.num_points < 2 {
            return Err(anyhow!(
                "num_points must be at least 2, got {}",
                self.num_points
            ));
        }
        if !self.spot_min.is_finite() || !self.spot_max.is_finite() {
            return Err(anyhow!(
                "Spot bounds must be finite: [{}, {}]",
                self.spot_min,
                self.spot_max
            ));
        }
        if self.spot_min <= 0.0 || self.spot_min >= self.spot_max {
            return Err(anyhow!(
                "Spot range must satisfy 0 < spot_min < spot_max, got [{}, {}]",
                self.spot_min,
                self.spot_max
            ));
        }
        if self.greeks.is_empty() {
            return Err(anyhow!("At least one greek must be selected"));
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(anyhow!(
                "Chart dimensions must be non-zero, got {}x{}",
                self.chart_width,
                self.chart_height
            ));
        }
        // Spot is already known positive, so this surfaces any market parameter error
        self.market
            .option(self.spot_min, OptionKind::Call)
            .context("Invalid market parameters")?;
        Ok(())
    }
}

fn default_spot_min() -> f64 {
    50.0
}

fn default_spot_max() -> f64 {
    150.0
}

fn default_num_points() -> usize {
    200
}

fn default_greeks() -> Vec<Greek> {
    vec![Greek::Delta, Greek::Gamma, Greek::Vega, Greek::Theta]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("plots")
}

fn default_chart_width() -> u32 {
    800
}

fn default_chart_height() -> u32 {
    500
}
