//! # bsm-lib: Black-Scholes-Merton Pricing and Greeks
//!
//! `bsm-lib` evaluates the closed-form Black-Scholes-Merton model for European
//! call and put options: the theoretical price and its sensitivities delta,
//! gamma, vega and theta.
//!
//! ## Core Features
//!
//! - **Option Model**: validated, immutable [`BlackScholesOption`] with pure price/Greek methods
//! - **Batch Evaluation**: parallel pricing over many spot prices with input order preserved
//! - **Spot Sweeps**: sample any Greek across a spot grid for both option kinds
//! - **Reporting**: CSV tables and SVG charts of each sweep
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{BlackScholesOption, OptionKind};
//!
//! let call = BlackScholesOption::new(100.0, 100.0, 1.0, 0.0, 0.05, 0.2, OptionKind::Call)?;
//! let put = BlackScholesOption::from_kind_str(100.0, 100.0, 1.0, 0.0, 0.05, 0.2, "PUT")?;
//!
//! // Put-call parity: C - P = S - K e^{-rτ}
//! let parity = call.price() - put.price() - (100.0 - 100.0 * (-0.05_f64).exp());
//! assert!(parity.abs() < 1e-10);
//!
//! let greeks = call.greeks();
//! assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
//! # Ok::<(), bsm_lib::OptionError>(())
//! ```
//!
//! ## Configuration Presets
//!
//! Sweep settings can be loaded from TOML or taken from a preset:
//! - `standard()`: 200 spots in [50, 150] around a 100 strike
//! - `fine()`: the same range with 1,000 spots
//! - `quick()`: 21 spots for fast checks
//!
//! The library emits `tracing` events but never installs a subscriber.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod market;
pub mod models;
pub mod report;
pub mod sweep;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::{Context, Result};
use rayon::prelude::*;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Option model and its error type
pub use models::bs::{BlackScholesOption, Greeks, OptionError, OptionKind};
pub use models::traits::GreeksModel;
pub use models::utils::{normal_cdf, normal_pdf};

// Market snapshot shared across a sweep
pub use market::MarketSnapshot;

// Sweep configuration, types and functions
pub use sweep::{linspace, sweep_all, sweep_greek, CurvePoint, Greek, GreekCurve, SweepConfig};

// Report writers
pub use report::{render_svg, write_csv, write_reports};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured sweep settings.
///
/// All presets share the market snapshot K=100, T=1, t=0, r=5%, σ=20% and
/// differ only in grid density.
pub mod default_configs {
    use crate::sweep::SweepConfig;

    /// 200 spots between 50 and 150, sweeping delta, gamma, vega and theta.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bsm_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.num_points, 200);
    /// ```
    pub fn standard() -> SweepConfig {
        SweepConfig::standard()
    }

    /// 1,000 spots for smooth publication charts.
    pub fn fine() -> SweepConfig {
        SweepConfig::fine()
    }

    /// 21 spots for unit tests and quick looks.
    pub fn quick() -> SweepConfig {
        SweepConfig::quick()
    }
}

/// Price a European option and compute all of its Greeks in one call.
///
/// # Errors
///
/// Any [`OptionError`] raised by [`BlackScholesOption::new`].
///
/// # Example
///
/// ```rust
/// use bsm_lib::{evaluate, MarketSnapshot, OptionKind};
///
/// let greeks = evaluate(&MarketSnapshot::default(), 100.0, OptionKind::Call)?;
/// assert!((greeks.price - 10.4506).abs() < 1e-3);
/// # Ok::<(), bsm_lib::OptionError>(())
/// ```
pub fn evaluate(
    market: &MarketSnapshot,
    spot: f64,
    kind: OptionKind,
) -> std::result::Result<Greeks, OptionError> {
    Ok(market.option(spot, kind)?.greeks())
}

/// Evaluate one option per spot price in parallel.
///
/// `result[i]` always belongs to `spots[i]`, whatever order the worker threads
/// finish in. Fails on the first spot that cannot form a valid option.
///
/// # Example
///
/// ```rust
/// use bsm_lib::{evaluate_spots, linspace, MarketSnapshot, OptionKind};
///
/// let spots = linspace(80.0, 120.0, 5);
/// let results = evaluate_spots(&MarketSnapshot::default(), &spots, OptionKind::Put)?;
/// assert_eq!(results.len(), 5);
/// assert!(results[0].price > results[4].price);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn evaluate_spots(
    market: &MarketSnapshot,
    spots: &[f64],
    kind: OptionKind,
) -> Result<Vec<Greeks>> {
    spots
        .par_iter()
        .map(|&spot| {
            evaluate(market, spot, kind)
                .with_context(|| format!("Failed to evaluate {} at spot {}", kind, spot))
        })
        .collect()
}
