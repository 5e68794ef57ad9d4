use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use crate::models::bs::OptionKind;
use crate::sweep::config::SweepConfig;
use crate::sweep::types::{CurvePoint, Greek, GreekCurve};

/// `n` evenly spaced values from `start` to `end`, both ends included.
///
/// `n == 0` yields an empty grid and `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            // Pin the last point so rounding never moves the upper bound
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample one quantity for calls and puts over the configured spot grid.
///
/// Grid points are evaluated in parallel; `points[i]` always corresponds to
/// the `i`-th spot of the grid.
pub fn sweep_greek(config: &SweepConfig, greek: Greek) -> Result<GreekCurve> {
    config.validate()?;

    let market = config.market;
    let spots = linspace(config.spot_min, config.spot_max, config.num_points);

    let points = spots
        .par_iter()
        .map(|&spot| -> Result<CurvePoint> {
            let call = market
                .option(spot, OptionKind::Call)
                .with_context(|| format!("Failed to build call at spot {}", spot))?;
            let put = market
                .option(spot, OptionKind::Put)
                .with_context(|| format!("Failed to build put at spot {}", spot))?;
            Ok(CurvePoint {
                spot,
                call: greek.evaluate(&call),
                put: greek.evaluate(&put),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        greek = %greek,
        points = points.len(),
        spot_min = config.spot_min,
        spot_max = config.spot_max,
        "Completed spot sweep"
    );

    Ok(GreekCurve {
        greek,
        strike: market.strike,
        maturity: market.maturity,
        valuation_time: market.valuation_time,
        points,
    })
}

/// Sweep every configured quantity, returned in configuration order.
pub fn sweep_all(config: &SweepConfig) -> Result<Vec<GreekCurve>> {
    config
        .greeks
        .iter()
        .map(|&greek| sweep_greek(config, greek))
        .collect()
}
