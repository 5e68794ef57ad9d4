use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::traits::GreeksModel;

/// Quantity sampled along a spot sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Greek {
    Price,
    Delta,
    Gamma,
    Vega,
    Theta,
}

impl Greek {
    /// Every selectable quantity, in reporting order
    pub const ALL: [Greek; 5] = [
        Greek::Price,
        Greek::Delta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Theta,
    ];

    /// Evaluate this quantity on a model
    pub fn evaluate<M: GreeksModel + ?Sized>(&self, model: &M) -> f64 {
        match self {
            Greek::Price => model.price(),
            Greek::Delta => model.delta(),
            Greek::Gamma => model.gamma(),
            Greek::Vega => model.vega(),
            Greek::Theta => model.theta(),
        }
    }

    /// Gamma and vega do not depend on the option kind, so the call and put curves coincide.
    pub fn is_kind_symmetric(&self) -> bool {
        matches!(self, Greek::Gamma | Greek::Vega)
    }

    /// Lower-case name used for output file names
    pub fn file_stem(&self) -> &'static str {
        match self {
            Greek::Price => "price",
            Greek::Delta => "delta",
            Greek::Gamma => "gamma",
            Greek::Vega => "vega",
            Greek::Theta => "theta",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Greek::Price => "Price",
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Vega => "Vega",
            Greek::Theta => "Theta",
        };
        f.write_str(name)
    }
}

impl FromStr for Greek {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Greek::ALL
            .into_iter()
            .find(|g| g.file_stem() == s.to_lowercase())
            .ok_or_else(|| anyhow!("Unknown greek: {}", s))
    }
}

/// Call and put values at one spot price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub spot: f64,
    pub call: f64,
    pub put: f64,
}

/// One quantity sampled over a spot grid for both option kinds
#[derive(Debug, Clone)]
pub struct GreekCurve {
    pub greek: Greek,
    /// Strike price, used to mark the at-the-money line in reports
    pub strike: f64,
    /// Absolute maturity (T)
    pub maturity: f64,
    /// Valuation time (t)
    pub valuation_time: f64,
    /// Points in the same order as the input spot grid
    pub points: Vec<CurvePoint>,
}

impl GreekCurve {
    /// Spot grid covered by this curve
    pub fn spots(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.spot).collect()
    }

    /// (min, max) over both call and put values, ignoring non-finite entries
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .flat_map(|p| [p.call, p.put])
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
