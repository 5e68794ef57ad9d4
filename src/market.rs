//! Market and contract parameters shared by every option in a spot sweep.
//!
//! A [`MarketSnapshot`] fixes everything except the spot price and the option
//! kind, so that a consumer can build one model per `(spot, kind)` pair.

use serde::{Deserialize, Serialize};

use crate::models::bs::{BlackScholesOption, OptionError, OptionKind};

/// Strike, timing, rate and volatility for a family of options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Strike price (K)
    pub strike: f64,
    /// Absolute maturity in years (T)
    pub maturity: f64,
    /// Current time in years (t)
    #[serde(default)]
    pub valuation_time: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
}

impl Default for MarketSnapshot {
    fn default() -> Self {
        Self {
            strike: 100.0,
            maturity: 1.0,
            valuation_time: 0.0,
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl MarketSnapshot {
    /// Time to maturity τ = T − t (not validated here).
    pub fn time_to_maturity(&self) -> f64 {
        self.maturity - self.valuation_time
    }

    /// Build the option model for one spot price and kind.
    pub fn option(&self, spot: f64, kind: OptionKind) -> Result<BlackScholesOption, OptionError> {
        BlackScholesOption::new(
            spot,
            self.strike,
            self.maturity,
            self.valuation_time,
            self.rate,
            self.volatility,
            kind,
        )
    }

    /// Forward-discounted parity value S − K·e^(−rτ) for a given spot.
    pub fn parity_value(&self, spot: f64) -> f64 {
        spot - self.strike * (-self.rate * self.time_to_maturity()).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical_parameter_set() {
        let m = MarketSnapshot::default();
        assert_eq!(m.strike, 100.0);
        assert_eq!(m.time_to_maturity(), 1.0);
        assert_eq!(m.rate, 0.05);
        assert_eq!(m.volatility, 0.2);
    }

    #[test]
    fn test_option_builder_propagates_errors() {
        let m = MarketSnapshot {
            maturity: 0.5,
            valuation_time: 0.5,
            ..MarketSnapshot::default()
        };
        assert!(matches!(
            m.option(100.0, OptionKind::Call),
            Err(OptionError::NonPositiveTimeToMaturity { .. })
        ));

        let opt = MarketSnapshot::default()
            .option(120.0, OptionKind::Put)
            .unwrap();
        assert_eq!(opt.spot(), 120.0);
        assert_eq!(opt.kind(), OptionKind::Put);
    }

    #[test]
    fn test_deserialize_defaults_valuation_time() {
        let m: MarketSnapshot =
            toml::from_str("strike = 90.0\nmaturity = 2.0\nrate = 0.01\nvolatility = 0.3\n")
                .unwrap();
        assert_eq!(m.valuation_time, 0.0);
        assert_eq!(m.strike, 90.0);
    }
}
