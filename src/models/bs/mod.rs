// Closed-form Black-Scholes-Merton model for European options: price plus the
// first and second order sensitivities. Inputs are validated once at
// construction, after which every method is a pure function of the stored
// parameters.

pub mod error;

use std::fmt;
use std::str::FromStr;

use crate::models::traits::GreeksModel;
use crate::models::utils::{normal_cdf, normal_pdf};

pub use error::OptionError;

/// Direction of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl FromStr for OptionKind {
    type Err = OptionError;

    /// Case-insensitive: "call", "CALL" and "Put" are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(OptionError::InvalidOptionKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

/// All five model outputs for one contract.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Greeks {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
}

/// A European option contract together with the market snapshot it is valued in.
///
/// # Example
///
/// ```rust
/// use bsm_lib::{BlackScholesOption, OptionKind};
///
/// let call = BlackScholesOption::new(100.0, 100.0, 1.0, 0.0, 0.05, 0.2, OptionKind::Call)?;
/// assert!((call.price() - 10.4506).abs() < 1e-3);
/// # Ok::<(), bsm_lib::OptionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesOption {
    spot: f64,
    strike: f64,
    maturity: f64,
    valuation_time: f64,
    tau: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
}

impl BlackScholesOption {
    /// Build a validated option model.
    ///
    /// # Arguments
    ///
    /// * `spot` - Current underlying price (S > 0)
    /// * `strike` - Strike price (K > 0)
    /// * `maturity` - Absolute maturity time in years (T)
    /// * `valuation_time` - Current time in years (t < T)
    /// * `rate` - Continuously compounded risk-free rate; zero and negative rates are allowed
    /// * `volatility` - Annualised volatility (σ > 0)
    /// * `kind` - Call or put
    ///
    /// # Errors
    ///
    /// * [`OptionError::NonFiniteInput`] if any numeric input is NaN or infinite, or if
    ///   `maturity - valuation_time` overflows
    /// * [`OptionError::NonPositiveTimeToMaturity`] if `maturity - valuation_time <= 0`
    /// * [`OptionError::NonPositiveSpot`], [`OptionError::NonPositiveStrike`],
    ///   [`OptionError::NonPositiveVolatility`] for non-positive S, K or σ
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        valuation_time: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Result<Self, OptionError> {
        for (name, value) in [
            ("spot", spot),
            ("strike", strike),
            ("maturity", maturity),
            ("valuation_time", valuation_time),
            ("rate", rate),
            ("volatility", volatility),
        ] {
            if !value.is_finite() {
                return Err(OptionError::NonFiniteInput { name, value });
            }
        }

        let tau = maturity - valuation_time;
        if !tau.is_finite() {
            return Err(OptionError::NonFiniteInput {
                name: "time_to_maturity",
                value: tau,
            });
        }
        if tau <= 0.0 {
            return Err(OptionError::NonPositiveTimeToMaturity {
                maturity,
                valuation_time,
            });
        }
        if spot <= 0.0 {
            return Err(OptionError::NonPositiveSpot { spot });
        }
        if strike <= 0.0 {
            return Err(OptionError::NonPositiveStrike { strike });
        }
        if volatility <= 0.0 {
            return Err(OptionError::NonPositiveVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            maturity,
            valuation_time,
            tau,
            rate,
            volatility,
            kind,
        })
    }

    /// Same as [`new`](Self::new) but with the kind given as text ("call"/"put", any case).
    pub fn from_kind_str(
        spot: f64,
        strike: f64,
        maturity: f64,
        valuation_time: f64,
        rate: f64,
        volatility: f64,
        kind: &str,
    ) -> Result<Self, OptionError> {
        let kind = kind.parse::<OptionKind>()?;
        Self::new(spot, strike, maturity, valuation_time, rate, volatility, kind)
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    pub fn valuation_time(&self) -> f64 {
        self.valuation_time
    }

    /// τ = T − t, strictly positive.
    pub fn time_to_maturity(&self) -> f64 {
        self.tau
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// d1 = (ln(S/K) + (r + σ²/2)τ) / (σ√τ)
    pub fn d1(&self) -> f64 {
        let vol_sqrt_tau = self.volatility * self.tau.sqrt();
        ((self.spot / self.strike).ln() + (self.rate + 0.5 * self.volatility.powi(2)) * self.tau)
            / vol_sqrt_tau
    }

    /// d2 = d1 − σ√τ
    pub fn d2(&self) -> f64 {
        self.d1() - self.volatility * self.tau.sqrt()
    }

    /// Strike discounted to valuation time: K·e^(−rτ)
    fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rate * self.tau).exp()
    }

    /// Theoretical present value.
    pub fn price(&self) -> f64 {
        self.price_from(self.d1(), self.d2())
    }

    /// ∂V/∂S. Call delta lies in [0, 1], put delta in [−1, 0].
    pub fn delta(&self) -> f64 {
        self.delta_from(self.d1())
    }

    /// ∂²V/∂S², identical for calls and puts.
    pub fn gamma(&self) -> f64 {
        self.gamma_from(self.d1())
    }

    /// ∂V/∂σ, identical for calls and puts.
    pub fn vega(&self) -> f64 {
        self.vega_from(self.d1())
    }

    /// Time decay per year as τ shrinks.
    ///
    /// Usually negative; a deep in-the-money put with a high rate can carry
    /// positive theta.
    pub fn theta(&self) -> f64 {
        self.theta_from(self.d1(), self.d2())
    }

    /// Evaluate price and all Greeks with a single d1/d2 computation.
    pub fn greeks(&self) -> Greeks {
        let d1 = self.d1();
        let d2 = d1 - self.volatility * self.tau.sqrt();
        Greeks {
            price: self.price_from(d1, d2),
            delta: self.delta_from(d1),
            gamma: self.gamma_from(d1),
            vega: self.vega_from(d1),
            theta: self.theta_from(d1, d2),
        }
    }

    fn price_from(&self, d1: f64, d2: f64) -> f64 {
        match self.kind {
            OptionKind::Call => {
                self.spot * normal_cdf(d1) - self.discounted_strike() * normal_cdf(d2)
            }
            OptionKind::Put => {
                self.discounted_strike() * normal_cdf(-d2) - self.spot * normal_cdf(-d1)
            }
        }
    }

    fn delta_from(&self, d1: f64) -> f64 {
        match self.kind {
            OptionKind::Call => normal_cdf(d1),
            // Φ(d1) − 1 written as −Φ(−d1) to avoid cancellation
            OptionKind::Put => -normal_cdf(-d1),
        }
    }

    fn gamma_from(&self, d1: f64) -> f64 {
        let density = normal_pdf(d1);
        // φ(d1) underflows before S·σ·√τ does; avoid 0/0 at the extremes
        if density == 0.0 {
            return 0.0;
        }
        density / (self.spot * self.volatility * self.tau.sqrt())
    }

    fn vega_from(&self, d1: f64) -> f64 {
        self.spot * normal_pdf(d1) * self.tau.sqrt()
    }

    fn theta_from(&self, d1: f64, d2: f64) -> f64 {
        let decay = -(self.spot * normal_pdf(d1) * self.volatility) / (2.0 * self.tau.sqrt());
        let carry = self.rate * self.discounted_strike();
        match self.kind {
            OptionKind::Call => decay - carry * normal_cdf(d2),
            OptionKind::Put => decay + carry * normal_cdf(-d2),
        }
    }
}

impl GreeksModel for BlackScholesOption {
    fn price(&self) -> f64 {
        BlackScholesOption::price(self)
    }

    fn delta(&self) -> f64 {
        BlackScholesOption::delta(self)
    }

    fn gamma(&self) -> f64 {
        BlackScholesOption::gamma(self)
    }

    fn vega(&self) -> f64 {
        BlackScholesOption::vega(self)
    }

    fn theta(&self) -> f64 {
        BlackScholesOption::theta(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm(kind: OptionKind) -> BlackScholesOption {
        BlackScholesOption::new(100.0, 100.0, 1.0, 0.0, 0.05, 0.2, kind).unwrap()
    }

    #[test]
    fn test_option_kind_parsing() {
        assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("CALL".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("Put".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!(
            "swap".parse::<OptionKind>(),
            Err(OptionError::InvalidOptionKind {
                kind: "swap".to_string()
            })
        );
        assert!("".parse::<OptionKind>().is_err());
        assert_eq!(OptionKind::Put.to_string(), "put");
    }

    #[test]
    fn test_d1_d2_at_the_money() {
        let call = atm(OptionKind::Call);
        // ln(1) = 0, so d1 = (r + σ²/2)/σ = 0.07 / 0.2
        assert_relative_eq!(call.d1(), 0.35, epsilon = 1e-12);
        assert_relative_eq!(call.d2(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_time_to_maturity_is_derived() {
        let opt =
            BlackScholesOption::new(100.0, 100.0, 2.0, 0.5, 0.05, 0.2, OptionKind::Put).unwrap();
        assert_relative_eq!(opt.time_to_maturity(), 1.5);
        assert_eq!(opt.maturity(), 2.0);
        assert_eq!(opt.valuation_time(), 0.5);
        assert_eq!(opt.kind(), OptionKind::Put);
    }

    #[test]
    fn test_validation_order_and_variants() {
        let err = BlackScholesOption::new(100.0, 100.0, 1.0, 1.0, 0.05, 0.2, OptionKind::Call)
            .unwrap_err();
        assert!(matches!(err, OptionError::NonPositiveTimeToMaturity { .. }));

        let err = BlackScholesOption::new(0.0, 100.0, 1.0, 0.0, 0.05, 0.2, OptionKind::Call)
            .unwrap_err();
        assert_eq!(err, OptionError::NonPositiveSpot { spot: 0.0 });

        let err = BlackScholesOption::new(100.0, -5.0, 1.0, 0.0, 0.05, 0.2, OptionKind::Call)
            .unwrap_err();
        assert_eq!(err, OptionError::NonPositiveStrike { strike: -5.0 });

        let err = BlackScholesOption::new(100.0, 100.0, 1.0, 0.0, 0.05, 0.0, OptionKind::Call)
            .unwrap_err();
        assert_eq!(err, OptionError::NonPositiveVolatility { volatility: 0.0 });

        let err =
            BlackScholesOption::new(100.0, 100.0, 1.0, 0.0, f64::NAN, 0.2, OptionKind::Call)
                .unwrap_err();
        assert!(matches!(
            err,
            OptionError::NonFiniteInput { name: "rate", .. }
        ));

        // Kind text is parsed before any numeric check
        let err = BlackScholesOption::from_kind_str(100.0, 100.0, 1.0, 1.0, 0.05, 0.2, "swap")
            .unwrap_err();
        assert!(matches!(err, OptionError::InvalidOptionKind { .. }));
    }

    #[test]
    fn test_overflowing_time_to_maturity_is_rejected() {
        let err =
            BlackScholesOption::new(100.0, 100.0, 1e308, -1e308, 0.05, 0.2, OptionKind::Call)
                .unwrap_err();
        assert!(matches!(
            err,
            OptionError::NonFiniteInput {
                name: "time_to_maturity",
                ..
            }
        ));
    }

    #[test]
    fn test_subnormal_spot_keeps_greeks_defined() {
        let opt =
            BlackScholesOption::new(5e-324, 100.0, 1.0, 0.0, 0.05, 0.05, OptionKind::Call)
                .unwrap();
        let g = opt.greeks();
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.price, 0.0);
        assert_eq!(g.delta, 0.0);
        assert_eq!(g.vega, 0.0);
        assert!(g.theta.is_finite());
    }

    #[test]
    fn test_greeks_bundle_matches_individual_methods() {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let opt =
                BlackScholesOption::new(87.5, 100.0, 0.75, 0.1, 0.03, 0.35, kind).unwrap();
            let g = opt.greeks();
            assert_relative_eq!(g.price, opt.price(), epsilon = 1e-12);
            assert_relative_eq!(g.delta, opt.delta(), epsilon = 1e-12);
            assert_relative_eq!(g.gamma, opt.gamma(), epsilon = 1e-12);
            assert_relative_eq!(g.vega, opt.vega(), epsilon = 1e-12);
            assert_relative_eq!(g.theta, opt.theta(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_put_delta_is_call_delta_minus_one() {
        let call = atm(OptionKind::Call);
        let put = atm(OptionKind::Put);
        assert_relative_eq!(put.delta(), call.delta() - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_trait_dispatch_agrees_with_inherent_methods() {
        let opt = atm(OptionKind::Call);
        let model: &dyn GreeksModel = &opt;
        assert_eq!(model.price(), opt.price());
        assert_eq!(model.theta(), opt.theta());
    }
}
