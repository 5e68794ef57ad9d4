//! Construction errors for the Black-Scholes option model.

use thiserror::Error;

/// Reasons a [`BlackScholesOption`](super::BlackScholesOption) cannot be built.
///
/// Every variant is raised eagerly by the constructor; the pricing and Greek
/// methods themselves never fail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptionError {
    /// Option kind text was neither "call" nor "put".
    #[error("Invalid option kind '{kind}': expected 'call' or 'put'")]
    InvalidOptionKind {
        /// The unrecognised kind as supplied
        kind: String,
    },

    /// Maturity does not lie strictly after the valuation time.
    #[error("Time to maturity must be positive: T = {maturity}, t = {valuation_time}")]
    NonPositiveTimeToMaturity {
        /// Absolute maturity (T)
        maturity: f64,
        /// Valuation time (t)
        valuation_time: f64,
    },

    /// Spot price is zero or negative.
    #[error("Invalid spot price: S = {spot}")]
    NonPositiveSpot {
        /// The rejected spot
        spot: f64,
    },

    /// Strike price is zero or negative.
    #[error("Invalid strike price: K = {strike}")]
    NonPositiveStrike {
        /// The rejected strike
        strike: f64,
    },

    /// Volatility is zero or negative.
    #[error("Invalid volatility: σ = {volatility}")]
    NonPositiveVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// An input was NaN or infinite.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },
}
