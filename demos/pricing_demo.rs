// demos/pricing_demo.rs

//! Prices the canonical at-the-money contract and a small strip of spots.
//!
//! This example shows how to:
//! 1. Build call and put models directly
//! 2. Read price and Greeks individually and as a bundle
//! 3. Evaluate many spots in parallel with order preserved

use anyhow::Result;
use bsm_lib::{evaluate_spots, linspace, BlackScholesOption, MarketSnapshot, OptionKind};

fn main() -> Result<()> {
    println!("Black-Scholes-Merton Pricing Demo");
    println!("=================================");

    let market = MarketSnapshot::default();
    println!(
        "K = {}, T = {}, t = {}, r = {:.2}%, sigma = {:.1}%",
        market.strike,
        market.maturity,
        market.valuation_time,
        market.rate * 100.0,
        market.volatility * 100.0
    );

    println!("\nStep 1: At-the-money contract (S = 100)");
    println!(
        "{:<6} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Kind", "Price", "Delta", "Gamma", "Vega", "Theta"
    );
    println!("{}", "-".repeat(61));
    for kind in [OptionKind::Call, OptionKind::Put] {
        let option = BlackScholesOption::new(
            100.0,
            market.strike,
            market.maturity,
            market.valuation_time,
            market.rate,
            market.volatility,
            kind,
        )?;
        let g = option.greeks();
        println!(
            "{:<6} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            kind, g.price, g.delta, g.gamma, g.vega, g.theta
        );
    }

    println!("\nStep 2: Put-call parity check");
    let call = market.option(100.0, OptionKind::Call)?;
    let put = market.option(100.0, OptionKind::Put)?;
    println!(
        "  C - P = {:.6}, S - K e^(-r tau) = {:.6}",
        call.price() - put.price(),
        market.parity_value(100.0)
    );

    println!("\nStep 3: Call strip across spots");
    let spots = linspace(80.0, 120.0, 9);
    let strip = evaluate_spots(&market, &spots, OptionKind::Call)?;
    println!("{:<8} {:>10} {:>10}", "Spot", "Price", "Delta");
    for (spot, g) in spots.iter().zip(&strip) {
        println!("{:<8.1} {:>10.4} {:>10.4}", spot, g.price, g.delta);
    }

    match BlackScholesOption::from_kind_str(100.0, 100.0, 1.0, 0.0, 0.05, 0.2, "swap") {
        Ok(_) => println!("\nUnexpected: 'swap' accepted"),
        Err(e) => println!("\nRejected unsupported kind: {}", e),
    }

    Ok(())
}
