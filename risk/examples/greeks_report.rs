//! Prices a reference European option and prints its greeks.
//!
//! `RUST_LOG=debug cargo run -p risk --example greeks_report`
use risk::{call_price, put_price, DerivativeParameter, Greek, Greeks, OptionType, PricingError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), PricingError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (s, k, r, t, sigma) = (100.0, 100.0, 0.05, 1.0, 0.2);
    tracing::info!(s, k, r, t, sigma, "pricing reference option");

    let dp = DerivativeParameter::new(s, k, t, r, sigma)?;
    let call = call_price(s, k, r, t, sigma)?;
    let put = put_price(s, k, r, t, sigma)?;

    println!("{:=^60}", " Black-Scholes option pricing ");
    println!("Spot price (S):       {s:.2}");
    println!("Strike price (K):     {k:.2}");
    println!("Risk-free rate (r):   {:.2}%", r * 100.0);
    println!("Time to maturity (T): {t:.2} years");
    println!("Volatility (sigma):   {:.2}%", sigma * 100.0);

    println!("\n{:-^60}", " Prices ");
    println!("Call: {call:.4}");
    println!("Put:  {put:.4}");

    for option_type in [OptionType::Call, OptionType::Put] {
        let greeks = Greeks::new(&dp, option_type);
        println!("\n{:-^60}", format!(" {option_type:?} greeks "));
        for greek in [Greek::Delta, Greek::Gamma, Greek::Vega, Greek::Theta, Greek::Rho] {
            println!("{:<6} {:>12.6}", format!("{greek:?}"), greeks.get(greek));
        }
    }

    let call_greeks = Greeks::new(&dp, OptionType::Call);
    let put_greeks = Greeks::new(&dp, OptionType::Put);
    println!("\n{:-^60}", " Parity checks ");
    println!("C - P          = {:.6}", call - put);
    println!("S - K exp(-rT) = {:.6}", s - dp.discounted_strike());
    println!("Delta_C - Delta_P = {:.6}", call_greeks.delta - put_greeks.delta);

    Ok(())
}
