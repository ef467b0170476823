//! Black-Scholes risk figures of European options.
//!
//! Together with the re-exported pricing functions this crate is the complete
//! engine surface: the standard normal distribution, call and put prices and the
//! ten greeks, each a pure function of `(s, k, r, t, sigma)`.
pub mod greeks;

pub use greeks::{
    call_delta, call_rho, call_theta, gamma, put_delta, put_rho, put_theta, vega,
    BlackScholesGreeks, Greek, Greeks,
};

// Re-export the pricing surface
pub use pricing::{
    call_price, norm_cdf, norm_pdf, put_price, DerivativeParameter, OptionType, PricingError,
};
