//! Closed-form Black-Scholes prices of European options.
//!
//! Every function is pure: inputs are validated into a [`DerivativeParameter`],
//! d1 and d2 are derived per call and nothing is cached, so all entry points can
//! be called concurrently without synchronisation.
pub mod analytic;
pub mod common;
mod error;

pub use analytic::{call_price, put_price, AuxiliaryTerms, BlackScholesMerton, OptionPrice};
pub use common::{norm_cdf, norm_pdf, DerivativeParameter, OptionType};
pub use error::PricingError;
