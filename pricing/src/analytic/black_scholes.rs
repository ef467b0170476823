use crate::common::models::{DerivativeParameter, OptionType};
use crate::common::normal::norm_cdf;
use crate::error::PricingError;

/// The auxiliary terms d1 and d2 of the Black-Scholes formulas.
///
/// `d1 = (ln(S/K) + (r + sigma^2/2) T) / (sigma sqrt(T))`, `d2 = d1 - sigma sqrt(T)`.
/// Always recomputed from the parameters, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxiliaryTerms {
    pub d1: f64,
    pub d2: f64,
}

impl AuxiliaryTerms {
    pub fn new(dp: &DerivativeParameter) -> Self {
        let sigma_exp = dp.sigma_sqrt_t();
        let d1 = ((dp.asset_price() / dp.strike()).ln()
            + (dp.rfr() + dp.vola().powi(2) / 2.0) * dp.time_to_expiration())
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        Self { d1, d2 }
    }
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;

    fn price(params: &Self::Params, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => Self::call(params),
            OptionType::Put => Self::put(params),
        }
    }
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d1, d2 } = AuxiliaryTerms::new(dp);
        cdf_product(dp.asset_price(), d1) - cdf_product(dp.discounted_strike(), d2)
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d1, d2 } = AuxiliaryTerms::new(dp);
        cdf_product(dp.discounted_strike(), -d2) - cdf_product(dp.asset_price(), -d1)
    }
}

fn cdf_product(amount: f64, d: f64) -> f64 {
    norm_cdf(d) * amount
}

/// Price of a European call, `S N(d1) - K exp(-rT) N(d2)`.
pub fn call_price(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    let dp = DerivativeParameter::new(s, k, t, r, sigma)?;
    Ok(BlackScholesMerton::call(&dp))
}

/// Price of a European put, `K exp(-rT) N(-d2) - S N(-d1)`.
pub fn put_price(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    let dp = DerivativeParameter::new(s, k, t, r, sigma)?;
    Ok(BlackScholesMerton::put(&dp))
}
