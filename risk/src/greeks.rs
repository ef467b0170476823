use pricing::{norm_cdf, norm_pdf, AuxiliaryTerms, DerivativeParameter, OptionType, PricingError};

/// Sensitivities of a European option price under Black-Scholes.
/// https://en.wikipedia.org/wiki/Greeks_(finance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Greek {
    /// dV/dS
    Delta,
    /// d²V/dS²
    Gamma,
    /// dV/dsigma
    Vega,
    /// -dV/dT, per year
    Theta,
    /// dV/dr
    Rho,
}

/// Closed-form greeks on validated parameters.
///
/// Gamma and vega do not depend on the option type, there is one formula for each.
pub struct BlackScholesGreeks;

impl BlackScholesGreeks {
    pub fn call_delta(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d1, .. } = AuxiliaryTerms::new(dp);
        norm_cdf(d1)
    }

    pub fn put_delta(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d1, .. } = AuxiliaryTerms::new(dp);
        norm_cdf(d1) - 1.0
    }

    pub fn gamma(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d1, .. } = AuxiliaryTerms::new(dp);
        norm_pdf(d1) / (dp.asset_price() * dp.sigma_sqrt_t())
    }

    pub fn vega(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d1, .. } = AuxiliaryTerms::new(dp);
        dp.asset_price() * norm_pdf(d1) * dp.time_to_expiration().sqrt()
    }

    pub fn call_theta(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d1, d2 } = AuxiliaryTerms::new(dp);
        time_decay(dp, d1) - dp.rfr() * dp.discounted_strike() * norm_cdf(d2)
    }

    pub fn put_theta(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d1, d2 } = AuxiliaryTerms::new(dp);
        time_decay(dp, d1) + dp.rfr() * dp.discounted_strike() * norm_cdf(-d2)
    }

    pub fn call_rho(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d2, .. } = AuxiliaryTerms::new(dp);
        dp.time_to_expiration() * dp.discounted_strike() * norm_cdf(d2)
    }

    pub fn put_rho(dp: &DerivativeParameter) -> f64 {
        let AuxiliaryTerms { d2, .. } = AuxiliaryTerms::new(dp);
        -dp.time_to_expiration() * dp.discounted_strike() * norm_cdf(-d2)
    }
}

// -S phi(d1) sigma / (2 sqrt(T)), shared by call and put theta
fn time_decay(dp: &DerivativeParameter, d1: f64) -> f64 {
    -dp.asset_price() * norm_pdf(d1) * dp.vola() / (2.0 * dp.time_to_expiration().sqrt())
}

/// All greeks of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

impl Greeks {
    pub fn new(dp: &DerivativeParameter, option_type: OptionType) -> Self {
        let (delta, theta, rho) = match option_type {
            OptionType::Call => (
                BlackScholesGreeks::call_delta(dp),
                BlackScholesGreeks::call_theta(dp),
                BlackScholesGreeks::call_rho(dp),
            ),
            OptionType::Put => (
                BlackScholesGreeks::put_delta(dp),
                BlackScholesGreeks::put_theta(dp),
                BlackScholesGreeks::put_rho(dp),
            ),
        };
        Self {
            delta,
            gamma: BlackScholesGreeks::gamma(dp),
            vega: BlackScholesGreeks::vega(dp),
            theta,
            rho,
        }
    }

    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Vega => self.vega,
            Greek::Theta => self.theta,
            Greek::Rho => self.rho,
        }
    }
}

fn with_params(
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    sigma: f64,
    greek: fn(&DerivativeParameter) -> f64,
) -> Result<f64, PricingError> {
    let dp = DerivativeParameter::new(s, k, t, r, sigma)?;
    Ok(greek(&dp))
}

/// Delta of a European call, `N(d1)`.
pub fn call_delta(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    with_params(s, k, r, t, sigma, BlackScholesGreeks::call_delta)
}

/// Delta of a European put, `N(d1) - 1`.
pub fn put_delta(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    with_params(s, k, r, t, sigma, BlackScholesGreeks::put_delta)
}

/// Gamma of a European call or put, `phi(d1) / (S sigma sqrt(T))`.
pub fn gamma(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    with_params(s, k, r, t, sigma, BlackScholesGreeks::gamma)
}

/// Vega of a European call or put per unit of volatility, `S phi(d1) sqrt(T)`.
pub fn vega(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    with_params(s, k, r, t, sigma, BlackScholesGreeks::vega)
}

/// Theta of a European call per year.
pub fn call_theta(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    with_params(s, k, r, t, sigma, BlackScholesGreeks::call_theta)
}

/// Theta of a European put per year.
pub fn put_theta(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    with_params(s, k, r, t, sigma, BlackScholesGreeks::put_theta)
}

pub fn call_rho(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    with_params(s, k, r, t, sigma, BlackScholesGreeks::call_rho)
}

pub fn put_rho(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    with_params(s, k, r, t, sigma, BlackScholesGreeks::put_rho)
}
