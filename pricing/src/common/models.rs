use crate::error::PricingError;

/// Market inputs of a European option, validated on construction.
///
/// A value of this type always satisfies `asset_price > 0`, `strike > 0`,
/// `time_to_expiration > 0`, `vola > 0`, has a finite `rfr`, a positive finite
/// `vola * sqrt(time_to_expiration)` and a finite `vola^2 * time_to_expiration`,
/// so every formula taking a `&DerivativeParameter` is well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DerivativeParameter {
    /// the asset's price at time t
    asset_price: f64,
    /// the strike or exercise price of the asset
    strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    time_to_expiration: f64,
    /// the annualized, continuously compounded risk-free interest rate
    rfr: f64,
    /// the annualized standard deviation of the stock's returns
    vola: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Result<Self, PricingError> {
        let dp = Self {
            asset_price: positive(asset_price, "asset_price")?,
            strike: positive(strike, "strike")?,
            time_to_expiration: time_to_expiration_of(time_to_expiration)?,
            rfr: finite(rfr, "rfr")?,
            vola: positive(vola, "vola")?,
        };
        // d1 divides by sigma * sqrt(T) and adds sigma^2 T / 2
        let sigma_sqrt_t = dp.sigma_sqrt_t();
        if !(sigma_sqrt_t.is_finite() && sigma_sqrt_t > 0.0) {
            return Err(ill_conditioned("sigma_sqrt_t", sigma_sqrt_t));
        }
        let variance = dp.vola.powi(2) * dp.time_to_expiration;
        if !variance.is_finite() {
            return Err(ill_conditioned("sigma_squared_t", variance));
        }
        Ok(dp)
    }

    pub fn asset_price(&self) -> f64 {
        self.asset_price
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn time_to_expiration(&self) -> f64 {
        self.time_to_expiration
    }

    pub fn rfr(&self) -> f64 {
        self.rfr
    }

    pub fn vola(&self) -> f64 {
        self.vola
    }

    /// `exp(-r * T)`
    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }

    /// The strike discounted to today, `K * exp(-r * T)`.
    pub fn discounted_strike(&self) -> f64 {
        self.strike * self.discount_factor()
    }

    /// `sigma * sqrt(T)`, the standard deviation of the log price at expiration.
    pub fn sigma_sqrt_t(&self) -> f64 {
        self.vola * self.time_to_expiration.sqrt()
    }
}

fn finite(value: f64, parameter: &'static str) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(parameter, value, "rejected non-finite market parameter");
        Err(PricingError::NonFinite { parameter, value })
    }
}

fn positive(value: f64, parameter: &'static str) -> Result<f64, PricingError> {
    let value = finite(value, parameter)?;
    if value > 0.0 {
        Ok(value)
    } else {
        tracing::debug!(parameter, value, "rejected non-positive market parameter");
        Err(PricingError::NonPositive { parameter, value })
    }
}

fn ill_conditioned(quantity: &'static str, value: f64) -> PricingError {
    tracing::debug!(quantity, value, "rejected ill-conditioned market parameters");
    PricingError::IllConditioned { quantity, value }
}

fn time_to_expiration_of(value: f64) -> Result<f64, PricingError> {
    if value == 0.0 {
        tracing::debug!("rejected expired option");
        return Err(PricingError::Expired);
    }
    positive(value, "time_to_expiration")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value of the option at expiration.
    pub fn payoff(&self, asset_price: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (asset_price - strike).max(0.0),
            OptionType::Put => (strike - asset_price).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters() {
        let dp = DerivativeParameter::new(100.0, 95.0, 0.5, -0.01, 0.3).unwrap();
        assert_eq!(dp.asset_price(), 100.0);
        assert_eq!(dp.strike(), 95.0);
        assert_eq!(dp.time_to_expiration(), 0.5);
        assert_eq!(dp.rfr(), -0.01);
        assert_eq!(dp.vola(), 0.3);
        assert_eq!(dp.discount_factor(), (0.005_f64).exp());
    }

    #[test]
    fn non_positive_parameters() {
        assert_eq!(
            DerivativeParameter::new(0.0, 100.0, 1.0, 0.05, 0.2),
            Err(PricingError::NonPositive { parameter: "asset_price", value: 0.0 })
        );
        assert_eq!(
            DerivativeParameter::new(100.0, -5.0, 1.0, 0.05, 0.2),
            Err(PricingError::NonPositive { parameter: "strike", value: -5.0 })
        );
        assert_eq!(
            DerivativeParameter::new(100.0, 100.0, -1.0, 0.05, 0.2),
            Err(PricingError::NonPositive { parameter: "time_to_expiration", value: -1.0 })
        );
        assert_eq!(
            DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 0.0),
            Err(PricingError::NonPositive { parameter: "vola", value: 0.0 })
        );
    }

    #[test]
    fn expired_option() {
        assert_eq!(
            DerivativeParameter::new(100.0, 100.0, 0.0, 0.05, 0.2),
            Err(PricingError::Expired)
        );
    }

    #[test]
    fn ill_conditioned_parameters() {
        assert_eq!(
            DerivativeParameter::new(100.0, 100.0, 1e-10, 0.0, 5e-324),
            Err(PricingError::IllConditioned { quantity: "sigma_sqrt_t", value: 0.0 })
        );
        assert_eq!(
            DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 1e200),
            Err(PricingError::IllConditioned {
                quantity: "sigma_squared_t",
                value: f64::INFINITY
            })
        );
        assert!(DerivativeParameter::new(100.0, 100.0, 1e-10, 0.05, 1e-6).is_ok());
        assert!(DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 1e150).is_ok());
        assert!(DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 1e-200).is_ok());
    }

    #[test]
    fn non_finite_parameters() {
        assert!(matches!(
            DerivativeParameter::new(f64::NAN, 100.0, 1.0, 0.05, 0.2),
            Err(PricingError::NonFinite { parameter: "asset_price", .. })
        ));
        assert!(matches!(
            DerivativeParameter::new(100.0, 100.0, 1.0, f64::INFINITY, 0.2),
            Err(PricingError::NonFinite { parameter: "rfr", .. })
        ));
        assert!(matches!(
            DerivativeParameter::new(100.0, 100.0, f64::NAN, 0.05, 0.2),
            Err(PricingError::NonFinite { parameter: "time_to_expiration", .. })
        ));
    }

    #[test]
    fn error_messages() {
        let err = DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, -0.2).unwrap_err();
        assert_eq!(err.to_string(), "vola must be positive, got -0.2");
        let err = DerivativeParameter::new(100.0, 100.0, 0.0, 0.05, 0.2).unwrap_err();
        assert_eq!(err.to_string(), "time to expiration is 0, the option has expired");
    }

    #[test]
    fn payoff() {
        assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
    }
}
