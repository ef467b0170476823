use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    /// d1 and d2 divide by sigma * sqrt(T), so no price or greek exists at expiry.
    #[error("time to expiration is 0, the option has expired")]
    Expired,

    /// Valid inputs whose combination under- or overflows in d1 and d2.
    #[error("{quantity} is {value}, d1 and d2 are undefined")]
    IllConditioned { quantity: &'static str, value: f64 },
}
