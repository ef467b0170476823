pub mod black_scholes;

pub use black_scholes::{call_price, put_price, AuxiliaryTerms, BlackScholesMerton, OptionPrice};
