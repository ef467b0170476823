pub mod models;
pub mod normal;

pub use models::{DerivativeParameter, OptionType};
pub use normal::{norm_cdf, norm_pdf};
