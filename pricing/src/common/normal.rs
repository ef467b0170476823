//! Standard normal distribution.
//!
//! The cumulative distribution uses `Φ(x) = erfc(-x / √2) / 2` with the
//! complementary error function of `special`, the crate `probability` builds on.
//! Unlike `(1 + erf(x / √2)) / 2` this keeps relative precision in the left tail,
//! and the absolute error stays far below 1e-7 on the whole real line. The result
//! saturates to exactly 0 and 1.
use probability::distribution::{Continuous, Gaussian};
use special::Error;
use std::f64::consts::SQRT_2;

fn standard_normal() -> Gaussian {
    Gaussian::new(0.0, 1.0)
}

/// Probability that a standard normal variable is less than or equal to `x`.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (-x / SQRT_2).compl_error()
}

/// Density of the standard normal distribution, `exp(-x²/2) / √(2π)`.
pub fn norm_pdf(x: f64) -> f64 {
    standard_normal().density(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const TOLERANCE: f64 = 1e-7;

    #[test]
    fn cdf_center() {
        assert_eq!(norm_cdf(0.0), 0.5);
    }

    #[test]
    fn cdf_table_values() {
        assert_approx_eq!(norm_cdf(1.0), 0.841_344_746_068_543, TOLERANCE);
        assert_approx_eq!(norm_cdf(-1.0), 0.158_655_253_931_457, TOLERANCE);
        assert_approx_eq!(norm_cdf(1.96), 0.975_002_104_851_780, TOLERANCE);
        assert_approx_eq!(norm_cdf(-2.5), 0.006_209_665_325_776, TOLERANCE);
        assert_approx_eq!(norm_cdf(3.0), 0.998_650_101_968_370, TOLERANCE);
        assert_approx_eq!(norm_cdf(0.35), 0.636_830_651_175_619, TOLERANCE);
    }

    #[test]
    fn cdf_left_tail_keeps_relative_precision() {
        for (x, expected) in [
            (-8.0, 6.220_960_574_271_819e-16),
            (-9.0, 1.128_588_405_953_842_2e-19),
            (-20.0, 2.753_624_118_606_331_4e-89),
        ] {
            let relative_error = (norm_cdf(x) - expected).abs() / expected;
            assert!(relative_error < 1e-10, "x = {x}: {}", norm_cdf(x));
        }
    }

    #[test]
    fn cdf_saturates_in_the_tails() {
        assert_approx_eq!(norm_cdf(10.0), 1.0, TOLERANCE);
        assert_approx_eq!(norm_cdf(-10.0), 0.0, TOLERANCE);
        assert_eq!(norm_cdf(40.0), 1.0);
        assert!(norm_cdf(-40.0) >= 0.0 && norm_cdf(-40.0) < 1e-300);
    }

    #[test]
    fn cdf_is_non_decreasing() {
        let mut previous = norm_cdf(-6.0);
        for i in 1..=240 {
            let x = -6.0 + i as f64 * 0.05;
            let current = norm_cdf(x);
            assert!(current >= previous, "cdf decreased at x = {x}");
            previous = current;
        }
    }

    #[test]
    fn cdf_reflection() {
        for x in [0.1, 0.5, 1.0, 2.0, 4.0] {
            assert_approx_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, 1e-15);
        }
    }

    #[test]
    fn pdf_values() {
        assert_approx_eq!(norm_pdf(0.0), 0.398_942_280_401_432_7, 1e-15);
        assert_approx_eq!(norm_pdf(1.0), 0.241_970_724_519_143_37, 1e-15);
        assert_approx_eq!(norm_pdf(0.35), 0.375_240_346_916_938, 1e-12);
        assert!(norm_pdf(40.0) >= 0.0);
    }

    #[test]
    fn pdf_is_symmetric() {
        for x in [0.0, 0.25, 1.0, 1.5, 3.7, 8.0] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }
}
