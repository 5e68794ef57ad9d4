pub mod bs;

/// Common traits shared by option models
pub mod traits {
    /// An option model that exposes a price and its first and second order sensitivities.
    ///
    /// Implementations must be pure: repeated calls return the same values regardless of order.
    pub trait GreeksModel: Send + Sync {
        fn price(&self) -> f64;
        fn delta(&self) -> f64;
        fn gamma(&self) -> f64;
        fn vega(&self) -> f64;
        fn theta(&self) -> f64;
    }
}

/// Standard normal distribution functions used by the pricing formulas
pub mod utils {
    use statrs::consts::SQRT_2PI;
    use std::f64::consts::FRAC_1_SQRT_2;

    /// Standard normal cumulative distribution function Φ(x).
    ///
    /// Evaluated as `erfc(-x/√2)/2` so the lower tail keeps full relative
    /// precision instead of cancelling in `1 - Φ(-x)`.
    // libm's erfc is accurate to the last ulp; statrs `Normal::cdf` is only good to ~1e-11.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Standard normal probability density function φ(x)
    pub fn normal_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / SQRT_2PI
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_relative_eq;

        #[test]
        fn test_normal_cdf_reference_values() {
            assert_relative_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
            assert_relative_eq!(normal_cdf(1.0), 0.841_344_746_068_543, epsilon = 1e-12);
            assert_relative_eq!(normal_cdf(-1.96), 0.024_997_895_148_220, epsilon = 1e-12);
        }

        #[test]
        fn test_normal_cdf_symmetry_and_tails() {
            for x in [0.1, 0.5, 1.5, 3.0, 6.0, 8.0] {
                assert_relative_eq!(normal_cdf(x) + normal_cdf(-x), 1.0, epsilon = 1e-14);
            }
            // Φ(-8) ≈ 6.22e-16; must not collapse to zero
            let tail = normal_cdf(-8.0);
            assert!(tail > 0.0);
            assert_relative_eq!(tail, 6.220_960_574_271_78e-16, max_relative = 1e-6);
        }

        #[test]
        fn test_normal_cdf_full_precision_in_tails() {
            // Reference values of Φ(x) to 16 significant digits
            for (x, expected) in [
                (-1.0, 0.158_655_253_931_457_05),
                (-5.0, 2.866_515_718_791_939e-7),
                (-8.0, 6.220_960_574_271_784e-16),
            ] {
                assert_relative_eq!(normal_cdf(x), expected, max_relative = 1e-13);
            }
        }

        #[test]
        fn test_normal_pdf_reference_values() {
            assert_relative_eq!(normal_pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
            assert_relative_eq!(normal_pdf(1.0), normal_pdf(-1.0), epsilon = 1e-15);
            assert_relative_eq!(normal_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-14);
            assert!(normal_pdf(40.0) >= 0.0);
        }
    }
}
