//! Statistics Module - Chi-Square Goodness of Fit
//! ==============================================
//!
//! Pearson's chi-square test over a finite outcome space, with the p-value
//! taken from the chi-square survival function:
//!
//! ```text
//! X² = Σ (O_i - E_i)² / E_i          p = Q(df / 2, X² / 2)
//! ```
//!
//! where `Q` is the regularized upper incomplete gamma function.

use serde::{Deserialize, Serialize};

// =============================================================================
// SPECIAL FUNCTIONS
// =============================================================================

/// Lanczos coefficients (g = 7, n = 9).
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Iteration cap for the incomplete gamma series and continued fraction.
const MAX_ITERATIONS: usize = 500;

/// Relative tolerance for the incomplete gamma evaluation.
const EPSILON: f64 = 1e-15;

/// Natural log of the gamma function for `x > 0`.
///
/// Lanczos approximation, accurate to about 15 significant digits.
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection: Γ(x)Γ(1-x) = π / sin(πx)
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }
    
    let x = x - 1.0;
    let mut sum = LANCZOS[0];
    for (i, &c) in LANCZOS.iter().enumerate().skip(1) {
        sum += c / (x + i as f64);
    }
    let t = x + 7.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Natural log of `n!`.
pub fn ln_factorial(n: usize) -> f64 {
    ln_gamma(n as f64 + 1.0)
}

/// Regularized upper incomplete gamma function `Q(a, x) = Γ(a, x) / Γ(a)`.
///
/// Series expansion below `x = a + 1`, Lentz continued fraction above.
pub fn regularized_gamma_q(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 1.0;
    }
    if x.is_infinite() {
        return 0.0;
    }
    if x < a + 1.0 {
        1.0 - lower_gamma_series(a, x)
    } else {
        upper_gamma_fraction(a, x)
    }
}

/// `P(a, x)` by its power series.
fn lower_gamma_series(a: f64, x: f64) -> f64 {
    let mut term = 1.0 / a;
    let mut sum = term;
    let mut ap = a;
    for _ in 0..MAX_ITERATIONS {
        ap += 1.0;
        term *= x / ap;
        sum += term;
        if term.abs() < sum.abs() * EPSILON {
            break;
        }
    }
    (sum.ln() - x + a * x.ln() - ln_gamma(a)).exp()
}

/// `Q(a, x)` by modified Lentz evaluation of its continued fraction.
fn upper_gamma_fraction(a: f64, x: f64) -> f64 {
    let tiny = f64::MIN_POSITIVE / EPSILON;
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / tiny;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..MAX_ITERATIONS {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < tiny {
            d = tiny;
        }
        c = b + an / c;
        if c.abs() < tiny {
            c = tiny;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < EPSILON {
            break;
        }
    }
    (-x + a * x.ln() - ln_gamma(a)).exp() * h
}

/// Survival function of the chi-square distribution, `P(X² >= x)`.
///
/// With zero degrees of freedom any finite statistic is rounding noise
/// over a single outcome, and the p-value is 1.
pub fn chi_square_sf(x: f64, degrees_of_freedom: usize) -> f64 {
    if degrees_of_freedom == 0 {
        return if x.is_finite() { 1.0 } else { 0.0 };
    }
    regularized_gamma_q(degrees_of_freedom as f64 / 2.0, x / 2.0)
}

// =============================================================================
// CHI-SQUARE TEST
// =============================================================================

/// Outcome of a chi-square goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareResult {
    /// Pearson statistic X²
    pub statistic: f64,
    
    /// P(X² >= statistic) under the theoretical distribution
    pub p_value: f64,
    
    /// Outcomes with positive expected count, minus one
    pub degrees_of_freedom: usize,
}

impl ChiSquareResult {
    /// Returns true unless the p-value falls below `significance`.
    pub fn passes(&self, significance: f64) -> bool {
        self.p_value >= significance
    }
}

/// Pearson's chi-square test of observed against expected counts.
///
/// Outcomes the theory gives zero expected count carry no degree of
/// freedom. If one of them was observed anyway the statistic is infinite
/// and the p-value zero.
///
/// Both slices must have the same length.
pub fn chi_square_test(observed: &[f64], expected: &[f64]) -> ChiSquareResult {
    debug_assert_eq!(observed.len(), expected.len());
    
    let mut statistic = 0.0;
    let mut support = 0usize;
    for (&o, &e) in observed.iter().zip(expected) {
        if e > 0.0 {
            statistic += (o - e) * (o - e) / e;
            support += 1;
        } else if o > 0.0 {
            statistic = f64::INFINITY;
        }
    }
    
    let degrees_of_freedom = support.saturating_sub(1);
    let p_value = if statistic.is_infinite() {
        0.0
    } else {
        chi_square_sf(statistic, degrees_of_freedom)
    };
    
    ChiSquareResult {
        statistic,
        p_value,
        degrees_of_freedom,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rand_distr::{ChiSquared, Distribution};
    
    #[test]
    fn test_ln_gamma_known_values() {
        assert_relative_eq!(ln_gamma(1.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ln_gamma(2.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ln_gamma(5.0), 24.0f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(ln_gamma(0.5), std::f64::consts::PI.sqrt().ln(), epsilon = 1e-12);
        assert_relative_eq!(ln_factorial(10), 3_628_800.0f64.ln(), epsilon = 1e-10);
    }
    
    #[test]
    fn test_chi_square_sf_known_values() {
        // 95th percentiles
        assert_relative_eq!(chi_square_sf(3.841_458_820_694_124, 1), 0.05, epsilon = 1e-9);
        assert_relative_eq!(chi_square_sf(11.070_497_693_516_35, 5), 0.05, epsilon = 1e-9);
        // Two degrees of freedom is exponential: sf(x) = exp(-x/2)
        assert_relative_eq!(chi_square_sf(2.0, 2), (-1.0f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(chi_square_sf(30.0, 2), (-15.0f64).exp(), epsilon = 1e-15);
        assert_eq!(chi_square_sf(0.0, 3), 1.0);
        assert_eq!(chi_square_sf(f64::INFINITY, 3), 0.0);
    }
    
    #[test]
    fn test_chi_square_sf_calibrated() {
        // p-values of true chi-square variates are uniform on [0, 1]
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for &df in &[1usize, 3, 7, 23] {
            let dist = ChiSquared::new(df as f64).unwrap();
            let n = 5000;
            let mut mean = 0.0;
            let mut below_tenth = 0;
            for _ in 0..n {
                let p = chi_square_sf(dist.sample(&mut rng), df);
                assert!((0.0..=1.0).contains(&p));
                mean += p / n as f64;
                if p < 0.1 {
                    below_tenth += 1;
                }
            }
            assert!((mean - 0.5).abs() < 0.03, "df={} mean p={}", df, mean);
            let rate = below_tenth as f64 / n as f64;
            assert!((rate - 0.1).abs() < 0.025, "df={} rate={}", df, rate);
        }
    }
    
    #[test]
    fn test_chi_square_perfect_fit() {
        let result = chi_square_test(&[25.0, 25.0, 25.0, 25.0], &[25.0, 25.0, 25.0, 25.0]);
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.degrees_of_freedom, 3);
        assert_relative_eq!(result.p_value, 1.0);
        assert!(result.passes(0.1));
    }
    
    #[test]
    fn test_chi_square_statistic() {
        // (30-25)²/25 + (20-25)²/25 = 2, df = 1
        let result = chi_square_test(&[30.0, 20.0], &[25.0, 25.0]);
        assert_relative_eq!(result.statistic, 2.0);
        assert_eq!(result.degrees_of_freedom, 1);
        assert_relative_eq!(result.p_value, 0.157_299_207_050_285_1, epsilon = 1e-9);
    }
    
    #[test]
    fn test_chi_square_zero_expected() {
        // Unobserved impossible outcomes are dropped
        let result = chi_square_test(&[50.0, 0.0, 50.0], &[50.0, 0.0, 50.0]);
        assert_eq!(result.degrees_of_freedom, 1);
        assert!(result.passes(0.1));
        
        // Observed impossible outcomes fail outright
        let result = chi_square_test(&[49.0, 1.0, 50.0], &[50.0, 0.0, 50.0]);
        assert!(result.statistic.is_infinite());
        assert_eq!(result.p_value, 0.0);
        assert!(!result.passes(0.1));
    }
    
    #[test]
    fn test_chi_square_single_outcome() {
        let result = chi_square_test(&[100.0], &[100.0]);
        assert_eq!(result.degrees_of_freedom, 0);
        assert_eq!(result.p_value, 1.0);
        
        // A law summing to 1 - 9e-16 still leaves nothing to test
        let result = chi_square_test(&[1000.0], &[1000.0 * 0.999_999_999_999_999_1]);
        assert!(result.statistic > 0.0);
        assert_eq!(result.p_value, 1.0);
        assert!(result.passes(0.1));
        
        assert_eq!(chi_square_sf(f64::INFINITY, 0), 0.0);
    }
}
