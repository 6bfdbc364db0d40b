//! Welch's unequal-variance t-test

use claims_core::{check_finite, mean, sample_variance, Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;

/// Result of a two-sample Welch t-test
#[derive(Debug, Clone, PartialEq)]
pub struct TTestResult {
    /// t-statistic, positive when sample 1's mean exceeds sample 2's
    pub t_statistic: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub df: f64,
    /// Two-sided p-value, unrounded
    pub p_value: f64,
    pub mean1: f64,
    pub mean2: f64,
    pub sample_sizes: (usize, usize),
}

impl fmt::Display for TTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t = {:.4}, df = {:.2}, p = {:.4}",
            self.t_statistic, self.df, self.p_value
        )
    }
}

/// Welch's t-test for two independent samples with unequal variances
///
/// Uses the per-sample variances for the standard error and the
/// Welch-Satterthwaite approximation for the degrees of freedom. The
/// p-value is two-sided. Each sample needs at least two observations;
/// two samples with zero spread are degenerate.
pub fn welch_t_test(sample1: &[f64], sample2: &[f64]) -> Result<TTestResult> {
    for (sample, which) in [(sample1, "sample 1"), (sample2, "sample 2")] {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
        check_finite(sample, which)?;
    }

    let n1 = sample1.len() as f64;
    let n2 = sample2.len() as f64;
    let mean1 = mean(sample1)?;
    let mean2 = mean(sample2)?;
    let var1 = sample_variance(sample1)?;
    let var2 = sample_variance(sample2)?;

    let se_sq = var1 / n1 + var2 / n2;
    if se_sq <= 0.0 {
        return Err(Error::zero_variance("welch t-test: both samples"));
    }

    let t_statistic = (mean1 - mean2) / se_sq.sqrt();
    let df = se_sq * se_sq
        / ((var1 / n1) * (var1 / n1) / (n1 - 1.0) + (var2 / n2) * (var2 / n2) / (n2 - 1.0));

    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("t-distribution with df {df}: {e}")))?;
    let p_value = 2.0 * (1.0 - t_dist.cdf(t_statistic.abs()));

    Ok(TTestResult {
        t_statistic,
        df,
        p_value,
        mean1,
        mean2,
        sample_sizes: (sample1.len(), sample2.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_condition_cost_scenario() {
        // Stroke vs cancer cost samples from the exploratory analysis
        let stroke = [100.0, 200.0, 300.0];
        let cancer = [50.0, 60.0, 70.0];

        let result = welch_t_test(&stroke, &cancer).unwrap();
        assert!(result.t_statistic > 0.0);
        assert_abs_diff_eq!(result.t_statistic, 2.4128, epsilon = 1e-3);
        assert_abs_diff_eq!(result.df, 2.0400, epsilon = 1e-3);
        // With n = 3 per group and a 100-point stroke spread the evidence is
        // suggestive, not conclusive
        assert!(result.p_value > 0.05 && result.p_value < 0.2);
        assert_abs_diff_eq!(result.mean1, 200.0);
        assert_abs_diff_eq!(result.mean2, 60.0);
    }

    #[test]
    fn test_swap_flips_sign_keeps_p() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [4.0, 5.5, 6.0, 7.5, 9.0];

        let ab = welch_t_test(&a, &b).unwrap();
        let ba = welch_t_test(&b, &a).unwrap();

        assert_abs_diff_eq!(ab.t_statistic, -ba.t_statistic, epsilon = 1e-12);
        assert_abs_diff_eq!(ab.p_value, ba.p_value, epsilon = 1e-12);
        assert_abs_diff_eq!(ab.df, ba.df, epsilon = 1e-12);
    }

    #[test]
    fn test_identical_samples() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let result = welch_t_test(&a, &a).unwrap();
        assert_abs_diff_eq!(result.t_statistic, 0.0);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_large_separation_is_significant() {
        let a: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let b: Vec<f64> = (0..20).map(|i| 10.0 + i as f64).collect();
        let result = welch_t_test(&a, &b).unwrap();
        assert!(result.t_statistic > 10.0);
        assert!(result.p_value < 1e-6);
    }

    #[test]
    fn test_too_small_samples_rejected() {
        assert!(welch_t_test(&[1.0], &[1.0, 2.0]).is_err());
        assert!(welch_t_test(&[1.0, 2.0], &[]).is_err());
    }

    #[test]
    fn test_zero_spread_rejected() {
        let err = welch_t_test(&[5.0, 5.0, 5.0], &[3.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::Degenerate(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(welch_t_test(&[1.0, f64::NAN], &[1.0, 2.0]).is_err());
    }
}
