//! Two-sample proportion z-test

use claims_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;

/// Alternative hypothesis for directional tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// p1 != p2
    #[default]
    TwoSided,
    /// p1 > p2
    Greater,
    /// p1 < p2
    Less,
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TwoSided => "two-sided",
            Self::Greater => "greater",
            Self::Less => "less",
        };
        f.write_str(s)
    }
}

/// Result of a two-proportion z-test
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionTestResult {
    pub p1: f64,
    pub p2: f64,
    /// z-statistic, positive when group 1's proportion is larger
    pub z_statistic: f64,
    /// p-value under the configured alternative, unrounded
    pub p_value: f64,
    pub alternative: Alternative,
    pub sample_sizes: (u64, u64),
}

impl fmt::Display for ProportionTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p1 = {:.4}, p2 = {:.4}, z = {:.4}, p = {:.4} ({})",
            self.p1, self.p2, self.z_statistic, self.p_value, self.alternative
        )
    }
}

/// Two-proportion z-test with an unpooled standard error
///
/// The standard error uses each sample's own variance,
/// `sqrt(p1 (1 - p1) / n1 + p2 (1 - p2) / n2)`, so both proportions must be
/// strictly inside (0, 1) and both trial counts positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoProportionTest {
    alternative: Alternative,
}

impl TwoProportionTest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the alternative hypothesis (two-sided by default)
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    /// Run the test on two binomial samples given as (successes, trials)
    pub fn test(
        &self,
        successes1: u64,
        trials1: u64,
        successes2: u64,
        trials2: u64,
    ) -> Result<ProportionTestResult> {
        for (successes, trials, which) in
            [(successes1, trials1, "group 1"), (successes2, trials2, "group 2")]
        {
            if trials == 0 {
                return Err(Error::InsufficientData {
                    expected: 1,
                    actual: 0,
                });
            }
            if successes > trials {
                return Err(Error::InvalidParameter(format!(
                    "{which}: {successes} successes out of {trials} trials"
                )));
            }
        }

        let p1 = successes1 as f64 / trials1 as f64;
        let p2 = successes2 as f64 / trials2 as f64;
        for (p, which) in [(p1, "group 1"), (p2, "group 2")] {
            if p <= 0.0 || p >= 1.0 {
                return Err(Error::boundary_proportion(p, which));
            }
        }

        let se = (p1 * (1.0 - p1) / trials1 as f64 + p2 * (1.0 - p2) / trials2 as f64).sqrt();
        let z_statistic = (p1 - p2) / se;

        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| Error::Computation(format!("standard normal: {e}")))?;
        let p_value = match self.alternative {
            Alternative::TwoSided => 2.0 * (1.0 - normal.cdf(z_statistic.abs())),
            Alternative::Greater => 1.0 - normal.cdf(z_statistic),
            Alternative::Less => normal.cdf(z_statistic),
        };

        Ok(ProportionTestResult {
            p1,
            p2,
            z_statistic,
            p_value,
            alternative: self.alternative,
            sample_sizes: (trials1, trials2),
        })
    }
}
