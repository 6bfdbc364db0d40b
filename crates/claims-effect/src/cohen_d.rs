//! Cohen's d effect size
//!
//! Standardized mean difference: the gap between two group means expressed
//! in units of the pooled standard deviation.

use crate::{EffectSize, EffectSizeType};
use claims_core::{mean, sample_variance, Error, Result};

/// Cohen's d for two independent samples
///
/// d = (mean1 - mean2) / s_pooled, with the pooled variance weighting each
/// sample's variance by n - 1. Positive when sample 1's mean is larger.
/// Each sample needs at least two observations, and the pooled spread must
/// be positive.
pub fn cohen_d(sample1: &[f64], sample2: &[f64]) -> Result<EffectSize> {
    for sample in [sample1, sample2] {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
    }

    let n1 = sample1.len() as f64;
    let n2 = sample2.len() as f64;
    let var1 = sample_variance(sample1)?;
    let var2 = sample_variance(sample2)?;

    let pooled_variance = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0);
    let pooled_std = pooled_variance.sqrt();
    if pooled_std <= 0.0 {
        return Err(Error::zero_variance("cohen's d: pooled spread"));
    }

    let d = (mean(sample1)? - mean(sample2)?) / pooled_std;
    Ok(EffectSize::new(
        d,
        EffectSizeType::StandardizedMeanDifference,
        Some((sample1.len(), sample2.len())),
    ))
}
