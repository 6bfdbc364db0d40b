//! Classification-overlap effect size
//!
//! Places a separating threshold between two samples and measures how often
//! a simple "above/below threshold" classifier would get group membership
//! wrong. A rate near 0.5 means the cost distributions overlap almost
//! completely; a rate near 0 means the threshold separates them cleanly.

use crate::{EffectSize, EffectSizeType};
use claims_core::{mean, sample_std, Error, Result};

/// Result of the overlap analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOverlap {
    /// Separating threshold on the original scale
    pub threshold: f64,
    /// Symmetric misclassification rate in [0, 1]
    pub misclassification_rate: f64,
    pub sample_sizes: (usize, usize),
}

impl ClassificationOverlap {
    /// View the misclassification rate as an effect size
    pub fn effect_size(&self) -> EffectSize {
        EffectSize::new(
            self.misclassification_rate,
            EffectSizeType::MisclassificationRate,
            Some(self.sample_sizes),
        )
    }
}

/// Overlap of two samples around a spread-weighted threshold
///
/// The threshold weights each sample's standard deviation by the other
/// sample's mean: c = (s1 m2 + s2 m1) / (s1 + s2). Observations of the
/// higher-mean sample below c and of the lower-mean sample above c count as
/// misclassified; the rate is the mean of the two per-group rates.
pub fn classification_overlap(sample1: &[f64], sample2: &[f64]) -> Result<ClassificationOverlap> {
    for sample in [sample1, sample2] {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
    }

    let m1 = mean(sample1)?;
    let m2 = mean(sample2)?;
    let s1 = sample_std(sample1)?;
    let s2 = sample_std(sample2)?;
    if s1 + s2 <= 0.0 {
        return Err(Error::zero_variance("classification overlap: both samples"));
    }

    let threshold = (s1 * m2 + s2 * m1) / (s1 + s2);

    let (high, low) = if m1 >= m2 {
        (sample1, sample2)
    } else {
        (sample2, sample1)
    };
    let high_missed = high.iter().filter(|&&x| x < threshold).count() as f64;
    let low_missed = low.iter().filter(|&&x| x > threshold).count() as f64;
    let misclassification_rate =
        (high_missed / high.len() as f64 + low_missed / low.len() as f64) / 2.0;

    Ok(ClassificationOverlap {
        threshold,
        misclassification_rate,
        sample_sizes: (sample1.len(), sample2.len()),
    })
}
