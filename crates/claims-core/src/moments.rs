//! Descriptive moments and order statistics
//!
//! Small numeric helpers shared by the hypothesis tests, bootstrap, and
//! effect size crates. Every function fails explicitly on inputs too small
//! for the requested statistic rather than returning NaN.

use crate::{Error, Result};

/// Arithmetic mean of a sample
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Unbiased sample variance (n - 1 denominator)
pub fn sample_variance(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample.len(),
        });
    }
    let m = mean(sample)?;
    let ss = sample.iter().map(|&x| (x - m) * (x - m)).sum::<f64>();
    Ok(ss / (sample.len() - 1) as f64)
}

/// Sample standard deviation
pub fn sample_std(sample: &[f64]) -> Result<f64> {
    Ok(sample_variance(sample)?.sqrt())
}

/// Sample median (copies and sorts)
pub fn median(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(median_of_sorted(&sorted))
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Percentile of pre-sorted data with linear interpolation
///
/// `p` is a probability in [0, 1]. Interpolates between the two nearest
/// order statistics (the common "type 7" definition).
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "percentile {p} must be in [0, 1]"
        )));
    }
    if sorted.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    let h = p * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    Ok(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

/// Check a sample for NaN or infinite values
pub fn check_finite(sample: &[f64], context: &str) -> Result<()> {
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}
