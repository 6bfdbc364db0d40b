//! Odds ratio between two proportions

use claims_core::{Error, Result};

/// Odds ratio `(p1 / (1 - p1)) / (p2 / (1 - p2))`
///
/// Undefined when either proportion sits at 0 or 1; those inputs fail with
/// a degenerate-input error rather than returning an infinity.
pub fn odds_ratio(p1: f64, p2: f64) -> Result<f64> {
    for (p, which) in [(p1, "group 1"), (p2, "group 2")] {
        if !p.is_finite() {
            return Err(Error::non_finite(which));
        }
        if p <= 0.0 || p >= 1.0 {
            return Err(Error::boundary_proportion(p, "odds ratio"));
        }
    }
    Ok((p1 / (1.0 - p1)) / (p2 / (1.0 - p2)))
}

/// Odds ratio computed from two binomial samples given as (successes, trials)
pub fn odds_ratio_from_counts(
    successes1: u64,
    trials1: u64,
    successes2: u64,
    trials2: u64,
) -> Result<f64> {
    for (trials, which) in [(trials1, "group 1"), (trials2, "group 2")] {
        if trials == 0 {
            return Err(Error::Degenerate(format!(
                "odds ratio: {which} has no trials"
            )));
        }
    }
    odds_ratio(
        successes1 as f64 / trials1 as f64,
        successes2 as f64 / trials2 as f64,
    )
}
