//! Bootstrap confidence intervals for claims analysis
//!
//! Confidence intervals for the difference of a cost statistic (mean or
//! median) between two beneficiary groups, built from a non-parametric
//! bootstrap with a pivot construction. See [`DifferenceBootstrap`] for the
//! exact resampling scheme, including its deliberate one-sided asymmetry.
//!
//! # Example
//!
//! ```rust
//! use claims_confidence::{DifferenceBootstrap, DifferenceStatistic};
//!
//! let stroke = vec![120.0, 180.0, 210.0, 250.0, 320.0, 400.0];
//! let cancer = vec![50.0, 55.0, 62.0, 71.0, 80.0, 95.0];
//!
//! let result = DifferenceBootstrap::new(DifferenceStatistic::Mean)
//!     .with_resamples(1000)
//!     .with_seed(42)
//!     .confidence_interval(&stroke, &cancer)
//!     .unwrap();
//! println!("95% CI for the mean difference: {}", result.interval);
//! ```

mod bootstrap;
mod types;

pub use bootstrap::{
    BootstrapResult, DifferenceBootstrap, DifferenceStatistic, DEFAULT_RESAMPLES,
};
pub use types::{ConfidenceInterval, ConfidenceLevel};

/// Convenience constructor for a mean-difference bootstrap
pub fn mean_difference() -> DifferenceBootstrap {
    DifferenceBootstrap::new(DifferenceStatistic::Mean)
}

/// Convenience constructor for a median-difference bootstrap
pub fn median_difference() -> DifferenceBootstrap {
    DifferenceBootstrap::new(DifferenceStatistic::Median)
}
