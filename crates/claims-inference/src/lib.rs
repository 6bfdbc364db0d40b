//! Hypothesis tests for claims analysis
//!
//! Stateless statistical procedures over extracted group samples and
//! contingency tables. Each is a pure function (or a small configured
//! value) over immutable inputs; every precondition failure is an explicit
//! error, never a silent NaN. P-values are returned unrounded; formatting
//! belongs to the reporter.
//!
//! - [`welch_t_test`]: unequal-variance two-sample comparison of means
//! - [`chi_square_test`]: independence of two categorical partitions
//! - [`TwoProportionTest`]: unpooled two-sample z-test on prevalences
//! - [`odds_ratio`]: odds ratio between two prevalences
//!
//! # Example
//!
//! ```rust
//! use claims_inference::welch_t_test;
//!
//! let stroke = vec![100.0, 200.0, 300.0];
//! let cancer = vec![50.0, 60.0, 70.0];
//! let result = welch_t_test(&stroke, &cancer).unwrap();
//! assert!(result.t_statistic > 0.0);
//! ```

mod chi_square;
mod odds;
mod proportion;
mod welch;

pub use chi_square::{chi_square_test, ChiSquareResult};
pub use odds::{odds_ratio, odds_ratio_from_counts};
pub use proportion::{Alternative, ProportionTestResult, TwoProportionTest};
pub use welch::{welch_t_test, TTestResult};
