//! Core types for claims analysis
//!
//! This crate provides the shared foundation for the claims-stats workspace:
//!
//! - A unified [`Error`] type covering the pipeline's failure classes
//!   (data errors, degenerate statistical inputs, invalid parameters)
//! - Descriptive [`moments`] (mean, variance, median, percentiles) that fail
//!   explicitly on undersized input instead of producing NaN
//! - The [`ContingencyTable`] data-model type consumed by the chi-square
//!   test and produced by cross-tabulation

mod error;
pub mod moments;
mod table;

pub use error::{Error, Result};
pub use moments::{
    check_finite, mean, median, percentile_of_sorted, sample_std, sample_variance,
};
pub use table::ContingencyTable;
