//! Exploratory statistics for beneficiary claims data
//!
//! This crate ties the workspace together: load and normalize a beneficiary
//! claims file, extract per-group cost and indicator samples, run the
//! standard statistical battery (Welch's t-test, bootstrap confidence
//! intervals, effect sizes, chi-square independence, two-proportion z-test,
//! odds ratio), and render the results as text.
//!
//! The pipeline is strictly forward: loader, extractor, statistics,
//! reporter. Each stage is its own crate; this one re-exports them and adds
//! the [`analysis`] battery used by the `claims-analysis` binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use claims_stats::analysis::{run_analysis, AnalysisOptions};
//!
//! let records = claims_stats::load_from_path("beneficiary_summary.csv")?;
//! let report = run_analysis(&records, &AnalysisOptions::default())?;
//! println!("{report}");
//! ```

pub mod analysis;

pub use claims_confidence::{
    BootstrapResult, ConfidenceInterval, ConfidenceLevel, DifferenceBootstrap,
    DifferenceStatistic, DEFAULT_RESAMPLES,
};
pub use claims_core::{ContingencyTable, Error, Result};
pub use claims_data::{
    extract, load_from_path, load_from_reader, schema, Beneficiary, CareSetting, Condition,
    Conditions, CostComponents, Race, Sex,
};
pub use claims_effect::{
    classification_overlap, cohen_d, ClassificationOverlap, EffectSize,
    EffectSizeInterpretation, EffectSizeType,
};
pub use claims_inference::{
    chi_square_test, odds_ratio, odds_ratio_from_counts, welch_t_test, Alternative,
    ChiSquareResult, ProportionTestResult, TTestResult, TwoProportionTest,
};
pub use claims_report::Report;
