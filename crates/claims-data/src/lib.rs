//! Loading, normalization, and group extraction for beneficiary claims data
//!
//! This crate covers the first two stages of the analysis pipeline:
//!
//! - **Loader/Normalizer**: read the raw beneficiary summary CSV, validate
//!   its schema, recode demographics, parse dates, collect the condition
//!   indicator set, and derive per-setting cost totals
//!   ([`load_from_path`], [`load_from_reader`])
//! - **Feature Extractor**: turn a predicate and a value selector into a
//!   numeric group sample, count binomial successes/trials, and
//!   cross-tabulate categorical splits ([`extract::extract_group`],
//!   [`extract::cross_tabulate`])
//!
//! Data flows strictly forward from here into the statistical crates;
//! nothing in this crate calls back into them.
//!
//! # Example
//!
//! ```rust,ignore
//! use claims_data::{load_from_path, extract::condition_cost_sample};
//! use claims_data::{CareSetting, Condition};
//!
//! let records = load_from_path("beneficiary_summary.csv")?;
//! let stroke_costs =
//!     condition_cost_sample(&records, Condition::Stroke, &CareSetting::ALL);
//! ```

pub mod extract;
mod loader;
mod record;
pub mod schema;

pub use loader::{load_from_path, load_from_reader};
pub use record::{
    Beneficiary, CareSetting, Condition, Conditions, CostComponents, Race, Sex,
};
