//! Effect size measurement for claims analysis
//!
//! Quantifies how big a cost difference is, beyond whether it is
//! statistically detectable:
//!
//! - **Cohen's d** ([`cohen_d`]): standardized mean difference in pooled
//!   standard deviation units
//! - **Classification overlap** ([`classification_overlap`]): how often a
//!   single separating threshold misassigns group membership
//!
//! # Example
//!
//! ```rust
//! use claims_effect::cohen_d;
//!
//! let group1 = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let group2 = vec![3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! let effect = cohen_d(&group1, &group2).unwrap();
//! println!("Cohen's d: {:.3} ({})", effect.magnitude, effect.interpretation);
//! ```

mod cohen_d;
mod overlap;
mod types;

pub use cohen_d::cohen_d;
pub use overlap::{classification_overlap, ClassificationOverlap};
pub use types::{EffectSize, EffectSizeInterpretation, EffectSizeType};
