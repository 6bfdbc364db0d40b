//! Types for effect size representation

use std::fmt;

/// Types of effect sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeType {
    /// Standardized mean difference (Cohen's d)
    StandardizedMeanDifference,
    /// Symmetric misclassification rate of the overlap threshold
    MisclassificationRate,
}

impl EffectSizeType {
    /// Get the name of the effect size type
    pub fn name(&self) -> &'static str {
        match self {
            Self::StandardizedMeanDifference => "Standardized Mean Difference",
            Self::MisclassificationRate => "Misclassification Rate",
        }
    }
}

/// An effect size measurement with magnitude and interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSize {
    /// The effect size magnitude
    pub magnitude: f64,
    /// The type of effect size
    pub effect_type: EffectSizeType,
    /// Interpretation of the magnitude
    pub interpretation: EffectSizeInterpretation,
    /// Sample sizes (group1, group2)
    pub sample_sizes: Option<(usize, usize)>,
}

impl EffectSize {
    /// Create a new effect size
    pub fn new(
        magnitude: f64,
        effect_type: EffectSizeType,
        sample_sizes: Option<(usize, usize)>,
    ) -> Self {
        let interpretation = EffectSizeInterpretation::from_magnitude(magnitude, effect_type);

        Self {
            magnitude,
            effect_type,
            interpretation,
            sample_sizes,
        }
    }

    /// Get the absolute magnitude
    pub fn abs_magnitude(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Check if the effect size is practically significant
    pub fn is_practically_significant(&self) -> bool {
        matches!(
            self.interpretation,
            EffectSizeInterpretation::Medium | EffectSizeInterpretation::Large
        )
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} ({})",
            self.effect_type.name(),
            self.magnitude,
            self.interpretation
        )
    }
}

/// Interpretation of effect size magnitude following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeInterpretation {
    /// Negligible effect (very small)
    Negligible,
    /// Small effect
    Small,
    /// Medium effect
    Medium,
    /// Large effect
    Large,
}

impl EffectSizeInterpretation {
    /// Get interpretation from magnitude based on effect size type
    pub fn from_magnitude(magnitude: f64, effect_type: EffectSizeType) -> Self {
        match effect_type {
            EffectSizeType::StandardizedMeanDifference => {
                // Cohen's conventions for d
                let abs_magnitude = magnitude.abs();
                if abs_magnitude < 0.2 {
                    Self::Negligible
                } else if abs_magnitude < 0.5 {
                    Self::Small
                } else if abs_magnitude < 0.8 {
                    Self::Medium
                } else {
                    Self::Large
                }
            }
            EffectSizeType::MisclassificationRate => {
                // A rate near 0.5 means the threshold separates nothing;
                // interpret by the distance below chance
                let separation = (0.5 - magnitude).max(0.0);
                if separation < 0.06 {
                    Self::Negligible
                } else if separation < 0.14 {
                    Self::Small
                } else if separation < 0.21 {
                    Self::Medium
                } else {
                    Self::Large
                }
            }
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohens_d_interpretation() {
        use EffectSizeType::StandardizedMeanDifference as D;
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.1, D),
            EffectSizeInterpretation::Negligible
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.3, D),
            EffectSizeInterpretation::Small
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(-0.6, D),
            EffectSizeInterpretation::Medium
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(1.0, D),
            EffectSizeInterpretation::Large
        );
    }

    #[test]
    fn test_misclassification_interpretation() {
        use EffectSizeType::MisclassificationRate as R;
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.48, R),
            EffectSizeInterpretation::Negligible
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.40, R),
            EffectSizeInterpretation::Small
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.32, R),
            EffectSizeInterpretation::Medium
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.05, R),
            EffectSizeInterpretation::Large
        );
    }

    #[test]
    fn test_effect_size_display() {
        let effect_size = EffectSize::new(
            0.6,
            EffectSizeType::StandardizedMeanDifference,
            Some((10, 10)),
        );

        let display = format!("{}", effect_size);
        assert!(display.contains("Standardized Mean Difference"));
        assert!(display.contains("0.600"));
        assert!(display.contains("medium"));
    }
}
