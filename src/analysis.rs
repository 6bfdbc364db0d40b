//! The standard analysis battery
//!
//! One deterministic pass over a normalized cohort: cost comparison between
//! two conditions (Welch + bootstrap intervals + effect sizes), prevalence
//! of a condition by sex (two-proportion test + odds ratio), and a race by
//! condition association (chi-square). The driver binary and the
//! integration tests both run through here.

use claims_confidence::{DifferenceBootstrap, DifferenceStatistic, DEFAULT_RESAMPLES};
use claims_core::Result;
use claims_data::extract::{condition_cost_sample, cross_tabulate, indicator_counts};
use claims_data::{Beneficiary, CareSetting, Condition, Sex};
use claims_effect::{classification_overlap, cohen_d};
use claims_inference::{chi_square_test, odds_ratio_from_counts, welch_t_test, TwoProportionTest};
use claims_report::{
    format_bootstrap, format_chi_square, format_contingency_table, format_effect_size,
    format_odds_ratio, format_overlap, format_proportion_test, format_t_test, Report,
};
use tracing::debug;

/// Parameters of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// First condition of the cost comparison (the resampled side)
    pub condition_a: Condition,
    /// Second condition of the cost comparison (the fixed reference)
    pub condition_b: Condition,
    /// Condition whose prevalence is compared across sexes and races
    pub prevalence_condition: Condition,
    /// Bootstrap resample count
    pub resamples: usize,
    /// Bootstrap seed; random when unset
    pub seed: Option<u64>,
    /// Confidence level for the bootstrap intervals
    pub confidence_level: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            condition_a: Condition::Stroke,
            condition_b: Condition::Cancer,
            prevalence_condition: Condition::Diabetes,
            resamples: DEFAULT_RESAMPLES,
            seed: None,
            confidence_level: 0.95,
        }
    }
}

fn bootstrap_engine(statistic: DifferenceStatistic, options: &AnalysisOptions) -> DifferenceBootstrap {
    let engine = DifferenceBootstrap::new(statistic)
        .with_resamples(options.resamples)
        .with_confidence_level(options.confidence_level);
    match options.seed {
        Some(seed) => engine.with_seed(seed),
        None => engine,
    }
}

fn cohort_summary(records: &[Beneficiary]) -> String {
    let males = records.iter().filter(|r| r.sex == Sex::Male).count();
    let females = records.len() - males;
    let deceased = records.iter().filter(|r| r.is_deceased()).count();
    format!(
        "beneficiary-years: {}\nmale: {males}, female: {females}\ndeceased: {deceased}",
        records.len()
    )
}

/// Run the full battery over a cohort and assemble the report
///
/// Fails with the offending procedure's error when a group sample is too
/// small or too uniform for a requested statistic; nothing is silently
/// skipped.
pub fn run_analysis(records: &[Beneficiary], options: &AnalysisOptions) -> Result<Report> {
    let a = options.condition_a;
    let b = options.condition_b;
    debug!(
        records = records.len(),
        condition_a = a.label(),
        condition_b = b.label(),
        "running analysis battery"
    );

    let costs_a = condition_cost_sample(records, a, &CareSetting::ALL);
    let costs_b = condition_cost_sample(records, b, &CareSetting::ALL);

    let t_test = welch_t_test(&costs_a, &costs_b)?;
    let mean_ci = bootstrap_engine(DifferenceStatistic::Mean, options)
        .confidence_interval(&costs_a, &costs_b)?;
    let median_ci = bootstrap_engine(DifferenceStatistic::Median, options)
        .confidence_interval(&costs_a, &costs_b)?;
    let d = cohen_d(&costs_a, &costs_b)?;
    let overlap = classification_overlap(&costs_a, &costs_b)?;

    let prevalence = options.prevalence_condition;
    let (male_cases, male_total) =
        indicator_counts(records, |r| r.sex == Sex::Male, |r| r.has_condition(prevalence));
    let (female_cases, female_total) =
        indicator_counts(records, |r| r.sex == Sex::Female, |r| r.has_condition(prevalence));
    let proportion_test =
        TwoProportionTest::new().test(male_cases, male_total, female_cases, female_total)?;
    let odds = odds_ratio_from_counts(male_cases, male_total, female_cases, female_total)?;

    let race_table = cross_tabulate(
        records,
        |r| r.race.label().to_string(),
        |r| {
            if r.has_condition(prevalence) {
                prevalence.label().to_string()
            } else {
                format!("no {}", prevalence.label())
            }
        },
    )?;
    let chi_square = chi_square_test(&race_table)?;

    let report = Report::new(format!(
        "Claims analysis: {a} vs {b} costs, {prevalence} prevalence"
    ))
    .section("Cohort", cohort_summary(records))
    .section(
        format!("Cost comparison: {a} vs {b} (Welch t-test)"),
        format_t_test(&t_test),
    )
    .section(
        "Bootstrap confidence intervals",
        format!("{}\n{}", format_bootstrap(&mean_ci), format_bootstrap(&median_ci)),
    )
    .section(
        "Effect sizes",
        format!("{}\n{}", format_effect_size(&d), format_overlap(&overlap)),
    )
    .section(
        format!("Prevalence of {prevalence} by sex (male vs female)"),
        format!(
            "{}\n{}",
            format_proportion_test(&proportion_test),
            format_odds_ratio(odds)
        ),
    )
    .section(
        format!("Race by {prevalence}"),
        format!(
            "{}\n{}",
            format_contingency_table(&race_table),
            format_chi_square(&chi_square)
        ),
    );

    Ok(report)
}
