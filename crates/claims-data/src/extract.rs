//! Group extraction and cross-tabulation
//!
//! One parameterized extractor replaces the per-condition filter/aggregate
//! blocks of exploratory analyses: a predicate chooses the rows, a selector
//! maps each retained row to a number, and input order is preserved. Empty
//! extractions are valid; the statistical procedures downstream are the ones
//! that reject undersized samples.

use crate::record::{Beneficiary, CareSetting, Condition};
use claims_core::{ContingencyTable, Result};

/// Filter records by `predicate` and map the survivors through `selector`
pub fn extract_group<P, V>(records: &[Beneficiary], predicate: P, selector: V) -> Vec<f64>
where
    P: Fn(&Beneficiary) -> bool,
    V: Fn(&Beneficiary) -> f64,
{
    records
        .iter()
        .filter(|r| predicate(r))
        .map(selector)
        .collect()
}

/// Cost sample for beneficiaries with `condition`, summed over `settings`
pub fn condition_cost_sample(
    records: &[Beneficiary],
    condition: Condition,
    settings: &[CareSetting],
) -> Vec<f64> {
    extract_group(
        records,
        |r| r.has_condition(condition),
        |r| r.total_cost(settings),
    )
}

/// Success and trial counts for a binomial comparison
///
/// Trials are the records matching `predicate`; successes the subset for
/// which `indicator` also holds.
pub fn indicator_counts<P, I>(records: &[Beneficiary], predicate: P, indicator: I) -> (u64, u64)
where
    P: Fn(&Beneficiary) -> bool,
    I: Fn(&Beneficiary) -> bool,
{
    let mut successes = 0u64;
    let mut trials = 0u64;
    for record in records.iter().filter(|r| predicate(r)) {
        trials += 1;
        if indicator(record) {
            successes += 1;
        }
    }
    (successes, trials)
}

/// Cross-tabulate records into a labelled contingency table
///
/// Row and column categories are discovered from the data in first-seen
/// order, so the partitions are exhaustive by construction.
pub fn cross_tabulate<R, C>(records: &[Beneficiary], row_fn: R, col_fn: C) -> Result<ContingencyTable>
where
    R: Fn(&Beneficiary) -> String,
    C: Fn(&Beneficiary) -> String,
{
    let mut row_labels: Vec<String> = Vec::new();
    let mut col_labels: Vec<String> = Vec::new();
    let mut cells: Vec<(usize, usize)> = Vec::with_capacity(records.len());

    for record in records {
        let row_label = row_fn(record);
        let col_label = col_fn(record);
        let row = index_of(&mut row_labels, row_label);
        let col = index_of(&mut col_labels, col_label);
        cells.push((row, col));
    }

    let mut rows = vec![vec![0u64; col_labels.len()]; row_labels.len()];
    for (row, col) in cells {
        rows[row][col] += 1;
    }
    ContingencyTable::from_rows(row_labels, col_labels, rows)
}

fn index_of(labels: &mut Vec<String>, label: String) -> usize {
    match labels.iter().position(|l| *l == label) {
        Some(i) => i,
        None => {
            labels.push(label);
            labels.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Conditions, CostComponents, Race, Sex};
    use chrono::NaiveDate;

    fn beneficiary(sex: Sex, race: Race, conditions: Conditions, inpatient: f64) -> Beneficiary {
        Beneficiary {
            id: "B".to_string(),
            sex,
            race,
            birth_date: NaiveDate::from_ymd_opt(1940, 1, 1).unwrap(),
            death_date: None,
            conditions,
            inpatient: CostComponents::new(inpatient, 0.0, 0.0),
            outpatient: CostComponents::default(),
            carrier: CostComponents::default(),
        }
    }

    fn cohort() -> Vec<Beneficiary> {
        vec![
            beneficiary(Sex::Male, Race::White, Conditions::STROKE, 100.0),
            beneficiary(Sex::Female, Race::Black, Conditions::CANCER, 50.0),
            beneficiary(Sex::Female, Race::White, Conditions::STROKE, 300.0),
            beneficiary(Sex::Male, Race::White, Conditions::empty(), 0.0),
        ]
    }

    #[test]
    fn test_extract_preserves_order() {
        let records = cohort();
        let sample = extract_group(
            &records,
            |r| r.has_condition(Condition::Stroke),
            |r| r.setting_cost(CareSetting::Inpatient),
        );
        assert_eq!(sample, vec![100.0, 300.0]);
    }

    #[test]
    fn test_extract_empty_is_valid() {
        let records = cohort();
        let sample = extract_group(
            &records,
            |r| r.has_condition(Condition::Copd),
            |r| r.combined_cost(),
        );
        assert!(sample.is_empty());
    }

    #[test]
    fn test_condition_cost_sample() {
        let records = cohort();
        let sample =
            condition_cost_sample(&records, Condition::Stroke, &[CareSetting::Inpatient]);
        assert_eq!(sample, vec![100.0, 300.0]);
    }

    #[test]
    fn test_indicator_counts() {
        let records = cohort();
        let (successes, trials) = indicator_counts(
            &records,
            |r| r.sex == Sex::Male,
            |r| r.has_condition(Condition::Stroke),
        );
        assert_eq!((successes, trials), (1, 2));

        let (successes, trials) = indicator_counts(
            &records,
            |r| r.sex == Sex::Female,
            |r| r.has_condition(Condition::Stroke),
        );
        assert_eq!((successes, trials), (1, 2));
    }

    #[test]
    fn test_cross_tabulate() {
        let records = cohort();
        let table = cross_tabulate(
            &records,
            |r| r.race.label().to_string(),
            |r| {
                if r.has_condition(Condition::Stroke) {
                    "stroke".to_string()
                } else {
                    "no stroke".to_string()
                }
            },
        )
        .unwrap();

        // Labels in first-seen order
        assert_eq!(table.row_labels(), ["white", "black"]);
        assert_eq!(table.col_labels(), ["stroke", "no stroke"]);
        assert_eq!(table.count(0, 0), 2); // white with stroke
        assert_eq!(table.count(1, 1), 1); // black without stroke
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_cross_tabulate_empty() {
        let table = cross_tabulate(&[], |r| r.id.clone(), |r| r.id.clone()).unwrap();
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.n_cols(), 0);
    }
}
