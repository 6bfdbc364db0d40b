//! Synthetic cohort fixture for the end-to-end tests

use chrono::NaiveDate;
use claims_stats::{Beneficiary, Conditions, CostComponents, Race, Sex};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

const RACES: [Race; 4] = [Race::White, Race::Black, Race::Hispanic, Race::Other];

/// Build a deterministic cohort with separated condition cost profiles
///
/// Demographics and condition assignment are index-driven so every subgroup
/// is guaranteed non-empty; only the cost draws use the RNG. Stroke
/// patients cost the most, cancer patients an intermediate amount, the rest
/// little.
pub fn build_cohort(n: usize, seed: u64) -> Vec<Beneficiary> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let stroke_costs: Normal<f64> = Normal::new(20_000.0, 3_000.0).unwrap();
    let cancer_costs: Normal<f64> = Normal::new(8_000.0, 1_000.0).unwrap();
    let baseline_costs: Normal<f64> = Normal::new(3_000.0, 500.0).unwrap();

    (0..n)
        .map(|i| {
            let sex = if i % 2 == 0 { Sex::Male } else { Sex::Female };
            let race = RACES[i % RACES.len()];

            let mut conditions = Conditions::empty();
            if i % 5 == 0 {
                conditions |= Conditions::STROKE;
            }
            if i % 5 == 1 {
                conditions |= Conditions::CANCER;
            }
            if i % 3 == 0 {
                conditions |= Conditions::DIABETES;
            }

            let cost: f64 = if conditions.contains(Conditions::STROKE) {
                stroke_costs.sample(&mut rng)
            } else if conditions.contains(Conditions::CANCER) {
                cancer_costs.sample(&mut rng)
            } else {
                baseline_costs.sample(&mut rng)
            }
            .abs();

            Beneficiary {
                id: format!("SYN{i:05}"),
                sex,
                race,
                birth_date: NaiveDate::from_ymd_opt(1930 + (i % 20) as i32, 1, 1).unwrap(),
                death_date: if i % 17 == 0 {
                    NaiveDate::from_ymd_opt(2009, 6, 1)
                } else {
                    None
                },
                conditions,
                inpatient: CostComponents::new(cost * 0.7, cost * 0.2, cost * 0.1),
                outpatient: CostComponents::default(),
                carrier: CostComponents::default(),
            }
        })
        .collect()
}
