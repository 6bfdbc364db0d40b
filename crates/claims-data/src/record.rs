//! Normalized beneficiary records
//!
//! One [`Beneficiary`] per patient-year row: recoded demographics, a
//! condition indicator set, and per-setting reimbursement components with
//! derived totals. Records are immutable once produced by the loader.

use crate::schema;
use bitflags::bitflags;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Beneficiary sex, recoded from the source's 1/2 coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Decode the source sex code. Returns `None` for anything but 1 or 2.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Male),
            2 => Some(Self::Female),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Beneficiary race, recoded from the source's numeric coding
///
/// Codes outside the documented mapping land in `Unknown` rather than being
/// dropped, so cross-tabulations still partition the whole population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Race {
    White,
    Black,
    Hispanic,
    Other,
    Unknown,
}

impl Race {
    /// Decode the source race code: 1, 2, 3, 5 are mapped; the rest bucket
    /// to `Unknown`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::White,
            2 => Self::Black,
            3 => Self::Other,
            5 => Self::Hispanic,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Hispanic => "hispanic",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

bitflags! {
    /// Set of chronic condition indicators for one beneficiary-year
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Conditions: u16 {
        const ALZHEIMERS     = 1 << 0;
        const HEART_FAILURE  = 1 << 1;
        const KIDNEY_DISEASE = 1 << 2;
        const CANCER         = 1 << 3;
        const COPD           = 1 << 4;
        const DEPRESSION     = 1 << 5;
        const DIABETES       = 1 << 6;
        const ISCHEMIC_HEART = 1 << 7;
        const OSTEOPOROSIS   = 1 << 8;
        const ARTHRITIS      = 1 << 9;
        const STROKE         = 1 << 10;
        const ESRD           = 1 << 11;
    }
}

/// One of the twelve tracked chronic conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Alzheimers,
    HeartFailure,
    KidneyDisease,
    Cancer,
    Copd,
    Depression,
    Diabetes,
    IschemicHeart,
    Osteoporosis,
    Arthritis,
    Stroke,
    Esrd,
}

impl Condition {
    /// All conditions, in source column order
    pub const ALL: [Condition; 12] = [
        Condition::Alzheimers,
        Condition::HeartFailure,
        Condition::KidneyDisease,
        Condition::Cancer,
        Condition::Copd,
        Condition::Depression,
        Condition::Diabetes,
        Condition::IschemicHeart,
        Condition::Osteoporosis,
        Condition::Arthritis,
        Condition::Stroke,
        Condition::Esrd,
    ];

    /// Corresponding indicator flag
    pub fn flag(self) -> Conditions {
        match self {
            Self::Alzheimers => Conditions::ALZHEIMERS,
            Self::HeartFailure => Conditions::HEART_FAILURE,
            Self::KidneyDisease => Conditions::KIDNEY_DISEASE,
            Self::Cancer => Conditions::CANCER,
            Self::Copd => Conditions::COPD,
            Self::Depression => Conditions::DEPRESSION,
            Self::Diabetes => Conditions::DIABETES,
            Self::IschemicHeart => Conditions::ISCHEMIC_HEART,
            Self::Osteoporosis => Conditions::OSTEOPOROSIS,
            Self::Arthritis => Conditions::ARTHRITIS,
            Self::Stroke => Conditions::STROKE,
            Self::Esrd => Conditions::ESRD,
        }
    }

    /// Source column carrying this condition's indicator
    pub fn column(self) -> &'static str {
        match self {
            Self::Alzheimers => schema::COL_ALZHEIMERS,
            Self::HeartFailure => schema::COL_HEART_FAILURE,
            Self::KidneyDisease => schema::COL_KIDNEY_DISEASE,
            Self::Cancer => schema::COL_CANCER,
            Self::Copd => schema::COL_COPD,
            Self::Depression => schema::COL_DEPRESSION,
            Self::Diabetes => schema::COL_DIABETES,
            Self::IschemicHeart => schema::COL_ISCHEMIC_HEART,
            Self::Osteoporosis => schema::COL_OSTEOPOROSIS,
            Self::Arthritis => schema::COL_ARTHRITIS,
            Self::Stroke => schema::COL_STROKE,
            Self::Esrd => schema::COL_ESRD,
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Self::Alzheimers => "alzheimers",
            Self::HeartFailure => "heart failure",
            Self::KidneyDisease => "chronic kidney disease",
            Self::Cancer => "cancer",
            Self::Copd => "copd",
            Self::Depression => "depression",
            Self::Diabetes => "diabetes",
            Self::IschemicHeart => "ischemic heart disease",
            Self::Osteoporosis => "osteoporosis",
            Self::Arthritis => "arthritis",
            Self::Stroke => "stroke",
            Self::Esrd => "esrd",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Condition::ALL
            .into_iter()
            .find(|c| c.label().replace(' ', "-") == needle || c.label() == needle)
            .ok_or_else(|| format!("unknown condition '{s}'"))
    }
}

/// Care setting whose claims are aggregated separately in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareSetting {
    Inpatient,
    Outpatient,
    Carrier,
}

impl CareSetting {
    /// All settings, used when an analysis wants the combined total
    pub const ALL: [CareSetting; 3] = [
        CareSetting::Inpatient,
        CareSetting::Outpatient,
        CareSetting::Carrier,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inpatient => "inpatient",
            Self::Outpatient => "outpatient",
            Self::Carrier => "carrier",
        }
    }
}

impl fmt::Display for CareSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three payment components of one care setting's reimbursements
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostComponents {
    /// Program-paid amount
    pub program: f64,
    /// Beneficiary-paid amount
    pub beneficiary: f64,
    /// Primary-payer-paid amount
    pub primary_payer: f64,
}

impl CostComponents {
    pub fn new(program: f64, beneficiary: f64, primary_payer: f64) -> Self {
        Self {
            program,
            beneficiary,
            primary_payer,
        }
    }

    /// Derived setting total: element-wise sum of the three components
    pub fn total(&self) -> f64 {
        self.program + self.beneficiary + self.primary_payer
    }
}

/// A normalized beneficiary-year record
#[derive(Debug, Clone, PartialEq)]
pub struct Beneficiary {
    pub id: String,
    pub sex: Sex,
    pub race: Race,
    pub birth_date: NaiveDate,
    /// Unset when the death date field is null in the source
    pub death_date: Option<NaiveDate>,
    pub conditions: Conditions,
    pub inpatient: CostComponents,
    pub outpatient: CostComponents,
    pub carrier: CostComponents,
}

impl Beneficiary {
    pub fn has_condition(&self, condition: Condition) -> bool {
        self.conditions.contains(condition.flag())
    }

    pub fn is_deceased(&self) -> bool {
        self.death_date.is_some()
    }

    /// Derived total cost for one care setting
    pub fn setting_cost(&self, setting: CareSetting) -> f64 {
        match setting {
            CareSetting::Inpatient => self.inpatient.total(),
            CareSetting::Outpatient => self.outpatient.total(),
            CareSetting::Carrier => self.carrier.total(),
        }
    }

    /// Total cost over a selection of care settings
    pub fn total_cost(&self, settings: &[CareSetting]) -> f64 {
        settings.iter().map(|&s| self.setting_cost(s)).sum()
    }

    /// Total cost over all three care settings
    pub fn combined_cost(&self) -> f64 {
        self.total_cost(&CareSetting::ALL)
    }
}
