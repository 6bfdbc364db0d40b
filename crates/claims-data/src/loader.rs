//! CSV loading and normalization
//!
//! Reads the raw beneficiary summary file and produces normalized
//! [`Beneficiary`] records: recoded sex and race, parsed dates, condition
//! indicator flags, and the nine payment-amount fields grouped per care
//! setting. Header validation happens before any row is parsed so schema
//! problems surface as a missing-column error, not a row-level one.

use crate::record::{Beneficiary, Conditions, CostComponents, Race, Sex};
use crate::schema;
use chrono::NaiveDate;
use claims_core::{Error, Result};
use serde::Deserialize;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Raw row exactly as it appears in the source file
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "DESYNPUF_ID")]
    id: String,
    #[serde(rename = "BENE_BIRTH_DT")]
    birth_date: String,
    #[serde(rename = "BENE_DEATH_DT")]
    death_date: String,
    #[serde(rename = "BENE_SEX_IDENT_CD")]
    sex_code: u8,
    #[serde(rename = "BENE_RACE_CD")]
    race_code: u8,
    #[serde(rename = "BENE_ESRD_IND")]
    esrd: String,
    #[serde(rename = "SP_ALZHDMTA")]
    alzheimers: String,
    #[serde(rename = "SP_CHF")]
    heart_failure: String,
    #[serde(rename = "SP_CHRNKIDN")]
    kidney_disease: String,
    #[serde(rename = "SP_CNCR")]
    cancer: String,
    #[serde(rename = "SP_COPD")]
    copd: String,
    #[serde(rename = "SP_DEPRESSN")]
    depression: String,
    #[serde(rename = "SP_DIABETES")]
    diabetes: String,
    #[serde(rename = "SP_ISCHMCHT")]
    ischemic_heart: String,
    #[serde(rename = "SP_OSTEOPRS")]
    osteoporosis: String,
    #[serde(rename = "SP_RA_OA")]
    arthritis: String,
    #[serde(rename = "SP_STRKETIA")]
    stroke: String,
    #[serde(rename = "MEDREIMB_IP")]
    ip_program: f64,
    #[serde(rename = "BENRES_IP")]
    ip_beneficiary: f64,
    #[serde(rename = "PPPYMT_IP")]
    ip_primary_payer: f64,
    #[serde(rename = "MEDREIMB_OP")]
    op_program: f64,
    #[serde(rename = "BENRES_OP")]
    op_beneficiary: f64,
    #[serde(rename = "PPPYMT_OP")]
    op_primary_payer: f64,
    #[serde(rename = "MEDREIMB_CAR")]
    car_program: f64,
    #[serde(rename = "BENRES_CAR")]
    car_beneficiary: f64,
    #[serde(rename = "PPPYMT_CAR")]
    car_primary_payer: f64,
}

/// Condition flags are coded 1 = present; anything else is absent
fn flag_present(value: &str) -> bool {
    value.trim() == "1"
}

/// The ESRD indicator is Y/0-coded in the source; both Y and 1 mean present
fn esrd_present(value: &str) -> bool {
    matches!(value.trim(), "1" | "Y")
}

fn parse_date(value: &str, column: &str, row: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y%m%d")
        .map_err(|_| Error::bad_field(column, row, &format!("'{value}' is not a YYYYMMDD date")))
}

fn normalize(raw: RawRow, row: usize) -> Result<Beneficiary> {
    let sex = Sex::from_code(raw.sex_code).ok_or_else(|| {
        Error::bad_field(
            schema::COL_SEX,
            row,
            &format!("sex code {} is not 1 or 2", raw.sex_code),
        )
    })?;
    let race = Race::from_code(raw.race_code);

    let birth_date = parse_date(&raw.birth_date, schema::COL_BIRTH_DATE, row)?;
    let death_date = if raw.death_date.trim().is_empty() {
        None
    } else {
        Some(parse_date(&raw.death_date, schema::COL_DEATH_DATE, row)?)
    };

    let mut conditions = Conditions::empty();
    let flags = [
        (raw.alzheimers.as_str(), Conditions::ALZHEIMERS),
        (raw.heart_failure.as_str(), Conditions::HEART_FAILURE),
        (raw.kidney_disease.as_str(), Conditions::KIDNEY_DISEASE),
        (raw.cancer.as_str(), Conditions::CANCER),
        (raw.copd.as_str(), Conditions::COPD),
        (raw.depression.as_str(), Conditions::DEPRESSION),
        (raw.diabetes.as_str(), Conditions::DIABETES),
        (raw.ischemic_heart.as_str(), Conditions::ISCHEMIC_HEART),
        (raw.osteoporosis.as_str(), Conditions::OSTEOPOROSIS),
        (raw.arthritis.as_str(), Conditions::ARTHRITIS),
        (raw.stroke.as_str(), Conditions::STROKE),
    ];
    for (value, flag) in flags {
        if flag_present(value) {
            conditions |= flag;
        }
    }
    if esrd_present(&raw.esrd) {
        conditions |= Conditions::ESRD;
    }

    Ok(Beneficiary {
        id: raw.id,
        sex,
        race,
        birth_date,
        death_date,
        conditions,
        inpatient: CostComponents::new(raw.ip_program, raw.ip_beneficiary, raw.ip_primary_payer),
        outpatient: CostComponents::new(raw.op_program, raw.op_beneficiary, raw.op_primary_payer),
        carrier: CostComponents::new(raw.car_program, raw.car_beneficiary, raw.car_primary_payer),
    })
}

/// Load and normalize beneficiary records from any reader
pub fn load_from_reader<R: io::Read>(reader: R) -> Result<Vec<Beneficiary>> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::Data(format!("cannot read header row: {e}")))?
        .clone();
    for required in schema::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(Error::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut unknown_race = 0usize;
    for (idx, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1, first record line 2
        let line = idx + 2;
        let raw = row.map_err(|e| Error::Data(format!("row {line}: {e}")))?;
        let record = normalize(raw, line)?;
        if record.race == Race::Unknown {
            unknown_race += 1;
        }
        records.push(record);
    }

    if unknown_race > 0 {
        warn!(
            unknown_race,
            total = records.len(),
            "unmapped race codes bucketed as unknown"
        );
    }
    debug!(rows = records.len(), "loaded beneficiary records");
    Ok(records)
}

/// Load and normalize beneficiary records from a file path
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Beneficiary>> {
    let file = std::fs::File::open(path.as_ref())?;
    load_from_reader(io::BufReader::new(file))
}
