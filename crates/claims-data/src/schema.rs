//! Source column schema
//!
//! Field names of the raw beneficiary summary file (DE-SynPUF naming). The
//! loader validates headers against [`REQUIRED_COLUMNS`] before touching any
//! row, so a truncated or re-exported file fails with the missing column's
//! name rather than a row-level parse error.

/// Beneficiary identifier
pub const COL_ID: &str = "DESYNPUF_ID";
/// Birth date, YYYYMMDD
pub const COL_BIRTH_DATE: &str = "BENE_BIRTH_DT";
/// Death date, YYYYMMDD, empty when the beneficiary is alive
pub const COL_DEATH_DATE: &str = "BENE_DEATH_DT";
/// Sex code: 1 = male, 2 = female
pub const COL_SEX: &str = "BENE_SEX_IDENT_CD";
/// Race code: 1 = white, 2 = black, 3 = other, 5 = hispanic
pub const COL_RACE: &str = "BENE_RACE_CD";
/// End-stage renal disease indicator: Y or 1 = present
pub const COL_ESRD: &str = "BENE_ESRD_IND";

// Chronic condition flags, coded 1 = present, 2 = absent
pub const COL_ALZHEIMERS: &str = "SP_ALZHDMTA";
pub const COL_HEART_FAILURE: &str = "SP_CHF";
pub const COL_KIDNEY_DISEASE: &str = "SP_CHRNKIDN";
pub const COL_CANCER: &str = "SP_CNCR";
pub const COL_COPD: &str = "SP_COPD";
pub const COL_DEPRESSION: &str = "SP_DEPRESSN";
pub const COL_DIABETES: &str = "SP_DIABETES";
pub const COL_ISCHEMIC_HEART: &str = "SP_ISCHMCHT";
pub const COL_OSTEOPOROSIS: &str = "SP_OSTEOPRS";
pub const COL_ARTHRITIS: &str = "SP_RA_OA";
pub const COL_STROKE: &str = "SP_STRKETIA";

// Reimbursement amounts: three care settings x three payment components
pub const COL_IP_PROGRAM: &str = "MEDREIMB_IP";
pub const COL_IP_BENEFICIARY: &str = "BENRES_IP";
pub const COL_IP_PRIMARY_PAYER: &str = "PPPYMT_IP";
pub const COL_OP_PROGRAM: &str = "MEDREIMB_OP";
pub const COL_OP_BENEFICIARY: &str = "BENRES_OP";
pub const COL_OP_PRIMARY_PAYER: &str = "PPPYMT_OP";
pub const COL_CAR_PROGRAM: &str = "MEDREIMB_CAR";
pub const COL_CAR_BENEFICIARY: &str = "BENRES_CAR";
pub const COL_CAR_PRIMARY_PAYER: &str = "PPPYMT_CAR";

/// Every column the loader requires, in no particular order
pub const REQUIRED_COLUMNS: [&str; 26] = [
    COL_ID,
    COL_BIRTH_DATE,
    COL_DEATH_DATE,
    COL_SEX,
    COL_RACE,
    COL_ESRD,
    COL_ALZHEIMERS,
    COL_HEART_FAILURE,
    COL_KIDNEY_DISEASE,
    COL_CANCER,
    COL_COPD,
    COL_DEPRESSION,
    COL_DIABETES,
    COL_ISCHEMIC_HEART,
    COL_OSTEOPOROSIS,
    COL_ARTHRITIS,
    COL_STROKE,
    COL_IP_PROGRAM,
    COL_IP_BENEFICIARY,
    COL_IP_PRIMARY_PAYER,
    COL_OP_PROGRAM,
    COL_OP_BENEFICIARY,
    COL_OP_PRIMARY_PAYER,
    COL_CAR_PROGRAM,
    COL_CAR_BENEFICIARY,
    COL_CAR_PRIMARY_PAYER,
];
