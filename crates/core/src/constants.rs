//! Constants used throughout the FillDCM core crate.

/// Suffix inserted before the extension of output files when inputs are not overwritten.
pub const MODIFIED_FILE_SUFFIX: &str = "_modified";

/// Keyword of the attribute that carries the patient's sex.
pub const PATIENT_SEX_KEYWORD: &str = "PatientSex";

/// Keyword of the attribute filled by the patient-identifier generator instead of the LO one.
pub const PATIENT_ID_KEYWORD: &str = "PatientID";

