//! S3 key/path conventions.
//!
//! Pure string functions. These define the canonical layout of objects in
//! the survey bucket.

use uuid::Uuid;

pub const PATIENTS_PREFIX: &str = "patients/";

pub const SURVEYS_PREFIX: &str = "surveys/";

pub fn patient(id: Uuid) -> String {
    format!("patients/{id}.json")
}

/// Surveys are grouped under their patient so a lookup by patient id is a
/// single prefix listing.
pub fn patient_surveys_prefix(patient_id: &str) -> String {
    format!("surveys/{patient_id}/")
}

pub fn survey(patient_id: &str, id: Uuid) -> String {
    format!("surveys/{patient_id}/{id}.json")
}
