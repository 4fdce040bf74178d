use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::models::patient::Patient;
use crate::models::survey::Survey;

/// Raw body of a PDF download request.
///
/// `patient` and `survey` are kept as loose JSON so that a missing or null
/// section can be told apart from a malformed one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default)]
    pub patient: Option<Value>,
    #[serde(default)]
    pub survey: Option<Value>,
    #[serde(default)]
    pub chart_image: Option<String>,
}

/// A validated report request.
#[derive(Debug, Clone)]
pub struct ReportParts {
    pub patient: Patient,
    pub survey: Survey,
    pub chart_image: Option<String>,
}

impl ReportRequest {
    pub fn into_parts(self) -> Result<ReportParts, CoreError> {
        let patient = required(self.patient, "patient")?;
        let survey = required(self.survey, "survey")?;
        Ok(ReportParts {
            patient: serde_json::from_value(patient)?,
            survey: serde_json::from_value(survey)?,
            chart_image: self.chart_image.filter(|s| !s.trim().is_empty()),
        })
    }
}

fn required(value: Option<Value>, field: &str) -> Result<Value, CoreError> {
    match value {
        Some(Value::Null) | None => Err(CoreError::MissingField(field.to_string())),
        Some(v) => Ok(v),
    }
}
