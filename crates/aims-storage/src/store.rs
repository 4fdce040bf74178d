use async_trait::async_trait;
use uuid::Uuid;

use aims_core::models::patient::Patient;
use aims_core::models::survey::Survey;

use crate::error::StorageError;

/// Record storage for patients and their surveys.
///
/// Records are write-once: there is no update or delete. Callers assign
/// identities before saving.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    async fn save_patient(&self, patient: Patient) -> Result<Patient, StorageError>;

    /// All patients, oldest first.
    async fn list_patients(&self) -> Result<Vec<Patient>, StorageError>;

    async fn get_patient(&self, id: Uuid) -> Result<Option<Patient>, StorageError>;

    /// Patients whose name contains `keyword`, ignoring case.
    async fn search_patients(&self, keyword: &str) -> Result<Vec<Patient>, StorageError> {
        let patients = self.list_patients().await?;
        Ok(patients
            .into_iter()
            .filter(|p| p.name_matches(keyword))
            .collect())
    }

    async fn save_survey(&self, survey: Survey) -> Result<Survey, StorageError>;

    /// The most recent survey recorded for a patient.
    async fn survey_by_patient_id(&self, patient_id: &str)
        -> Result<Option<Survey>, StorageError>;
}

pub(crate) fn sort_patients(patients: &mut [Patient]) {
    patients.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
}

pub(crate) fn newest_survey(surveys: impl IntoIterator<Item = Survey>) -> Option<Survey> {
    surveys
        .into_iter()
        .max_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
}
