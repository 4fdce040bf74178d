use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use aims_core::models::patient::Patient;
use aims_core::models::survey::Survey;

use crate::error::StorageError;
use crate::store::{SurveyStore, newest_survey, sort_patients};

/// Process-local store for development and tests. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    patients: RwLock<HashMap<Uuid, Patient>>,
    surveys: RwLock<Vec<Survey>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SurveyStore for MemoryStore {
    async fn save_patient(&self, patient: Patient) -> Result<Patient, StorageError> {
        self.patients
            .write()
            .await
            .insert(patient.id, patient.clone());
        Ok(patient)
    }

    async fn list_patients(&self) -> Result<Vec<Patient>, StorageError> {
        let mut patients: Vec<Patient> = self.patients.read().await.values().cloned().collect();
        sort_patients(&mut patients);
        Ok(patients)
    }

    async fn get_patient(&self, id: Uuid) -> Result<Option<Patient>, StorageError> {
        Ok(self.patients.read().await.get(&id).cloned())
    }

    async fn save_survey(&self, survey: Survey) -> Result<Survey, StorageError> {
        self.surveys.write().await.push(survey.clone());
        Ok(survey)
    }

    async fn survey_by_patient_id(
        &self,
        patient_id: &str,
    ) -> Result<Option<Survey>, StorageError> {
        let surveys = self.surveys.read().await;
        Ok(newest_survey(
            surveys
                .iter()
                .filter(|s| s.patient_id == patient_id)
                .cloned(),
        ))
    }
}
