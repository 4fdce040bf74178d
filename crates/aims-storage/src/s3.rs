use async_trait::async_trait;
use aws_sdk_s3::Client;
use uuid::Uuid;

use aims_core::models::patient::Patient;
use aims_core::models::survey::Survey;
use aims_core::s3_keys;

use crate::error::StorageError;
use crate::objects;
use crate::store::{SurveyStore, newest_survey, sort_patients};

/// Store backed by JSON objects in an S3 bucket.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn put_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let body = serde_json::to_vec(value)?;
        objects::put_object(&self.client, &self.bucket, key, body, Some("application/json")).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StorageError> {
        match objects::get_object(&self.client, &self.bucket, key).await {
            Ok(body) => Ok(Some(serde_json::from_slice(&body)?)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn load_all<T: serde::de::DeserializeOwned>(
        &self,
        prefix: &str,
    ) -> Result<Vec<T>, StorageError> {
        let keys = objects::list_objects(&self.client, &self.bucket, prefix).await?;
        let mut values = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| k.ends_with(".json")) {
            // Objects can vanish between list and get; skip them.
            if let Some(value) = self.get_json(key).await? {
                values.push(value);
            }
        }
        Ok(values)
    }
}

#[async_trait]
impl SurveyStore for S3Store {
    async fn save_patient(&self, patient: Patient) -> Result<Patient, StorageError> {
        self.put_json(&s3_keys::patient(patient.id), &patient).await?;
        tracing::debug!(patient_id = %patient.id, "saved patient");
        Ok(patient)
    }

    async fn list_patients(&self) -> Result<Vec<Patient>, StorageError> {
        let mut patients: Vec<Patient> = self.load_all(s3_keys::PATIENTS_PREFIX).await?;
        sort_patients(&mut patients);
        Ok(patients)
    }

    async fn get_patient(&self, id: Uuid) -> Result<Option<Patient>, StorageError> {
        self.get_json(&s3_keys::patient(id)).await
    }

    async fn save_survey(&self, survey: Survey) -> Result<Survey, StorageError> {
        let key = s3_keys::survey(&survey.patient_id, survey.id);
        self.put_json(&key, &survey).await?;
        tracing::debug!(survey_id = %survey.id, patient_id = %survey.patient_id, "saved survey");
        Ok(survey)
    }

    async fn survey_by_patient_id(
        &self,
        patient_id: &str,
    ) -> Result<Option<Survey>, StorageError> {
        let surveys: Vec<Survey> = self
            .load_all(&s3_keys::patient_surveys_prefix(patient_id))
            .await?;
        Ok(newest_survey(
            surveys.into_iter().filter(|s| s.patient_id == patient_id),
        ))
    }
}
