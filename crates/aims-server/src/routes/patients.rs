use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use uuid::Uuid;

use aims_core::models::patient::Patient;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_patient(
    State(state): State<AppState>,
    Json(patient): Json<Patient>,
) -> Result<Json<Patient>, ApiError> {
    let saved = state.store.save_patient(patient.assign_identity()).await?;
    tracing::info!(patient_id = %saved.id, "patient created");
    Ok(Json(saved))
}

pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(state.store.list_patients().await?))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    // A malformed id cannot name a stored patient.
    let uuid =
        Uuid::parse_str(&id).map_err(|_| ApiError::NotFound(format!("patient not found: {id}")))?;

    state
        .store
        .get_patient(uuid)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("patient not found: {id}")))
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub keyword: Option<String>,
}

pub async fn search_patients(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let keyword = req.keyword.unwrap_or_default();
    let matched = state.store.search_patients(&keyword).await?;
    Ok(Json(matched))
}
