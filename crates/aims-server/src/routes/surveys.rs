use axum::Json;
use axum::extract::{Path, State};

use aims_core::models::survey::Survey;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_survey(
    State(state): State<AppState>,
    Json(survey): Json<Survey>,
) -> Result<Json<Survey>, ApiError> {
    let saved = state.store.save_survey(survey.assign_identity()).await?;
    tracing::info!(
        survey_id = %saved.id,
        patient_id = %saved.patient_id,
        total_movement_score = saved.total_movement_score(),
        "survey recorded"
    );
    Ok(Json(saved))
}

pub async fn get_survey_by_patient_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Survey>, ApiError> {
    state
        .store
        .survey_by_patient_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no survey for patient: {id}")))
}
