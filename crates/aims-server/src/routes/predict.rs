use std::fmt::Display;

use axum::Json;
use axum::extract::State;

use aims_predict::PredictionMap;
use aims_predict::target::PredictionTarget;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn predict_current(
    State(state): State<AppState>,
    Json(survey): Json<PredictionMap>,
) -> Result<Json<PredictionMap>, ApiError> {
    run_prediction(state, PredictionTarget::Current, survey).await
}

pub async fn predict_future(
    State(state): State<AppState>,
    Json(survey): Json<PredictionMap>,
) -> Result<Json<PredictionMap>, ApiError> {
    run_prediction(state, PredictionTarget::Future, survey).await
}

/// The proxy call blocks, so it runs on the blocking pool. The proxy itself
/// never fails; a failed task (e.g. a panic) is reported as a 500.
async fn run_prediction(
    state: AppState,
    target: PredictionTarget,
    survey: PredictionMap,
) -> Result<Json<PredictionMap>, ApiError> {
    let predictor = state.predictor.clone();
    tokio::task::spawn_blocking(move || predictor.predict(target, &survey))
        .await
        .map(Json)
        .map_err(|e| task_failure(target, e))
}

/// Error returned when the blocking prediction task itself fails.
pub fn task_failure(target: PredictionTarget, detail: impl Display) -> ApiError {
    let prefix = match target {
        PredictionTarget::Current => "Current prediction failed",
        PredictionTarget::Future => "Prediction service failed",
    };
    ApiError::Prediction(format!("{prefix}: {detail}"))
}
