//! aims-server
//!
//! HTTP surface of the survey backend. Routes dispatch to the patient and
//! survey store, the PDF exporter, and the prediction proxy.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Assemble the full router with CORS and audit logging.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/patients", post(routes::patients::create_patient))
        .route("/api/patients", get(routes::patients::list_patients))
        .route("/api/patients/{id}", get(routes::patients::get_patient))
        .route(
            "/api/patients/search-results",
            post(routes::patients::search_patients),
        )
        .route("/api/surveys", post(routes::surveys::create_survey))
        .route(
            "/api/surveys/by-patient-id/{id}",
            get(routes::surveys::get_survey_by_patient_id),
        )
        .route("/api/download-pdf", post(routes::reports::download_pdf))
        .route("/api/predict", post(routes::predict::predict_current))
        .route("/api/predict-future", post(routes::predict::predict_future))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
