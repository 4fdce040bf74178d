use axum::Json;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};

use aims_core::models::report::ReportRequest;
use aims_export::patient_report_pdf;

use crate::error::ApiError;

/// Render a patient's survey, plus the chart captured by the frontend, as a
/// downloadable PDF.
pub async fn download_pdf(Json(req): Json<ReportRequest>) -> Result<Response, ApiError> {
    let parts = req.into_parts()?;

    let bytes = patient_report_pdf(&parts.patient, &parts.survey, parts.chart_image.as_deref())?;

    let filename = attachment_name(&parts.patient.first_name, &parts.patient.last_name);
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(bytes = bytes.len(), "report PDF generated");

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// `First_Last_Survey.pdf`, restricted to characters that are safe in a
/// header value and a file name.
fn attachment_name(first: &str, last: &str) -> String {
    let clean = |s: &str| -> String {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect()
    };
    let stem: Vec<String> = [clean(first), clean(last)]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if stem.is_empty() {
        "Survey.pdf".to_string()
    } else {
        format!("{}_Survey.pdf", stem.join("_"))
    }
}
