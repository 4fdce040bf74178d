//! aims-export
//!
//! PDF survey reports: Tera renders the report text, printpdf lays it out
//! together with the client-rendered score chart.

pub mod chart;
pub mod error;
pub mod pdf;
pub mod render;
pub mod styles;

use aims_core::models::patient::Patient;
use aims_core::models::survey::Survey;

use crate::error::ExportError;
use crate::render::ReportContext;
use crate::styles::PdfStyles;

/// Render the full report for one patient and survey.
///
/// `chart_image` is the base64 PNG (optionally a data URL) captured from the
/// survey chart; when absent the report is produced without it.
pub fn patient_report_pdf(
    patient: &Patient,
    survey: &Survey,
    chart_image: Option<&str>,
) -> Result<Vec<u8>, ExportError> {
    let chart = chart_image.map(chart::decode_chart_image).transpose()?;
    let context = ReportContext::new(patient, survey);
    let rendered = render::render_report(&context)?;
    pdf::generate_pdf(&rendered, chart.as_deref(), &PdfStyles::default())
}
