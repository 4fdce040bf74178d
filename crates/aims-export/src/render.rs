use serde::Serialize;
use tera::{Context, Tera};

use aims_core::models::patient::Patient;
use aims_core::models::survey::{ScoreStatus, Survey};

use crate::error::ExportError;

/// Line that marks where the chart image is placed in the laid-out PDF.
pub const CHART_MARKER: &str = "[[chart]]";

const REPORT_TEMPLATE: &str = r#"# AIMS Survey Report

## Patient Information
**Name:** {{ patient_name }}
Age: {{ age }}
Gender: {{ gender }}
Survey date: {{ survey_date }}

## Score Trends
[[chart]]

## Item Ratings
{% for item in items -%}
- {{ item.number }}. {{ item.label }}: {{ item.rating }} ({{ item.status }})
{% endfor %}
**Total movement score (items 1-7): {{ total_movement_score }}**

Generated {{ generated_on }}
"#;

#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    pub number: usize,
    pub label: String,
    pub rating: u8,
    pub status: String,
}

/// Template variables for the survey report. Optional patient fields are
/// already formatted, with "-" standing in for missing values.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub patient_name: String,
    pub age: String,
    pub gender: String,
    pub survey_date: String,
    pub items: Vec<ItemRow>,
    pub total_movement_score: u32,
    pub generated_on: String,
}

impl ReportContext {
    pub fn new(patient: &Patient, survey: &Survey) -> Self {
        let items = survey
            .items()
            .into_iter()
            .enumerate()
            .map(|(i, (item, rating))| ItemRow {
                number: i + 1,
                label: item.label().to_string(),
                rating,
                status: ScoreStatus::from_rating(rating).label().to_string(),
            })
            .collect();

        Self {
            patient_name: patient.full_name(),
            age: or_dash(patient.age.map(|a| a.to_string())),
            gender: or_dash(patient.gender.clone().filter(|g| !g.trim().is_empty())),
            survey_date: or_dash(patient.survey_date.map(|d| d.to_string())),
            items,
            total_movement_score: survey.total_movement_score(),
            generated_on: jiff::Zoned::now().date().to_string(),
        }
    }
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

/// Render the built-in report template into the markdown-ish layout text
/// consumed by [`crate::pdf::generate_pdf`].
pub fn render_report(context: &ReportContext) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report", REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("report", &context)?;
    Ok(rendered)
}
