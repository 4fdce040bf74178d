use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::PredictionMap;

/// The two prediction endpoints exposed by the model service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionTarget {
    /// Current condition: assessment label, severity score, suggestions.
    Current,
    /// Future trend over `monthsAhead`.
    Future,
}

impl PredictionTarget {
    pub fn path(&self) -> &'static str {
        match self {
            PredictionTarget::Current => "/predict",
            PredictionTarget::Future => "/predict-future",
        }
    }

    /// The substitute body returned when a call to this endpoint fails.
    pub fn fallback(&self) -> PredictionMap {
        match self {
            PredictionTarget::Current => object([
                ("assessment", json!("Unavailable")),
                ("severityScore", json!("N/A")),
                (
                    "suggestions",
                    json!(["Prediction service is currently unreachable."]),
                ),
            ]),
            PredictionTarget::Future => object([
                ("error", json!("Prediction service unreachable")),
                ("trend", json!("N/A")),
                (
                    "suggestions",
                    json!(["Unable to fetch AI predictions. Try again later."]),
                ),
            ]),
        }
    }
}

fn object<const N: usize>(entries: [(&str, Value); N]) -> PredictionMap {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
