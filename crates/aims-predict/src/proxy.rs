use serde_json::Value;

use crate::error::CallFailure;
use crate::target::PredictionTarget;
use crate::PredictionMap;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Blocking client for the prediction service.
///
/// One attempt per call: no retry, no timeout override beyond ureq's
/// defaults. Run it off the async executor (e.g. `spawn_blocking`).
#[derive(Clone)]
pub struct PredictionProxy {
    agent: ureq::Agent,
    base_url: String,
}

impl PredictionProxy {
    /// Connects to the service directly; `HTTP_PROXY`-style variables are
    /// ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = ureq::Agent::config_builder().proxy(None).build();
        Self::with_agent(ureq::Agent::new_with_config(config), base_url)
    }

    pub fn with_agent(agent: ureq::Agent, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { agent, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, target: PredictionTarget) -> String {
        format!("{}{}", self.base_url, target.path())
    }

    /// Current-condition prediction, or the current fallback.
    pub fn current_prediction(&self, survey: &PredictionMap) -> PredictionMap {
        self.predict(PredictionTarget::Current, survey)
    }

    /// Future-trend prediction, or the future fallback.
    pub fn future_prediction(&self, survey: &PredictionMap) -> PredictionMap {
        self.predict(PredictionTarget::Future, survey)
    }

    pub fn predict(&self, target: PredictionTarget, survey: &PredictionMap) -> PredictionMap {
        self.try_predict(target, survey).unwrap_or_else(|failure| {
            tracing::warn!(
                target_endpoint = ?target,
                url = %self.endpoint(target),
                error = %failure,
                "prediction call failed, returning fallback"
            );
            target.fallback()
        })
    }

    /// Single POST of `survey` as JSON; the 2xx body is returned unchanged.
    pub fn try_predict(
        &self,
        target: PredictionTarget,
        survey: &PredictionMap,
    ) -> Result<PredictionMap, CallFailure> {
        let url = self.endpoint(target);
        let body = serde_json::to_value(survey)?;

        let mut response = self.agent.post(&url).send_json(&body)?;
        let value: Value = response.body_mut().read_json()?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(CallFailure::Decode(format!(
                "expected object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
