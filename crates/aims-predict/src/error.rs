use thiserror::Error;

/// Why a call to the prediction service produced no usable body.
///
/// Callers of the public proxy operations never see this; every variant
/// resolves to the target's fallback.
#[derive(Debug, Error)]
pub enum CallFailure {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("prediction service answered HTTP {0}")]
    Status(u16),

    #[error("response body is not a JSON object: {0}")]
    Decode(String),

    #[error("request body could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<ureq::Error> for CallFailure {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => CallFailure::Status(code),
            ureq::Error::Json(e) => CallFailure::Decode(e.to_string()),
            other => CallFailure::Transport(other.to_string()),
        }
    }
}
