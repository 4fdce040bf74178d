//! aims-predict
//!
//! Client for the remote prediction service. Every call resolves to a
//! well-formed [`PredictionMap`]: the remote body on success, or a fixed
//! per-endpoint fallback when the call fails for any reason.

pub mod error;
pub mod proxy;
pub mod target;

/// Opaque JSON object exchanged with the prediction service.
pub type PredictionMap = serde_json::Map<String, serde_json::Value>;
