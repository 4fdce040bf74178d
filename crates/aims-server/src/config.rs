use std::env;

use aims_predict::proxy::DEFAULT_BASE_URL;

/// Which [`aims_storage::store::SurveyStore`] backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    S3,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> eyre::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(StoreBackend::S3),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            other => Err(eyre::eyre!(
                "AIMS_STORE must be \"s3\" or \"memory\", got \"{other}\""
            )),
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub store: StoreBackend,
    pub bucket: String,
    pub ml_base_url: String,
    pub bind_addr: String,
    /// Set when running inside the AWS Lambda runtime.
    pub on_lambda: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; missing keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let store = match lookup("AIMS_STORE") {
            Some(value) => StoreBackend::parse(&value)?,
            None => StoreBackend::Memory,
        };

        Ok(Self {
            store,
            bucket: lookup("AIMS_BUCKET").unwrap_or_else(|| "aims-survey".to_string()),
            ml_base_url: lookup("AIMS_ML_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_addr: lookup("AIMS_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            on_lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
