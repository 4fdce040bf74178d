use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Patient {
    /// Assigned by the server at creation; any client-supplied value is replaced.
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub survey_date: Option<jiff::civil::Date>,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Case-insensitive substring match against first, last, and full name.
    /// An empty keyword matches every patient.
    pub fn name_matches(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            self.first_name.to_lowercase(),
            self.last_name.to_lowercase(),
            self.full_name().to_lowercase(),
        ]
        .iter()
        .any(|name| name.contains(&needle))
    }

    /// Stamp a fresh identity and creation time onto an incoming record.
    pub fn assign_identity(mut self) -> Self {
        self.id = Uuid::new_v4();
        self.created_at = jiff::Timestamp::now();
        self
    }
}
