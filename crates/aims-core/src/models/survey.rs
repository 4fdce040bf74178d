use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One rated item of the Abnormal Involuntary Movement Scale questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum AimsItem {
    FacialMuscles,
    LipsPerioral,
    Jaw,
    Tongue,
    UpperExtremities,
    LowerExtremities,
    NeckShouldersHips,
    SeverityOfMovements,
    IncapacitationDueToMovements,
    PatientAwareness,
    EmotionalDistress,
    GlobalRating,
}

impl AimsItem {
    pub const ALL: [AimsItem; 12] = [
        AimsItem::FacialMuscles,
        AimsItem::LipsPerioral,
        AimsItem::Jaw,
        AimsItem::Tongue,
        AimsItem::UpperExtremities,
        AimsItem::LowerExtremities,
        AimsItem::NeckShouldersHips,
        AimsItem::SeverityOfMovements,
        AimsItem::IncapacitationDueToMovements,
        AimsItem::PatientAwareness,
        AimsItem::EmotionalDistress,
        AimsItem::GlobalRating,
    ];

    /// Wire name, as used by the survey form and the prediction service.
    pub fn key(&self) -> &'static str {
        match self {
            AimsItem::FacialMuscles => "facialMuscles",
            AimsItem::LipsPerioral => "lipsPerioral",
            AimsItem::Jaw => "jaw",
            AimsItem::Tongue => "tongue",
            AimsItem::UpperExtremities => "upperExtremities",
            AimsItem::LowerExtremities => "lowerExtremities",
            AimsItem::NeckShouldersHips => "neckShouldersHips",
            AimsItem::SeverityOfMovements => "severityOfMovements",
            AimsItem::IncapacitationDueToMovements => "incapacitationDueToMovements",
            AimsItem::PatientAwareness => "patientAwareness",
            AimsItem::EmotionalDistress => "emotionalDistress",
            AimsItem::GlobalRating => "globalRating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AimsItem::FacialMuscles => "Facial Muscles",
            AimsItem::LipsPerioral => "Lips and Perioral Area",
            AimsItem::Jaw => "Jaw",
            AimsItem::Tongue => "Tongue",
            AimsItem::UpperExtremities => "Upper Extremities",
            AimsItem::LowerExtremities => "Lower Extremities",
            AimsItem::NeckShouldersHips => "Neck, Shoulders, Hips",
            AimsItem::SeverityOfMovements => "Severity of Abnormal Movements",
            AimsItem::IncapacitationDueToMovements => "Incapacitation Due to Movements",
            AimsItem::PatientAwareness => "Patient Awareness",
            AimsItem::EmotionalDistress => "Emotional Distress",
            AimsItem::GlobalRating => "Global Rating",
        }
    }

    /// Items 1-7 rate body areas and make up the total movement score.
    pub fn is_body_area(&self) -> bool {
        matches!(
            self,
            AimsItem::FacialMuscles
                | AimsItem::LipsPerioral
                | AimsItem::Jaw
                | AimsItem::Tongue
                | AimsItem::UpperExtremities
                | AimsItem::LowerExtremities
                | AimsItem::NeckShouldersHips
        )
    }
}

/// Display band for a single item rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreStatus {
    Excellent,
    Fair,
    Poor,
}

impl ScoreStatus {
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            0..=2 => ScoreStatus::Excellent,
            3 => ScoreStatus::Fair,
            _ => ScoreStatus::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreStatus::Excellent => "Excellent",
            ScoreStatus::Fair => "Fair",
            ScoreStatus::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Survey {
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    /// Identifier of the owning patient, kept as sent by the client.
    #[serde(default)]
    pub patient_id: String,
    pub facial_muscles: u8,
    pub lips_perioral: u8,
    pub jaw: u8,
    pub tongue: u8,
    pub upper_extremities: u8,
    pub lower_extremities: u8,
    pub neck_shoulders_hips: u8,
    pub severity_of_movements: u8,
    pub incapacitation_due_to_movements: u8,
    pub patient_awareness: u8,
    pub emotional_distress: u8,
    pub global_rating: u8,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

impl Survey {
    pub fn rating(&self, item: AimsItem) -> u8 {
        match item {
            AimsItem::FacialMuscles => self.facial_muscles,
            AimsItem::LipsPerioral => self.lips_perioral,
            AimsItem::Jaw => self.jaw,
            AimsItem::Tongue => self.tongue,
            AimsItem::UpperExtremities => self.upper_extremities,
            AimsItem::LowerExtremities => self.lower_extremities,
            AimsItem::NeckShouldersHips => self.neck_shoulders_hips,
            AimsItem::SeverityOfMovements => self.severity_of_movements,
            AimsItem::IncapacitationDueToMovements => self.incapacitation_due_to_movements,
            AimsItem::PatientAwareness => self.patient_awareness,
            AimsItem::EmotionalDistress => self.emotional_distress,
            AimsItem::GlobalRating => self.global_rating,
        }
    }

    /// All twelve item ratings in questionnaire order.
    pub fn items(&self) -> Vec<(AimsItem, u8)> {
        AimsItem::ALL
            .iter()
            .map(|item| (*item, self.rating(*item)))
            .collect()
    }

    /// Sum of the body-area items (1-7).
    pub fn total_movement_score(&self) -> u32 {
        AimsItem::ALL
            .iter()
            .filter(|item| item.is_body_area())
            .map(|item| u32::from(self.rating(*item)))
            .sum()
    }

    pub fn assign_identity(mut self) -> Self {
        self.id = Uuid::new_v4();
        self.created_at = jiff::Timestamp::now();
        self
    }
}
