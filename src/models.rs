use serde::{ Serialize, Deserialize };
use uuid::Uuid;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Sad,
    Anxious,
    Angry,
    Tired,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Sad,
        Mood::Anxious,
        Mood::Angry,
        Mood::Tired,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymptomCategory {
    Cramps,
    Headache,
    Fatigue,
    Bloating,
    BackPain,
    Nausea,
    Other,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 7] = [
        SymptomCategory::Cramps,
        SymptomCategory::Headache,
        SymptomCategory::Fatigue,
        SymptomCategory::Bloating,
        SymptomCategory::BackPain,
        SymptomCategory::Nausea,
        SymptomCategory::Other,
    ];

    /// Wire name, camelCase (matches the serde encoding).
    pub fn name(&self) -> &'static str {
        match self {
            SymptomCategory::Cramps => "cramps",
            SymptomCategory::Headache => "headache",
            SymptomCategory::Fatigue => "fatigue",
            SymptomCategory::Bloating => "bloating",
            SymptomCategory::BackPain => "backPain",
            SymptomCategory::Nausea => "nausea",
            SymptomCategory::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<SymptomCategory> {
        SymptomCategory::ALL.iter().copied().find(|c| c.name() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub logged_at: DateTime<Utc>,
    pub mood: Mood,
    pub intensity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: Uuid,
    pub logged_at: DateTime<Utc>,
    pub category: SymptomCategory,
    pub intensity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One record of the static coping-suggestion catalog. Never user-editable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub mood_triggers: &'static [Mood],
    pub symptom_triggers: &'static [SymptomCategory],
    pub emoji: &'static str,
}
