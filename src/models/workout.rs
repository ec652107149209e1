use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Workout {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "value::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "value::text")]
    pub difficulty: Option<String>,
}

impl Workout {
    pub fn difficulty_level(&self) -> Difficulty {
        Difficulty::parse(self.difficulty.as_deref())
    }
}

/// Workout difficulty. Only the three exact literals are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("Easy") => Difficulty::Easy,
            Some("Medium") => Difficulty::Medium,
            Some("Hard") => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
            Difficulty::Hard => "🔴",
            Difficulty::Unknown => "⚪",
        }
    }

    pub fn level(self) -> &'static str {
        match self {
            Difficulty::Easy => "Beginner",
            Difficulty::Medium => "Intermediate",
            Difficulty::Hard => "Advanced",
            Difficulty::Unknown => "Unknown",
        }
    }
}
