use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::{self, value_number, value_text};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "value::text")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Value>,
}

impl LeaderboardEntry {
    pub fn points_value(&self) -> Option<f64> {
        self.points.as_ref().and_then(value_number)
    }

    pub fn points_text(&self) -> String {
        self.points.as_ref().map(value_text).unwrap_or_default()
    }

    fn sort_key(&self) -> f64 {
        self.points_value().unwrap_or(f64::NEG_INFINITY)
    }
}

/// Sort by descending points. Entries without numeric points sink to the
/// bottom; ties keep their fetched order.
pub fn rank_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.sort_key().total_cmp(&a.sort_key()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn icon(self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    TopThree,
    Competing,
}

impl RankBadge {
    pub fn label(self) -> &'static str {
        match self {
            RankBadge::TopThree => "Top 3",
            RankBadge::Competing => "Competing",
        }
    }
}

/// Decorations for a position in the sorted leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// Zero-based position after sorting
    pub index: usize,
    pub medal: Option<Medal>,
    pub badge: RankBadge,
}

impl Standing {
    pub fn at(index: usize) -> Self {
        let medal = match index {
            0 => Some(Medal::Gold),
            1 => Some(Medal::Silver),
            2 => Some(Medal::Bronze),
            _ => None,
        };
        let badge = if index < 3 { RankBadge::TopThree } else { RankBadge::Competing };
        Self { index, medal, badge }
    }

    pub fn is_podium(&self) -> bool {
        self.badge == RankBadge::TopThree
    }

    /// Rank label as shown in the table, e.g. `🥇 #1` or `#4`.
    pub fn label(&self) -> String {
        match self.medal {
            Some(medal) => format!("{} #{}", medal.icon(), self.index + 1),
            None => format!("#{}", self.index + 1),
        }
    }
}
