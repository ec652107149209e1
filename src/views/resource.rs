use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::models::{
    rank_entries, Activity, Difficulty, LeaderboardEntry, Medal, RankBadge, Record, Standing, Team,
    User, Workout,
};
use crate::views::route::ViewKind;
use crate::views::table::{Card, CellValue, Column, Tone};

/// A record type that can back a data-list view.
pub trait Resource:
    Record + DeserializeOwned + Serialize + Default + Clone + Send + Sync + 'static
{
    const KIND: ViewKind;

    fn columns() -> Vec<Column<Self>>;

    fn card(&self, _index: usize) -> Option<Card> {
        None
    }

    fn highlight(&self, _index: usize) -> Option<Tone> {
        None
    }

    /// Reorder the freshly fetched collection before render.
    fn arrange(_records: &mut Vec<Self>) {}

    /// Decode one collection element; anything that is not a readable
    /// object becomes an empty record so it still holds its position.
    fn from_value(value: Value) -> Self {
        match value {
            // Arrays would otherwise fill the fields by position
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

fn or_empty(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

impl Resource for User {
    const KIND: ViewKind = ViewKind::Users;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::position(),
            Column::new("Name", 20, |user: &User, _| CellValue::strong(or_empty(&user.name), Tone::Primary)),
            Column::new("Email", 28, |user: &User, _| CellValue::link(or_empty(&user.email))),
            Column::new("Team", 14, |user: &User, _| CellValue::badge(or_empty(&user.team), Tone::Secondary)),
            Column::new("Superhero", 10, |user: &User, _| {
                if user.is_superhero {
                    CellValue::badge("🦸 Yes", Tone::Success)
                } else {
                    CellValue::badge("👤 No", Tone::Light)
                }
            }),
            Column::new("Actions", 26, |_, _| CellValue::actions(&["Profile", "Edit", "Remove"])),
        ]
    }

    fn card(&self, index: usize) -> Option<Card> {
        Some(Card {
            key: self.display_key(index),
            title: or_empty(&self.name).to_string(),
            tone: Tone::Info,
            badge: self
                .is_superhero
                .then(|| CellValue::badge("🦸 Hero", Tone::Warning)),
            lines: vec![
                format!("📧 {}", or_empty(&self.email)),
                format!("👥 Team: {}", or_empty(&self.team)),
            ],
            actions: vec!["View Profile", "Send Message"],
        })
    }
}

impl Team {
    /// Identifier shown in the Team ID column and on the card.
    pub fn shown_id(&self) -> String {
        self.identifier().unwrap_or_else(|| "N/A".to_string())
    }
}

impl Resource for Team {
    const KIND: ViewKind = ViewKind::Teams;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::position(),
            Column::new("Team Name", 22, |team: &Team, _| CellValue::strong(or_empty(&team.name), Tone::Primary)),
            Column::new("Team ID", 26, |team: &Team, _| CellValue::code(team.shown_id())),
            Column::new("Status", 8, |_, _| CellValue::badge("Active", Tone::Success)),
            Column::new("Actions", 24, |_, _| CellValue::actions(&["View", "Edit", "Delete"])),
        ]
    }

    fn card(&self, index: usize) -> Option<Card> {
        Some(Card {
            key: self.display_key(index),
            title: or_empty(&self.name).to_string(),
            tone: Tone::Success,
            badge: None,
            lines: vec![format!("ID: {}", self.shown_id())],
            actions: vec!["View Details", "Manage Members"],
        })
    }
}

impl Resource for Activity {
    const KIND: ViewKind = ViewKind::Activities;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::position(),
            Column::new("Activity Type", 16, |activity: &Activity, _| {
                CellValue::badge(or_empty(&activity.activity_type), Tone::Success)
            }),
            Column::new("User", 20, |activity: &Activity, _| CellValue::text(or_empty(&activity.user))),
            Column::new("Duration", 14, |activity: &Activity, _| {
                CellValue::text(format!("{} minutes", activity.duration_text()))
            }),
            Column::new("Actions", 16, |_, _| CellValue::actions(&["View", "Edit"])),
        ]
    }
}

fn medal_tone(standing: &Standing) -> Tone {
    match standing.medal {
        Some(Medal::Gold) | Some(Medal::Bronze) => Tone::Warning,
        Some(Medal::Silver) => Tone::Secondary,
        None => Tone::Plain,
    }
}

impl Resource for LeaderboardEntry {
    const KIND: ViewKind = ViewKind::Leaderboard;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Rank", 8, |_, index| {
                let standing = Standing::at(index);
                CellValue::strong(standing.label(), medal_tone(&standing))
            }),
            Column::new("Team", 20, |entry: &LeaderboardEntry, _| CellValue::strong(or_empty(&entry.team), Tone::Plain)),
            Column::new("Points", 12, |entry: &LeaderboardEntry, _| {
                CellValue::badge(format!("{} pts", entry.points_text()), Tone::Primary)
            }),
            Column::new("Status", 10, |_, index| match Standing::at(index).badge {
                RankBadge::TopThree => CellValue::badge(RankBadge::TopThree.label(), Tone::Success),
                RankBadge::Competing => CellValue::badge(RankBadge::Competing.label(), Tone::Secondary),
            }),
            Column::new("Actions", 22, |_, _| CellValue::actions(&["Details", "View Team"])),
        ]
    }

    fn highlight(&self, index: usize) -> Option<Tone> {
        Standing::at(index).is_podium().then_some(Tone::Success)
    }

    fn arrange(records: &mut Vec<Self>) {
        rank_entries(records);
    }
}

/// Badge tone for a workout difficulty; unknown values stay neutral.
pub fn difficulty_tone(difficulty: Difficulty) -> Tone {
    match difficulty {
        Difficulty::Easy => Tone::Success,
        Difficulty::Medium => Tone::Warning,
        Difficulty::Hard => Tone::Danger,
        Difficulty::Unknown => Tone::Secondary,
    }
}

fn difficulty_badge(workout: &Workout) -> CellValue {
    let level = workout.difficulty_level();
    let text = format!("{} {}", level.icon(), or_empty(&workout.difficulty));
    CellValue::badge(text.trim_end(), difficulty_tone(level))
}

impl Resource for Workout {
    const KIND: ViewKind = ViewKind::Workouts;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::position(),
            Column::new("Workout Name", 22, |workout: &Workout, _| {
                CellValue::strong(or_empty(&workout.name), Tone::Danger)
            }),
            Column::new("Difficulty", 12, |workout: &Workout, _| difficulty_badge(workout)),
            Column::new("Level", 14, |workout: &Workout, _| CellValue::text(workout.difficulty_level().level())),
            Column::new("Actions", 26, |_, _| CellValue::actions(&["Start", "Details", "Edit"])),
        ]
    }

    fn card(&self, index: usize) -> Option<Card> {
        let badge = difficulty_badge(self);
        Some(Card {
            key: self.display_key(index),
            title: format!("💪 {}", or_empty(&self.name)),
            tone: badge.tone,
            badge: Some(badge),
            lines: Vec::new(),
            actions: vec!["🚀 Start Workout", "📋 View Details"],
        })
    }
}
