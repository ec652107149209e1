pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod value;
pub mod workout;

// Re-export commonly used types
pub use activity::Activity;
pub use leaderboard::{rank_entries, LeaderboardEntry, Medal, RankBadge, Standing};
pub use team::Team;
pub use user::User;
pub use value::{is_truthy, value_number, value_text};
pub use workout::{Difficulty, Workout};

use serde_json::Value;

/// Records carry no enforced identity: `_id` or `id` when present, the
/// position in the fetched collection otherwise.
pub trait Record {
    fn object_id(&self) -> Option<&Value>;
    fn plain_id(&self) -> Option<&Value>;

    /// First truthy identifier, `_id` before `id`.
    fn identifier(&self) -> Option<String> {
        [self.object_id(), self.plain_id()]
            .into_iter()
            .flatten()
            .find(|v| is_truthy(v))
            .map(value_text)
    }

    fn display_key(&self, index: usize) -> String {
        self.identifier().unwrap_or_else(|| index.to_string())
    }
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn object_id(&self) -> Option<&Value> {
                    self.object_id.as_ref()
                }

                fn plain_id(&self) -> Option<&Value> {
                    self.id.as_ref()
                }
            }
        )*
    };
}

impl_record!(User, Team, Activity, Workout, LeaderboardEntry);
