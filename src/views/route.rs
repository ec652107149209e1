use crate::constants::{ACTIVITIES_PATH, LEADERBOARD_PATH, TEAMS_PATH, USERS_PATH, WORKOUTS_PATH};
use crate::error::{OctofitError, OctofitResult};
use crate::views::table::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Users,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

/// Static configuration of one data-list view.
#[derive(Debug)]
pub struct ViewSpec {
    pub kind: ViewKind,
    /// Collection endpoint, appended to the base URL
    pub path: &'static str,
    pub route: &'static str,
    pub command: &'static str,
    pub nav_label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub caption_label: &'static str,
    pub count_noun: &'static str,
    pub empty_heading: &'static str,
    pub empty_body: &'static str,
    /// Inert call to action shown under the title
    pub primary_action: Option<&'static str>,
    pub accent: Tone,
}

impl ViewSpec {
    /// Table caption with the record count, e.g. `👤 All Users (4 total)`.
    pub fn caption(&self, count: usize) -> String {
        format!("{} ({} {})", self.caption_label, count, self.count_noun)
    }
}

static VIEW_SPECS: [ViewSpec; 5] = [
    ViewSpec {
        kind: ViewKind::Users,
        path: USERS_PATH,
        route: "/users",
        command: "users",
        nav_label: "👤 Users",
        title: "👤 Users",
        subtitle: "Manage user profiles and superhero status",
        caption_label: "👤 All Users",
        count_noun: "total",
        empty_heading: "No Users Found",
        empty_body: "No users have been registered yet.",
        primary_action: Some("+ Add New User"),
        accent: Tone::Info,
    },
    ViewSpec {
        kind: ViewKind::Teams,
        path: TEAMS_PATH,
        route: "/teams",
        command: "teams",
        nav_label: "👥 Teams",
        title: "👥 Teams",
        subtitle: "Manage and view all teams",
        caption_label: "👥 All Teams",
        count_noun: "total",
        empty_heading: "No Teams Found",
        empty_body: "No teams have been created yet.",
        primary_action: Some("+ Add New Team"),
        accent: Tone::Success,
    },
    ViewSpec {
        kind: ViewKind::Activities,
        path: ACTIVITIES_PATH,
        route: "/activities",
        command: "activities",
        nav_label: "📈 Activities",
        title: "📈 Activities",
        subtitle: "Track all fitness activities and workouts",
        caption_label: "📈 Activity Log",
        count_noun: "total",
        empty_heading: "No Activities Found",
        empty_body: "No activities have been recorded yet.",
        primary_action: None,
        accent: Tone::Primary,
    },
    ViewSpec {
        kind: ViewKind::Leaderboard,
        path: LEADERBOARD_PATH,
        route: "/leaderboard",
        command: "leaderboard",
        nav_label: "🏆 Leaderboard",
        title: "🏆 Leaderboard",
        subtitle: "Team rankings and competition standings",
        caption_label: "🏆 Team Rankings",
        count_noun: "teams",
        empty_heading: "No Leaderboard Data",
        empty_body: "No team rankings available yet.",
        primary_action: None,
        accent: Tone::Warning,
    },
    ViewSpec {
        kind: ViewKind::Workouts,
        path: WORKOUTS_PATH,
        route: "/workouts",
        command: "workouts",
        nav_label: "💪 Workouts",
        title: "💪 Workouts",
        subtitle: "Browse and manage workout routines",
        caption_label: "💪 Available Workouts",
        count_noun: "total",
        empty_heading: "No Workouts Available",
        empty_body: "No workout routines have been created yet.",
        primary_action: Some("+ Create Workout"),
        accent: Tone::Danger,
    },
];

impl ViewKind {
    /// Navigation bar order
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Users,
        ViewKind::Teams,
        ViewKind::Activities,
        ViewKind::Leaderboard,
        ViewKind::Workouts,
    ];

    pub fn spec(self) -> &'static ViewSpec {
        let index = match self {
            ViewKind::Users => 0,
            ViewKind::Teams => 1,
            ViewKind::Activities => 2,
            ViewKind::Leaderboard => 3,
            ViewKind::Workouts => 4,
        };
        &VIEW_SPECS[index]
    }

    pub fn from_command(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.spec().command == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    View(ViewKind),
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::View(ViewKind::Users),
        Route::View(ViewKind::Teams),
        Route::View(ViewKind::Activities),
        Route::View(ViewKind::Leaderboard),
        Route::View(ViewKind::Workouts),
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::View(kind) => kind.spec().route,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "🏠 Home",
            Route::View(kind) => kind.spec().nav_label,
        }
    }

    /// Parse a client-side path. A trailing slash and a missing leading
    /// slash are tolerated; anything else unknown is an error.
    pub fn parse(path: &str) -> OctofitResult<Route> {
        let trimmed = path.trim().trim_matches('/');
        let normalized = format!("/{}", trimmed);

        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| OctofitError::UnknownRoute(path.trim().to_string()))
    }

    pub fn view_kind(self) -> Option<ViewKind> {
        match self {
            Route::Home => None,
            Route::View(kind) => Some(kind),
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|route| *route == self).unwrap_or(0)
    }

    pub fn next(self) -> Route {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Route {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}
