pub const LOCAL_BASE_URL: &str = "http://localhost:8000";
pub const BACKEND_PORT: u16 = 8000;
pub const FORWARDING_DOMAIN: &str = "app.github.dev";
pub const CONFIG_FILE: &str = ".octofit-cli-config.json";

// Execution context identifiers, checked in order
pub const CODESPACE_ENV_VARS: [&str; 2] = ["CODESPACE_NAME", "REACT_APP_CODESPACE_NAME"];
pub const API_URL_ENV: &str = "OCTOFIT_API_URL";

// Collection endpoints
pub const USERS_PATH: &str = "/api/users/";
pub const TEAMS_PATH: &str = "/api/teams/";
pub const ACTIVITIES_PATH: &str = "/api/activities/";
pub const WORKOUTS_PATH: &str = "/api/workouts/";
pub const LEADERBOARD_PATH: &str = "/api/leaderboard/";

pub const BRAND: &str = "🐙 OctoFit Tracker";
pub const TAGLINE: &str = "Your fitness journey starts here!";

pub const OUTPUT_FORMATS: [&str; 4] = ["full", "table", "cards", "json"];
pub const DEFAULT_FORMAT: &str = "full";
