use std::fmt::Write;

use colored::*;

use super::theme::ThemedColorize;
use super::utils::pad_to_width;
use crate::constants::{BRAND, TAGLINE};
use crate::views::{Route, Tone, ViewKind};

/// Calls to action on the landing page: label, tone and target route.
pub const CALLS_TO_ACTION: [(&str, Tone, Route); 3] = [
    ("📈 Track Activities", Tone::Light, Route::View(ViewKind::Activities)),
    ("🏆 View Leaderboard", Tone::Warning, Route::View(ViewKind::Leaderboard)),
    ("💪 Start Workout", Tone::Success, Route::View(ViewKind::Workouts)),
];

pub fn render_home() -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", BRAND.with_tone(Tone::Primary).bold());
    let _ = writeln!(out, "  {}", TAGLINE.italic());
    let _ = writeln!(out);

    for (label, tone, route) in CALLS_TO_ACTION {
        let _ = writeln!(
            out,
            "  {}  {}",
            format!(" {} ", label).as_badge(tone),
            format!("octofit view {}", route.path()).dimmed()
        );
    }
    out
}

pub fn render_routes() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Routes".bold());
    for route in Route::ALL {
        let endpoint = match route.view_kind() {
            Some(kind) => kind.spec().path,
            None => "(landing page)",
        };
        let _ = writeln!(
            out,
            "  {} {} {}",
            pad_to_width(route.path(), 14).with_tone(Tone::Primary),
            pad_to_width(route.label(), 18),
            endpoint.dimmed()
        );
    }
    out
}
