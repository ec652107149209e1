use std::collections::HashMap;

use colored::{Color, ColoredString, Colorize};
use lazy_static::lazy_static;

use crate::views::Tone;

/// Terminal palette for the semantic tones
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<Tone, Color>,
}

impl ColorTheme {
    pub fn new() -> Self {
        let mut colors = HashMap::new();

        colors.insert(Tone::Primary, Color::TrueColor { r: 13, g: 110, b: 253 });
        colors.insert(Tone::Secondary, Color::TrueColor { r: 108, g: 117, b: 125 });
        colors.insert(Tone::Success, Color::Green);
        colors.insert(Tone::Danger, Color::Red);
        colors.insert(Tone::Warning, Color::Yellow);
        colors.insert(Tone::Info, Color::Cyan);
        colors.insert(Tone::Light, Color::TrueColor { r: 220, g: 220, b: 220 });
        colors.insert(Tone::Dark, Color::TrueColor { r: 33, g: 37, b: 41 });
        colors.insert(Tone::Muted, Color::BrightBlack);

        Self { colors }
    }

    /// Color for a tone; `Plain` has none.
    pub fn get(&self, tone: Tone) -> Option<Color> {
        self.colors.get(&tone).copied()
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref THEME: ColorTheme = ColorTheme::new();
}

pub fn theme_color(tone: Tone) -> Option<Color> {
    THEME.get(tone)
}

pub trait ThemedColorize {
    fn with_tone(&self, tone: Tone) -> ColoredString;

    /// Filled badge: dark text on the tone's color.
    fn as_badge(&self, tone: Tone) -> ColoredString;
}

impl ThemedColorize for str {
    fn with_tone(&self, tone: Tone) -> ColoredString {
        match theme_color(tone) {
            Some(color) => self.color(color),
            None => self.normal(),
        }
    }

    fn as_badge(&self, tone: Tone) -> ColoredString {
        let fg = match tone {
            Tone::Warning | Tone::Light | Tone::Info => Color::Black,
            _ => Color::White,
        };
        match theme_color(tone) {
            Some(bg) => self.color(fg).on_color(bg),
            None => self.normal(),
        }
    }
}
