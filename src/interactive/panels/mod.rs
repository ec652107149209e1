pub mod collection;
pub mod home;
pub mod nav;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::views::{CellStyle, CellValue, Tone};

/// Dashboard palette for the semantic tones.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::White,
        Tone::Primary => Color::Rgb(13, 110, 253),
        Tone::Secondary => Color::Rgb(108, 117, 125),
        Tone::Success => Color::Green,
        Tone::Danger => Color::Red,
        Tone::Warning => Color::Yellow,
        Tone::Info => Color::Cyan,
        Tone::Light => Color::Rgb(220, 220, 220),
        Tone::Dark => Color::Rgb(33, 37, 41),
        Tone::Muted => Color::DarkGray,
    }
}

/// Badge style: tone as background, readable text on top.
pub fn badge_style(tone: Tone) -> Style {
    let fg = match tone {
        Tone::Warning | Tone::Light | Tone::Info => Color::Black,
        _ => Color::White,
    };
    Style::default()
        .bg(tone_color(tone))
        .fg(fg)
        .add_modifier(Modifier::BOLD)
}

pub fn cell_span(cell: &CellValue) -> Span<'static> {
    let base = Style::default().fg(tone_color(cell.tone));
    match cell.style {
        CellStyle::Badge => Span::styled(format!(" {} ", cell.text), badge_style(cell.tone)),
        CellStyle::Strong => Span::styled(cell.text.clone(), base.add_modifier(Modifier::BOLD)),
        CellStyle::Code => Span::styled(cell.text.clone(), base.add_modifier(Modifier::ITALIC)),
        CellStyle::Link => Span::styled(cell.text.clone(), base.add_modifier(Modifier::UNDERLINED)),
        CellStyle::Actions | CellStyle::Text => Span::styled(cell.text.clone(), base),
    }
}
