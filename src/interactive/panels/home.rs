use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::badge_style;
use crate::constants::{BRAND, TAGLINE};
use crate::formatting::home::CALLS_TO_ACTION;
use crate::interactive::app::DashboardApp;

pub fn draw_home(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut actions = Vec::new();
    for (i, (label, tone, route)) in CALLS_TO_ACTION.into_iter().enumerate() {
        let style = if i == app.home_index {
            badge_style(tone).add_modifier(Modifier::UNDERLINED)
        } else {
            badge_style(tone)
        };
        actions.push(Span::styled(format!(" {} ", label), style));
        actions.push(Span::styled(
            format!(" {}   ", route.path()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            BRAND,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            TAGLINE,
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(actions),
        Line::from(""),
        Line::from(Span::styled(
            "←/→ choose  Enter open",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
