use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::layout::centered_popup;

/// Draw the keyboard shortcuts overlay.
pub fn draw(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup(56, 16, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("{:<26}", "Navigation"), header_style),
            Span::styled("Views", header_style),
        ]),
        build_help_row("1-5", "Open a view", "j/k", "Move selection", key_style, desc_style),
        build_help_row("h/0", "Landing page", "c", "Toggle cards", key_style, desc_style),
        build_help_row("Tab", "Next route", "a/e", "Add/Edit", key_style, desc_style),
        build_help_row("S-Tab", "Previous route", "d/s", "Delete/Start", key_style, desc_style),
        build_help_row("←/→", "Choose link", "", "", key_style, desc_style),
        build_help_row("Enter", "Follow link", "", "", key_style, desc_style),
        Line::from(""),
        build_help_row("?", "This help", "q", "Quit", key_style, desc_style),
        build_help_row("Esc", "Close help", "", "", key_style, desc_style),
    ];

    let content = Paragraph::new(lines);
    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    frame.render_widget(content, content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, footer_area);
}

/// Build a single row across the two columns.
fn build_help_row<'a>(
    left_key: &'a str,
    left_desc: &'a str,
    right_key: &'a str,
    right_desc: &'a str,
    key_style: Style,
    desc_style: Style,
) -> Line<'a> {
    let mut spans = vec![
        Span::styled(format!("{:<7}", left_key), key_style),
        Span::styled(format!("{:<19}", left_desc), desc_style),
    ];

    if !right_key.is_empty() {
        spans.push(Span::styled(format!("{:<5}", right_key), key_style));
        spans.push(Span::styled(right_desc, desc_style));
    }

    Line::from(spans)
}
