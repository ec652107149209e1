use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::BRAND;
use crate::formatting::display_width;
use crate::interactive::app::DashboardApp;
use crate::views::Route;

/// Navigation bar: brand on the left, one entry per route, base URL on the
/// right when it fits.
pub fn draw_nav(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(
            format!(" {} ", BRAND),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    for (i, route) in Route::ALL.into_iter().enumerate() {
        let style = if route == app.route {
            Style::default()
                .bg(Color::Rgb(30, 35, 50))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {}:{} ", i, route.label()), style));
    }

    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let url = format!("{} ", app.base_url);
    let url_width = display_width(&url);
    let width = inner.width as usize;
    if used + url_width < width {
        spans.push(Span::raw(" ".repeat(width - used - url_width)));
        spans.push(Span::styled(url, Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
