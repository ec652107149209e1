use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::DashboardApp;
use super::layout::app_layout;
use super::panels::{collection::draw_collection, home::draw_home, nav::draw_nav};
use super::{notifications, popups};
use crate::views::Route;

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.size();
    let layout = app_layout(area, app.notifications.len());

    draw_nav(frame, layout.header, app);

    match app.route {
        Route::Home => draw_home(frame, layout.main, app),
        Route::View(kind) => draw_collection(frame, layout.main, app, kind),
    }

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);
    popups::draw_popup(frame, area, app);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let key = Style::default().fg(Color::Yellow);
    let desc = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(" 1-5", key),
        Span::styled(" views  ", desc),
        Span::styled("Tab", key),
        Span::styled(" next  ", desc),
    ];
    match app.route {
        Route::Home => {
            spans.push(Span::styled("←/→", key));
            spans.push(Span::styled(" choose  ", desc));
            spans.push(Span::styled("Enter", key));
            spans.push(Span::styled(" open  ", desc));
        }
        Route::View(_) => {
            spans.push(Span::styled("j/k", key));
            spans.push(Span::styled(" select  ", desc));
            spans.push(Span::styled("c", key));
            spans.push(Span::styled(" cards  ", desc));
        }
    }
    spans.push(Span::styled("?", key));
    spans.push(Span::styled(" help  ", desc));
    spans.push(Span::styled("q", key));
    spans.push(Span::styled(" quit", desc));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
