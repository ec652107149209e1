use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Split within a collection view: title block and body
pub struct ViewLayout {
    pub title: Rect,
    pub body: Rect,
}

/// Body split between the table and the cards panel
pub struct PanelLayout {
    pub left: Rect,
    pub right: Rect,
}

/// Calculate the top-level layout
pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count as u16).min(3) + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(notif_height),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        notifications: chunks[2],
        footer: chunks[3],
    }
}

/// Title block of a view: title, subtitle and the inert primary action.
pub fn view_layout(area: Rect) -> ViewLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    ViewLayout {
        title: chunks[0],
        body: chunks[1],
    }
}

/// Split the body into table and cards. On narrow terminals (<100 cols)
/// the cards take the lower half instead of the right side.
pub fn panel_layout(area: Rect) -> PanelLayout {
    let direction = if area.width < 100 {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };

    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    PanelLayout {
        left: chunks[0],
        right: chunks[1],
    }
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
