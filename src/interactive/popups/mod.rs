pub mod help;

use ratatui::{Frame, layout::Rect};
use crate::interactive::app::DashboardApp;

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    if app.show_help {
        help::draw(frame, area);
    }
}
