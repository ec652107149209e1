use std::time::Instant;

use crossterm::event::KeyCode;

use crate::formatting::home::CALLS_TO_ACTION;
use crate::logging::{log_debug, log_info};
use crate::views::{Route, TableModel, TableRow, ViewKind, ViewState};

pub const NOTIFICATION_TTL_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

/// A view mount that needs its collection fetched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountRequest {
    pub generation: u64,
    pub kind: ViewKind,
}

/// Inert action keys and the control each one stands for.
const INERT_ACTIONS: [(char, &str); 4] = [
    ('a', "Add"),
    ('e', "Edit"),
    ('d', "Delete"),
    ('s', "Start"),
];

pub struct DashboardApp {
    pub base_url: String,
    pub route: Route,
    pub view: ViewState<TableModel>,
    /// Bumped on every mount; fetches tagged with an older value are dropped
    pub generation: u64,
    pub selected_index: usize,
    pub show_cards: bool,
    pub show_help: bool,
    /// Focused call to action on the landing page
    pub home_index: usize,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
}

impl DashboardApp {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            route: Route::Home,
            view: ViewState::Loading,
            generation: 0,
            selected_index: 0,
            show_cards: true,
            show_help: false,
            home_index: 0,
            notifications: Vec::new(),
            should_quit: false,
        }
    }

    /// Mount `route` unconditionally. Returns the fetch to start, if the
    /// route shows a collection.
    pub fn mount(&mut self, route: Route) -> Option<MountRequest> {
        self.generation += 1;
        self.route = route;
        self.view = ViewState::Loading;
        self.selected_index = 0;
        log_info(&format!("Mounted {} (generation {})", route.path(), self.generation));

        route.view_kind().map(|kind| MountRequest {
            generation: self.generation,
            kind,
        })
    }

    /// Navigate to `route`. Selecting the route already shown is a no-op.
    pub fn navigate(&mut self, route: Route) -> Option<MountRequest> {
        if route == self.route {
            return None;
        }
        self.mount(route)
    }

    /// Settle the mounted view with a fetch result. Returns false when the
    /// result belongs to a view that is no longer mounted.
    pub fn apply_fetch(&mut self, generation: u64, state: ViewState<TableModel>) -> bool {
        if generation != self.generation || self.route.view_kind().is_none() {
            log_debug(&format!(
                "Dropping stale fetch (generation {}, current {})",
                generation, self.generation
            ));
            return false;
        }

        match &state {
            ViewState::Failed(message) => self.notify(message.clone(), NotificationKind::Error),
            ViewState::Loaded(model) => {
                let spec = model.kind.spec();
                self.notify(
                    format!("Loaded {} {}", model.len(), spec.command),
                    NotificationKind::Success,
                );
            }
            ViewState::Loading => {}
        }

        self.view = state;
        self.selected_index = 0;
        true
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        });
    }

    /// Expire old notifications
    pub fn tick(&mut self) {
        self.notifications
            .retain(|n| n.created_at.elapsed().as_secs() < NOTIFICATION_TTL_SECS);
    }

    pub fn row_count(&self) -> usize {
        self.view.data().map(|model| model.len()).unwrap_or(0)
    }

    pub fn selected_row(&self) -> Option<&TableRow> {
        self.view
            .data()
            .and_then(|model| model.rows.get(self.selected_index))
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<MountRequest> {
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return None;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('h') | KeyCode::Char('0') => return self.navigate(Route::Home),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                return self.navigate(Route::View(ViewKind::ALL[index]));
            }
            KeyCode::Tab => return self.navigate(self.route.next()),
            KeyCode::BackTab => return self.navigate(self.route.previous()),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Char('c') => self.show_cards = !self.show_cards,
            KeyCode::Left if self.route == Route::Home => {
                let len = CALLS_TO_ACTION.len();
                self.home_index = (self.home_index + len - 1) % len;
            }
            KeyCode::Right if self.route == Route::Home => {
                self.home_index = (self.home_index + 1) % CALLS_TO_ACTION.len();
            }
            KeyCode::Enter if self.route == Route::Home => {
                let (_, _, target) = CALLS_TO_ACTION[self.home_index];
                return self.navigate(target);
            }
            KeyCode::Char(c) => self.press_inert(c),
            _ => {}
        }
        None
    }

    fn press_inert(&mut self, key: char) {
        let Some(kind) = self.route.view_kind() else { return };
        let Some((_, label)) = INERT_ACTIONS.iter().find(|(k, _)| *k == key) else { return };

        log_debug(&format!("Inert action '{}' pressed on {}", label, kind.spec().command));
        self.notify(
            format!("{} is not available yet", label),
            NotificationKind::Info,
        );
    }

    fn move_selection_down(&mut self) {
        let len = self.row_count();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    fn move_selection_up(&mut self) {
        let len = self.row_count();
        if len > 0 {
            if self.selected_index == 0 {
                self.selected_index = len - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }
}
