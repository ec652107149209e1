use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;

use crate::interactive::app::{DashboardApp, MountRequest, NotificationKind};
use crate::interactive::ui;
use crate::models::{LeaderboardEntry, User};
use crate::views::{Route, TableModel, ViewKind, ViewState};

fn app_on(kind: ViewKind) -> (DashboardApp, MountRequest) {
    let mut app = DashboardApp::new("http://localhost:8000");
    let request = app.mount(Route::View(kind)).unwrap();
    (app, request)
}

fn user_model(count: usize) -> TableModel {
    let users: Vec<User> = (0..count)
        .map(|i| serde_json::from_value(json!({"id": i + 1, "name": format!("User {}", i + 1)})).unwrap())
        .collect();
    TableModel::from_records(&users)
}

fn leaderboard_model() -> TableModel {
    let board: Vec<LeaderboardEntry> = serde_json::from_value(json!([
        {"team": "Alpha", "points": 120},
        {"team": "Bravo", "points": 95}
    ]))
    .unwrap();
    TableModel::from_records(&board)
}

fn render(app: &DashboardApp) -> String {
    let backend = TestBackend::new(160, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_mount_starts_loading() {
    let (app, request) = app_on(ViewKind::Users);

    assert_eq!(request, MountRequest { generation: 1, kind: ViewKind::Users });
    assert!(app.view.is_loading());
}

#[test]
fn test_home_needs_no_fetch() {
    let mut app = DashboardApp::new("http://localhost:8000");
    assert_eq!(app.mount(Route::Home), None);
    assert_eq!(app.route, Route::Home);
}

#[test]
fn test_reselecting_route_does_not_remount() {
    let (mut app, _) = app_on(ViewKind::Users);
    assert_eq!(app.handle_key(KeyCode::Char('1')), None);
    assert_eq!(app.generation, 1);
}

#[test]
fn test_number_keys_mount_views() {
    let (mut app, _) = app_on(ViewKind::Users);

    let request = app.handle_key(KeyCode::Char('4')).unwrap();
    assert_eq!(request.kind, ViewKind::Leaderboard);
    assert_eq!(request.generation, 2);
    assert_eq!(app.route, Route::View(ViewKind::Leaderboard));
}

#[test]
fn test_stale_fetch_is_dropped() {
    let (mut app, first) = app_on(ViewKind::Users);
    let second = app.handle_key(KeyCode::Char('2')).unwrap();

    // The users response arrives after the teams view mounted
    assert!(!app.apply_fetch(first.generation, ViewState::Loaded(user_model(2))));
    assert!(app.view.is_loading());

    assert!(app.apply_fetch(second.generation, ViewState::Failed("HTTP error! status: 500".to_string())));
    assert_eq!(app.view.error(), Some("HTTP error! status: 500"));
    assert_eq!(app.notifications.last().map(|n| n.kind), Some(NotificationKind::Error));
}

#[test]
fn test_fetch_after_leaving_view_is_dropped() {
    let (mut app, request) = app_on(ViewKind::Teams);
    app.handle_key(KeyCode::Char('h'));

    assert!(!app.apply_fetch(request.generation, ViewState::Loaded(user_model(1))));
    assert_eq!(app.route, Route::Home);
}

#[test]
fn test_selection_wraps() {
    let (mut app, request) = app_on(ViewKind::Users);
    app.apply_fetch(request.generation, ViewState::Loaded(user_model(3)));

    app.handle_key(KeyCode::Char('k'));
    assert_eq!(app.selected_index, 2);
    app.handle_key(KeyCode::Down);
    assert_eq!(app.selected_index, 0);
    app.handle_key(KeyCode::Char('j'));
    assert_eq!(app.selected_row().map(|row| row.key.as_str()), Some("2"));
}

#[test]
fn test_home_calls_to_action() {
    let mut app = DashboardApp::new("http://localhost:8000");
    app.mount(Route::Home);

    app.handle_key(KeyCode::Right);
    let request = app.handle_key(KeyCode::Enter).unwrap();
    assert_eq!(request.kind, ViewKind::Leaderboard);

    // The focused link survives leaving the landing page
    app.handle_key(KeyCode::Char('0'));
    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Left);
    let request = app.handle_key(KeyCode::Enter).unwrap();
    assert_eq!(request.kind, ViewKind::Workouts);
}

#[test]
fn test_tab_cycles_routes() {
    let (mut app, _) = app_on(ViewKind::Workouts);

    assert_eq!(app.handle_key(KeyCode::Tab), None);
    assert_eq!(app.route, Route::Home);

    let request = app.handle_key(KeyCode::BackTab).unwrap();
    assert_eq!(request.kind, ViewKind::Workouts);
}

#[test]
fn test_inert_actions_only_notify() {
    let (mut app, _) = app_on(ViewKind::Users);

    assert_eq!(app.handle_key(KeyCode::Char('a')), None);
    assert_eq!(app.generation, 1);
    let last = app.notifications.last().unwrap();
    assert_eq!(last.kind, NotificationKind::Info);
    assert!(last.message.contains("Add"));

    let mut home = DashboardApp::new("http://localhost:8000");
    home.handle_key(KeyCode::Char('e'));
    assert!(home.notifications.is_empty());
}

#[test]
fn test_help_and_quit() {
    let (mut app, _) = app_on(ViewKind::Users);

    app.handle_key(KeyCode::Char('?'));
    assert!(app.show_help);

    // Navigation is ignored while help is open
    assert_eq!(app.handle_key(KeyCode::Char('3')), None);
    app.handle_key(KeyCode::Esc);
    assert!(!app.show_help);
    assert!(!app.should_quit);

    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn test_cards_toggle() {
    let (mut app, _) = app_on(ViewKind::Users);
    assert!(app.show_cards);
    app.handle_key(KeyCode::Char('c'));
    assert!(!app.show_cards);
}

#[test]
fn test_draw_loading() {
    let (app, _) = app_on(ViewKind::Users);
    let screen = render(&app);

    assert!(screen.contains("Loading..."));
    assert!(!screen.contains("All Users"));
}

#[test]
fn test_draw_error() {
    let (mut app, request) = app_on(ViewKind::Teams);
    app.apply_fetch(request.generation, ViewState::Failed("HTTP error! status: 503".to_string()));
    let screen = render(&app);

    assert!(screen.contains("HTTP error! status: 503"));
    assert!(!screen.contains("Loading..."));
    assert!(!screen.contains("All Teams"));
}

#[test]
fn test_draw_empty_placeholder() {
    let (mut app, request) = app_on(ViewKind::Users);
    app.apply_fetch(request.generation, ViewState::Loaded(user_model(0)));
    let screen = render(&app);

    assert!(screen.contains("No Users Found"));
    assert!(!screen.contains("All Users"));
}

#[test]
fn test_draw_leaderboard() {
    let (mut app, request) = app_on(ViewKind::Leaderboard);
    app.apply_fetch(request.generation, ViewState::Loaded(leaderboard_model()));
    let screen = render(&app);

    assert!(screen.contains("Team Rankings (2 teams)"));
    assert!(screen.contains("Alpha"));
    assert!(screen.contains("120 pts"));
    assert!(screen.contains("Top 3"));
}

#[test]
fn test_draw_home_and_help() {
    let mut app = DashboardApp::new("http://localhost:8000");
    app.mount(Route::Home);
    let screen = render(&app);
    assert!(screen.contains("Your fitness journey starts here!"));
    assert!(screen.contains("http://localhost:8000"));

    app.handle_key(KeyCode::Char('?'));
    assert!(render(&app).contains("Keyboard Shortcuts"));
}
