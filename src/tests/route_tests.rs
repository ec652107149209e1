use crate::error::OctofitError;
use crate::views::{Route, ViewKind};

#[test]
fn test_parse_routes() {
    assert_eq!(Route::parse("/").unwrap(), Route::Home);
    assert_eq!(Route::parse("/users").unwrap(), Route::View(ViewKind::Users));
    assert_eq!(Route::parse("/users/").unwrap(), Route::View(ViewKind::Users));
    assert_eq!(Route::parse("leaderboard").unwrap(), Route::View(ViewKind::Leaderboard));
}

#[test]
fn test_parse_unknown_route() {
    match Route::parse("/users/42") {
        Err(OctofitError::UnknownRoute(path)) => assert_eq!(path, "/users/42"),
        other => panic!("Expected UnknownRoute, got {:?}", other),
    }
    assert!(Route::parse("/dashboard").is_err());
}

#[test]
fn test_route_cycle() {
    assert_eq!(Route::Home.next(), Route::View(ViewKind::Users));
    assert_eq!(Route::Home.previous(), Route::View(ViewKind::Workouts));
    assert_eq!(Route::View(ViewKind::Workouts).next(), Route::Home);
}

#[test]
fn test_view_specs() {
    assert_eq!(ViewKind::Leaderboard.spec().path, "/api/leaderboard/");
    assert_eq!(ViewKind::Workouts.spec().route, "/workouts");
    assert_eq!(ViewKind::from_command("teams"), Some(ViewKind::Teams));
    assert_eq!(ViewKind::from_command("home"), None);

    for kind in ViewKind::ALL {
        assert_eq!(kind.spec().kind, kind);
        assert_eq!(Route::parse(kind.spec().route).unwrap(), Route::View(kind));
    }
}
