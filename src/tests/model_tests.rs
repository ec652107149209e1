use serde_json::json;

use crate::models::{
    is_truthy, rank_entries, value_number, value_text, Activity, Difficulty, LeaderboardEntry,
    Record, Standing, Team, User, Workout,
};

fn entries(values: serde_json::Value) -> Vec<LeaderboardEntry> {
    serde_json::from_value(values).unwrap()
}

#[test]
fn test_truthiness() {
    for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
        assert!(!is_truthy(&falsy), "{} should be falsy", falsy);
    }
    for truthy in [json!(true), json!(1), json!("0"), json!([]), json!({})] {
        assert!(is_truthy(&truthy), "{} should be truthy", truthy);
    }
}

#[test]
fn test_value_text() {
    assert_eq!(value_text(&json!("Ada")), "Ada");
    assert_eq!(value_text(&json!(30)), "30");
    assert_eq!(value_text(&json!(7.5)), "7.5");
    assert_eq!(value_text(&json!(30.0)), "30");
    assert_eq!(value_text(&json!(null)), "");
    assert_eq!(value_text(&json!({"$oid": "abc"})), r#"{"$oid":"abc"}"#);
}

#[test]
fn test_value_number() {
    assert_eq!(value_number(&json!(120)), Some(120.0));
    assert_eq!(value_number(&json!(" 95 ")), Some(95.0));
    assert_eq!(value_number(&json!("lots")), None);
    assert_eq!(value_number(&json!(null)), None);
}

#[test]
fn test_user_lenient_decoding() {
    let user: User = serde_json::from_value(json!({
        "_id": "64f0",
        "name": "Ada",
        "email": null,
        "team": 7,
        "is_superhero": 1,
        "extra": "ignored"
    }))
    .unwrap();

    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert_eq!(user.email, None);
    assert_eq!(user.team.as_deref(), Some("7"));
    assert!(user.is_superhero);

    let user: User = serde_json::from_value(json!({})).unwrap();
    assert_eq!(user, User::default());
    assert!(!user.is_superhero);
}

#[test]
fn test_activity_type_field() {
    let activity: Activity = serde_json::from_value(json!({
        "type": "Running",
        "user": "Ada",
        "duration": 7.5
    }))
    .unwrap();

    assert_eq!(activity.activity_type.as_deref(), Some("Running"));
    assert_eq!(activity.duration_text(), "7.5");
    assert_eq!(activity.duration_minutes(), Some(7.5));
}

#[test]
fn test_display_key_prefers_object_id() {
    let team: Team = serde_json::from_value(json!({"_id": "a1", "id": 9})).unwrap();
    assert_eq!(team.display_key(4), "a1");
}

#[test]
fn test_display_key_skips_falsy_ids() {
    let team: Team = serde_json::from_value(json!({"_id": "", "id": 9})).unwrap();
    assert_eq!(team.display_key(4), "9");

    let team: Team = serde_json::from_value(json!({"_id": null, "id": 0})).unwrap();
    assert_eq!(team.display_key(4), "4");
}

#[test]
fn test_display_key_structured_id() {
    let team: Team = serde_json::from_value(json!({"_id": {"$oid": "abc"}})).unwrap();
    assert_eq!(team.display_key(0), r#"{"$oid":"abc"}"#);
}

#[test]
fn test_difficulty_levels() {
    assert_eq!(Difficulty::parse(Some("Hard")).level(), "Advanced");
    assert_eq!(Difficulty::parse(Some("Medium")).level(), "Intermediate");
    assert_eq!(Difficulty::parse(Some("Easy")).level(), "Beginner");
    assert_eq!(Difficulty::parse(Some("Zorp")).level(), "Unknown");
    assert_eq!(Difficulty::parse(Some("hard")), Difficulty::Unknown);
    assert_eq!(Difficulty::parse(None), Difficulty::Unknown);
}

#[test]
fn test_workout_difficulty() {
    let workout: Workout = serde_json::from_value(json!({"name": "Sprints", "difficulty": "Hard"})).unwrap();
    assert_eq!(workout.difficulty_level(), Difficulty::Hard);
    assert_eq!(workout.difficulty_level().icon(), "🔴");
}

#[test]
fn test_rank_entries_descending() {
    let mut board = entries(json!([
        {"team": "DC", "points": 80},
        {"team": "Marvel", "points": 120},
        {"team": "X", "points": "95"}
    ]));
    rank_entries(&mut board);

    let teams: Vec<_> = board.iter().map(|e| e.team.clone().unwrap_or_default()).collect();
    assert_eq!(teams, vec!["Marvel", "X", "DC"]);
}

#[test]
fn test_rank_entries_ties_and_missing_points() {
    let mut board = entries(json!([
        {"team": "A", "points": null},
        {"team": "B", "points": 50},
        {"team": "C"},
        {"team": "D", "points": 50},
        {"team": "E", "points": "n/a"}
    ]));
    rank_entries(&mut board);

    let teams: Vec<_> = board.iter().map(|e| e.team.clone().unwrap_or_default()).collect();
    // Ties keep fetched order, entries without numeric points sink
    assert_eq!(teams, vec!["B", "D", "A", "C", "E"]);
}

#[test]
fn test_standings() {
    assert_eq!(Standing::at(0).label(), "🥇 #1");
    assert_eq!(Standing::at(1).label(), "🥈 #2");
    assert_eq!(Standing::at(2).label(), "🥉 #3");
    assert_eq!(Standing::at(3).label(), "#4");

    assert!(Standing::at(2).is_podium());
    assert!(!Standing::at(3).is_podium());
    assert_eq!(Standing::at(0).badge.label(), "Top 3");
    assert_eq!(Standing::at(5).badge.label(), "Competing");
}
