use serde_json::json;

use crate::client::normalize_collection;

#[test]
fn test_paginated_response_uses_results() {
    let body = json!({
        "count": 2,
        "next": null,
        "results": [{"name": "Ada"}, {"name": "Bob"}]
    });
    assert_eq!(
        normalize_collection(body),
        vec![json!({"name": "Ada"}), json!({"name": "Bob"})]
    );
}

#[test]
fn test_bare_array_is_kept() {
    let body = json!([{"team": "Marvel"}, 3, "x"]);
    assert_eq!(normalize_collection(body).len(), 3);
}

#[test]
fn test_empty_results() {
    assert!(normalize_collection(json!({"results": []})).is_empty());
    assert!(normalize_collection(json!([])).is_empty());
}

#[test]
fn test_falsy_results_fall_back_to_empty() {
    assert!(normalize_collection(json!({"results": null})).is_empty());
    assert!(normalize_collection(json!({"results": 0})).is_empty());
    assert!(normalize_collection(json!({"results": ""})).is_empty());
}

#[test]
fn test_other_shapes_are_empty() {
    assert!(normalize_collection(json!({"detail": "Not found."})).is_empty());
    assert!(normalize_collection(json!({"results": {"name": "Ada"}})).is_empty());
    assert!(normalize_collection(json!({"results": "Ada"})).is_empty());
    assert!(normalize_collection(json!("users")).is_empty());
    assert!(normalize_collection(json!(42)).is_empty());
    assert!(normalize_collection(json!(null)).is_empty());
}
