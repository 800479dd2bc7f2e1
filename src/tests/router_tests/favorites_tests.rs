// src/tests/router_tests/favorites_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, get, post, test_state};

fn favorite_ids(state: &AppState) -> Vec<String> {
    state
        .session()
        .unwrap()
        .favorites()
        .listings()
        .iter()
        .map(|l| l.id.clone())
        .collect()
}

#[test]
fn drop_adds_listing_once() {
    let state = test_state();

    let resp = handle(post("/favorites/drop", "kind=PROPERTY&id=prop2"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    handle(post("/favorites/drop", "kind=PROPERTY&id=prop2"), &state).unwrap();
    handle(post("/favorites/drop", "kind=PROPERTY&id=prop1"), &state).unwrap();

    assert_eq!(favorite_ids(&state), vec!["prop2", "prop1"]);

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Favorites (2)"));
    assert!(body.contains("Clear All"));
    assert!(body.contains("Saved"));
}

#[test]
fn drop_of_unknown_id_is_silent() {
    let state = test_state();

    let resp = handle(post("/favorites/drop", "kind=PROPERTY&id=ghost"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert!(favorite_ids(&state).is_empty());
}

#[test]
fn drop_of_foreign_kind_is_ignored() {
    let state = test_state();

    handle(post("/favorites/drop", "kind=text%2Fplain&id=prop1"), &state).unwrap();
    assert!(favorite_ids(&state).is_empty());
}

#[test]
fn drop_without_id_is_bad_request() {
    let state = test_state();
    let result = handle(post("/favorites/drop", "kind=PROPERTY"), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn remove_and_clear() {
    let state = test_state();
    for id in ["prop1", "prop2", "prop3"] {
        handle(post("/favorites/drop", &format!("kind=PROPERTY&id={id}")), &state).unwrap();
    }

    handle(post("/favorites/remove", "id=prop2"), &state).unwrap();
    assert_eq!(favorite_ids(&state), vec!["prop1", "prop3"]);

    // Absent id leaves the store alone.
    handle(post("/favorites/remove", "id=zzz"), &state).unwrap();
    assert_eq!(favorite_ids(&state), vec!["prop1", "prop3"]);

    handle(post("/favorites/clear", ""), &state).unwrap();
    assert!(favorite_ids(&state).is_empty());

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Favorites (0)"));
    assert!(!body.contains("Clear All"));
}

#[test]
fn favorites_survive_search_and_clear() {
    let state = test_state();
    handle(post("/favorites/drop", "kind=PROPERTY&id=prop3"), &state).unwrap();
    handle(post("/search", "type=Flat"), &state).unwrap();
    handle(post("/search/clear", ""), &state).unwrap();

    assert_eq!(favorite_ids(&state), vec!["prop3"]);
}
