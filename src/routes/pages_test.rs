use axum::http::StatusCode;

use crate::routes::app;
use crate::routes::test_support::{body_text, get, location, send};
use crate::state::test_helpers::{dummy_comment, dummy_user, test_app_state};
use crate::state::User;

fn three_heroes() -> Vec<User> {
    let mut ada = dummy_user("Ada Lovelace");
    ada.comments = vec![
        dummy_comment(ada.id, "Groot", "first message", 1_000),
        dummy_comment(ada.id, "Rocket", "second message", 2_000),
    ];
    vec![ada, dummy_user("Grace Hopper"), dummy_user("Alan Turing")]
}

// =============================================================================
// GET /
// =============================================================================

#[tokio::test]
async fn index_without_cookie_shows_splash() {
    let (state, _) = test_app_state(three_heroes());
    let resp = send(app(state), get("/", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Welcome, Hero!"));
    assert!(!html.contains("Grace Hopper"));
}

#[tokio::test]
async fn index_with_cookie_shows_grid() {
    let (state, _) = test_app_state(three_heroes());
    let resp = send(app(state), get("/", Some("Rocket"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Grace Hopper"));
    assert!(html.contains("Alan Turing"));
    assert!(html.contains("href=\"/heroes/2\""));
    assert!(html.contains("2 messages"));
    assert!(!html.contains("Welcome, Hero!"));
}

#[tokio::test]
async fn index_read_failure_renders_empty_grid() {
    let (state, store) = test_app_state(three_heroes());
    store.fail_reads();
    let resp = send(app(state), get("/", Some("Rocket"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("gallery__grid"));
    assert!(!html.contains("Ada Lovelace"));
}

// =============================================================================
// GET /heroes/{index}
// =============================================================================

#[tokio::test]
async fn hero_without_cookie_redirects_home() {
    let (state, _) = test_app_state(three_heroes());
    let resp = send(app(state), get("/heroes/0", None)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));
}

#[tokio::test]
async fn hero_out_of_range_redirects_home() {
    let (state, _) = test_app_state(three_heroes());
    let resp = send(app(state), get("/heroes/3", Some("Rocket"))).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));
}

#[tokio::test]
async fn hero_defaults_to_stats_face() {
    let (state, _) = test_app_state(three_heroes());
    let resp = send(app(state), get("/heroes/1", Some("Rocket"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Grace Hopper"));
    assert!(html.contains("Team: Payments"));
    assert!(html.contains("http://127.0.0.1:9/heroes/Grace.png"));
    assert!(html.contains("2 / 3"));
    assert!(!html.contains("messages__form"));
}

#[tokio::test]
async fn hero_messages_face_lists_oldest_first() {
    let (state, _) = test_app_state(three_heroes());
    let resp = send(app(state), get("/heroes/0?face=messages", Some("Rocket"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    let first = html.find("first message").expect("first comment rendered");
    let second = html.find("second message").expect("second comment rendered");
    assert!(first < second);
    assert_eq!(html.matches("bubble--mine").count(), 1);
    assert!(!html.contains("messages__author"));
}

#[tokio::test]
async fn hero_backward_direction_slides_from_left() {
    let (state, _) = test_app_state(three_heroes());
    let resp = send(app(state), get("/heroes/2?face=stats&dir=-1", Some("Rocket"))).await;
    let html = body_text(resp).await;
    assert!(html.contains("card--from-left"));
}

#[tokio::test]
async fn hero_read_failure_redirects_home() {
    let (state, store) = test_app_state(three_heroes());
    store.fail_reads();
    let resp = send(app(state), get("/heroes/0", Some("Rocket"))).await;
    assert_eq!(location(&resp), Some("/"));
}

#[tokio::test]
async fn hero_unknown_query_values_fall_back_to_defaults() {
    let (state, _) = test_app_state(three_heroes());
    let resp = send(app(state), get("/heroes/1?face=bogus&dir=x", Some("Rocket"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("card--stats"));
    assert!(html.contains("card--from-right"));
    assert!(html.contains("Team: Payments"));
}
