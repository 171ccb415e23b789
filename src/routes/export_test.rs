use axum::http::{StatusCode, header};
use uuid::Uuid;

use crate::routes::app;
use crate::routes::test_support::{body_bytes, get, send};
use crate::state::test_helpers::{dummy_comment, dummy_user, test_app_state};

#[tokio::test]
async fn card_pdf_is_an_attachment() {
    let mut user = dummy_user("Ada Lovelace");
    user.comments.push(dummy_comment(user.id, "Rocket", "Great job!", 1_000));
    let id = user.id;
    let (state, _) = test_app_state(vec![user]);

    let resp = send(app(state), get(&format!("/heroes/{id}/card.pdf"), Some("Rocket"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()), Some("application/pdf"));
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert_eq!(disposition, "attachment; filename=\"Ada Lovelace_Superhero_Card.pdf\"");

    let body = body_bytes(resp).await;
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let (state, _) = test_app_state(vec![dummy_user("Ada")]);
    let resp = send(app(state), get(&format!("/heroes/{}/card.pdf", Uuid::new_v4()), None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn read_failure_yields_no_content() {
    let user = dummy_user("Ada");
    let id = user.id;
    let (state, store) = test_app_state(vec![user]);
    store.fail_reads();
    let resp = send(app(state), get(&format!("/heroes/{id}/card.pdf"), None)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unreachable_image_host_yields_no_content() {
    let user = dummy_user("Ada");
    let id = user.id;
    let (state, _) = test_app_state(vec![user]);
    let resp = send(app(state), get(&format!("/heroes/{id}/icon.png"), None)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn malformed_id_is_rejected() {
    let (state, _) = test_app_state(Vec::new());
    let resp = send(app(state), get("/heroes/not-a-uuid/card.pdf", None)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
