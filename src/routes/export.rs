//! PDF and avatar downloads.
//!
//! Export failures are logged only. The response is an empty `204` so the
//! browser stays on the card instead of navigating to an error page.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{error, info};
use uuid::Uuid;

use crate::services::export::{
    attachment_header, avatar_url, fetch_avatar, fetch_card_assets, icon_filename, pdf_filename, render_card_pdf,
};
use crate::services::gallery::CommentOrder;
use crate::state::{AppState, User};

async fn find_user(state: &AppState, id: Uuid) -> Result<User, Response> {
    match state.store.find_user(id, CommentOrder::NewestFirst).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(StatusCode::NOT_FOUND.into_response()),
        Err(e) => {
            error!(error = %e, %id, "export read failed");
            Err(StatusCode::NO_CONTENT.into_response())
        }
    }
}

fn attachment(content_type: String, filename: &str, bytes: Vec<u8>) -> Response {
    (
        [(header::CONTENT_TYPE, content_type), (header::CONTENT_DISPOSITION, attachment_header(filename))],
        bytes,
    )
        .into_response()
}

/// `GET /heroes/{id}/card.pdf`
pub async fn card_pdf(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let user = match find_user(&state, id).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let assets = fetch_card_assets(&state.http, &state.config.image_endpoint, &state.config.emoji_endpoint, &user).await;
    match render_card_pdf(&user, &state.config.site_title, &assets) {
        Ok(bytes) => {
            info!(%id, bytes = bytes.len(), "card exported");
            attachment("application/pdf".to_owned(), &pdf_filename(&user.name), bytes)
        }
        Err(e) => {
            error!(error = %e, %id, "card export failed");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

/// `GET /heroes/{id}/icon.png`
pub async fn icon(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let user = match find_user(&state, id).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let url = avatar_url(&state.config.image_endpoint, &user.name);
    match fetch_avatar(&state.http, &url).await {
        Ok(avatar) => attachment(avatar.content_type, &icon_filename(&user.name), avatar.bytes),
        Err(e) => {
            error!(error = %e, %id, "avatar export failed");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
