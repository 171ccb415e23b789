//! Comment submission from the messages face.
//!
//! The form carries the target user's id. The `{index}` path segment only
//! says where the carousel was; if the list moved since the page was
//! rendered, the carousel follows the user, never the other way round.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

use super::pages::{open_carousel, render_detail_with};
use crate::services::carousel::{Carousel, Face};
use crate::services::comments::CommentPanel;
use crate::services::gallery::CommentOrder;
use crate::services::session;
use crate::state::{AppState, User};

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    user_id: Uuid,
    /// Only posted while the visitor has no session name.
    name: Option<String>,
    #[serde(default)]
    content: String,
}

/// Card shown when the gallery could not be read: no stats, just the panel
/// so the draft survives.
fn unresolved_user(id: Uuid) -> User {
    User {
        id,
        name: String::new(),
        team: None,
        time_on_project: None,
        favourite_moment: None,
        tickets_completed: None,
        created_at: 0,
        comments: Vec::new(),
    }
}

/// Resolve the target user and the carousel around it.
///
/// `None` means the read worked and the user is gone.
async fn resolve_target(state: &AppState, user_id: Uuid, index: usize) -> Option<(User, Carousel)> {
    match state.store.list_users(CommentOrder::OldestFirst).await {
        Ok(users) => {
            let position = users.iter().position(|u| u.id == user_id)?;
            if position != index {
                debug!(%user_id, index, position, "hero moved since the page was rendered");
            }
            let carousel = open_carousel(state, users.len(), position, Face::Messages, None)?;
            let user = users.into_iter().nth(position)?;
            Some((user, carousel))
        }
        Err(e) => {
            error!(error = %e, %user_id, "gallery read failed before comment insert");
            let carousel = open_carousel(state, index + 1, index, Face::Messages, None)?;
            Some((unresolved_user(user_id), carousel))
        }
    }
}

/// `POST /heroes/{index}/comments`: validate, insert against the posted
/// user id, and re-render the messages face with the optimistic entry or
/// the error.
pub async fn create_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(index): Path<usize>,
    Form(form): Form<CommentForm>,
) -> Response {
    let Some((mut user, carousel)) = resolve_target(&state, form.user_id, index).await else {
        return Redirect::to("/").into_response();
    };

    let session_name = session::display_name(&jar);
    let comments = std::mem::take(&mut user.comments);
    let mut panel = CommentPanel::new(user.id, comments, session_name.clone());
    if let Some(name) = form.name {
        panel.set_author_draft(name);
    }
    panel.set_message_draft(form.content);

    if let Err(e) = panel.submit(state.store.as_ref()).await {
        debug!(error = %e, user_id = %user.id, "comment rejected before insert");
    }

    // A first successful post names the session, same as the splash form.
    let adopted = match session_name {
        None => panel.session_name().and_then(session::normalize_display_name),
        Some(_) => None,
    };
    let jar = match adopted {
        Some(name) => jar.add(session::display_name_cookie(name, state.config.cookie_secure)),
        None => jar,
    };

    (jar, render_detail_with(&state, user, carousel, panel)).into_response()
}

#[cfg(test)]
#[path = "comments_test.rs"]
mod tests;
