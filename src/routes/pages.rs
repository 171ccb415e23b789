//! Gallery grid and hero detail pages.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::error;

use crate::services::carousel::{Carousel, Direction, Face};
use crate::services::comments::CommentPanel;
use crate::services::export::avatar_url;
use crate::services::gallery::CommentOrder;
use crate::services::session;
use crate::state::{AppState, User};
use crate::views::detail::{DetailView, detail_page};
use crate::views::gallery::{Tile, gallery_page};
use crate::views::splash::splash_page;

/// Read every user, logging and degrading to an empty list on failure.
pub(crate) async fn load_users(state: &AppState, order: CommentOrder) -> Vec<User> {
    match state.store.list_users(order).await {
        Ok(users) => users,
        Err(e) => {
            error!(error = %e, "gallery read failed");
            Vec::new()
        }
    }
}

/// Carousel opened on `index`, or `None` if no such hero exists.
pub(crate) fn open_carousel(state: &AppState, len: usize, index: usize, face: Face, dir: Option<i8>) -> Option<Carousel> {
    let mut carousel = Carousel::new(len, state.config.flip_policy);
    if !carousel.select(index) {
        return None;
    }
    carousel.show(face);
    if let Some(step) = dir {
        carousel.set_direction(Direction::from_step(step));
    }
    Some(carousel)
}

/// Render the detail page for `user`, handing its comments to the panel.
pub(crate) fn render_detail(state: &AppState, mut user: User, carousel: Carousel, session_name: Option<String>) -> Html<String> {
    let comments = std::mem::take(&mut user.comments);
    let panel = CommentPanel::new(user.id, comments, session_name);
    render_detail_with(state, user, carousel, panel)
}

pub(crate) fn render_detail_with(state: &AppState, user: User, carousel: Carousel, panel: CommentPanel) -> Html<String> {
    let avatar = avatar_url(&state.config.image_endpoint, &user.name);
    Html(detail_page(&state.config.site_title, DetailView { user, avatar, carousel, panel }))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /`: splash until a display name is set, then the grid.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    if session::display_name(&jar).is_none() {
        return Html(splash_page(&state.config.site_title, None));
    }

    let users = load_users(&state, CommentOrder::NewestFirst).await;
    let tiles = users
        .iter()
        .enumerate()
        .map(|(position, user)| Tile::new(position, user, &state.config.image_endpoint))
        .collect();
    Html(gallery_page(&state.config.site_title, tiles))
}

/// Raw carousel query. Values that do not parse fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct CarouselQuery {
    face: Option<String>,
    dir: Option<String>,
}

impl CarouselQuery {
    fn face(&self) -> Face {
        self.face.as_deref().and_then(Face::parse).unwrap_or_default()
    }

    fn step(&self) -> Option<i8> {
        self.dir.as_deref().and_then(|d| d.trim().parse().ok())
    }
}

/// `GET /heroes/{index}`: carousel opened on one hero.
pub async fn hero(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(index): Path<usize>,
    Query(query): Query<CarouselQuery>,
) -> Response {
    let Some(session_name) = session::display_name(&jar) else {
        return Redirect::to("/").into_response();
    };

    let users = load_users(&state, CommentOrder::OldestFirst).await;
    let Some(carousel) = open_carousel(&state, users.len(), index, query.face(), query.step()) else {
        return Redirect::to("/").into_response();
    };
    let Some(user) = users.into_iter().nth(index) else {
        return Redirect::to("/").into_response();
    };

    render_detail(&state, user, carousel, Some(session_name)).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
