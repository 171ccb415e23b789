//! Display-name selection from the splash page.

use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::info;

use crate::services::session;
use crate::state::AppState;
use crate::views::splash::{RETRY_PROMPT, splash_page};

#[derive(Debug, Deserialize)]
pub struct SessionForm {
    #[serde(default)]
    name: String,
}

/// `POST /session`: store the chosen name in a cookie, once.
pub async fn start_session(State(state): State<AppState>, jar: CookieJar, Form(form): Form<SessionForm>) -> Response {
    if session::display_name(&jar).is_some() {
        return Redirect::to("/").into_response();
    }

    let Some(name) = session::normalize_display_name(&form.name) else {
        return Html(splash_page(&state.config.site_title, Some(RETRY_PROMPT))).into_response();
    };

    info!(%name, "display name chosen");
    let jar = jar.add(session::display_name_cookie(name, state.config.cookie_secure));
    (jar, Redirect::to("/")).into_response()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
