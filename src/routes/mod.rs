//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is a server-rendered HTML response. Carousel state lives in the
//! URL and comment submission is a plain form post, so the router is a flat
//! list of GET/POST handlers plus the static stylesheet.

pub mod comments;
pub mod export;
pub mod pages;
pub mod session;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    // Hero routes share one parameter name; handlers read it as an index or a user id.
    Router::new()
        .route("/", get(pages::index))
        .route("/session", post(session::start_session))
        .route("/heroes/{hero}", get(pages::hero))
        .route("/heroes/{hero}/comments", post(comments::create_comment))
        .route("/heroes/{hero}/card.pdf", get(export::card_pdf))
        .route("/heroes/{hero}/icon.png", get(export::icon))
        .route("/healthz", get(healthz))
        .nest_service("/assets", assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// TEST SUPPORT
// =============================================================================


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
