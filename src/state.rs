//! Shared application state and the gallery's row types.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the gallery store (Postgres in production, in-memory in tests),
//! a shared HTTP client for avatar fetches, and the parsed config. Nothing
//! here is mutated after startup; all ordering authority lives in the
//! database.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::services::gallery::GalleryStore;

// =============================================================================
// ROWS
// =============================================================================

/// Identifier of a comment as the panel sees it.
///
/// Server rows and optimistic entries use different schemes, so they never
/// compare equal even when they describe the same message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommentId {
    Server(Uuid),
    Local(String),
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server(id) => write!(f, "{id}"),
            Self::Local(id) => f.write_str(id),
        }
    }
}

/// A comment left on a user's card. Mirrors the `comments` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: Uuid,
    /// Free-text display name chosen by whoever wrote it.
    pub author: String,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// A gallery user with their comments. Mirrors the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub team: Option<String>,
    pub time_on_project: Option<String>,
    pub favourite_moment: Option<String>,
    pub tickets_completed: Option<i32>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub comments: Vec<Comment>,
}

/// Insert payload. The database assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub user_id: Uuid,
    pub author: String,
    pub content: String,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GalleryStore>,
    /// HTTP client reused for avatar downloads.
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn GalleryStore>, config: Config) -> Self {
        Self { store, http: reqwest::Client::new(), config: Arc::new(config) }
    }
}

/// Current time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
