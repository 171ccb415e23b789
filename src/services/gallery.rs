//! Gallery store: read users with their comments, insert a comment.
//!
//! ARCHITECTURE
//! ============
//! Handlers depend on the [`GalleryStore`] trait rather than a pool so the
//! page flows can be exercised against an in-memory store. The production
//! implementation, [`PgGalleryStore`], issues two selects (users, then all
//! comments in the requested order) and groups comments under their owner
//! in Rust, preserving the database order.

use std::collections::HashMap;

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::state::{Comment, CommentId, NewComment, User};

/// Direction comments are ordered in, by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentOrder {
    /// Gallery page and PDF export.
    NewestFirst,
    /// Comment panel.
    OldestFirst,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database refused the statement. The message is shown to users as-is.
    #[error("{0}")]
    Rejected(String),
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => Self::Rejected(db.message().to_owned()),
            other => Self::Unavailable(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
pub trait GalleryStore: Send + Sync {
    /// All users, each with comments in `order`.
    async fn list_users(&self, order: CommentOrder) -> Result<Vec<User>, StoreError>;

    async fn find_user(&self, id: Uuid, order: CommentOrder) -> Result<Option<User>, StoreError>;

    async fn insert_comment(&self, comment: &NewComment) -> Result<(), StoreError>;
}

// =============================================================================
// POSTGRES
// =============================================================================

const USER_COLUMNS: &str = r"id, name, team, time_on_project, favourite_moment, tickets_completed,
    (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT AS created_at_ms";

const COMMENT_COLUMNS: &str = r"id, user_id, COALESCE(name, '') AS name, content,
    (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT AS created_at_ms";

pub struct PgGalleryStore {
    pool: PgPool,
}

impl PgGalleryStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_comments(&self, user_id: Option<Uuid>, order: CommentOrder) -> Result<Vec<Comment>, StoreError> {
        let direction = match order {
            CommentOrder::NewestFirst => "DESC",
            CommentOrder::OldestFirst => "ASC",
        };
        let filter = if user_id.is_some() { "WHERE user_id = $1" } else { "" };
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments {filter} ORDER BY created_at {direction}, id");

        let mut query = sqlx::query(&sql);
        if let Some(id) = user_id {
            query = query.bind(id);
        }
        let rows = query.fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|r| Comment {
                id: CommentId::Server(r.get("id")),
                user_id: r.get("user_id"),
                author: r.get("name"),
                content: r.get("content"),
                created_at: r.get("created_at_ms"),
            })
            .collect())
    }
}

fn user_from_row(r: &sqlx::postgres::PgRow) -> User {
    User {
        id: r.get("id"),
        name: r.get("name"),
        team: r.get("team"),
        time_on_project: r.get("time_on_project"),
        favourite_moment: r.get("favourite_moment"),
        tickets_completed: r.get("tickets_completed"),
        created_at: r.get("created_at_ms"),
        comments: Vec::new(),
    }
}

#[async_trait::async_trait]
impl GalleryStore for PgGalleryStore {
    async fn list_users(&self, order: CommentOrder) -> Result<Vec<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let users = rows.iter().map(user_from_row).collect();

        let comments = self.fetch_comments(None, order).await?;
        Ok(attach_comments(users, comments))
    }

    async fn find_user(&self, id: Uuid, order: CommentOrder) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let Some(row) = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await? else {
            return Ok(None);
        };

        let mut user = user_from_row(&row);
        user.comments = self.fetch_comments(Some(id), order).await?;
        Ok(Some(user))
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO comments (user_id, name, content) VALUES ($1, $2, $3)")
            .bind(comment.user_id)
            .bind(&comment.author)
            .bind(&comment.content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// =============================================================================
// GROUPING
// =============================================================================

/// Distribute `comments` to their owners, keeping the incoming order.
/// Comments whose owner is not in `users` are dropped.
#[must_use]
pub fn attach_comments(mut users: Vec<User>, comments: Vec<Comment>) -> Vec<User> {
    let slots: HashMap<Uuid, usize> = users.iter().enumerate().map(|(i, u)| (u.id, i)).collect();
    for comment in comments {
        if let Some(&slot) = slots.get(&comment.user_id) {
            users[slot].comments.push(comment);
        }
    }
    users
}

/// Stable sort by creation time in the given direction.
pub fn sort_comments(comments: &mut [Comment], order: CommentOrder) {
    match order {
        CommentOrder::OldestFirst => comments.sort_by_key(|c| c.created_at),
        CommentOrder::NewestFirst => comments.sort_by_key(|c| std::cmp::Reverse(c.created_at)),
    }
}

#[cfg(test)]
#[path = "gallery_test.rs"]
mod tests;
