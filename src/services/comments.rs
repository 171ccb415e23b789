//! Comment panel state: chronological list, drafts, optimistic submission.
//!
//! DESIGN
//! ======
//! The panel owns its list. It starts from the confirmed comments of one
//! user and, after a successful insert, appends an optimistic entry without
//! re-fetching. Optimistic entries carry a locally generated id, so they are
//! never mistaken for server rows. The next full fetch is the reconciliation
//! point: [`CommentPanel::sync`] replaces the list with confirmed rows.
//!
//! Submission is split into [`CommentPanel::begin_submit`] and
//! [`CommentPanel::finish_submit`] so several inserts may be in flight at
//! once; nothing deduplicates or queues them.

use tracing::warn;
use uuid::Uuid;

use crate::services::gallery::{CommentOrder, GalleryStore, StoreError, sort_comments};
use crate::state::{Comment, CommentId, NewComment, now_ms};

pub const EMPTY_SUBMISSION_MESSAGE: &str = "Name and comment cannot be empty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Confirmed,
    /// Appended locally after a successful insert, not yet seen in a fetch.
    Optimistic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub comment: Comment,
    pub origin: Origin,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Name and comment cannot be empty")]
    Empty,
}

/// An insert that has been validated and is waiting for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub comment: NewComment,
    local_id: String,
}

#[derive(Debug, Clone)]
pub struct CommentPanel {
    user_id: Uuid,
    entries: Vec<PanelEntry>,
    session_name: Option<String>,
    author_draft: String,
    message_draft: String,
    error: Option<String>,
    pending: usize,
    local_seq: u64,
}

impl CommentPanel {
    #[must_use]
    pub fn new(user_id: Uuid, comments: Vec<Comment>, session_name: Option<String>) -> Self {
        let mut panel = Self {
            user_id,
            entries: Vec::new(),
            session_name: session_name.filter(|n| !n.trim().is_empty()),
            author_draft: String::new(),
            message_draft: String::new(),
            error: None,
            pending: 0,
            local_seq: 0,
        };
        panel.sync(comments);
        panel
    }

    /// Replace the list with freshly fetched comments, oldest first.
    /// Optimistic entries are dropped; the fetch is authoritative.
    pub fn sync(&mut self, mut comments: Vec<Comment>) {
        sort_comments(&mut comments, CommentOrder::OldestFirst);
        self.entries = comments
            .into_iter()
            .map(|comment| PanelEntry { comment, origin: Origin::Confirmed })
            .collect();
    }

    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    #[must_use]
    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }

    #[must_use]
    pub fn session_name(&self) -> Option<&str> {
        self.session_name.as_deref()
    }

    #[must_use]
    pub fn author_draft(&self) -> &str {
        &self.author_draft
    }

    #[must_use]
    pub fn message_draft(&self) -> &str {
        &self.message_draft
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// The author field is only asked for until a session name exists.
    #[must_use]
    pub fn needs_author(&self) -> bool {
        self.session_name.is_none()
    }

    pub fn set_author_draft(&mut self, author: impl Into<String>) {
        self.author_draft = author.into();
    }

    pub fn set_message_draft(&mut self, message: impl Into<String>) {
        self.message_draft = message.into();
    }

    /// Whether `entry` should be styled as sent by this session.
    ///
    /// Case-insensitive name match; two people with the same name collide.
    #[must_use]
    pub fn is_mine(&self, entry: &PanelEntry) -> bool {
        self.session_name
            .as_deref()
            .is_some_and(|me| me.trim().to_lowercase() == entry.comment.author.trim().to_lowercase())
    }

    fn author(&self) -> &str {
        let draft = self.author_draft.trim();
        if draft.is_empty() {
            self.session_name.as_deref().map_or("", str::trim)
        } else {
            draft
        }
    }

    /// Validate the drafts and start a submission.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Empty`] if the author or message is empty after
    /// trimming. No insert may be issued in that case.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        let author = self.author().to_owned();
        let content = self.message_draft.trim().to_owned();
        if author.is_empty() || content.is_empty() {
            self.error = Some(SubmitError::Empty.to_string());
            return Err(SubmitError::Empty);
        }

        self.pending += 1;
        self.local_seq += 1;
        Ok(Submission {
            comment: NewComment { user_id: self.user_id, author, content },
            local_id: format!("local-{}-{}", now_ms(), self.local_seq),
        })
    }

    /// Apply the outcome of an insert started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, submission: Submission, result: Result<(), StoreError>) {
        self.pending = self.pending.saturating_sub(1);

        match result {
            Ok(()) => {
                self.error = None;
                let Submission { comment, local_id } = submission;
                if self.session_name.is_none() {
                    self.session_name = Some(comment.author.clone());
                }
                self.entries.push(PanelEntry {
                    comment: Comment {
                        id: CommentId::Local(local_id),
                        user_id: comment.user_id,
                        author: comment.author,
                        content: comment.content,
                        created_at: now_ms(),
                    },
                    origin: Origin::Optimistic,
                });
                self.author_draft.clear();
                self.message_draft.clear();
            }
            Err(e) => {
                warn!(error = %e, user_id = %self.user_id, "comment insert failed");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Validate, insert, and apply the result.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Empty`] without touching the store when a field
    /// is blank. Store failures are not errors here; they land in [`Self::error`].
    pub async fn submit(&mut self, store: &dyn GalleryStore) -> Result<(), SubmitError> {
        let submission = self.begin_submit()?;
        let result = store.insert_comment(&submission.comment).await;
        self.finish_submit(submission, result);
        Ok(())
    }
}

#[cfg(test)]
#[path = "comments_test.rs"]
mod tests;
