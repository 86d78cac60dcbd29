use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// A forum post. Replies and comments are posts with a `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub children_count: i64,
}

impl Post {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Insert payload. The store assigns `timestamp` on insert.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: Uuid,
    pub content: String,
    pub parent_id: Option<Uuid>,
}

impl NewPost {
    /// Rejects content that is empty once surrounding whitespace is removed.
    pub fn new(content: String, parent_id: Option<Uuid>) -> Result<Self, DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        if content.contains('\0') {
            return Err(DomainError::Validation(
                "content cannot contain NUL characters".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            content,
            parent_id,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithReplies {
    #[serde(flatten)]
    pub post: Post,
    pub replies: Vec<Post>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootPostsPage {
    pub page: u32,
    pub page_size: u32,
    pub total: i64,
    pub total_pages: i64,
    pub posts: Vec<Post>,
}
