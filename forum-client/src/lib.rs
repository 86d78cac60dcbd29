use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

mod error;
mod http_client;

pub use error::ForumClientError;
pub use http_client::ForumClient;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub children_count: i64,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({} replies) {}",
            self.id,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.children_count,
            self.content
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootPostsPage {
    pub page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub total: i64,
    pub total_pages: i64,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostThread {
    #[serde(flatten)]
    pub post: Post,
    pub replies: Vec<Post>,
}
