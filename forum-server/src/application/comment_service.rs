use std::sync::Arc;

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post};
use tracing::instrument;
use uuid::Uuid;

/// Comments are direct replies to a post.
#[derive(Clone)]
pub struct CommentService {
    repo: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, content))]
    pub async fn create_comment(&self, post_id: Uuid, content: String) -> Result<Post, DomainError> {
        let comment = NewPost::new(content, Some(post_id))?;
        self.ensure_post_exists(post_id).await?;
        self.repo.create(comment).await
    }

    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Post>, DomainError> {
        self.ensure_post_exists(post_id).await?;
        self.repo.find_children(post_id).await
    }

    async fn ensure_post_exists(&self, post_id: Uuid) -> Result<(), DomainError> {
        if self.repo.exists(post_id).await? {
            Ok(())
        } else {
            Err(DomainError::PostNotFound(post_id))
        }
    }
}
