use std::sync::Arc;

use crate::application::pagination::Pagination;
use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post, PostWithReplies, RootPostsPage};
use tracing::instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, content))]
    pub async fn create_post(
        &self,
        content: String,
        parent_id: Option<Uuid>,
    ) -> Result<Post, DomainError> {
        let post = NewPost::new(content, parent_id)?;
        if let Some(parent_id) = parent_id {
            if !self.repo.exists(parent_id).await? {
                return Err(DomainError::PostNotFound(parent_id));
            }
        }
        self.repo.create(post).await
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))
    }

    pub async fn get_post_with_replies(&self, id: Uuid) -> Result<PostWithReplies, DomainError> {
        let post = self.get_post(id).await?;
        let replies = self.repo.find_children(id).await?;
        Ok(PostWithReplies { post, replies })
    }

    pub async fn list_root_posts(&self, pagination: Pagination) -> Result<RootPostsPage, DomainError> {
        let posts = self
            .repo
            .find_roots(pagination.limit(), pagination.offset())
            .await?;
        let total = self.repo.count_roots().await?;

        Ok(RootPostsPage {
            page: pagination.page,
            page_size: pagination.page_size,
            total,
            total_pages: pagination.total_pages(total),
            posts,
        })
    }
}
