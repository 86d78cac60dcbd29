use std::collections::HashMap;

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Default)]
struct Store {
    posts: HashMap<Uuid, Post>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl Store {
    /// Wall clock, bumped by a microsecond when it would not advance.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let ts = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(ts);
        ts
    }

    fn children_count(&self, id: Uuid) -> i64 {
        self.posts
            .values()
            .filter(|p| p.parent_id == Some(id))
            .count() as i64
    }

    fn with_count(&self, post: &Post) -> Post {
        Post {
            children_count: self.children_count(post.id),
            ..post.clone()
        }
    }
}

/// Process-local post store, used when no database is configured.
#[derive(Default)]
pub struct MemoryPostRepository {
    store: RwLock<Store>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let mut store = self.store.write().await;
        if let Some(parent_id) = post.parent_id {
            if !store.posts.contains_key(&parent_id) {
                return Err(DomainError::PostNotFound(parent_id));
            }
        }

        let created = Post {
            id: post.id,
            content: post.content,
            timestamp: store.next_timestamp(),
            parent_id: post.parent_id,
            children_count: 0,
        };
        store.posts.insert(created.id, created.clone());

        info!(post_id = %created.id, parent_id = ?created.parent_id, "post created");
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).map(|p| store.with_count(p)))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.store.read().await.posts.contains_key(&id))
    }

    async fn find_children(&self, parent_id: Uuid) -> Result<Vec<Post>, DomainError> {
        let store = self.store.read().await;
        let mut children: Vec<Post> = store
            .posts
            .values()
            .filter(|p| p.parent_id == Some(parent_id))
            .map(|p| store.with_count(p))
            .collect();
        children.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
        Ok(children)
    }

    async fn find_roots(&self, limit: i64, offset: i64) -> Result<Vec<Post>, DomainError> {
        let store = self.store.read().await;
        let mut roots: Vec<&Post> = store.posts.values().filter(|p| p.is_root()).collect();
        roots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(roots
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .map(|p| store.with_count(p))
            .collect())
    }

    async fn count_roots(&self) -> Result<i64, DomainError> {
        let store = self.store.read().await;
        Ok(store.posts.values().filter(|p| p.is_root()).count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insert(repo: &MemoryPostRepository, content: &str, parent: Option<Uuid>) -> Post {
        repo.create(NewPost::new(content.to_string(), parent).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn timestamps_strictly_increase() {
        let repo = MemoryPostRepository::new();
        let mut previous = None;
        for i in 0..50 {
            let post = insert(&repo, &format!("post {i}"), None).await;
            if let Some(prev) = previous {
                assert!(post.timestamp > prev);
            }
            previous = Some(post.timestamp);
        }
    }

    #[tokio::test]
    async fn children_are_counted_on_read() {
        let repo = MemoryPostRepository::new();
        let root = insert(&repo, "root", None).await;
        insert(&repo, "a", Some(root.id)).await;
        insert(&repo, "b", Some(root.id)).await;

        let found = repo.find_by_id(root.id).await.unwrap().unwrap();
        assert_eq!(found.children_count, 2);
        assert_eq!(repo.count_roots().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn insert_with_unknown_parent_is_rejected() {
        let repo = MemoryPostRepository::new();
        let missing = Uuid::new_v4();
        let err = repo
            .create(NewPost::new("orphan".into(), Some(missing)).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound(id) if id == missing));
        assert_eq!(repo.count_roots().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn roots_page_newest_first() {
        let repo = MemoryPostRepository::new();
        let first = insert(&repo, "first", None).await;
        let second = insert(&repo, "second", None).await;
        insert(&repo, "reply", Some(first.id)).await;

        let page = repo.find_roots(10, 0).await.unwrap();
        let ids: Vec<Uuid> = page.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        let tail = repo.find_roots(1, 1).await.unwrap();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].id, first.id);
    }
}
