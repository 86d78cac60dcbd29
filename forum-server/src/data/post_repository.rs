use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

/// Query interface over the post store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError>;
    /// Direct children of `parent_id`, oldest first.
    async fn find_children(&self, parent_id: Uuid) -> Result<Vec<Post>, DomainError>;
    /// Root posts, newest first.
    async fn find_roots(&self, limit: i64, offset: i64) -> Result<Vec<Post>, DomainError>;
    async fn count_roots(&self) -> Result<i64, DomainError>;
}

const POST_COLUMNS: &str = r#"
    p.id, p.content, p.timestamp, p.parent_id,
    (SELECT COUNT(*) FROM posts c WHERE c.parent_id = p.id) AS children_count
"#;

/// Maps a parent foreign-key violation on insert to a missing parent. The
/// parent can disappear between the existence check and the insert.
pub(crate) fn missing_parent(
    constraint: Option<&str>,
    parent_id: Option<Uuid>,
) -> Option<DomainError> {
    match (constraint, parent_id) {
        (Some("posts_parent_id_fkey"), Some(parent_id)) => {
            Some(DomainError::PostNotFound(parent_id))
        }
        _ => None,
    }
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let created = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, content, parent_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, "timestamp", parent_id, 0::BIGINT AS children_count
            "#,
        )
        .bind(post.id)
        .bind(&post.content)
        .bind(post.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let constraint = e.as_database_error().and_then(|db| db.constraint());
            match missing_parent(constraint, post.parent_id) {
                Some(err) => err,
                None => {
                    error!("failed to create post: {}", e);
                    DomainError::from(e)
                }
            }
        })?;

        info!(post_id = %created.id, parent_id = ?created.parent_id, "post created");
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            DomainError::from(e)
        })
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("db error exists {}: {}", id, e);
                DomainError::from(e)
            })
    }

    async fn find_children(&self, parent_id: Uuid) -> Result<Vec<Post>, DomainError> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            WHERE p.parent_id = $1
            ORDER BY p.timestamp ASC, p.id ASC
            "#
        ))
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching replies of {}: {}", parent_id, e);
            DomainError::from(e)
        })
    }

    async fn find_roots(&self, limit: i64, offset: i64) -> Result<Vec<Post>, DomainError> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            WHERE p.parent_id IS NULL
            ORDER BY p.timestamp DESC, p.id DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching root posts: {}", e);
            DomainError::from(e)
        })
    }

    async fn count_roots(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE parent_id IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("db error while counting root posts: {}", e);
                DomainError::from(e)
            })
    }
}
