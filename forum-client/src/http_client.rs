use crate::error::ForumClientError;
use crate::{Post, PostThread, RootPostsPage};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct ForumClient {
    client: Client,
    base_url: String,
}

impl ForumClient {
    pub fn connect(endpoint: &str) -> Result<Self, ForumClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn read<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ForumClientError> {
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(ForumClientError::from_http_response(resp).await)
        }
    }

    pub async fn list_root_posts(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<RootPostsPage, ForumClientError> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page));
        }
        if let Some(page_size) = page_size {
            query.push(("page_size", page_size));
        }
        debug!(?page, ?page_size, "fetching root posts");

        let resp = self
            .client
            .get(self.url("/posts/root"))
            .query(&query)
            .send()
            .await?;
        Self::read(resp).await
    }

    pub async fn create_post(
        &self,
        content: String,
        parent_id: Option<Uuid>,
    ) -> Result<Post, ForumClientError> {
        let resp = self
            .client
            .post(self.url("/posts"))
            .json(&serde_json::json!({
                "content": content,
                "parentId": parent_id,
            }))
            .send()
            .await?;
        Self::read(resp).await
    }

    pub async fn get_post(&self, id: Uuid) -> Result<PostThread, ForumClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/posts/{}", id)))
            .send()
            .await?;
        Self::read(resp).await
    }

    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Post>, ForumClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/posts/{}/comments", post_id)))
            .send()
            .await?;
        Self::read(resp).await
    }

    pub async fn create_comment(
        &self,
        post_id: Uuid,
        content: String,
    ) -> Result<Post, ForumClientError> {
        let resp = self
            .client
            .post(self.url(&format!("/posts/{}/comments", post_id)))
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;
        Self::read(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_rooted_at_api() {
        let client = ForumClient::connect("http://127.0.0.1:8080/").unwrap();
        assert_eq!(client.url("/posts/root"), "http://127.0.0.1:8080/api/posts/root");
    }

    #[test]
    fn decodes_thread_payload() {
        let raw = r#"{
            "id": "6f1c1f8e-2f43-4a6b-9b0f-3d1c9c0a7e11",
            "content": "root",
            "timestamp": "2024-05-01T10:00:00Z",
            "parentId": null,
            "childrenCount": 1,
            "replies": [{
                "id": "0b6a4b1e-51b4-4c39-8f38-0a2e8f1f3c22",
                "content": "reply",
                "timestamp": "2024-05-01T10:05:00Z",
                "parentId": "6f1c1f8e-2f43-4a6b-9b0f-3d1c9c0a7e11",
                "childrenCount": 0
            }]
        }"#;
        let thread: PostThread = serde_json::from_str(raw).unwrap();
        assert_eq!(thread.post.children_count, 1);
        assert_eq!(thread.replies[0].parent_id, Some(thread.post.id));
    }
}
