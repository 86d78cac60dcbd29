use actix_web::web;
use serde::Deserialize;
use uuid::Uuid;

// ======================= POSTS =======================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    /// Missing content is treated like empty content.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

/// Raw feed query. Values stay strings so bad input falls back to defaults
/// instead of failing extraction.
#[derive(Debug, Default)]
pub struct RootPostsQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl RootPostsQuery {
    /// First occurrence wins for repeated keys. An undecodable query string
    /// reads as empty.
    pub fn parse(query_string: &str) -> Self {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string)
            .map(web::Query::into_inner)
            .unwrap_or_default();

        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if query.page.is_none() => query.page = Some(value),
                "page_size" if query.page_size.is_none() => query.page_size = Some(value),
                _ => {}
            }
        }
        query
    }
}

// ======================= COMMENTS =======================

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
}
