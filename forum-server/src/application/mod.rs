pub mod comment_service;
pub mod pagination;
pub mod post_service;
