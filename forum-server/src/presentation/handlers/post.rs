use crate::application::pagination::Pagination;
use crate::application::post_service::PostService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreatePostRequest, RootPostsQuery};
use crate::presentation::utils::request_id;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;
use uuid::Uuid;

#[post("/posts")]
pub async fn create_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let CreatePostRequest { content, parent_id } = payload.into_inner();
    let post = service.create_post(content, parent_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        parent_id = ?post.parent_id,
        "post created"
    );

    Ok(HttpResponse::Created().json(post))
}

#[get("/posts/root")]
pub async fn list_root_posts(
    req: HttpRequest,
    service: web::Data<PostService>,
) -> Result<HttpResponse, DomainError> {
    let query = RootPostsQuery::parse(req.query_string());
    let pagination = Pagination::from_query(query.page.as_deref(), query.page_size.as_deref());
    let page = service.list_root_posts(pagination).await?;

    info!(
        request_id = %request_id(&req),
        page = page.page,
        page_size = page.page_size,
        returned = page.posts.len(),
        "root posts retrieved"
    );

    Ok(HttpResponse::Ok().json(page))
}

#[get("/posts/{id}")]
pub async fn get_post(
    service: web::Data<PostService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let thread = service.get_post_with_replies(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(thread))
}
