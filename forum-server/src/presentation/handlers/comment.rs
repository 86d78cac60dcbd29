use crate::application::comment_service::CommentService;
use crate::domain::error::DomainError;
use crate::presentation::dto::CreateCommentRequest;
use crate::presentation::utils::request_id;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;
use uuid::Uuid;

#[get("/posts/{id}/comments")]
pub async fn list_comments(
    service: web::Data<CommentService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let comments = service.list_comments(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

#[post("/posts/{id}/comments")]
pub async fn create_comment(
    req: HttpRequest,
    service: web::Data<CommentService>,
    path: web::Path<Uuid>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    let comment = service
        .create_comment(post_id, payload.into_inner().content)
        .await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post_id,
        comment_id = %comment.id,
        "comment created"
    );

    Ok(HttpResponse::Created().json(comment))
}
