use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::comments::models::CreateCommentRequest;
use crate::modules::comments::services::CommentService;

/// GET /comments
pub async fn list_comments(
    service: web::Data<Arc<CommentService>>,
) -> Result<HttpResponse, AppError> {
    let comments = service.list_comments().await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// GET /comments/{id}
pub async fn get_comment(
    service: web::Data<Arc<CommentService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let comment = service.get_comment(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// POST /comments
///
/// 404 when the referenced author or board does not exist.
pub async fn create_comment(
    service: web::Data<Arc<CommentService>>,
    request: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let comment = service.create_comment(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(comment))
}

/// DELETE /comments/{id}
pub async fn delete_comment(
    service: web::Data<Arc<CommentService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_comment(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure comment routes
///
/// Comments have no update route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/comments")
            .route("", web::get().to(list_comments))
            .route("", web::post().to(create_comment))
            .route("/{id}", web::get().to(get_comment))
            .route("/{id}", web::delete().to(delete_comment)),
    );
}
