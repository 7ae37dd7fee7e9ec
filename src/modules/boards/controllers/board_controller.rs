use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::boards::models::{CreateBoardRequest, UpdateBoardRequest};
use crate::modules::boards::services::BoardService;

/// GET /boards
pub async fn list_boards(
    service: web::Data<Arc<BoardService>>,
) -> Result<HttpResponse, AppError> {
    let boards = service.list_boards().await?;

    Ok(HttpResponse::Ok().json(boards))
}

/// GET /boards/{id}
pub async fn get_board(
    service: web::Data<Arc<BoardService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let board = service.get_board(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(board))
}

/// POST /boards
///
/// 404 when the referenced author does not exist.
pub async fn create_board(
    service: web::Data<Arc<BoardService>>,
    request: web::Json<CreateBoardRequest>,
) -> Result<HttpResponse, AppError> {
    let board = service.create_board(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(board))
}

/// PUT /boards/{id}
pub async fn update_board(
    service: web::Data<Arc<BoardService>>,
    path: web::Path<i64>,
    request: web::Json<UpdateBoardRequest>,
) -> Result<HttpResponse, AppError> {
    let board = service
        .update_board(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(board))
}

/// DELETE /boards/{id}
pub async fn delete_board(
    service: web::Data<Arc<BoardService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_board(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure board routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/boards")
            .route("", web::get().to(list_boards))
            .route("", web::post().to(create_board))
            .route("/{id}", web::get().to(get_board))
            .route("/{id}", web::put().to(update_board))
            .route("/{id}", web::delete().to(delete_board)),
    );
}
