use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::users::models::{CreateUserRequest, UpdateUserRequest};
use crate::modules::users::services::UserService;

/// GET /users
pub async fn list_users(
    service: web::Data<Arc<UserService>>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id}
pub async fn get_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// POST /users
pub async fn create_user(
    service: web::Data<Arc<UserService>>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// PUT /users/{id}
pub async fn update_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service
        .update_user(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure user routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}
