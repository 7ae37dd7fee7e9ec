//! Bulletin Community Board Library
//!
//! Users, boards, and comments behind a small REST surface over SQLite.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use std::sync::Arc;

use actix_web::web;
use sqlx::SqlitePool;

// Re-export commonly used types
pub use modules::boards;
pub use modules::comments;
pub use modules::users;

/// Embedded schema migrations, applied at startup and by the test harness
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Wire repositories, services, and routes onto an actix-web app
///
/// The pool is the only injected dependency; everything else hangs off it.
/// Both main and the test server build their App through this function so
/// tests exercise the production wiring.
pub fn configure_app(cfg: &mut web::ServiceConfig, pool: SqlitePool) {
    let user_repo: Arc<dyn users::UserRepository> =
        Arc::new(users::SqliteUserRepository::new(pool.clone()));
    let board_repo: Arc<dyn boards::BoardRepository> =
        Arc::new(boards::SqliteBoardRepository::new(pool.clone()));
    let comment_repo: Arc<dyn comments::CommentRepository> =
        Arc::new(comments::SqliteCommentRepository::new(pool.clone()));

    let user_service = Arc::new(users::UserService::new(user_repo.clone()));
    let board_service = Arc::new(boards::BoardService::new(
        board_repo.clone(),
        user_repo.clone(),
    ));
    let comment_service = Arc::new(comments::CommentService::new(
        comment_repo,
        board_repo,
        user_repo,
    ));

    cfg.app_data(web::Data::new(pool))
        .app_data(web::Data::new(user_service))
        .app_data(web::Data::new(board_service))
        .app_data(web::Data::new(comment_service))
        .configure(users::controllers::configure)
        .configure(boards::controllers::configure)
        .configure(comments::controllers::configure)
        .configure(modules::health::controllers::configure);
}
