// Comments module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Comment, CommentResponse, CreateCommentRequest};
pub use repositories::{CommentRepository, SqliteCommentRepository};
pub use services::CommentService;
