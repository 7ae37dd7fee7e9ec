// A comment belongs to one author and one board, both fixed at creation.
// There is no update operation for comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::modules::users::models::User;

/// Row in the `comments` table
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub board_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Payload for POST /comments
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub user_id: i64,
    pub board_id: i64,
}

/// Comment projection with the author's name denormalized in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub user_name: String,
    pub board_id: i64,
    pub created_at: DateTime<Utc>,
}

impl CommentResponse {
    pub fn new(comment: Comment, author: &User) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            user_name: author.name.clone(),
            board_id: comment.board_id,
            created_at: comment.created_at,
        }
    }
}
