// A board is a top-level post authored by exactly one user. The author
// reference is fixed at creation; update touches title and content only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::modules::users::models::User;

/// Row in the `boards` table
#[derive(Debug, Clone, FromRow)]
pub struct Board {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Payload for POST /boards
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

/// Payload for PUT /boards/{id}
///
/// Whole-field replacement of title and content. The author reference is
/// immutable and deliberately absent here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    pub title: String,
    pub content: String,
}

/// Board projection with the author's name denormalized in
///
/// userName is recomputed from the current user row on every read, never
/// stored on the board itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl BoardResponse {
    pub fn new(board: Board, author: &User) -> Self {
        Self {
            id: board.id,
            title: board.title,
            content: board.content,
            user_id: board.user_id,
            user_name: author.name.clone(),
            created_at: board.created_at,
        }
    }
}
