use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::boards::repositories::BoardRepository;
use crate::modules::comments::models::{CommentResponse, CreateCommentRequest};
use crate::modules::comments::repositories::CommentRepository;
use crate::modules::users::repositories::UserRepository;

/// Service for comment request orchestration
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    boards: Arc<dyn BoardRepository>,
    users: Arc<dyn UserRepository>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        boards: Arc<dyn BoardRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            comments,
            boards,
            users,
        }
    }

    pub async fn list_comments(&self) -> Result<Vec<CommentResponse>> {
        let comments = self.comments.list().await?;

        let mut responses = Vec::with_capacity(comments.len());
        for comment in comments {
            let author = self
                .users
                .find_by_id(comment.user_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(format!("User not found: {}", comment.user_id))
                })?;
            responses.push(CommentResponse::new(comment, &author));
        }

        Ok(responses)
    }

    pub async fn get_comment(&self, id: i64) -> Result<CommentResponse> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Comment not found: {}", id)))?;

        let author = self
            .users
            .find_by_id(comment.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {}", comment.user_id)))?;

        Ok(CommentResponse::new(comment, &author))
    }

    /// The author is resolved before the board, so a request with two bad
    /// references reports the missing user.
    pub async fn create_comment(&self, request: CreateCommentRequest) -> Result<CommentResponse> {
        let author = self
            .users
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {}", request.user_id)))?;

        let board = self
            .boards
            .find_by_id(request.board_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Board not found: {}", request.board_id)))?;

        let comment = self
            .comments
            .create(&request.content, author.id, board.id)
            .await?;

        Ok(CommentResponse::new(comment, &author))
    }

    pub async fn delete_comment(&self, id: i64) -> Result<()> {
        if !self.comments.exists(id).await? {
            return Err(AppError::not_found(format!("Comment not found: {}", id)));
        }

        self.comments.delete(id).await
    }
}
