use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::boards::models::{BoardResponse, CreateBoardRequest, UpdateBoardRequest};
use crate::modules::boards::repositories::BoardRepository;
use crate::modules::users::repositories::UserRepository;

/// Service for board request orchestration
///
/// Holds the user repository as well: the author must exist before a board
/// is created, and every read re-resolves the author for the userName
/// projection.
pub struct BoardService {
    boards: Arc<dyn BoardRepository>,
    users: Arc<dyn UserRepository>,
}

impl BoardService {
    pub fn new(boards: Arc<dyn BoardRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { boards, users }
    }

    pub async fn list_boards(&self) -> Result<Vec<BoardResponse>> {
        let boards = self.boards.list().await?;

        let mut responses = Vec::with_capacity(boards.len());
        for board in boards {
            let author = self
                .users
                .find_by_id(board.user_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User not found: {}", board.user_id)))?;
            responses.push(BoardResponse::new(board, &author));
        }

        Ok(responses)
    }

    pub async fn get_board(&self, id: i64) -> Result<BoardResponse> {
        let board = self
            .boards
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Board not found: {}", id)))?;

        let author = self
            .users
            .find_by_id(board.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {}", board.user_id)))?;

        Ok(BoardResponse::new(board, &author))
    }

    pub async fn create_board(&self, request: CreateBoardRequest) -> Result<BoardResponse> {
        let author = self
            .users
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {}", request.user_id)))?;

        let board = self
            .boards
            .create(&request.title, &request.content, author.id)
            .await?;

        Ok(BoardResponse::new(board, &author))
    }

    /// Overwrites title and content unconditionally; the author reference
    /// stays with whoever created the board.
    pub async fn update_board(&self, id: i64, request: UpdateBoardRequest) -> Result<BoardResponse> {
        let board = self
            .boards
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Board not found: {}", id)))?;

        self.boards
            .update(id, &request.title, &request.content)
            .await?;

        let author = self
            .users
            .find_by_id(board.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {}", board.user_id)))?;

        let mut updated = board;
        updated.title = request.title;
        updated.content = request.content;

        Ok(BoardResponse::new(updated, &author))
    }

    pub async fn delete_board(&self, id: i64) -> Result<()> {
        if !self.boards.exists(id).await? {
            return Err(AppError::not_found(format!("Board not found: {}", id)));
        }

        self.boards.delete(id).await
    }
}
