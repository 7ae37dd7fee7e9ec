use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::Result;
use crate::modules::comments::models::Comment;

/// Persistence seam for comments
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, content: &str, user_id: i64, board_id: i64) -> Result<Comment>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>>;
    async fn list(&self) -> Result<Vec<Comment>>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

/// SQLite-backed comment repository
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn create(&self, content: &str, user_id: i64, board_id: i64) -> Result<Comment> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO comments (content, user_id, board_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(content)
        .bind(user_id)
        .bind(board_id)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Comment {
            id: result.last_insert_rowid(),
            content: content.to_string(),
            user_id,
            board_id,
            created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, content, user_id, board_id, created_at FROM comments WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn list(&self) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, content, user_id, board_id, created_at FROM comments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
