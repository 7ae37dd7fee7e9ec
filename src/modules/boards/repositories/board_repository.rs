use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::Result;
use crate::modules::boards::models::Board;

/// Persistence seam for boards
#[async_trait]
pub trait BoardRepository: Send + Sync {
    async fn create(&self, title: &str, content: &str, user_id: i64) -> Result<Board>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Board>>;
    async fn list(&self) -> Result<Vec<Board>>;
    async fn update(&self, id: i64, title: &str, content: &str) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

/// SQLite-backed board repository
pub struct SqliteBoardRepository {
    pool: SqlitePool,
}

impl SqliteBoardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for SqliteBoardRepository {
    async fn create(&self, title: &str, content: &str, user_id: i64) -> Result<Board> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO boards (title, content, user_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(content)
        .bind(user_id)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Board {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            content: content.to_string(),
            user_id,
            created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Board>> {
        let board = sqlx::query_as::<_, Board>(
            "SELECT id, title, content, user_id, created_at FROM boards WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(board)
    }

    async fn list(&self) -> Result<Vec<Board>> {
        let boards = sqlx::query_as::<_, Board>(
            "SELECT id, title, content, user_id, created_at FROM boards ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(boards)
    }

    async fn update(&self, id: i64, title: &str, content: &str) -> Result<()> {
        // user_id is immutable after creation and never part of the SET list
        sqlx::query("UPDATE boards SET title = ?, content = ? WHERE id = ?")
            .bind(title)
            .bind(content)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        // ON DELETE CASCADE removes the board's comments
        sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
