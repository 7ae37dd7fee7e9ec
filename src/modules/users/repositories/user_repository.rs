use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::Result;
use crate::modules::users::models::User;

/// Persistence seam for users
///
/// Services depend on this trait rather than the pool so tests can
/// substitute an isolated store per run.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, name: &str, email: &str) -> Result<User>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn list(&self) -> Result<Vec<User>>;
    async fn update(&self, id: i64, name: &str, email: &str) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

/// SQLite-backed user repository
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, name: &str, email: &str) -> Result<User> {
        let created_at = Utc::now();

        // Duplicate emails hit the UNIQUE constraint and surface as a
        // generic store failure, not a domain error.
        let result = sqlx::query("INSERT INTO users (name, email, created_at) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
            created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update(&self, id: i64, name: &str, email: &str) -> Result<()> {
        sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        // ON DELETE CASCADE removes the user's boards and comments
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
