//! Session persistence.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::ConsoleError;
use crate::models::{Admin, Session};

/// Durable mirror of the in-memory session.
#[derive(Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load the persisted session, if any.
    pub async fn load(&self) -> Result<Option<Session>, ConsoleError> {
        let row = sqlx::query(
            "SELECT token, admin_id, admin_name, admin_email, created_at FROM session WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(session_from_row).transpose()
    }

    /// Replace the persisted session.
    pub async fn save(&self, session: &Session) -> Result<(), ConsoleError> {
        sqlx::query(
            "INSERT INTO session (id, token, admin_id, admin_name, admin_email, created_at) VALUES (1, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET token = excluded.token, admin_id = excluded.admin_id, \
             admin_name = excluded.admin_name, admin_email = excluded.admin_email, created_at = excluded.created_at",
        )
        .bind(&session.token)
        .bind(&session.admin.id)
        .bind(&session.admin.name)
        .bind(&session.admin.email)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the persisted session. Succeeds when nothing is stored.
    pub async fn clear(&self) -> Result<(), ConsoleError> {
        sqlx::query("DELETE FROM session")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn session_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Session, ConsoleError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Session {
        token: row.get("token"),
        admin: Admin {
            id: row.get("admin_id"),
            name: row.get("admin_name"),
            email: row.get("admin_email"),
        },
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn repo() -> (SessionRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("session.sqlite"))
            .await
            .unwrap();
        (SessionRepository::new(pool), temp_dir)
    }

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            admin: Admin::from_email("admin@relief.example.org"),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_empty_store_loads_nothing() {
        let (repo, _dir) = repo().await;
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_session() {
        let (repo, _dir) = repo().await;
        repo.save(&session("first")).await.unwrap();
        repo.save(&session("second")).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.token, "second");
        assert_eq!(loaded.admin.name, "admin");
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let (repo, _dir) = repo().await;
        repo.clear().await.unwrap();
        repo.save(&session("t")).await.unwrap();
        repo.clear().await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_session_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.sqlite");

        let original = session("persisted");
        {
            let repo = SessionRepository::new(init_database(&path).await.unwrap());
            repo.save(&original).await.unwrap();
        }

        let repo = SessionRepository::new(init_database(&path).await.unwrap());
        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.token, original.token);
        assert_eq!(loaded.created_at.timestamp(), original.created_at.timestamp());
    }
}
