use async_trait::async_trait;
use chrono::Utc;
use funnel_core::model::QuizSession;
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{SESSION_STORAGE_KEY, SessionStore, StorageError};

fn map_sqlx(e: sqlx::Error) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl SessionStore for SqliteRepository {
    async fn load(&self) -> Result<Option<QuizSession>, StorageError> {
        let row = sqlx::query("SELECT payload FROM quiz_sessions WHERE storage_key = ?1")
            .bind(SESSION_STORAGE_KEY)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx)?;

        match row {
            None => Ok(None),
            Some(row) => {
                let payload: String = row.try_get("payload").map_err(map_sqlx)?;
                serde_json::from_str(&payload)
                    .map(Some)
                    .map_err(|e| StorageError::Serialization(e.to_string()))
            }
        }
    }

    async fn save(&self, session: &QuizSession) -> Result<(), StorageError> {
        let payload = serde_json::to_string(session)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO quiz_sessions (storage_key, payload, saved_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(storage_key) DO UPDATE SET
                payload = excluded.payload,
                saved_at = excluded.saved_at
            ",
        )
        .bind(SESSION_STORAGE_KEY)
        .bind(payload)
        .bind(Utc::now())
        .execute(self.pool())
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM quiz_sessions WHERE storage_key = ?1")
            .bind(SESSION_STORAGE_KEY)
            .execute(self.pool())
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
