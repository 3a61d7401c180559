use async_trait::async_trait;
use funnel_core::model::QuizSession;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Fixed key the serialized session lives under, the desktop analog of the
/// funnel's browser-storage entry.
pub const SESSION_STORAGE_KEY: &str = "vitalle_quiz_progress";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persistence contract for the resumable quiz session.
///
/// One session per store, always under [`SESSION_STORAGE_KEY`]. The value is
/// the full serde_json serialization of `QuizSession`; callers rewrite it
/// after every committed transition, no batching.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for a corrupt payload; deciding
    /// to fall back to a fresh session is the caller's job.
    async fn load(&self) -> Result<Option<QuizSession>, StorageError>;

    /// Persist the full session, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    async fn save(&self, session: &QuizSession) -> Result<(), StorageError>;

    /// Remove the persisted session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be removed.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory store for tests and prototyping.
///
/// Holds the raw serialized payload rather than the parsed session so tests
/// can inject corruption the way a foreign writer would.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    payload: Arc<Mutex<Option<String>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an arbitrary raw payload (possibly corrupt).
    #[must_use]
    pub fn with_raw_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }

    /// The raw payload currently stored, if any.
    #[must_use]
    pub fn raw_payload(&self) -> Option<String> {
        self.payload.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<QuizSession>, StorageError> {
        let guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StorageError::Serialization(e.to_string())),
        }
    }

    async fn save(&self, session: &QuizSession) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Aggregates the session store behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        Self { sessions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funnel_core::model::{Answer, Catalog, InfoLayout, StepBody, StepDefinition};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            StepDefinition::new(
                "area_focus",
                "Pick",
                StepBody::SingleChoice {
                    options: Vec::new(),
                },
            ),
            StepDefinition::new(
                "done",
                "Done",
                StepBody::Info {
                    image: None,
                    layout: InfoLayout::Plain,
                },
            ),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn round_trips_a_session() {
        let store = InMemorySessionStore::new();
        let mut session = QuizSession::fresh();
        session.submit(&catalog(), Answer::choice("abdomen")).unwrap();

        store.save(&session).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[tokio::test]
    async fn empty_store_loads_nothing() {
        let store = InMemorySessionStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_payload_surfaces_as_serialization_error() {
        let store = InMemorySessionStore::with_raw_payload("{not json");
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn clear_removes_the_payload() {
        let store = InMemorySessionStore::new();
        store.save(&QuizSession::fresh()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
