use std::sync::Arc;
use std::time::Duration;

use funnel_core::model::{Answer, Catalog, QuizSession, SubmitOutcome};
use storage::{SessionStore, Storage};

use crate::error::QuizServiceError;

/// Delay between a recorded answer and the cursor advance, so the selection
/// feedback stays visible for a beat. The scheduled advance must be
/// cancelable: a second submit or an unmount discards it.
pub const STEP_ADVANCE_DELAY: Duration = Duration::from_millis(300);

/// The quiz controller.
///
/// Owns the step catalog and the session store; the session itself lives in
/// the view layer and is passed into each transition. Every committed
/// transition rewrites the full serialized session. Persistence is
/// fire-and-forget: a failed save is logged and the in-memory session stays
/// authoritative.
#[derive(Clone)]
pub struct QuizService {
    catalog: Arc<Catalog>,
    sessions: Arc<dyn SessionStore>,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, storage: &Storage) -> Self {
        Self {
            catalog,
            sessions: Arc::clone(&storage.sessions),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Restore the persisted session, or start fresh.
    ///
    /// Any load failure, parse failure, or invariant violation in the
    /// restored payload degrades to a fresh session; the funnel never blocks
    /// on corrupt state.
    pub async fn load_session(&self) -> QuizSession {
        match self.sessions.load().await {
            Ok(Some(session)) => {
                if session.is_valid_for(&self.catalog) {
                    session
                } else {
                    tracing::warn!(
                        cursor = session.cursor(),
                        steps = self.catalog.len(),
                        "restored session cursor out of range, starting fresh"
                    );
                    QuizSession::fresh()
                }
            }
            Ok(None) => QuizSession::fresh(),
            Err(error) => {
                tracing::warn!(%error, "could not restore session, starting fresh");
                QuizSession::fresh()
            }
        }
    }

    /// Record an answer for the step at the cursor and persist.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the answer is rejected by the
    /// state machine. Nothing is persisted on rejection.
    pub async fn submit(
        &self,
        session: &mut QuizSession,
        answer: Answer,
    ) -> Result<SubmitOutcome, QuizServiceError> {
        let outcome = session.submit(&self.catalog, answer)?;
        self.persist(session).await;
        Ok(outcome)
    }

    /// The deferred cursor advance scheduled after a non-final submit.
    pub async fn advance(&self, session: &mut QuizSession) {
        session.advance(&self.catalog);
        self.persist(session).await;
    }

    /// Back navigation within the quiz.
    pub async fn back(&self, session: &mut QuizSession) {
        session.back();
        self.persist(session).await;
    }

    /// Completion signal from the processing screen.
    pub async fn finish_processing(&self, session: &mut QuizSession) {
        session.finish_processing();
        self.persist(session).await;
    }

    /// Back navigation from the offer screen into the quiz.
    pub async fn return_to_quiz(&self, session: &mut QuizSession) {
        session.return_to_quiz();
        self.persist(session).await;
    }

    /// Drop the persisted session entirely.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` if the entry cannot be removed.
    pub async fn reset(&self) -> Result<(), QuizServiceError> {
        self.sessions.clear().await?;
        Ok(())
    }

    async fn persist(&self, session: &QuizSession) {
        if let Err(error) = self.sessions.save(session).await {
            tracing::warn!(%error, "session save failed, continuing with in-memory state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funnel_core::QuizError;
    use funnel_core::model::SessionMode;
    use storage::InMemorySessionStore;

    fn service() -> QuizService {
        let catalog = Arc::new(crate::catalog::default_catalog());
        QuizService::new(catalog, &Storage::in_memory())
    }

    #[tokio::test]
    async fn submit_persists_the_session() {
        let catalog = Arc::new(crate::catalog::default_catalog());
        let store = InMemorySessionStore::new();
        let storage = Storage {
            sessions: Arc::new(store.clone()),
        };
        let service = QuizService::new(catalog, &storage);

        let mut session = service.load_session().await;
        service
            .submit(&mut session, Answer::choice("abdomen"))
            .await
            .unwrap();

        let persisted = store.load().await.unwrap().unwrap();
        assert_eq!(persisted, session);
    }

    #[tokio::test]
    async fn rejected_submit_persists_nothing() {
        let catalog = Arc::new(crate::catalog::default_catalog());
        let store = InMemorySessionStore::new();
        let storage = Storage {
            sessions: Arc::new(store.clone()),
        };
        let service = QuizService::new(catalog, &storage);

        let mut session = service.load_session().await;
        let err = service
            .submit(&mut session, Answer::Number(70.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Quiz(QuizError::AnswerKindMismatch { .. })
        ));
        assert!(store.raw_payload().is_none());
    }

    #[tokio::test]
    async fn corrupt_persisted_payload_degrades_to_fresh() {
        let catalog = Arc::new(crate::catalog::default_catalog());
        let storage = Storage {
            sessions: Arc::new(InMemorySessionStore::with_raw_payload("{broken")),
        };
        let service = QuizService::new(catalog, &storage);

        let session = service.load_session().await;
        assert_eq!(session, QuizSession::fresh());
    }

    #[tokio::test]
    async fn out_of_range_cursor_degrades_to_fresh() {
        let payload = r#"{"answers":{},"currentStepIndex":99,"isCalculating":false,"showVSL":false,"userName":null}"#;
        let catalog = Arc::new(crate::catalog::default_catalog());
        let storage = Storage {
            sessions: Arc::new(InMemorySessionStore::with_raw_payload(payload)),
        };
        let service = QuizService::new(catalog, &storage);

        let session = service.load_session().await;
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.mode(), SessionMode::Active(0));
    }

    #[tokio::test]
    async fn reset_clears_the_store() {
        let service = service();
        let mut session = service.load_session().await;
        service
            .submit(&mut session, Answer::choice("flanks"))
            .await
            .unwrap();
        service.reset().await.unwrap();
        assert_eq!(service.load_session().await, QuizSession::fresh());
    }
}
