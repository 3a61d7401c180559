use thiserror::Error;

use funnel_core::QuizError;
use storage::StorageError;

/// Errors surfaced by the quiz controller.
///
/// Persistence failures during normal transitions are logged and swallowed,
/// so `Storage` only escapes from explicit maintenance calls such as
/// [`crate::QuizService::reset`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
