use thiserror::Error;

use crate::model::answer::AnswerKind;
use crate::model::step::StepId;

/// Errors raised while building a step catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no steps")]
    Empty,

    #[error("duplicate step id: {id}")]
    DuplicateStepId { id: StepId },
}

/// Errors raised by quiz session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("session is not in the active quiz state")]
    NotActive,

    #[error("cursor {cursor} out of range for catalog of {len} steps")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("step {step} expects a {expected:?} answer, got {got:?}")]
    AnswerKindMismatch {
        step: StepId,
        expected: AnswerKind,
        got: AnswerKind,
    },
}
