#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod offer;
pub mod player;
pub mod processing;
pub mod quiz;

pub use catalog::default_catalog;
pub use error::QuizServiceError;
pub use offer::content::OfferContent;
pub use offer::state::OfferState;
pub use player::{PlayerError, VideoPlayer};
pub use processing::ProcessingSequence;
pub use quiz::{QuizService, STEP_ADVANCE_DELAY};
