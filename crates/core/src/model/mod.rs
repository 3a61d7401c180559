pub mod answer;
pub mod session;
pub mod step;

pub use answer::{Answer, AnswerKind, AnswerMap, LeadRecord};
pub use session::{QuizSession, SessionMode, SubmitOutcome};
pub use step::{
    Catalog, InfoLayout, NumberBounds, OptionDefinition, StepBody, StepDefinition, StepId,
};
