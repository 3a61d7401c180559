use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::answer::{Answer, AnswerMap, expected_kind};
use crate::model::step::Catalog;

/// What the caller should do after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Answer recorded at a non-final step. The cursor has not moved yet:
    /// schedule a cancelable deferred [`QuizSession::advance`] for visual
    /// feedback.
    AdvancePending,
    /// Answer recorded at the final step; the session switched to the
    /// processing screen immediately.
    Processing,
}

/// Current render mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Active(usize),
    Processing,
    ShowingOffer,
}

/// The persisted, resumable quiz state.
///
/// Field names are pinned to the external storage contract; a session
/// serialized by an earlier deployment of the funnel deserializes unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    #[serde(default)]
    answers: AnswerMap,
    #[serde(rename = "currentStepIndex")]
    cursor: usize,
    #[serde(rename = "isCalculating")]
    is_processing: bool,
    #[serde(rename = "showVSL")]
    show_offer: bool,
    #[serde(rename = "userName", default)]
    display_name: Option<String>,
}

impl QuizSession {
    /// A fresh session at the first step with no recorded answers.
    #[must_use]
    pub fn fresh() -> Self {
        Self {
            answers: AnswerMap::new(),
            cursor: 0,
            is_processing: false,
            show_offer: false,
            display_name: None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// The captured display name, if a non-empty one was recorded.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn mode(&self) -> SessionMode {
        if self.show_offer {
            SessionMode::ShowingOffer
        } else if self.is_processing {
            SessionMode::Processing
        } else {
            SessionMode::Active(self.cursor)
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.mode(), SessionMode::Active(_))
    }

    /// Whether a restored session satisfies the cursor invariant for the
    /// given catalog. A session that fails this check is treated as corrupt.
    #[must_use]
    pub fn is_valid_for(&self, catalog: &Catalog) -> bool {
        self.cursor < catalog.len()
    }

    /// Record an answer for the step at the cursor.
    ///
    /// On a lead-capture step the answer's name is also promoted to the
    /// session-level display name; no other step kind may touch it. At the
    /// final step the session flips to processing immediately; otherwise the
    /// cursor stays put until [`Self::advance`] runs after the feedback
    /// delay.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotActive` outside the quiz view,
    /// `QuizError::CursorOutOfRange` if the cursor escaped the catalog, and
    /// `QuizError::AnswerKindMismatch` if the answer shape does not match the
    /// step kind.
    pub fn submit(&mut self, catalog: &Catalog, answer: Answer) -> Result<SubmitOutcome, QuizError> {
        if !self.is_active() {
            return Err(QuizError::NotActive);
        }
        let step = catalog
            .get(self.cursor)
            .ok_or(QuizError::CursorOutOfRange {
                cursor: self.cursor,
                len: catalog.len(),
            })?;
        if !answer.matches(step.body()) {
            return Err(QuizError::AnswerKindMismatch {
                step: step.id().clone(),
                expected: expected_kind(step.body()),
                got: answer.kind(),
            });
        }

        if step.is_lead_capture() {
            if let Answer::Lead(record) = &answer {
                self.display_name = Some(record.name.clone());
            }
        }
        self.answers.record(step.id().clone(), answer);

        if self.cursor == catalog.last_index() {
            self.is_processing = true;
            Ok(SubmitOutcome::Processing)
        } else {
            Ok(SubmitOutcome::AdvancePending)
        }
    }

    /// Move to the next step. No-op unless active and not already at the
    /// last step, so a deferred advance that fires late cannot corrupt the
    /// cursor.
    pub fn advance(&mut self, catalog: &Catalog) {
        if self.is_active() && self.cursor < catalog.last_index() {
            self.cursor += 1;
        }
    }

    /// Move to the previous step. No-op at the first step; recorded answers
    /// are retained for display and recomputation.
    pub fn back(&mut self) {
        if self.is_active() && self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Completion signal from the processing view: switch to the offer
    /// screen. No-op unless currently processing.
    pub fn finish_processing(&mut self) {
        if self.is_processing && !self.show_offer {
            self.is_processing = false;
            self.show_offer = true;
        }
    }

    /// Back-navigation from the offer screen: return to the quiz at the
    /// same cursor, keeping every recorded answer.
    pub fn return_to_quiz(&mut self) {
        self.show_offer = false;
        self.is_processing = false;
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::fresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::answer::LeadRecord;
    use crate::model::step::{InfoLayout, StepBody, StepDefinition};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            StepDefinition::new(
                "area_focus",
                "Pick an area",
                StepBody::SingleChoice {
                    options: Vec::new(),
                },
            ),
            StepDefinition::new(
                "weight_current",
                "Current weight",
                StepBody::NumberInput {
                    placeholder: None,
                    unit: Some("kg".into()),
                    bounds: None,
                },
            ),
            StepDefinition::new(
                "bmi_diagnosis",
                "Diagnosis",
                StepBody::Info {
                    image: None,
                    layout: InfoLayout::BmiDiagnosis,
                },
            ),
            StepDefinition::new("lead_capture", "Contact", StepBody::LeadCapture),
        ])
        .unwrap()
    }

    #[test]
    fn submit_records_and_defers_cursor_advance() {
        let catalog = catalog();
        let mut session = QuizSession::fresh();

        let outcome = session
            .submit(&catalog, Answer::choice("abdomen"))
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::AdvancePending);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.answers().len(), 1);

        session.advance(&catalog);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn cursor_increases_by_one_per_submit_and_answers_accumulate() {
        let catalog = catalog();
        let mut session = QuizSession::fresh();

        session.submit(&catalog, Answer::choice("abdomen")).unwrap();
        session.advance(&catalog);
        session.submit(&catalog, Answer::Number(70.0)).unwrap();
        session.advance(&catalog);
        session.submit(&catalog, Answer::ack()).unwrap();
        session.advance(&catalog);

        assert_eq!(session.cursor(), 3);
        assert_eq!(session.answers().len(), 3);
        assert_eq!(session.answers().number("weight_current"), Some(70.0));
    }

    #[test]
    fn final_submit_switches_to_processing_without_advancing() {
        let catalog = catalog();
        let mut session = QuizSession::fresh();
        for _ in 0..3 {
            session.advance(&catalog);
        }
        assert_eq!(session.cursor(), 3);

        let outcome = session
            .submit(&catalog, Answer::Lead(LeadRecord::new("Ana", "(21) 99999-0001")))
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Processing);
        assert_eq!(session.mode(), SessionMode::Processing);
        assert_eq!(session.cursor(), 3);

        // A late deferred advance must not move the cursor anymore.
        session.advance(&catalog);
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn back_is_a_noop_at_the_first_step_and_keeps_answers() {
        let catalog = catalog();
        let mut session = QuizSession::fresh();
        session.back();
        assert_eq!(session.cursor(), 0);

        session.submit(&catalog, Answer::choice("flanks")).unwrap();
        session.advance(&catalog);
        session.back();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn lead_capture_populates_display_name_and_survives_back_navigation() {
        let catalog = catalog();
        let mut session = QuizSession::fresh();
        for _ in 0..3 {
            session.advance(&catalog);
        }
        session
            .submit(&catalog, Answer::Lead(LeadRecord::new("Ana", "(21) 99999-0001")))
            .unwrap();
        session.finish_processing();
        assert_eq!(session.mode(), SessionMode::ShowingOffer);
        assert_eq!(session.display_name(), Some("Ana"));

        session.return_to_quiz();
        assert_eq!(session.mode(), SessionMode::Active(3));
        assert_eq!(session.display_name(), Some("Ana"));
        assert!(
            session
                .answers()
                .get_str("lead_capture")
                .and_then(Answer::as_lead)
                .is_some()
        );
    }

    #[test]
    fn choice_steps_never_mutate_display_name() {
        let catalog = catalog();
        let mut session = QuizSession::fresh();
        session.submit(&catalog, Answer::choice("abdomen")).unwrap();
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn kind_mismatch_is_rejected_without_recording() {
        let catalog = catalog();
        let mut session = QuizSession::fresh();
        let err = session.submit(&catalog, Answer::Number(1.0)).unwrap_err();
        assert!(matches!(err, QuizError::AnswerKindMismatch { .. }));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn wire_field_names_match_the_storage_contract() {
        let session = QuizSession::fresh();
        let json = serde_json::to_value(&session).unwrap();
        let object = json.as_object().unwrap();
        for field in ["answers", "currentStepIndex", "isCalculating", "showVSL", "userName"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn restored_sessions_with_escaped_cursor_are_invalid() {
        let catalog = catalog();
        let json = r#"{"answers":{},"currentStepIndex":99,"isCalculating":false,"showVSL":false,"userName":null}"#;
        let session: QuizSession = serde_json::from_str(json).unwrap();
        assert!(!session.is_valid_for(&catalog));
    }
}
