use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::step::{StepBody, StepId};

/// Sentinel acknowledgement recorded for info steps.
///
/// Serializes as the bare string `"viewed"`, matching the persisted wire
/// shape of the answer map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewedAck {
    #[serde(rename = "viewed")]
    Viewed,
}

/// Contact record captured by the lead step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub name: String,
    pub phone: String,
}

impl LeadRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// A recorded answer, tagged per step kind.
///
/// The `untagged` representation keeps the persisted JSON in its historical
/// shape: a lead object, a number, the `"viewed"` sentinel, or a chosen
/// option id. Variant order matters for deserialization: the sentinel must
/// be tried before plain strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Lead(LeadRecord),
    Number(f64),
    Ack(ViewedAck),
    Choice(String),
}

/// Discriminant of an [`Answer`], used for mismatch reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Choice,
    Number,
    Lead,
    Ack,
}

impl Answer {
    /// The acknowledgement value submitted by info steps.
    #[must_use]
    pub fn ack() -> Self {
        Self::Ack(ViewedAck::Viewed)
    }

    #[must_use]
    pub fn choice(id: impl Into<String>) -> Self {
        Self::Choice(id.into())
    }

    #[must_use]
    pub fn kind(&self) -> AnswerKind {
        match self {
            Self::Choice(_) => AnswerKind::Choice,
            Self::Number(_) => AnswerKind::Number,
            Self::Lead(_) => AnswerKind::Lead,
            Self::Ack(_) => AnswerKind::Ack,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_lead(&self) -> Option<&LeadRecord> {
        match self {
            Self::Lead(record) => Some(record),
            _ => None,
        }
    }

    /// Whether this answer has the shape the given step body expects.
    #[must_use]
    pub fn matches(&self, body: &StepBody) -> bool {
        matches!(
            (self, body),
            (Self::Choice(_), StepBody::SingleChoice { .. })
                | (Self::Number(_), StepBody::NumberInput { .. })
                | (Self::Lead(_), StepBody::LeadCapture)
                | (Self::Ack(_), StepBody::Info { .. })
        )
    }
}

/// Expected answer kind for a step body.
#[must_use]
pub fn expected_kind(body: &StepBody) -> AnswerKind {
    match body {
        StepBody::SingleChoice { .. } => AnswerKind::Choice,
        StepBody::NumberInput { .. } => AnswerKind::Number,
        StepBody::LeadCapture => AnswerKind::Lead,
        StepBody::Info { .. } => AnswerKind::Ack,
    }
}

/// Accumulated responses keyed by step id.
///
/// Grows monotonically during a session; revisiting a step overwrites its
/// entry, nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    entries: HashMap<StepId, Answer>,
}

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the answer for a step.
    pub fn record(&mut self, id: StepId, answer: Answer) {
        self.entries.insert(id, answer);
    }

    #[must_use]
    pub fn get(&self, id: &StepId) -> Option<&Answer> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn get_str(&self, id: &str) -> Option<&Answer> {
        self.entries.get(&StepId::new(id))
    }

    /// Numeric answer for a step id, if present and numeric.
    #[must_use]
    pub fn number(&self, id: &str) -> Option<f64> {
        self.get_str(id).and_then(Answer::as_number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StepId, &Answer)> {
        self.entries.iter()
    }
}
