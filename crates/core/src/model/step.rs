use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::CatalogError;

/// Stable identifier for a quiz step.
///
/// Step ids are authored strings (e.g. `"weight_current"`) and double as the
/// keys of the persisted answer map.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    /// Creates a new `StepId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepId({})", self.0)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StepId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One selectable option of a single-choice step.
///
/// `icon` and `image` are opaque presentation references; `description` feeds
/// the optional "learn more" popover.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDefinition {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl OptionDefinition {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            image: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Inclusive numeric input bounds, applied display-side only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberBounds {
    pub min: f64,
    pub max: f64,
}

impl NumberBounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a value into the bounds. Used for display, never to reject input.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Which interstitial rendering an info step uses.
///
/// `BmiDiagnosis` designates the step whose content is derived from earlier
/// answers instead of static copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoLayout {
    BmiDiagnosis,
    Science,
    Alert,
    Premium,
    Plain,
}

/// Kind-specific payload of a step definition.
///
/// Each variant carries only the fields its kind needs, so a catalog entry
/// cannot be half-configured.
#[derive(Debug, Clone, PartialEq)]
pub enum StepBody {
    SingleChoice {
        options: Vec<OptionDefinition>,
    },
    NumberInput {
        placeholder: Option<String>,
        unit: Option<String>,
        bounds: Option<NumberBounds>,
    },
    LeadCapture,
    Info {
        image: Option<String>,
        layout: InfoLayout,
    },
}

/// One screen of the quiz, externally authored and immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDefinition {
    id: StepId,
    prompt: String,
    subtext: Option<String>,
    body: StepBody,
}

impl StepDefinition {
    #[must_use]
    pub fn new(id: impl Into<StepId>, prompt: impl Into<String>, body: StepBody) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            subtext: None,
            body,
        }
    }

    #[must_use]
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &StepId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn subtext(&self) -> Option<&str> {
        self.subtext.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> &StepBody {
        &self.body
    }

    #[must_use]
    pub fn is_lead_capture(&self) -> bool {
        matches!(self.body, StepBody::LeadCapture)
    }
}

/// Ordered, validated list of step definitions.
///
/// Read-only input to the quiz controller; copy and ordering changes never
/// require controller changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    steps: Vec<StepDefinition>,
}

impl Catalog {
    /// Build a catalog from an ordered list of steps.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::DuplicateStepId` if two steps share an id.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, CatalogError> {
        if steps.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id().clone()) {
                return Err(CatalogError::DuplicateStepId {
                    id: step.id().clone(),
                });
            }
        }
        Ok(Self { steps })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    #[must_use]
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    #[must_use]
    pub fn index_of(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id() == id)
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }
}
