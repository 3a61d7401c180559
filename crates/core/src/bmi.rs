//! Body-mass index derivation for the diagnosis interstitial.
//!
//! The reading is ephemeral: recomputed from the answer map every time the
//! diagnosis step renders, so back-navigating and changing an upstream answer
//! is reflected automatically.

use crate::model::AnswerMap;

/// Answer-map key holding the current weight in kilograms.
pub const WEIGHT_STEP_ID: &str = "weight_current";
/// Answer-map key holding the height (metres or centimetres, see heuristic).
pub const HEIGHT_STEP_ID: &str = "height";

/// Heights above this are assumed to be centimetres and divided by 100.
const CENTIMETRE_THRESHOLD: f64 = 3.0;

/// Fixed diagnostic bucket for a computed BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Visual severity tier attached to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Good,
    Warning,
    Alert,
}

impl BmiCategory {
    /// Bucket a BMI value with the fixed thresholds.
    #[must_use]
    pub fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 24.9 {
            Self::Normal
        } else if bmi < 29.9 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Underweight => Severity::Info,
            Self::Normal => Severity::Good,
            Self::Overweight => Severity::Warning,
            Self::Obese => Severity::Alert,
        }
    }
}

/// A computed BMI reading, or the zero/neutral degradation when the inputs
/// are missing or non-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    value: f64,
    category: Option<BmiCategory>,
}

impl BmiReading {
    /// Compute from explicit weight (kg) and height (metres or centimetres).
    #[must_use]
    pub fn compute(weight: f64, height: f64) -> Self {
        if weight <= 0.0 || height <= 0.0 {
            return Self {
                value: 0.0,
                category: None,
            };
        }
        let metres = if height > CENTIMETRE_THRESHOLD {
            height / 100.0
        } else {
            height
        };
        let value = weight / (metres * metres);
        Self {
            value,
            category: Some(BmiCategory::from_value(value)),
        }
    }

    /// Compute from the well-known answer-map entries. Missing entries
    /// degrade to a zero reading, never an error.
    #[must_use]
    pub fn from_answers(answers: &AnswerMap) -> Self {
        let weight = answers.number(WEIGHT_STEP_ID).unwrap_or(0.0);
        let height = answers.number(HEIGHT_STEP_ID).unwrap_or(0.0);
        Self::compute(weight, height)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// `None` means the neutral display: show 0 and no diagnosis message.
    #[must_use]
    pub fn category(&self) -> Option<BmiCategory> {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, StepId};

    #[test]
    fn computes_the_reference_value_in_metres() {
        let reading = BmiReading::compute(70.0, 1.75);
        assert!((reading.value() - 22.857).abs() < 0.01);
        assert_eq!(reading.category(), Some(BmiCategory::Normal));
    }

    #[test]
    fn centimetre_heights_normalize_to_the_same_value() {
        let metres = BmiReading::compute(70.0, 1.75);
        let centimetres = BmiReading::compute(70.0, 175.0);
        assert!((metres.value() - centimetres.value()).abs() < 1e-9);
    }

    #[test]
    fn non_positive_inputs_degrade_to_zero_with_no_category() {
        for (weight, height) in [(0.0, 1.75), (70.0, 0.0), (-5.0, 1.75), (0.0, 0.0)] {
            let reading = BmiReading::compute(weight, height);
            assert_eq!(reading.value(), 0.0);
            assert_eq!(reading.category(), None);
        }
    }

    #[test]
    fn buckets_follow_the_fixed_thresholds() {
        assert_eq!(BmiCategory::from_value(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_value(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(24.8), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(24.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(29.8), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(29.9), BmiCategory::Obese);
    }

    #[test]
    fn missing_answers_degrade_instead_of_failing() {
        let mut answers = AnswerMap::new();
        assert_eq!(BmiReading::from_answers(&answers).category(), None);

        answers.record(StepId::new(WEIGHT_STEP_ID), Answer::Number(70.0));
        assert_eq!(BmiReading::from_answers(&answers).category(), None);

        answers.record(StepId::new(HEIGHT_STEP_ID), Answer::Number(1.75));
        assert_eq!(
            BmiReading::from_answers(&answers).category(),
            Some(BmiCategory::Normal)
        );
    }

    #[test]
    fn changed_upstream_answers_are_reflected_on_recompute() {
        let mut answers = AnswerMap::new();
        answers.record(StepId::new(WEIGHT_STEP_ID), Answer::Number(70.0));
        answers.record(StepId::new(HEIGHT_STEP_ID), Answer::Number(1.75));
        let before = BmiReading::from_answers(&answers);

        answers.record(StepId::new(WEIGHT_STEP_ID), Answer::Number(95.0));
        let after = BmiReading::from_answers(&answers);
        assert!(after.value() > before.value());
        assert_eq!(after.category(), Some(BmiCategory::Obese));
    }
}
