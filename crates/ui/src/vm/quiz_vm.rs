use funnel_core::bmi::{BmiCategory, Severity};
use funnel_core::model::NumberBounds;

/// Progress of the step at `cursor` within a catalog of `total` steps, as a
/// whole percentage of the bar to fill.
#[must_use]
pub fn progress_percent(cursor: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (((cursor + 1) * 100) / total).min(100) as u8
}

/// Parses the raw text of the numeric input. Only finite numbers submit;
/// everything else keeps the button disabled.
#[must_use]
pub fn parse_number_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses and applies the display-side clamp of the step's bounds. Out of
/// range input is pulled to the nearest bound rather than rejected.
#[must_use]
pub fn clamped_number_input(raw: &str, bounds: Option<NumberBounds>) -> Option<f64> {
    parse_number_input(raw).map(|value| bounds.map_or(value, |b| b.clamp(value)))
}

#[must_use]
pub fn bmi_category_label(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "Abaixo do Peso",
        BmiCategory::Normal => "Peso Normal",
        BmiCategory::Overweight => "Sobrepeso",
        BmiCategory::Obese => "Obesidade",
    }
}

/// CSS modifier for a severity tier.
#[must_use]
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "info",
        Severity::Good => "good",
        Severity::Warning => "warning",
        Severity::Alert => "alert",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_fills_linearly_and_caps() {
        assert_eq!(progress_percent(0, 18), 5);
        assert_eq!(progress_percent(8, 18), 50);
        assert_eq!(progress_percent(17, 18), 100);
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn number_input_accepts_only_finite_values() {
        assert_eq!(parse_number_input("65.5"), Some(65.5));
        assert_eq!(parse_number_input("  1.75 "), Some(1.75));
        assert_eq!(parse_number_input(""), None);
        assert_eq!(parse_number_input("abc"), None);
        assert_eq!(parse_number_input("NaN"), None);
        assert_eq!(parse_number_input("inf"), None);
    }

    #[test]
    fn out_of_range_input_is_pulled_to_the_nearest_bound() {
        let bounds = Some(NumberBounds::new(30.0, 200.0));
        assert_eq!(clamped_number_input("65.5", bounds), Some(65.5));
        assert_eq!(clamped_number_input("12", bounds), Some(30.0));
        assert_eq!(clamped_number_input("950", bounds), Some(200.0));
        assert_eq!(clamped_number_input("950", None), Some(950.0));
        assert_eq!(clamped_number_input("abc", bounds), None);
    }

    #[test]
    fn category_labels_cover_every_bucket() {
        assert_eq!(bmi_category_label(BmiCategory::Normal), "Peso Normal");
        assert_eq!(bmi_category_label(BmiCategory::Obese), "Obesidade");
    }
}
