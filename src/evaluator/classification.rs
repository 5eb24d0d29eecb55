use serde::Serialize;

use crate::evaluator::constants::{LACKING_RATIO, OVERFED_RATIO, PERCENT_DECIMALS};

/// Adequacy of one nutrient's intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Lacking,
    Sufficient,
    Overfed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Lacking => "⚠️ Lacking",
            Status::Sufficient => "✅ Sufficient",
            Status::Overfed => "🔥 Overfed",
        }
    }

    /// Label without the leading symbol, for CSV and plain output.
    pub fn name(self) -> &'static str {
        match self {
            Status::Lacking => "Lacking",
            Status::Sufficient => "Sufficient",
            Status::Overfed => "Overfed",
        }
    }
}

/// Classify intake against a requirement.
///
/// Both band edges (95% and 105%) count as sufficient. With a zero
/// requirement, zero intake is sufficient and any positive intake is overfed.
pub fn classify(actual: f64, required: f64) -> Status {
    if actual < required * LACKING_RATIO {
        Status::Lacking
    } else if actual > required * OVERFED_RATIO {
        Status::Overfed
    } else {
        Status::Sufficient
    }
}

/// Round to `decimals` places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Intake as a percentage of the requirement, to one decimal.
///
/// `None` when the requirement is not a positive finite number.
pub fn percent_met(actual: f64, required: f64) -> Option<f64> {
    if !required.is_finite() || required <= 0.0 {
        return None;
    }
    Some(round_to(actual / required * 100.0, PERCENT_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_band_edges() {
        let required = 40.0;
        assert_eq!(classify(required * LACKING_RATIO, required), Status::Sufficient);
        assert_eq!(classify(required * OVERFED_RATIO, required), Status::Sufficient);
        assert_eq!(classify(required, required), Status::Sufficient);
    }

    #[test]
    fn test_classify_outside_band() {
        let required = 40.0;
        let eps = 1e-9;
        assert_eq!(classify(required * LACKING_RATIO - eps, required), Status::Lacking);
        assert_eq!(classify(required * OVERFED_RATIO + eps, required), Status::Overfed);
        assert_eq!(classify(0.0, required), Status::Lacking);
    }

    #[test]
    fn test_classify_zero_requirement() {
        assert_eq!(classify(0.0, 0.0), Status::Sufficient);
        assert_eq!(classify(0.5, 0.0), Status::Overfed);
    }

    #[test]
    fn test_percent_met_rounds_to_one_decimal() {
        assert_eq!(percent_met(18.0, 30.0), Some(60.0));
        assert_eq!(percent_met(1.0, 3.0), Some(33.3));
        assert_eq!(percent_met(2.0, 3.0), Some(66.7));
    }

    #[test]
    fn test_percent_met_undefined_for_zero_requirement() {
        assert_eq!(percent_met(0.0, 0.0), None);
        assert_eq!(percent_met(5.0, -1.0), None);
        assert_eq!(percent_met(5.0, f64::NAN), None);
    }
}
