use serde::Serialize;

use crate::catalog::FeedCatalog;
use crate::evaluator::aggregation::{aggregate_diet, Aggregation, SkippedEntry};
use crate::evaluator::classification::{classify, percent_met, Status};
use crate::evaluator::requirements::calculate_requirements;
use crate::models::{BodyWeight, FeedEntry, Nutrient, NutrientRequirements, NutrientTotals};

/// One line of the evaluation table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientRow {
    pub nutrient: Nutrient,
    pub requirement: f64,
    pub intake: f64,
    /// `None` when the requirement is zero.
    pub percent_met: Option<f64>,
    pub status: Status,
}

/// Full evaluation of a diet with at least one valid feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietReport {
    pub weight: BodyWeight,
    pub totals: NutrientTotals,
    pub requirements: NutrientRequirements,
    pub rows: Vec<NutrientRow>,
    pub valid_entries: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl DietReport {
    pub fn row(&self, nutrient: Nutrient) -> Option<&NutrientRow> {
        self.rows.iter().find(|r| r.nutrient == nutrient)
    }

    pub fn status(&self, nutrient: Nutrient) -> Option<Status> {
        self.row(nutrient).map(|r| r.status)
    }

    /// Every nutrient is within the sufficient band.
    pub fn is_balanced(&self) -> bool {
        self.rows.iter().all(|r| r.status == Status::Sufficient)
    }
}

/// Outcome of evaluating a diet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum DietEvaluation {
    /// Every entry was skipped; no table is produced.
    NoValidFeed(Aggregation),
    Evaluated(DietReport),
}

impl DietEvaluation {
    pub fn has_valid_feed(&self) -> bool {
        matches!(self, DietEvaluation::Evaluated(_))
    }

    pub fn report(&self) -> Option<&DietReport> {
        match self {
            DietEvaluation::Evaluated(report) => Some(report),
            DietEvaluation::NoValidFeed(_) => None,
        }
    }

    pub fn skipped(&self) -> &[SkippedEntry] {
        match self {
            DietEvaluation::Evaluated(report) => &report.skipped,
            DietEvaluation::NoValidFeed(agg) => &agg.skipped,
        }
    }
}

/// Aggregate the diet, derive requirements, and classify each nutrient.
pub fn evaluate_diet(
    weight: BodyWeight,
    entries: &[FeedEntry],
    catalog: &FeedCatalog,
) -> DietEvaluation {
    let aggregation = aggregate_diet(entries, catalog);

    if !aggregation.has_valid_feed() {
        tracing::info!(
            submitted = entries.len(),
            "No valid feed entries; nothing to evaluate"
        );
        return DietEvaluation::NoValidFeed(aggregation);
    }

    let requirements = calculate_requirements(weight);
    let totals = aggregation.totals;

    let rows: Vec<NutrientRow> = Nutrient::ALL
        .into_iter()
        .map(|nutrient| {
            let requirement = requirements.get(nutrient);
            let intake = totals.get(nutrient);
            NutrientRow {
                nutrient,
                requirement,
                intake,
                percent_met: percent_met(intake, requirement),
                status: classify(intake, requirement),
            }
        })
        .collect();

    tracing::info!(
        weight = weight.lbs(),
        valid = aggregation.valid_entries,
        skipped = aggregation.skipped.len(),
        "Evaluated diet"
    );

    DietEvaluation::Evaluated(DietReport {
        weight,
        totals,
        requirements,
        rows,
        valid_entries: aggregation.valid_entries,
        skipped: aggregation.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedRecord;

    fn catalog() -> FeedCatalog {
        FeedCatalog::new(vec![FeedRecord {
            identifier: "timothy".to_string(),
            name: Some("Timothy Hay".to_string()),
            digestible_energy: 0.9,
            crude_protein: 8.0,
            calcium: 0.3,
            phosphorus: 0.2,
            vitamin_e: 15.0,
        }])
    }

    #[test]
    fn test_rows_in_display_order() {
        let weight = BodyWeight::new(1000.0).unwrap();
        let eval = evaluate_diet(weight, &[FeedEntry::new("timothy", 20.0)], &catalog());
        let report = eval.report().unwrap();

        let order: Vec<Nutrient> = report.rows.iter().map(|r| r.nutrient).collect();
        assert_eq!(order, Nutrient::ALL.to_vec());
        assert_eq!(report.row(Nutrient::Energy).unwrap().percent_met, Some(60.0));
        assert!(!report.is_balanced());
    }

    #[test]
    fn test_no_valid_feed_keeps_skipped_entries() {
        let weight = BodyWeight::new(1000.0).unwrap();
        let entries = vec![FeedEntry::new("", 3.0), FeedEntry::new("hay", 2.0)];
        let eval = evaluate_diet(weight, &entries, &catalog());

        assert!(!eval.has_valid_feed());
        assert!(eval.report().is_none());
        assert_eq!(eval.skipped().len(), 2);
    }

    #[test]
    fn test_serializes_outcome_tag() {
        let weight = BodyWeight::new(1000.0).unwrap();
        let eval = evaluate_diet(weight, &[], &catalog());
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["outcome"], "noValidFeed");
    }
}
