use std::fmt::Write;

use crate::catalog::FeedCatalog;
use crate::evaluator::{DietEvaluation, DietReport, SkippedEntry};
use crate::models::Nutrient;

const NO_VALID_FEED_MESSAGE: &str = "Please enter at least one valid feed and amount.";

/// Percent-met cell: one decimal, or "n/a" when undefined.
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.1}%", p),
        None => "n/a".to_string(),
    }
}

fn format_skipped(out: &mut String, skipped: &[SkippedEntry]) {
    if skipped.is_empty() {
        return;
    }
    let noun = if skipped.len() == 1 { "entry" } else { "entries" };
    let _ = writeln!(out, "Skipped {} {}:", skipped.len(), noun);
    for entry in skipped {
        let id = if entry.identifier.is_empty() {
            "(none)"
        } else {
            entry.identifier.as_str()
        };
        let _ = writeln!(
            out,
            "  #{} {} - {}",
            entry.index + 1,
            id,
            entry.reason.describe()
        );
    }
}

/// Render the evaluation table as text.
pub fn format_report(report: &DietReport) -> String {
    let mut out = String::new();

    let label_width = Nutrient::ALL
        .iter()
        .map(|n| n.label().len())
        .max()
        .unwrap_or(10);

    let _ = writeln!(out, "=== Diet Evaluation ({} lbs) ===", report.weight.lbs());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<width$}  {:>12}  {:>12}  {:>8}  Status",
        "Nutrient",
        "Requirement",
        "Intake",
        "% Met",
        width = label_width
    );
    let _ = writeln!(out, "{}", "-".repeat(label_width + 52));

    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:<width$}  {:>12.2}  {:>12.2}  {:>8}  {}",
            row.nutrient.label(),
            row.requirement,
            row.intake,
            format_percent(row.percent_met),
            row.status.label(),
            width = label_width
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Feeds counted: {}", report.valid_entries);
    format_skipped(&mut out, &report.skipped);
    out
}

/// Render any evaluation outcome as text.
pub fn format_evaluation(evaluation: &DietEvaluation) -> String {
    match evaluation {
        DietEvaluation::Evaluated(report) => format_report(report),
        DietEvaluation::NoValidFeed(agg) => {
            let mut out = format!("{}\n", NO_VALID_FEED_MESSAGE);
            format_skipped(&mut out, &agg.skipped);
            out
        }
    }
}

/// Print an evaluation to stdout.
pub fn display_evaluation(evaluation: &DietEvaluation) {
    println!();
    print!("{}", format_evaluation(evaluation));
    println!();
}

/// Print the catalog's feeds with their profiles.
pub fn display_feed_list(catalog: &FeedCatalog) {
    if catalog.is_empty() {
        println!("Feed catalog: (none)");
        return;
    }

    println!();
    println!("=== Feed Catalog ({} feeds) ===", catalog.len());
    println!();

    for feed in catalog.feeds() {
        println!(
            "  {} ({}) - DE {} Mcal/lb, CP {}%, Ca {} g/lb, P {} g/lb, Vit E {} IU/lb",
            feed.identifier,
            feed.display_name(),
            feed.digestible_energy,
            feed.crude_protein,
            feed.calcium,
            feed.phosphorus,
            feed.vitamin_e
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_diet;
    use crate::models::{BodyWeight, FeedEntry, FeedRecord};

    fn catalog() -> FeedCatalog {
        FeedCatalog::new(vec![FeedRecord {
            identifier: "timothy".to_string(),
            name: None,
            digestible_energy: 0.9,
            crude_protein: 8.0,
            calcium: 0.3,
            phosphorus: 0.2,
            vitamin_e: 15.0,
        }])
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(60.0)), "60.0%");
        assert_eq!(format_percent(Some(4.4)), "4.4%");
        assert_eq!(format_percent(None), "n/a");
    }

    #[test]
    fn test_format_report_rows() {
        let weight = BodyWeight::new(1000.0).unwrap();
        let entries = vec![FeedEntry::new("timothy", 20.0), FeedEntry::new("oats", 1.0)];
        let text = format_evaluation(&evaluate_diet(weight, &entries, &catalog()));

        assert!(text.contains("Digestible Energy (Mcal)"));
        assert!(text.contains("36000.00"));
        assert!(text.contains("1600.00"));
        assert!(text.contains("60.0%"));
        assert!(text.contains("⚠️ Lacking"));
        assert!(text.contains("#2 oats - feed not in catalog"));
    }

    #[test]
    fn test_format_no_valid_feed() {
        let weight = BodyWeight::new(1000.0).unwrap();
        let entries = vec![FeedEntry::new("", 2.0)];
        let text = format_evaluation(&evaluate_diet(weight, &entries, &catalog()));

        assert!(text.starts_with(NO_VALID_FEED_MESSAGE));
        assert!(!text.contains("Requirement"));
        assert!(text.contains("(none) - no feed selected"));
    }
}
