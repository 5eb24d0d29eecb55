use std::path::Path;

use crate::error::{HorseDietError, Result};
use crate::evaluator::{DietEvaluation, DietReport};

const HEADER: [&str; 6] = [
    "nutrient",
    "unit",
    "requirement",
    "intake",
    "percent_met",
    "status",
];

fn write_rows<W: std::io::Write>(wtr: &mut csv::Writer<W>, report: &DietReport) -> Result<()> {
    wtr.write_record(HEADER)?;

    for row in &report.rows {
        wtr.write_record([
            row.nutrient.key().to_string(),
            row.nutrient.unit().to_string(),
            format!("{:.2}", row.requirement),
            format!("{:.2}", row.intake),
            row.percent_met
                .map(|p| format!("{:.1}", p))
                .unwrap_or_default(),
            row.status.name().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the report rows to a CSV file.
pub fn write_report_csv(report: &DietReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_rows(&mut wtr, report)?;
    tracing::debug!("Wrote report CSV to {}", path.display());
    Ok(())
}

/// Render the report rows as CSV text.
pub fn report_csv_string(report: &DietReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_rows(&mut wtr, report)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| HorseDietError::InvalidInput(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| HorseDietError::InvalidInput(e.to_string()))
}

/// Serialize the whole evaluation as pretty JSON.
pub fn evaluation_json(evaluation: &DietEvaluation) -> Result<String> {
    Ok(serde_json::to_string_pretty(evaluation)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FeedCatalog;
    use crate::evaluator::evaluate_diet;
    use crate::models::{BodyWeight, FeedEntry, FeedRecord};
    use tempfile::NamedTempFile;

    fn report() -> DietReport {
        let catalog = FeedCatalog::new(vec![FeedRecord {
            identifier: "timothy".to_string(),
            name: None,
            digestible_energy: 0.9,
            crude_protein: 8.0,
            calcium: 0.3,
            phosphorus: 0.2,
            vitamin_e: 15.0,
        }]);
        let weight = BodyWeight::new(1000.0).unwrap();
        evaluate_diet(weight, &[FeedEntry::new("timothy", 20.0)], &catalog)
            .report()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_csv_string() {
        let text = report_csv_string(&report()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "nutrient,unit,requirement,intake,percent_met,status");
        assert_eq!(lines[1], "energy,Mcal,30.00,18.00,60.0,Lacking");
        assert_eq!(lines[5], "vitaminE,IU,1000.00,300.00,30.0,Lacking");
    }

    #[test]
    fn test_write_csv_file() {
        let file = NamedTempFile::new().unwrap();
        write_report_csv(&report(), file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 5);
        assert_eq!(&records[1][0], "protein");
        assert_eq!(&records[1][3], "1600.00");
    }

    #[test]
    fn test_evaluation_json() {
        let text = evaluation_json(&DietEvaluation::Evaluated(report())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["outcome"], "evaluated");
        assert_eq!(value["rows"][0]["status"], "lacking");
        let protein = value["requirements"]["protein"].as_f64().unwrap();
        assert!((protein - 36000.0).abs() < 1e-6);
    }
}
