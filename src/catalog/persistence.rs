use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::catalog::FeedCatalog;
use crate::error::{HorseDietError, Result};
use crate::models::FeedRecord;

/// Catalog compiled into the binary.
const BUILTIN_FEEDS: &str = include_str!("../../data/feeds.json");

/// Parse a catalog from JSON: an object mapping feed identifier to its record.
///
/// Records with negative or non-finite values are rejected.
pub fn parse_catalog(json: &str) -> Result<FeedCatalog> {
    let raw: BTreeMap<String, FeedRecord> = serde_json::from_str(json)?;

    let mut feeds = Vec::with_capacity(raw.len());
    for (identifier, mut record) in raw {
        if identifier.trim().is_empty() {
            return Err(HorseDietError::CatalogLoad(
                "feed identifier must not be empty".to_string(),
            ));
        }
        record.identifier = identifier;
        if !record.is_valid() {
            return Err(HorseDietError::CatalogLoad(format!(
                "feed '{}' has a negative or non-numeric nutrient value",
                record.identifier
            )));
        }
        if record.name.is_none() {
            tracing::warn!("Feed '{}' has no display name", record.identifier);
        }
        tracing::debug!("Loaded feed {}", record.debug_string());
        feeds.push(record);
    }

    Ok(FeedCatalog::new(feeds))
}

/// Load a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FeedCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        HorseDietError::CatalogLoad(format!("cannot read {}: {}", path.display(), e))
    })?;
    let catalog = parse_catalog(&content)?;
    tracing::info!("Loaded {} feeds from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// The default catalog shipped with the crate.
pub fn builtin_catalog() -> Result<FeedCatalog> {
    parse_catalog(BUILTIN_FEEDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_has_dropdown_feeds() {
        let catalog = builtin_catalog().unwrap();
        for id in ["timothy", "alfalfa", "beetPulp"] {
            assert!(catalog.contains(id), "missing {}", id);
        }
        assert_eq!(
            catalog.get("timothy").unwrap().display_name(),
            "Timothy Hay"
        );
    }

    #[test]
    fn test_load_from_file() {
        let json = r#"{
            "oats": {"name": "Oats", "digestibleEnergy": 1.3, "crudeProtein": 11.5, "calcium": 0.4, "phosphorus": 1.5, "vitaminE": 5}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let oats = catalog.get("oats").unwrap();
        assert_eq!(oats.identifier, "oats");
        assert!((oats.crude_protein - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_missing_file_is_catalog_error() {
        let err = load_catalog("/definitely/not/here/feeds.json").unwrap_err();
        assert!(matches!(err, HorseDietError::CatalogLoad(_)));
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let json = r#"{"hay": {"digestibleEnergy": 0.9, "crudeProtein": 8, "calcium": 0.3, "phosphorus": 0.2}}"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(err, HorseDietError::Json(_)));
    }

    #[test]
    fn test_negative_value_rejected() {
        let json = r#"{"hay": {"digestibleEnergy": -0.9, "crudeProtein": 8, "calcium": 0.3, "phosphorus": 0.2, "vitaminE": 1}}"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(err, HorseDietError::CatalogLoad(_)));
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let json = r#"{"": {"digestibleEnergy": 0.9, "crudeProtein": 8, "calcium": 0.3, "phosphorus": 0.2, "vitaminE": 1}}"#;
        assert!(parse_catalog(json).is_err());
    }
}
