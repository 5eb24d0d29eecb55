use serde::Serialize;

use crate::catalog::FeedCatalog;
use crate::models::{FeedEntry, FeedRecord, NutrientTotals};

/// Why an entry was left out of the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    EmptyIdentifier,
    InvalidAmount,
    UnknownFeed,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::EmptyIdentifier => "no feed selected",
            SkipReason::InvalidAmount => "amount must be a number greater than 0",
            SkipReason::UnknownFeed => "feed not in catalog",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedEntry {
    /// Zero-based position in the submitted entry list.
    pub index: usize,
    pub identifier: String,
    pub reason: SkipReason,
}

/// Result of summing a diet's feed entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregation {
    pub totals: NutrientTotals,
    pub valid_entries: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl Aggregation {
    /// At least one entry contributed to the totals.
    pub fn has_valid_feed(&self) -> bool {
        self.valid_entries > 0
    }
}

/// Check a single entry against the catalog.
fn resolve_entry<'a>(
    entry: &FeedEntry,
    catalog: &'a FeedCatalog,
) -> Result<&'a FeedRecord, SkipReason> {
    if entry.identifier.is_empty() {
        return Err(SkipReason::EmptyIdentifier);
    }
    if !entry.has_valid_amount() {
        return Err(SkipReason::InvalidAmount);
    }
    catalog
        .get(&entry.identifier)
        .ok_or(SkipReason::UnknownFeed)
}

/// Sum each valid entry's contribution, in entry order.
///
/// Malformed entries are skipped, never treated as errors.
pub fn aggregate_diet(entries: &[FeedEntry], catalog: &FeedCatalog) -> Aggregation {
    let mut totals = NutrientTotals::zero();
    let mut valid_entries = 0;
    let mut skipped = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match resolve_entry(entry, catalog) {
            Ok(feed) => {
                totals += feed.contribution(entry.amount);
                valid_entries += 1;
            }
            Err(reason) => {
                tracing::debug!(
                    index,
                    identifier = %entry.identifier,
                    amount = entry.amount,
                    "Skipping entry: {}",
                    reason.describe()
                );
                skipped.push(SkippedEntry {
                    index,
                    identifier: entry.identifier.clone(),
                    reason,
                });
            }
        }
    }

    Aggregation {
        totals,
        valid_entries,
        skipped,
    }
}
