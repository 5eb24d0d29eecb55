use std::collections::BTreeMap;

use strsim::jaro_winkler;

use crate::models::FeedRecord;

/// Minimum Jaro-Winkler score for a feed to count as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Immutable lookup from feed identifier to nutrient profile.
///
/// Identifiers are matched exactly, as keys appear in the catalog source.
#[derive(Debug, Clone, Default)]
pub struct FeedCatalog {
    feeds: BTreeMap<String, FeedRecord>,
}

impl FeedCatalog {
    /// Build a catalog from records. Later records replace earlier ones
    /// with the same identifier.
    pub fn new(feeds: impl IntoIterator<Item = FeedRecord>) -> Self {
        let feeds = feeds
            .into_iter()
            .map(|f| (f.identifier.clone(), f))
            .collect();
        Self { feeds }
    }

    pub fn get(&self, identifier: &str) -> Option<&FeedRecord> {
        self.feeds.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.feeds.contains_key(identifier)
    }

    /// All feeds, sorted by identifier.
    pub fn feeds(&self) -> impl Iterator<Item = &FeedRecord> {
        self.feeds.values()
    }

    /// Feeds whose identifier or display name resembles `input`, best first.
    ///
    /// An exact identifier match is returned alone.
    pub fn suggest(&self, input: &str, limit: usize) -> Vec<&FeedRecord> {
        if let Some(feed) = self.get(input) {
            return vec![feed];
        }

        let needle = input.to_lowercase();
        let mut candidates: Vec<(&FeedRecord, f64)> = self
            .feeds
            .values()
            .map(|f| {
                let by_id = jaro_winkler(&f.identifier.to_lowercase(), &needle);
                let by_name = jaro_winkler(&f.display_name().to_lowercase(), &needle);
                (f, by_id.max(by_name))
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().take(limit).map(|(f, _)| f).collect()
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}
