use serde::{Deserialize, Serialize};

use crate::models::NutrientProfile;

/// A feed with its per-pound nutrient profile.
///
/// Field names follow the catalog JSON (`digestibleEnergy`, `crudeProtein`, ...).
/// The identifier is the catalog key, so it is not part of the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    #[serde(skip)]
    pub identifier: String,

    /// Display name, e.g. "Timothy Hay".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Mcal per lb.
    pub digestible_energy: f64,

    /// Percent of feed mass.
    pub crude_protein: f64,

    /// Grams per lb.
    pub calcium: f64,

    /// Grams per lb.
    pub phosphorus: f64,

    /// IU per lb.
    pub vitamin_e: f64,
}

impl FeedRecord {
    /// Name shown to the user; falls back to the identifier.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.identifier)
    }

    /// Nutrients supplied by `amount` lbs of this feed.
    ///
    /// Crude protein is a percent of feed mass, so it is converted to grams
    /// consumed: `amount * (crude_protein / 100) * 1000`.
    pub fn contribution(&self, amount: f64) -> NutrientProfile {
        NutrientProfile {
            energy: amount * self.digestible_energy,
            protein: amount * (self.crude_protein / 100.0) * 1000.0,
            calcium: amount * self.calcium,
            phosphorus: amount * self.phosphorus,
            vitamin_e: amount * self.vitamin_e,
        }
    }

    /// Basic sanity check: every profile value is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [
            self.digestible_energy,
            self.crude_protein,
            self.calcium,
            self.phosphorus,
            self.vitamin_e,
        ]
        .into_iter()
        .all(|v| v.is_finite() && v >= 0.0)
    }

    pub fn debug_string(&self) -> String {
        format!(
            "{}: DE:{} CP:{}% Ca:{} P:{} VitE:{}",
            self.identifier,
            self.digestible_energy,
            self.crude_protein,
            self.calcium,
            self.phosphorus,
            self.vitamin_e
        )
    }
}

/// One row of the diet: a feed identifier and a daily amount in lbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub identifier: String,
    pub amount: f64,
}

impl FeedEntry {
    pub fn new(identifier: impl Into<String>, amount: f64) -> Self {
        Self {
            identifier: identifier.into(),
            amount,
        }
    }

    /// Build an entry from raw user text. A non-numeric amount becomes NaN,
    /// which never passes [`FeedEntry::has_valid_amount`].
    pub fn from_raw(identifier: &str, raw_amount: &str) -> Self {
        let amount = raw_amount.trim().parse().unwrap_or(f64::NAN);
        Self::new(identifier.trim(), amount)
    }

    /// Parse an `id=amount` pair as given on the command line.
    ///
    /// A missing `=` yields an entry with a NaN amount rather than an error.
    pub fn from_pair(pair: &str) -> Self {
        match pair.split_once('=') {
            Some((id, amount)) => Self::from_raw(id, amount),
            None => Self::from_raw(pair, ""),
        }
    }

    /// Amount is finite and strictly positive.
    #[inline]
    pub fn has_valid_amount(&self) -> bool {
        self.amount.is_finite() && self.amount > 0.0
    }
}
