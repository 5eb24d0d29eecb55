use serde::{Deserialize, Serialize};

/// The five tracked nutrients, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    Energy,
    Protein,
    Calcium,
    Phosphorus,
    VitaminE,
}

impl Nutrient {
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Calcium,
        Nutrient::Phosphorus,
        Nutrient::VitaminE,
    ];

    /// Table label including the unit.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Energy => "Digestible Energy (Mcal)",
            Nutrient::Protein => "Crude Protein (g)",
            Nutrient::Calcium => "Calcium (g)",
            Nutrient::Phosphorus => "Phosphorus (g)",
            Nutrient::VitaminE => "Vitamin E (IU)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Energy => "Mcal",
            Nutrient::Protein | Nutrient::Calcium | Nutrient::Phosphorus => "g",
            Nutrient::VitaminE => "IU",
        }
    }

    /// Key used in serialized output.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Energy => "energy",
            Nutrient::Protein => "protein",
            Nutrient::Calcium => "calcium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::VitaminE => "vitaminE",
        }
    }
}

/// One value per nutrient.
///
/// Totals and requirements share this struct so their key sets can never drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProfile {
    pub energy: f64,
    pub protein: f64,
    pub calcium: f64,
    pub phosphorus: f64,
    pub vitamin_e: f64,
}

/// Daily intake accumulated from the diet's feed entries.
pub type NutrientTotals = NutrientProfile;

/// Daily targets derived from body weight.
pub type NutrientRequirements = NutrientProfile;

impl NutrientProfile {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Calcium => self.calcium,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::VitaminE => self.vitamin_e,
        }
    }

    /// Scale every value by a multiplier.
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            energy: self.energy * multiplier,
            protein: self.protein * multiplier,
            calcium: self.calcium * multiplier,
            phosphorus: self.phosphorus * multiplier,
            vitamin_e: self.vitamin_e * multiplier,
        }
    }

    /// (nutrient, value) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(move |n| (n, self.get(n)))
    }
}

impl std::ops::AddAssign for NutrientProfile {
    fn add_assign(&mut self, other: Self) {
        self.energy += other.energy;
        self.protein += other.protein;
        self.calcium += other.calcium;
        self.phosphorus += other.phosphorus;
        self.vitamin_e += other.vitamin_e;
    }
}

impl std::ops::Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(mut self, other: NutrientProfile) -> NutrientProfile {
        self += other;
        self
    }
}

impl std::iter::Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientProfile::zero(), |acc, n| acc + n)
    }
}
