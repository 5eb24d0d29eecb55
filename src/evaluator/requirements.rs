use crate::evaluator::constants::*;
use crate::models::{BodyWeight, NutrientRequirements};

/// Daily nutrient requirements for a horse of the given body weight.
///
/// Each requirement is linear in weight.
pub fn calculate_requirements(weight: BodyWeight) -> NutrientRequirements {
    let lbs = weight.lbs();
    NutrientRequirements {
        energy: lbs * ENERGY_PER_LB,
        protein: lbs * PROTEIN_KG_PER_LB * GRAMS_PER_KG,
        calcium: lbs * CALCIUM_PER_LB,
        phosphorus: lbs * PHOSPHORUS_PER_LB,
        vitamin_e: lbs * VITAMIN_E_PER_LB,
    }
}
