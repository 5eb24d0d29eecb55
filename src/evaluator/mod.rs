pub mod aggregation;
pub mod classification;
pub mod constants;
pub mod evaluation;
pub mod requirements;

pub use aggregation::{aggregate_diet, Aggregation, SkipReason, SkippedEntry};
pub use classification::{classify, percent_met, Status};
pub use constants::*;
pub use evaluation::{evaluate_diet, DietEvaluation, DietReport, NutrientRow};
pub use requirements::calculate_requirements;
