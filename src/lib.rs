pub mod catalog;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod interface;
pub mod models;

pub use catalog::FeedCatalog;
pub use error::{HorseDietError, Result};
pub use evaluator::{evaluate_diet, DietEvaluation, DietReport, Status};
pub use models::{BodyWeight, FeedEntry, FeedRecord, Nutrient, NutrientProfile};
