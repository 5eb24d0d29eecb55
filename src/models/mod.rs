mod feed;
mod nutrients;
mod weight;

pub use feed::{FeedEntry, FeedRecord};
pub use nutrients::{Nutrient, NutrientProfile, NutrientRequirements, NutrientTotals};
pub use weight::BodyWeight;
