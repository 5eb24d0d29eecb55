// ─────────────────────────────────────────────────────────────────────────────
// Daily requirement per lb of body weight
// ─────────────────────────────────────────────────────────────────────────────

/// Digestible energy, Mcal per lb of body weight.
pub const ENERGY_PER_LB: f64 = 0.03;

/// Crude protein, kg per lb of body weight (multiplied by [`GRAMS_PER_KG`]).
pub const PROTEIN_KG_PER_LB: f64 = 0.036;

/// Calcium, g per lb of body weight.
pub const CALCIUM_PER_LB: f64 = 0.04;

/// Phosphorus, g per lb of body weight.
pub const PHOSPHORUS_PER_LB: f64 = 0.028;

/// Vitamin E, IU per lb of body weight.
pub const VITAMIN_E_PER_LB: f64 = 1.0;

pub const GRAMS_PER_KG: f64 = 1000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Adequacy band
// ─────────────────────────────────────────────────────────────────────────────

/// Intake below `required * LACKING_RATIO` is lacking.
pub const LACKING_RATIO: f64 = 0.95;

/// Intake above `required * OVERFED_RATIO` is overfed.
pub const OVERFED_RATIO: f64 = 1.05;

/// Decimal places kept for percent-met.
pub const PERCENT_DECIMALS: u32 = 1;
