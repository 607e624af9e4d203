/// Scoring weight of the calorie deviation.
pub const CALORIE_WEIGHT: f64 = 0.45;
pub const PROTEIN_WEIGHT: f64 = 0.20;
pub const CARBS_WEIGHT: f64 = 0.20;
pub const FAT_WEIGHT: f64 = 0.15;

// Denominator floors for relative deviation, so near-zero targets do not
// blow up the score.
pub const CALORIE_FLOOR: f64 = 50.0;
pub const PROTEIN_FLOOR: f64 = 8.0;
pub const CARBS_FLOOR: f64 = 8.0;
pub const FAT_FLOOR: f64 = 5.0;

/// Replacement factor bounds.
pub const MIN_FACTOR: f64 = 0.1;
pub const MAX_FACTOR: f64 = 20.0;

/// Candidate always considered alongside the per-macro ones.
pub const BASELINE_FACTOR: f64 = 1.0;
