pub mod calculations;
pub mod constants;
pub mod generation;

pub use calculations::{
    calculate_bmr, calculate_targets, calculate_tdee, macro_grams, round_quantity,
    target_calories,
};
pub use constants::{activity_multiplier, macro_ratios, MEAL_SLOTS};
pub use generation::{
    assemble_meal, category_pool, generate_diet_plan, generate_diet_plan_with_rng, select_pool,
    size_line,
};
