pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodNutrition, Macros, Provenance};
pub use plan::{
    CandidatePool, DietTargets, GeneratedFoodLine, GeneratedMeal, GeneratedMealPlan, MacroRatios,
    MealCategory, MealSlot, SubstitutionMatch,
};
pub use profile::{ActivityLevel, Goal, PersonProfile, Sex};
