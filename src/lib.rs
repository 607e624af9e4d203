pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod quantity;
pub mod substitution;
pub mod text;

pub use catalog::FoodCatalog;
pub use config::{EngineConfig, GeneratorConfig, MatcherConfig};
pub use error::{NutriError, Result};
pub use models::{FoodNutrition, GeneratedMealPlan, Macros, PersonProfile, SubstitutionMatch};
pub use planner::{generate_diet_plan, generate_diet_plan_with_rng};
pub use quantity::{format_quantity_from_factor, resolve_quantity_factor, QuantityFactor};
pub use substitution::{match_substitution, match_substitution_with, MatchStrategy, OriginalItem};
