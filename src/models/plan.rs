use serde::Serialize;

use crate::models::food::Macros;

/// Which keyword family a meal slot draws its foods from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A fixed slot in the daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealSlot {
    pub name: &'static str,
    pub time_of_day: &'static str,
    /// Share of the daily calorie target, 0..=1.
    pub calorie_ratio: f64,
    pub category: MealCategory,
}

/// Which pool a meal's foods were drawn from.
///
/// Anything other than `Staple` means the preferred pool was too small and
/// the generator fell back to a larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidatePool {
    Staple,
    Category,
    Catalog,
}

/// Protein/fat/carb share of the calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MacroRatios {
    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

/// Energy and macro targets derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DietTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub ratios: MacroRatios,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// One sized food inside a generated meal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFoodLine {
    pub food_name: String,
    pub portion: String,
    /// Number of reference portions, a multiple of the rounding step.
    pub quantity_factor: f64,
    /// Human-readable quantity, e.g. "150g" or "2 unidades".
    pub quantity: String,
    pub per_portion: Macros,
    pub totals: Macros,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedMeal {
    pub slot: MealSlot,
    /// Calorie budget for this slot.
    pub meal_calories: f64,
    pub pool: CandidatePool,
    /// At most two lines: a protein source and a carbohydrate source.
    pub foods: Vec<GeneratedFoodLine>,
}

impl GeneratedMeal {
    pub fn totals(&self) -> Macros {
        self.foods.iter().map(|f| f.totals).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedMealPlan {
    pub targets: DietTargets,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub meals: Vec<GeneratedMeal>,
}

impl GeneratedMealPlan {
    pub fn totals(&self) -> Macros {
        Macros::new(
            self.total_calories,
            self.total_protein,
            self.total_carbs,
            self.total_fat,
        )
    }

    /// Number of food lines across all meals.
    pub fn line_count(&self) -> usize {
        self.meals.iter().map(|m| m.foods.len()).sum()
    }
}

/// Outcome of a food substitution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionMatch {
    /// Reference portions of the replacement, rounded to 2 decimals.
    pub factor: f64,
    pub matched: Macros,
    pub target: Macros,
    /// Formatted replacement quantity.
    pub quantity: String,
    /// `matched - target` per macro, for the caller's history log.
    pub deltas: Macros,
}
