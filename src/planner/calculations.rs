use crate::models::{DietTargets, FoodNutrition, Goal, MacroRatios, PersonProfile};
use crate::planner::constants::*;

/// Basal metabolic rate (Harris-Benedict, revised).
pub fn calculate_bmr(profile: &PersonProfile) -> f64 {
    let c = bmr_coefficients(profile.sex);
    c.base + c.weight * profile.weight_kg + c.height * profile.height_cm
        - c.age * profile.age_years
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn calculate_tdee(profile: &PersonProfile) -> f64 {
    calculate_bmr(profile) * activity_multiplier(profile.activity_level)
}

/// Daily calorie target for a goal.
pub fn target_calories(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => tdee - WEIGHT_LOSS_DEFICIT,
        Goal::MuscleGain => tdee + MUSCLE_GAIN_SURPLUS,
        Goal::Maintenance => tdee,
    }
}

/// Grams of (protein, carbs, fat) for a calorie target and split.
pub fn macro_grams(calories: f64, ratios: &MacroRatios) -> (f64, f64, f64) {
    (
        ratios.protein * calories / KCAL_PER_G_PROTEIN,
        ratios.carbs * calories / KCAL_PER_G_CARBS,
        ratios.fat * calories / KCAL_PER_G_FAT,
    )
}

/// All energy and macro targets for a profile.
pub fn calculate_targets(profile: &PersonProfile) -> DietTargets {
    let bmr = calculate_bmr(profile);
    let tdee = bmr * activity_multiplier(profile.activity_level);
    let calories = target_calories(tdee, profile.goal);
    let ratios = macro_ratios(profile.goal);
    let (protein_g, carbs_g, fat_g) = macro_grams(calories, &ratios);

    DietTargets {
        bmr,
        tdee,
        target_calories: calories,
        ratios,
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// Round a portion factor to the nearest `step`, never below `step`.
pub fn round_quantity(factor: f64, step: f64) -> f64 {
    if !factor.is_finite() {
        return step;
    }
    ((factor / step).round() * step).max(step)
}

/// Unrounded number of portions of `food` that supply `calories`.
pub fn portions_for_calories(food: &FoodNutrition, calories: f64) -> f64 {
    if food.has_usable_calories() {
        calories / food.calories
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Macros, Sex};

    fn reference_male(goal: Goal) -> PersonProfile {
        PersonProfile::new(70.0, 175.0, 30.0, Sex::Male, ActivityLevel::Moderate, goal).unwrap()
    }

    #[test]
    fn test_bmr_male() {
        let bmr = calculate_bmr(&reference_male(Goal::Maintenance));
        assert!((bmr - 1695.667).abs() < 0.001);
    }

    #[test]
    fn test_bmr_female() {
        let profile = PersonProfile::new(
            60.0,
            165.0,
            25.0,
            Sex::Female,
            ActivityLevel::Sedentary,
            Goal::Maintenance,
        )
        .unwrap();
        // 447.593 + 554.82 + 511.17 - 108.25
        assert!((calculate_bmr(&profile) - 1405.333).abs() < 0.001);
    }

    #[test]
    fn test_tdee_moderate() {
        let tdee = calculate_tdee(&reference_male(Goal::Maintenance));
        assert!((tdee - 2628.284).abs() < 0.01);
    }

    #[test]
    fn test_target_calories_by_goal() {
        let tdee = 2628.28;
        assert_eq!(target_calories(tdee, Goal::Maintenance), tdee);
        assert_eq!(target_calories(tdee, Goal::WeightLoss), tdee - 500.0);
        assert_eq!(target_calories(tdee, Goal::MuscleGain), tdee + 300.0);
    }

    #[test]
    fn test_macro_grams() {
        let ratios = macro_ratios(Goal::Maintenance);
        let (p, c, f) = macro_grams(2000.0, &ratios);
        assert!((p - 150.0).abs() < 1e-9);
        assert!((c - 175.0).abs() < 1e-9);
        assert!((f - 2000.0 * 0.35 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_quantity() {
        assert_eq!(round_quantity(1.3, 0.5), 1.5);
        assert_eq!(round_quantity(1.2, 0.5), 1.0);
        assert_eq!(round_quantity(0.1, 0.5), 0.5);
        assert_eq!(round_quantity(0.0, 0.5), 0.5);
        assert_eq!(round_quantity(f64::NAN, 0.5), 0.5);
    }

    #[test]
    fn test_portions_for_calories() {
        let rice = FoodNutrition::new("Arroz", "100g", Macros::new(130.0, 2.7, 28.0, 0.3));
        assert!((portions_for_calories(&rice, 260.0) - 2.0).abs() < 1e-12);

        let broken = FoodNutrition::new("Água", "100ml", Macros::default());
        assert_eq!(portions_for_calories(&broken, 260.0), 0.0);
    }
}
