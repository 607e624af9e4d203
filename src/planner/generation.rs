use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::models::{
    CandidatePool, FoodNutrition, GeneratedFoodLine, GeneratedMeal, GeneratedMealPlan, Macros,
    MealCategory, MealSlot, PersonProfile,
};
use crate::planner::calculations::{calculate_targets, portions_for_calories, round_quantity};
use crate::planner::constants::{category_keywords, staple_keywords, MEAL_SLOTS};
use crate::quantity::{format_quantity, parse_portion};
use crate::text::normalize_name;

/// Whether a normalized food name matches a keyword.
///
/// Single-word keywords match a whole word of the name (plural `s`/`es`
/// tolerated); multi-word keywords match as a substring.
fn matches_keyword(name: &str, keyword: &str) -> bool {
    if keyword.contains(' ') {
        return name.contains(keyword);
    }
    name.split_whitespace().any(|word| {
        word == keyword
            || word
                .strip_prefix(keyword)
                .is_some_and(|rest| rest == "s" || rest == "es")
    })
}

fn matches_any(food: &FoodNutrition, keywords: &[&str]) -> bool {
    let name = normalize_name(&food.name);
    keywords.iter().any(|kw| matches_keyword(&name, kw))
}

/// Foods whose name fits the meal category.
pub fn category_pool<'a>(
    foods: &[&'a FoodNutrition],
    category: MealCategory,
) -> Vec<&'a FoodNutrition> {
    let keywords = category_keywords(category);
    foods
        .iter()
        .copied()
        .filter(|f| matches_any(f, keywords))
        .collect()
}

/// Choose the candidate pool for a meal.
///
/// Staples are preferred when there are at least `min_staples` of them;
/// otherwise the category pool is used, and an empty category pool falls
/// back to every usable food.
pub fn select_pool<'a>(
    foods: &[&'a FoodNutrition],
    category: MealCategory,
    min_staples: usize,
) -> (Vec<&'a FoodNutrition>, CandidatePool) {
    let by_category = category_pool(foods, category);

    if by_category.is_empty() {
        tracing::warn!(
            ?category,
            "no catalog food fits the meal category, using the whole catalog"
        );
        return (foods.to_vec(), CandidatePool::Catalog);
    }

    let staples_kw = staple_keywords(category);
    let staples: Vec<&FoodNutrition> = by_category
        .iter()
        .copied()
        .filter(|f| matches_any(f, staples_kw))
        .collect();

    if staples.len() >= min_staples {
        (staples, CandidatePool::Staple)
    } else {
        tracing::debug!(
            ?category,
            staples = staples.len(),
            "staple pool too small, using the category pool"
        );
        (by_category, CandidatePool::Category)
    }
}

/// Pick uniformly among the `top_k` foods ranked by `key` (descending),
/// skipping foods already in `used`.
fn pick_source<'a, R, F>(
    pool: &[&'a FoodNutrition],
    used: &[&FoodNutrition],
    key: F,
    top_k: usize,
    rng: &mut R,
) -> Option<&'a FoodNutrition>
where
    R: Rng + ?Sized,
    F: Fn(&FoodNutrition) -> f64,
{
    let mut ranked: Vec<&FoodNutrition> = pool
        .iter()
        .copied()
        .filter(|f| !used.contains(f))
        .collect();

    ranked.sort_by(|a, b| {
        key(*b)
            .partial_cmp(&key(*a))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(top_k);

    ranked.choose(rng).copied()
}

/// Size `food` so it supplies roughly `calories`.
pub fn size_line(food: &FoodNutrition, calories: f64, step: f64) -> GeneratedFoodLine {
    let quantity_factor = round_quantity(portions_for_calories(food, calories), step);
    let per_portion = food.macros().sanitized();
    let portion = parse_portion(&food.portion);
    tracing::trace!(food = %food.debug_string(), quantity_factor, "sizing line");

    GeneratedFoodLine {
        food_name: food.name.clone(),
        portion: food.portion.clone(),
        quantity_factor,
        quantity: format_quantity(quantity_factor, &portion),
        per_portion,
        totals: per_portion.scale(quantity_factor).sanitized(),
    }
}

/// Build one meal: a protein source and a carbohydrate source.
pub fn assemble_meal<R: Rng + ?Sized>(
    slot: &MealSlot,
    daily_calories: f64,
    foods: &[&FoodNutrition],
    config: &GeneratorConfig,
    rng: &mut R,
) -> GeneratedMeal {
    let meal_calories = daily_calories * slot.calorie_ratio;
    let source_calories = meal_calories * config.source_calorie_share;
    let (pool, pool_kind) = select_pool(foods, slot.category, config.staple_min_pool);

    let mut used: Vec<&FoodNutrition> = Vec::with_capacity(2);
    let mut lines = Vec::with_capacity(2);

    if let Some(protein) = pick_source(&pool, &used, |f| f.protein, config.top_k, rng) {
        used.push(protein);
        lines.push(size_line(protein, source_calories, config.quantity_step));
    }

    if let Some(carb) = pick_source(&pool, &used, |f| f.carbs, config.top_k, rng) {
        used.push(carb);
        lines.push(size_line(carb, source_calories, config.quantity_step));
    }

    tracing::debug!(
        slot = slot.name,
        meal_calories,
        pool = ?pool_kind,
        foods = ?lines.iter().map(|l| l.food_name.as_str()).collect::<Vec<_>>(),
        "meal assembled"
    );

    GeneratedMeal {
        slot: *slot,
        meal_calories,
        pool: pool_kind,
        foods: lines,
    }
}

/// Generate a daily plan with an injected random source.
///
/// Seeded generators give reproducible plans.
pub fn generate_diet_plan_with_rng<R: Rng + ?Sized>(
    profile: &PersonProfile,
    catalog: &[FoodNutrition],
    config: &GeneratorConfig,
    rng: &mut R,
) -> GeneratedMealPlan {
    let targets = calculate_targets(profile);

    let usable: Vec<&FoodNutrition> = catalog.iter().filter(|f| f.has_usable_calories()).collect();
    if usable.len() < catalog.len() {
        tracing::warn!(
            skipped = catalog.len() - usable.len(),
            "ignoring catalog foods without positive calories"
        );
    }

    let meals: Vec<GeneratedMeal> = MEAL_SLOTS
        .iter()
        .map(|slot| assemble_meal(slot, targets.target_calories, &usable, config, rng))
        .collect();

    let totals = meals
        .iter()
        .map(GeneratedMeal::totals)
        .sum::<Macros>()
        .sanitized();

    tracing::info!(
        target = targets.target_calories,
        actual = totals.calories,
        "diet plan generated"
    );

    GeneratedMealPlan {
        targets,
        total_calories: totals.calories,
        total_protein: totals.protein,
        total_carbs: totals.carbs,
        total_fat: totals.fat,
        meals,
    }
}

/// Generate a daily plan using the thread-local random source.
pub fn generate_diet_plan(
    profile: &PersonProfile,
    catalog: &[FoodNutrition],
    config: &GeneratorConfig,
) -> GeneratedMealPlan {
    generate_diet_plan_with_rng(profile, catalog, config, &mut rand::thread_rng())
}
