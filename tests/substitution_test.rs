use assert_float_eq::assert_float_absolute_eq;

use nutri_coach_rs::config::MatcherConfig;
use nutri_coach_rs::error::NutriError;
use nutri_coach_rs::models::{FoodNutrition, Macros};
use nutri_coach_rs::quantity::ConsumedQuantity;
use nutri_coach_rs::substitution::{match_substitution, OriginalItem};

fn food(name: &str, portion: &str, cal: f64, p: f64, c: f64, f: f64) -> FoodNutrition {
    FoodNutrition::new(name, portion, Macros::new(cal, p, c, f))
}

fn catalog() -> Vec<FoodNutrition> {
    vec![
        food("Peito de frango", "100g", 165.0, 31.0, 0.0, 3.6),
        food("Tilápia", "100g", 96.0, 20.0, 0.0, 1.7),
        food("Arroz branco", "100g", 130.0, 2.7, 28.0, 0.3),
        food("Batata doce", "100g", 86.0, 1.6, 20.0, 0.1),
        food("Ovo", "1 unidade", 72.0, 6.3, 0.4, 4.8),
        food("Pão francês", "1 unidade (50g)", 150.0, 4.7, 29.0, 1.6),
        food("Azeite", "1 colher de sopa", 119.0, 0.0, 0.0, 13.5),
    ]
}

#[test]
fn test_self_substitution_reproduces_quantity() {
    let config = MatcherConfig::default();
    for f in catalog() {
        for qty in [0.5, 1.0, 2.0, 3.0] {
            let original = OriginalItem::new(&f, ConsumedQuantity::Factor(qty));
            let result = match_substitution(&original, &f, &config).unwrap();
            assert_float_absolute_eq!(result.factor, qty, 0.02);
            assert_float_absolute_eq!(result.deltas.calories, 0.0, 0.02 * f.calories);
            assert_float_absolute_eq!(result.deltas.protein, 0.0, 0.02 * f.protein + 1e-9);
        }
    }
}

#[test]
fn test_factor_always_within_bounds() {
    let config = MatcherConfig::default();
    let foods = catalog();
    for original_food in &foods {
        for replacement in &foods {
            for qty in [0.01, 1.0, 50.0] {
                let original = OriginalItem::new(original_food, ConsumedQuantity::Factor(qty));
                let result = match_substitution(&original, replacement, &config).unwrap();
                assert!(
                    (0.1..=20.0).contains(&result.factor),
                    "{} -> {}: factor {}",
                    original_food.name,
                    replacement.name,
                    result.factor
                );
            }
        }
    }
}

#[test]
fn test_matched_totals_scale_linearly() {
    let config = MatcherConfig::default();
    let rice = food("Arroz branco", "100g", 130.0, 2.7, 28.0, 0.3);
    let potato = food("Batata doce", "100g", 86.0, 1.6, 20.0, 0.1);

    let original = OriginalItem::new(&rice, ConsumedQuantity::Text("150g".to_string()));
    let result = match_substitution(&original, &potato, &config).unwrap();

    let expected = potato.macros().scale(result.factor);
    assert_float_absolute_eq!(result.matched.calories, expected.calories, 1e-9);
    assert_float_absolute_eq!(result.matched.carbs, expected.carbs, 1e-9);
    assert_float_absolute_eq!(result.target.calories, 195.0, 1e-9);
}

#[test]
fn test_explicit_target_overrides_quantity() {
    let config = MatcherConfig::default();
    let chicken = food("Peito de frango", "100g", 165.0, 31.0, 0.0, 3.6);
    let tilapia = food("Tilápia", "100g", 96.0, 20.0, 0.0, 1.7);

    let original = OriginalItem::new(&chicken, ConsumedQuantity::Text("not a quantity".to_string()))
        .with_target(Macros::new(192.0, 40.0, 0.0, 3.4));
    let result = match_substitution(&original, &tilapia, &config).unwrap();
    assert_float_absolute_eq!(result.factor, 2.0, 1e-9);
    assert_eq!(result.quantity, "200g");
}

#[test]
fn test_errors() {
    let config = MatcherConfig::default();
    let chicken = food("Peito de frango", "100g", 165.0, 31.0, 0.0, 3.6);
    let water = food("Água", "200ml", 0.0, 0.0, 0.0, 0.0);

    let original = OriginalItem::new(&chicken, ConsumedQuantity::Factor(1.0));
    assert!(matches!(
        match_substitution(&original, &water, &config),
        Err(NutriError::InvalidReplacementFood(_))
    ));

    let vague = OriginalItem::new(&chicken, ConsumedQuantity::Text("a gosto".to_string()));
    assert!(matches!(
        match_substitution(&vague, &chicken, &config),
        Err(NutriError::UnparseableQuantity(_))
    ));
}
