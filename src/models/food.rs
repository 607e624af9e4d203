use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::text::normalize_name;

fn default_portion() -> String {
    "100g".to_string()
}

/// Where a catalog entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    #[default]
    Local,
    External,
}

/// The four tracked macro values.
///
/// Used both for per-portion values and for totals (targets, matched
/// amounts, deltas).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Multiply every value by `factor`. No rounding.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    /// Replace NaN/infinite values with 0.
    pub fn sanitized(&self) -> Self {
        fn finite_or_zero(v: f64) -> f64 {
            if v.is_finite() { v } else { 0.0 }
        }
        Self {
            calories: finite_or_zero(self.calories),
            protein: finite_or_zero(self.protein),
            carbs: finite_or_zero(self.carbs),
            fat: finite_or_zero(self.fat),
        }
    }

    /// Values in scoring order: calories, protein, carbs, fat.
    pub fn as_array(&self) -> [f64; 4] {
        [self.calories, self.protein, self.carbs, self.fat]
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl Sub for Macros {
    type Output = Macros;

    fn sub(self, other: Macros) -> Macros {
        Macros {
            calories: self.calories - other.calories,
            protein: self.protein - other.protein,
            carbs: self.carbs - other.carbs,
            fat: self.fat - other.fat,
        }
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::default(), |acc, m| acc + m)
    }
}

/// A catalog food. Values are per one reference portion, never per gram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodNutrition {
    pub name: String,

    /// Reference portion text, e.g. "100g" or "1 unidade (50g)".
    #[serde(default = "default_portion")]
    pub portion: String,

    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fat: f64,

    #[serde(default)]
    pub provenance: Provenance,
}

impl FoodNutrition {
    pub fn new(name: &str, portion: &str, macros: Macros) -> Self {
        Self {
            name: name.to_string(),
            portion: portion.to_string(),
            calories: macros.calories,
            protein: macros.protein,
            carbs: macros.carbs,
            fat: macros.fat,
            provenance: Provenance::Local,
        }
    }

    /// Per-portion macros.
    #[inline]
    pub fn macros(&self) -> Macros {
        Macros::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Whether the food can be scaled against a calorie target.
    pub fn has_usable_calories(&self) -> bool {
        self.calories.is_finite() && self.calories > 0.0
    }

    /// Canonical key for lookups (accent-stripped, lowercase, trimmed name).
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal, P:{} C:{} F:{}",
            self.name, self.portion, self.calories, self.protein, self.carbs, self.fat
        )
    }
}

impl PartialEq for FoodNutrition {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodNutrition {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodNutrition {
        FoodNutrition::new("Peito de Frango", "100g", Macros::new(165.0, 31.0, 0.0, 3.6))
    }

    #[test]
    fn test_scale_is_pure_multiplication() {
        let m = Macros::new(165.0, 31.0, 0.0, 3.6);
        let k = 2.5;
        let scaled = m.scale(k);
        assert_eq!(scaled.calories, 165.0 * k);
        assert_eq!(scaled.protein, 31.0 * k);
        assert_eq!(scaled.carbs, 0.0);
        assert_eq!(scaled.fat, 3.6 * k);
    }

    #[test]
    fn test_sanitized_zeroes_non_finite() {
        let m = Macros::new(f64::NAN, f64::INFINITY, 10.0, f64::NEG_INFINITY).sanitized();
        assert_eq!(m, Macros::new(0.0, 0.0, 10.0, 0.0));
    }

    #[test]
    fn test_sub_and_sum() {
        let a = Macros::new(100.0, 10.0, 5.0, 2.0);
        let b = Macros::new(40.0, 4.0, 5.0, 1.0);
        assert_eq!(a - b, Macros::new(60.0, 6.0, 0.0, 1.0));

        let total: Macros = vec![a, b].into_iter().sum();
        assert_eq!(total, Macros::new(140.0, 14.0, 10.0, 3.0));
    }

    #[test]
    fn test_equality_ignores_case_and_accents() {
        let a = sample_food();
        let mut b = sample_food();
        b.name = "PEITO DE FRANGO ".to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"name": "Maçã", "calories": 52}"#;
        let food: FoodNutrition = serde_json::from_str(json).unwrap();
        assert_eq!(food.portion, "100g");
        assert_eq!(food.protein, 0.0);
        assert_eq!(food.provenance, Provenance::Local);
        assert!(food.has_usable_calories());
    }
}
