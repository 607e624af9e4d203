use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::FoodNutrition;
use crate::text::normalize_name;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_THRESHOLD: f64 = 0.75;

/// Read-only view over a merged catalog, keyed by normalized name.
pub struct FoodCatalog {
    foods: Vec<FoodNutrition>,
    by_key: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog; later duplicates replace earlier ones.
    pub fn new(foods: Vec<FoodNutrition>) -> Self {
        let mut unique: Vec<FoodNutrition> = Vec::with_capacity(foods.len());
        let mut by_key = HashMap::new();
        for food in foods {
            match by_key.get(&food.key()) {
                Some(&idx) => unique[idx] = food,
                None => {
                    by_key.insert(food.key(), unique.len());
                    unique.push(food);
                }
            }
        }
        Self {
            foods: unique,
            by_key,
        }
    }

    /// Exact lookup by name (case- and accent-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodNutrition> {
        self.by_key
            .get(&normalize_name(name))
            .map(|&idx| &self.foods[idx])
    }

    /// Exact lookup that fails with `FoodNotFound`.
    pub fn require(&self, name: &str) -> Result<&FoodNutrition> {
        self.get(name)
            .ok_or_else(|| NutriError::FoodNotFound(name.to_string()))
    }

    /// Fuzzy search, best match first.
    pub fn search(&self, query: &str) -> Vec<(&FoodNutrition, f64)> {
        let needle = normalize_name(query);
        let mut candidates: Vec<(&FoodNutrition, f64)> = self
            .foods
            .iter()
            .map(|f| {
                let key = f.key();
                // Substring hits rank above pure edit-distance ones.
                let score = if !needle.is_empty() && key.contains(&needle) {
                    1.0
                } else {
                    jaro_winkler(&key, &needle)
                };
                (f, score)
            })
            .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name.len().cmp(&b.0.name.len()))
        });
        candidates
    }

    pub fn foods(&self) -> &[FoodNutrition] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Macros;

    fn sample_catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            FoodNutrition::new("Peito de frango", "100g", Macros::new(165.0, 31.0, 0.0, 3.6)),
            FoodNutrition::new("Feijão preto", "100g", Macros::new(77.0, 4.5, 14.0, 0.5)),
            FoodNutrition::new("Arroz integral", "100g", Macros::new(124.0, 2.6, 25.8, 1.0)),
        ])
    }

    #[test]
    fn test_get_case_and_accent_insensitive() {
        let catalog = sample_catalog();
        assert!(catalog.get("feijao preto").is_some());
        assert!(catalog.get("FEIJÃO PRETO").is_some());
        assert!(catalog.get("batata").is_none());
    }

    #[test]
    fn test_require_reports_missing() {
        let catalog = sample_catalog();
        assert!(matches!(
            catalog.require("batata"),
            Err(NutriError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_search_substring_first() {
        let catalog = sample_catalog();
        let results = catalog.search("frango");
        assert!(!results.is_empty());
        assert_eq!(results[0].0.name, "Peito de frango");
    }

    #[test]
    fn test_search_typo() {
        let catalog = sample_catalog();
        let results = catalog.search("arroz integrall");
        assert_eq!(results[0].0.name, "Arroz integral");
    }

    #[test]
    fn test_duplicates_replaced() {
        let catalog = FoodCatalog::new(vec![
            FoodNutrition::new("Ovo", "1 unidade", Macros::new(70.0, 6.0, 0.5, 5.0)),
            FoodNutrition::new("ovo", "1 unidade", Macros::new(72.0, 6.3, 0.4, 4.8)),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Ovo").unwrap().calories, 72.0);
    }
}
