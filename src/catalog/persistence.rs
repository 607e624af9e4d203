use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{FoodNutrition, Provenance};

/// Deduplicate by normalized name, keeping the last occurrence and the
/// first-seen order.
fn dedup_last_wins(foods: Vec<FoodNutrition>) -> Vec<FoodNutrition> {
    let mut order: Vec<String> = Vec::new();
    let mut seen: HashMap<String, FoodNutrition> = HashMap::new();
    for food in foods {
        let key = food.key();
        if !seen.contains_key(&key) {
            order.push(key.clone());
        }
        seen.insert(key, food);
    }
    order.into_iter().filter_map(|k| seen.remove(&k)).collect()
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// Load a catalog from a JSON array or a CSV file (by extension).
///
/// Deduplicates by normalized name (last occurrence wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodNutrition>> {
    let path = path.as_ref();

    let foods: Vec<FoodNutrition> = if is_csv(path) {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
        rdr.deserialize()
            .collect::<std::result::Result<Vec<FoodNutrition>, csv::Error>>()?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    let total = foods.len();
    let deduped = dedup_last_wins(foods);
    tracing::debug!(
        path = %path.display(),
        loaded = total,
        unique = deduped.len(),
        "catalog loaded"
    );
    Ok(deduped)
}

/// Save a catalog as pretty JSON, deduplicated by normalized name.
pub fn save_catalog<P: AsRef<Path>>(path: P, foods: &[FoodNutrition]) -> Result<()> {
    let deduped = dedup_last_wins(foods.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Merge a local catalog with external search results.
///
/// Entries are deduplicated by normalized name; local entries win over
/// external ones. External entries are tagged `Provenance::External`.
pub fn merge_catalogs(local: Vec<FoodNutrition>, external: Vec<FoodNutrition>) -> Vec<FoodNutrition> {
    let mut merged = dedup_last_wins(local);
    let mut keys: HashSet<String> = merged.iter().map(|f| f.key()).collect();

    for mut food in dedup_last_wins(external) {
        if keys.insert(food.key()) {
            food.provenance = Provenance::External;
            merged.push(food);
        }
    }
    merged
}
