//! Engine tunables.
//!
//! Defaults reproduce the documented constants. A TOML file can override any
//! subset of them:
//!
//! ```toml
//! [matcher]
//! max_factor = 10.0
//!
//! [generator]
//! top_k = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::planner::constants::{
    QUANTITY_STEP, SOURCE_CALORIE_SHARE, STAPLE_MIN_POOL, TOP_K_SOURCES,
};
use crate::substitution::constants::{
    BASELINE_FACTOR, CALORIE_FLOOR, CALORIE_WEIGHT, CARBS_FLOOR, CARBS_WEIGHT, FAT_FLOOR,
    FAT_WEIGHT, MAX_FACTOR, MIN_FACTOR, PROTEIN_FLOOR, PROTEIN_WEIGHT,
};

/// Weights, floors and bounds for substitution scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub calorie_weight: f64,
    pub protein_weight: f64,
    pub carbs_weight: f64,
    pub fat_weight: f64,
    pub calorie_floor: f64,
    pub protein_floor: f64,
    pub carbs_floor: f64,
    pub fat_floor: f64,
    pub min_factor: f64,
    pub max_factor: f64,
    pub baseline_factor: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            calorie_weight: CALORIE_WEIGHT,
            protein_weight: PROTEIN_WEIGHT,
            carbs_weight: CARBS_WEIGHT,
            fat_weight: FAT_WEIGHT,
            calorie_floor: CALORIE_FLOOR,
            protein_floor: PROTEIN_FLOOR,
            carbs_floor: CARBS_FLOOR,
            fat_floor: FAT_FLOOR,
            min_factor: MIN_FACTOR,
            max_factor: MAX_FACTOR,
            baseline_factor: BASELINE_FACTOR,
        }
    }
}

impl MatcherConfig {
    /// Weights in scoring order: calories, protein, carbs, fat.
    pub fn weights(&self) -> [f64; 4] {
        [
            self.calorie_weight,
            self.protein_weight,
            self.carbs_weight,
            self.fat_weight,
        ]
    }

    /// Floors in scoring order: calories, protein, carbs, fat.
    pub fn floors(&self) -> [f64; 4] {
        [
            self.calorie_floor,
            self.protein_floor,
            self.carbs_floor,
            self.fat_floor,
        ]
    }
}

/// Meal-assembly knobs for plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Share of a meal's calories assigned to each picked source.
    pub source_calorie_share: f64,
    /// How many top-ranked foods the random pick chooses from.
    pub top_k: usize,
    /// Quantities are rounded to multiples of this step (and never below it).
    pub quantity_step: f64,
    /// Minimum staple pool size before falling back to the category pool.
    pub staple_min_pool: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_calorie_share: SOURCE_CALORIE_SHARE,
            top_k: TOP_K_SOURCES,
            quantity_step: QUANTITY_STEP,
            staple_min_pool: STAPLE_MIN_POOL,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub matcher: MatcherConfig,
    pub generator: GeneratorConfig,
}

impl EngineConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading engine config");
                Self::load(p)
            }
            None => Ok(Self::default()),
        }
    }

    /// Check both sections.
    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()?;
        self.generator.validate()
    }
}

impl MatcherConfig {
    /// Reject bounds and floors the scorer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_factor > 0.0
            && self.max_factor.is_finite()
            && self.min_factor <= self.max_factor)
        {
            return Err(NutriError::InvalidInput(format!(
                "matcher bounds must satisfy 0 < min_factor <= max_factor, got [{}, {}]",
                self.min_factor, self.max_factor
            )));
        }
        if self.floors().iter().any(|f| f.is_nan() || *f <= 0.0) {
            return Err(NutriError::InvalidInput(
                "matcher floors must be positive".to_string(),
            ));
        }
        if self.weights().iter().any(|w| !(w.is_finite() && *w >= 0.0)) {
            return Err(NutriError::InvalidInput(
                "matcher weights must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(NutriError::InvalidInput(
                "generator top_k must be at least 1".to_string(),
            ));
        }
        if !(self.quantity_step > 0.0 && self.quantity_step.is_finite()) {
            return Err(NutriError::InvalidInput(
                "generator quantity_step must be positive".to_string(),
            ));
        }
        if !(self.source_calorie_share > 0.0 && self.source_calorie_share <= 1.0) {
            return Err(NutriError::InvalidInput(
                "generator source_calorie_share must be in (0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.matcher.calorie_weight, 0.45);
        assert_eq!(config.matcher.max_factor, 20.0);
        assert_eq!(config.generator.top_k, 5);
        assert_eq!(config.generator.quantity_step, 0.5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [matcher]
            max_factor = 10.0

            [generator]
            top_k = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.matcher.max_factor, 10.0);
        assert_eq!(config.matcher.min_factor, 0.1);
        assert_eq!(config.generator.top_k, 3);
        assert_eq!(config.generator.source_calorie_share, 0.4);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let result = EngineConfig::from_toml_str(
            r#"
            [matcher]
            min_factor = 5.0
            max_factor = 1.0
            "#,
        );
        assert!(matches!(result, Err(NutriError::InvalidInput(_))));
    }

    #[test]
    fn test_matcher_validate_in_code() {
        let inverted = MatcherConfig {
            min_factor: 5.0,
            max_factor: 1.0,
            ..MatcherConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(NutriError::InvalidInput(_))));

        let nan_bound = MatcherConfig {
            max_factor: f64::NAN,
            ..MatcherConfig::default()
        };
        assert!(nan_bound.validate().is_err());
        assert!(MatcherConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[generator]\nquantity_step = 0.25\n").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.generator.quantity_step, 0.25);
    }
}
