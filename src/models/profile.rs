use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

/// Anthropometric, activity and goal parameters for plan generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl PersonProfile {
    /// Build a profile, rejecting non-finite or non-positive body values.
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
        sex: Sex,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Result<Self> {
        for (label, value) in [
            ("weight", weight_kg),
            ("height", height_cm),
            ("age", age_years),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(NutriError::InvalidProfile(format!(
                    "{} must be a positive number, got {}",
                    label, value
                )));
            }
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_level,
            goal,
        })
    }
}
