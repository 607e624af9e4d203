use dialoguer::{Confirm, Input, Select};

use crate::catalog::FoodCatalog;
use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, FoodNutrition, Goal, PersonProfile, Sex};

/// Prompt for a positive number.
pub fn prompt_positive(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("Invalid number: {}", input)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "{} must be positive",
            prompt
        )));
    }
    Ok(value)
}

pub fn prompt_sex() -> Result<Sex> {
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;
    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let levels = [
        (ActivityLevel::Sedentary, "Sedentary (little or no exercise)"),
        (ActivityLevel::Light, "Light (1-3 days/week)"),
        (ActivityLevel::Moderate, "Moderate (3-5 days/week)"),
        (ActivityLevel::Active, "Active (6-7 days/week)"),
        (ActivityLevel::VeryActive, "Very active (physical job or twice a day)"),
    ];
    let labels: Vec<&str> = levels.iter().map(|(_, label)| *label).collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(2)
        .interact()?;
    Ok(levels[selection].0)
}

pub fn prompt_goal() -> Result<Goal> {
    let goals = [
        (Goal::WeightLoss, "Weight loss"),
        (Goal::Maintenance, "Maintenance"),
        (Goal::MuscleGain, "Muscle gain"),
    ];
    let labels: Vec<&str> = goals.iter().map(|(_, label)| *label).collect();

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&labels)
        .default(1)
        .interact()?;
    Ok(goals[selection].0)
}

/// Profile fields that were given up front; the rest are prompted for.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialProfile {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    pub sex: Option<Sex>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

impl PartialProfile {
    pub fn is_complete(&self) -> bool {
        self.weight_kg.is_some()
            && self.height_cm.is_some()
            && self.age_years.is_some()
            && self.sex.is_some()
            && self.activity_level.is_some()
            && self.goal.is_some()
    }
}

/// Complete a profile, prompting only for the missing fields.
pub fn collect_profile(partial: PartialProfile) -> Result<PersonProfile> {
    if !partial.is_complete() {
        println!("Some profile fields were not given on the command line.");
        println!();
    }

    let weight = match partial.weight_kg {
        Some(w) => w,
        None => prompt_positive("Weight (kg)", "70")?,
    };
    let height = match partial.height_cm {
        Some(h) => h,
        None => prompt_positive("Height (cm)", "170")?,
    };
    let age = match partial.age_years {
        Some(a) => a,
        None => prompt_positive("Age (years)", "30")?,
    };
    let sex = match partial.sex {
        Some(s) => s,
        None => prompt_sex()?,
    };
    let activity = match partial.activity_level {
        Some(a) => a,
        None => prompt_activity_level()?,
    };
    let goal = match partial.goal {
        Some(g) => g,
        None => prompt_goal()?,
    };

    PersonProfile::new(weight, height, age, sex, activity, goal)
}

/// Resolve a food name against the catalog.
///
/// Exact (normalized) matches are taken directly. A single fuzzy match is
/// confirmed; several are offered as a selection.
pub fn prompt_food_choice<'a>(catalog: &'a FoodCatalog, query: &str) -> Result<&'a FoodNutrition> {
    if let Some(food) = catalog.get(query) {
        return Ok(food);
    }

    let candidates = catalog.search(query);
    tracing::debug!(query, candidates = candidates.len(), "fuzzy food lookup");

    match candidates.as_slice() {
        [] => Err(NutriError::FoodNotFound(query.to_string())),
        [(food, _)] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;
            if confirm {
                Ok(*food)
            } else {
                Err(NutriError::FoodNotFound(query.to_string()))
            }
        }
        _ => {
            let options: Vec<&FoodNutrition> =
                candidates.iter().take(5).map(|(f, _)| *f).collect();

            let mut labels: Vec<String> = options
                .iter()
                .map(|f| format!("{} ({})", f.name, f.portion))
                .collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt(format!("Which food did you mean by '{}'?", query))
                .items(&labels)
                .default(0)
                .interact()?;

            options
                .get(selection)
                .copied()
                .ok_or_else(|| NutriError::FoodNotFound(query.to_string()))
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
