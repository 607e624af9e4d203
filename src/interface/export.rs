use std::path::Path;

use crate::error::Result;
use crate::models::GeneratedMealPlan;
use crate::quantity::format_number;

/// Write one CSV row per food line of the plan.
pub fn write_plan_csv(plan: &GeneratedMealPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "meal",
        "time",
        "food",
        "portion",
        "quantity_factor",
        "quantity",
        "calories",
        "protein",
        "carbs",
        "fat",
    ])?;

    for meal in &plan.meals {
        for line in &meal.foods {
            wtr.write_record([
                meal.slot.name.to_string(),
                meal.slot.time_of_day.to_string(),
                line.food_name.clone(),
                line.portion.clone(),
                format_number(line.quantity_factor),
                line.quantity.clone(),
                format!("{:.1}", line.totals.calories),
                format!("{:.1}", line.totals.protein),
                format!("{:.1}", line.totals.carbs),
                format!("{:.1}", line.totals.fat),
            ])?;
        }
    }

    wtr.flush()?;
    tracing::debug!(path = %path.display(), rows = plan.line_count(), "plan exported");
    Ok(())
}

/// Write the plan as pretty JSON.
pub fn write_plan_json(plan: &GeneratedMealPlan, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::models::{ActivityLevel, FoodNutrition, Goal, Macros, PersonProfile, Sex};
    use crate::planner::generate_diet_plan_with_rng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::NamedTempFile;

    fn sample_plan() -> GeneratedMealPlan {
        let profile = PersonProfile::new(
            70.0,
            175.0,
            30.0,
            Sex::Male,
            ActivityLevel::Moderate,
            Goal::Maintenance,
        )
        .unwrap();
        let catalog = vec![
            FoodNutrition::new("Ovo", "1 unidade", Macros::new(72.0, 6.3, 0.4, 4.8)),
            FoodNutrition::new("Arroz", "100g", Macros::new(130.0, 2.7, 28.0, 0.3)),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        generate_diet_plan_with_rng(&profile, &catalog, &GeneratorConfig::default(), &mut rng)
    }

    #[test]
    fn test_write_plan_csv() {
        let plan = sample_plan();
        let file = NamedTempFile::new().unwrap();
        write_plan_csv(&plan, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(&headers[0], "meal");
        assert_eq!(rdr.records().count(), plan.line_count());
    }

    #[test]
    fn test_write_plan_json() {
        let plan = sample_plan();
        let file = NamedTempFile::new().unwrap();
        write_plan_json(&plan, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["meals"].as_array().unwrap().len(), 6);
    }
}
