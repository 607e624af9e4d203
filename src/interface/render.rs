use crate::models::{
    CandidatePool, DietTargets, FoodNutrition, GeneratedMealPlan, SubstitutionMatch,
};

fn signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Display the energy and macro targets of a plan.
pub fn display_targets(targets: &DietTargets) {
    println!();
    println!("=== Targets ===");
    println!("BMR:      {:>7.0} kcal", targets.bmr);
    println!("TDEE:     {:>7.0} kcal", targets.tdee);
    println!("Target:   {:>7.0} kcal", targets.target_calories);
    println!(
        "Protein:  {:>7.1} g ({:.0}%)",
        targets.protein_g,
        targets.ratios.protein * 100.0
    );
    println!(
        "Carbs:    {:>7.1} g ({:.0}%)",
        targets.carbs_g,
        targets.ratios.carbs * 100.0
    );
    println!(
        "Fat:      {:>7.1} g ({:.0}%)",
        targets.fat_g,
        targets.ratios.fat * 100.0
    );
}

/// Display a generated plan meal by meal.
pub fn display_meal_plan(plan: &GeneratedMealPlan) {
    display_targets(&plan.targets);

    println!();
    println!("=== Meal Plan ===");

    let name_width = plan
        .meals
        .iter()
        .flat_map(|m| m.foods.iter())
        .map(|l| l.food_name.chars().count())
        .max()
        .unwrap_or(10);

    for meal in &plan.meals {
        println!();
        let note = match meal.pool {
            CandidatePool::Staple => "",
            CandidatePool::Category => "  [no staples, category foods]",
            CandidatePool::Catalog => "  [no category foods, whole catalog]",
        };
        println!(
            "{} ({}) - {:.0} kcal budget{}",
            meal.slot.name, meal.slot.time_of_day, meal.meal_calories, note
        );

        if meal.foods.is_empty() {
            println!("     (no foods available)");
            continue;
        }

        for line in &meal.foods {
            println!(
                "   - {:<width$}  {:>12}  {:>5.0} kcal | P {:>5.1} C {:>5.1} F {:>5.1}",
                line.food_name,
                line.quantity,
                line.totals.calories,
                line.totals.protein,
                line.totals.carbs,
                line.totals.fat,
                width = name_width
            );
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total items: {}", plan.line_count());
    println!(
        "Total calories: {:.0} (target {:.0})",
        plan.total_calories, plan.targets.target_calories
    );
    println!(
        "Protein: {:.1} g | Carbs: {:.1} g | Fat: {:.1} g",
        plan.total_protein, plan.total_carbs, plan.total_fat
    );
    println!();
}

/// Display a substitution result next to the food it replaces.
pub fn display_substitution(original: &FoodNutrition, replacement: &FoodNutrition, m: &SubstitutionMatch) {
    println!();
    println!("=== Substitution ===");
    println!("{} -> {}", original.name, replacement.name);
    println!(
        "Eat {} of {} ({:.2} x {})",
        m.quantity, replacement.name, m.factor, replacement.portion
    );
    println!();
    println!(
        "{:<10} {:>9} {:>9} {:>9}",
        "", "target", "matched", "delta"
    );

    let rows = [
        ("kcal", m.target.calories, m.matched.calories, m.deltas.calories),
        ("protein", m.target.protein, m.matched.protein, m.deltas.protein),
        ("carbs", m.target.carbs, m.matched.carbs, m.deltas.carbs),
        ("fat", m.target.fat, m.matched.fat, m.deltas.fat),
    ];
    for (label, target, matched, delta) in rows {
        println!(
            "{:<10} {:>9.1} {:>9.1} {:>9}",
            label,
            target,
            matched,
            signed(delta)
        );
    }
    println!();
}
