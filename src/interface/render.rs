use crate::api::PlanType;
use crate::models::DietPlan;
use crate::planner::constants::{GENERAL_TIPS, SCHEDULE_TIP};
use crate::planner::validation::ValidationIssue;

/// Display a computed diet plan.
pub fn display_diet_plan(plan: &DietPlan) {
    println!();
    println!("=== Your Calculated Numbers ===");
    println!();
    println!("Basal metabolic rate:     {:>5} kcal/day", plan.basal_metabolic_rate);
    println!(
        "Total daily expenditure:  {:>5} kcal/day",
        plan.total_daily_energy_expenditure
    );
    println!("Calorie target:           {:>5} kcal/day", plan.target_calories);
    println!("Objective: {}", plan.objective.label());

    for meal in &plan.meal_plan.meals {
        println!();
        println!("=== {} - {} kcal ===", meal.display_name, meal.calories);
        println!(
            "Protein {}g | Carbs {}g | Fats {}g",
            meal.macros.protein, meal.macros.carbs, meal.macros.fats
        );
        println!("Your foods: {}", meal.chosen_foods.join(", "));
        println!("Suggested portions:");
        for suggestion in &meal.suggestions {
            println!("  - {}", suggestion);
        }
    }

    if !plan.meal_times.is_empty() {
        println!();
        println!("=== Meal Schedule ===");
        let width = plan
            .meal_plan
            .meals
            .iter()
            .map(|m| m.display_name.len())
            .max()
            .unwrap_or(10);

        for (meal, time) in plan.schedule() {
            println!(
                "  {:<width$}  {:>5}  {:>5} kcal",
                meal.display_name,
                time.unwrap_or("N/A"),
                meal.calories,
                width = width
            );
        }
        println!("Tip: {}", SCHEDULE_TIP);
    }

    println!();
    println!("--- Important Tips ---");
    for tip in GENERAL_TIPS {
        println!("  - {}", tip);
    }
    println!();
}

/// Display non-blocking validation warnings.
pub fn display_warnings(warnings: &[ValidationIssue]) {
    for warning in warnings {
        println!("Warning: {}", warning);
    }
}

/// Display the purchasable plan types.
pub fn display_plan_types() {
    println!();
    println!("=== Available Plans ===");
    for plan in PlanType::ALL {
        println!();
        println!("{} ({}) - R$ {:.2}", plan.name(), plan.key(), plan.price());
        for feature in plan.features() {
            println!("  + {}", feature);
        }
    }
    println!();
}
