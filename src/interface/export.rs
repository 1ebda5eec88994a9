use std::fmt;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::DietPlan;
use crate::planner::constants::{GENERAL_TIPS, SCHEDULE_TIP};

const BANNER: &str = "==========================================";

/// Plain-text rendering of a plan, dated `generated_on`.
pub struct PlanText<'a> {
    pub plan: &'a DietPlan,
    pub generated_on: NaiveDate,
}

impl fmt::Display for PlanText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;

        writeln!(f, "GYMMIND - YOUR PERSONALIZED DIET")?;
        writeln!(f, "{}", BANNER)?;
        writeln!(f)?;

        writeln!(f, "Your Calculated Numbers")?;
        writeln!(f, "-----------------------")?;
        writeln!(f, "* Basal metabolic rate: {} kcal/day", plan.basal_metabolic_rate)?;
        writeln!(
            f,
            "* Total daily expenditure: {} kcal/day",
            plan.total_daily_energy_expenditure
        )?;
        writeln!(f, "* Calorie target: {} kcal/day", plan.target_calories)?;
        writeln!(f, "* Objective: {}", plan.objective.label())?;
        writeln!(f)?;

        for meal in &plan.meal_plan.meals {
            let title = format!("{} - {} kcal", meal.display_name, meal.calories);
            writeln!(f, "{}", title)?;
            writeln!(f, "{}", "-".repeat(title.len()))?;
            writeln!(
                f,
                "* Protein {}g, Carbs {}g, Fats {}g",
                meal.macros.protein, meal.macros.carbs, meal.macros.fats
            )?;
            writeln!(f, "* Your foods: {}", meal.chosen_foods.join(", "))?;
            for suggestion in &meal.suggestions {
                writeln!(f, "* {}", suggestion)?;
            }
            writeln!(f)?;
        }

        if !plan.meal_times.is_empty() {
            writeln!(f, "Meal Schedule")?;
            writeln!(f, "-------------")?;
            for (meal, time) in plan.schedule() {
                writeln!(
                    f,
                    "* {}: {} ({} kcal)",
                    meal.display_name,
                    time.unwrap_or("N/A"),
                    meal.calories
                )?;
            }
            writeln!(f, "* {}", SCHEDULE_TIP)?;
            writeln!(f)?;
        }

        writeln!(f, "Important Tips")?;
        writeln!(f, "--------------")?;
        for tip in GENERAL_TIPS {
            writeln!(f, "* {}", tip)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "Generated on: {}", self.generated_on.format("%d/%m/%Y"))
    }
}

/// Render a diet plan as plain text, dated `generated_on`.
pub fn plan_to_text(plan: &DietPlan, generated_on: NaiveDate) -> String {
    PlanText { plan, generated_on }.to_string()
}

/// Write the plain-text export to a file, dated today.
pub fn write_text(path: &Path, plan: &DietPlan) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    fs::write(path, plan_to_text(plan, today))?;
    Ok(())
}

/// Write one CSV row per meal.
pub fn write_csv(path: &Path, plan: &DietPlan) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "slot", "time", "calories", "protein_g", "carbs_g", "fats_g", "foods",
    ])?;

    for (meal, time) in plan.schedule() {
        wtr.write_record([
            meal.slot.key().to_string(),
            time.unwrap_or("").to_string(),
            meal.calories.to_string(),
            meal.macros.protein.to_string(),
            meal.macros.carbs.to_string(),
            meal.macros.fats.to_string(),
            meal.chosen_foods.join("; "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
