use tracing::{debug, info};

use crate::models::{DietPlan, MealDetail, MealPlan, MealSelections, MealSlot};
use crate::planner::calculations::{
    compute_bmr, compute_macros, compute_target_calories, compute_tdee, meal_calories,
};
use crate::planner::constants::suggestions;
use crate::planner::sampling::{sample_foods, RandomSource, RngSource};
use crate::planner::validation::ValidatedInput;

/// Calculator options.
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Rescale the slot weights (which sum to 1.20) to sum to 1.0.
    pub normalize_meal_weights: bool,
    /// Seed for food sampling; `None` samples from OS entropy.
    pub seed: Option<u64>,
}

/// Build the five meals for a daily calorie target, in slot order.
pub fn build_meal_plan(
    target_calories: f64,
    selections: &MealSelections,
    rng: &mut dyn RandomSource,
    options: &PlanOptions,
) -> MealPlan {
    let meals = MealSlot::ALL
        .into_iter()
        .map(|slot| {
            let calories = meal_calories(target_calories, slot, options.normalize_meal_weights);
            let chosen_foods = sample_foods(selections.foods(slot), &mut *rng);
            debug!(slot = slot.key(), calories, foods = ?chosen_foods, "planned meal");

            MealDetail {
                slot,
                display_name: slot.display_name().to_string(),
                calories,
                chosen_foods,
                macros: compute_macros(calories, slot),
                suggestions: suggestions(slot).iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect();

    MealPlan { meals }
}

/// Compute a diet plan from validated input with an explicit random source.
pub fn compute_diet_plan(
    input: &ValidatedInput,
    rng: &mut dyn RandomSource,
    options: &PlanOptions,
) -> DietPlan {
    let profile = &input.profile;

    let bmr = compute_bmr(profile, input.gender);
    let tdee = compute_tdee(bmr);
    let target = compute_target_calories(tdee, &profile.objective, profile.calorie_target);

    info!(
        bmr = bmr.round(),
        tdee = tdee.round(),
        target = target.round(),
        objective = profile.objective.key(),
        "computed calorie target"
    );

    // Meals are allocated from the unrounded target.
    let meal_plan = build_meal_plan(target, &input.meals, rng, options);

    DietPlan {
        basal_metabolic_rate: bmr.round() as i32,
        total_daily_energy_expenditure: tdee.round() as i32,
        target_calories: target.round() as i32,
        objective: profile.objective.clone(),
        gender: input.gender,
        meal_plan,
        meal_times: profile.meal_times.clone(),
    }
}

/// Compute a diet plan, sampling foods from the seed in `options` if any.
pub fn generate_plan(input: &ValidatedInput, options: &PlanOptions) -> DietPlan {
    let mut rng = match options.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    compute_diet_plan(input, &mut rng, options)
}
