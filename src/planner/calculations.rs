use tracing::warn;

use crate::models::{CalorieTarget, Gender, MacroGrams, MealSlot, Objective, PersonalProfile};
use crate::planner::constants::*;

/// Basal metabolic rate (kcal/day), Harris-Benedict revised.
///
/// Inputs are assumed validated; no clamping is applied.
pub fn compute_bmr(profile: &PersonalProfile, gender: Gender) -> f64 {
    let weight = profile.weight_kg;
    let height = profile.height_cm;
    let age = profile.age_years as f64;

    match gender {
        Gender::Male => {
            MALE_BMR_BASE + MALE_BMR_WEIGHT * weight + MALE_BMR_HEIGHT * height
                - MALE_BMR_AGE * age
        }
        Gender::Female => {
            FEMALE_BMR_BASE + FEMALE_BMR_WEIGHT * weight + FEMALE_BMR_HEIGHT * height
                - FEMALE_BMR_AGE * age
        }
    }
}

/// Total daily energy expenditure at the fixed activity level.
pub fn compute_tdee(bmr: f64) -> f64 {
    bmr * ACTIVITY_MULTIPLIER
}

/// Calorie adjustment for an objective. Unknown objectives keep TDEE.
pub fn objective_delta(objective: &Objective) -> f64 {
    match objective {
        Objective::LoseWeight => LOSE_WEIGHT_DELTA,
        Objective::LoseWeightGainMuscle => LOSE_WEIGHT_GAIN_MUSCLE_DELTA,
        Objective::DefineAndGainMuscle => DEFINE_AND_GAIN_MUSCLE_DELTA,
        Objective::GainMuscle => GAIN_MUSCLE_DELTA,
        Objective::Other(raw) => {
            warn!(objective = %raw, "unrecognized objective, using TDEE as target");
            0.0
        }
    }
}

/// Daily calorie target.
///
/// An explicit calorie override replaces the objective-derived value.
pub fn compute_target_calories(tdee: f64, objective: &Objective, preference: CalorieTarget) -> f64 {
    match preference.as_override() {
        Some(kcal) => kcal as f64,
        None => tdee + objective_delta(objective),
    }
}

/// Calories allocated to one slot.
///
/// With `normalize` the slot weights are rescaled to sum to 1.0.
pub fn meal_calories(target_calories: f64, slot: MealSlot, normalize: bool) -> i32 {
    let weight = if normalize {
        meal_weight(slot) / meal_weight_total()
    } else {
        meal_weight(slot)
    };
    (target_calories * weight).round() as i32
}

/// Macro grams for a meal with the given split.
pub fn macros_from_split(calories: i32, split: MacroSplit) -> MacroGrams {
    let calories = calories as f64;
    MacroGrams {
        protein: (calories * split.protein / KCAL_PER_GRAM_PROTEIN).round() as i32,
        carbs: (calories * split.carbs / KCAL_PER_GRAM_CARBS).round() as i32,
        fats: (calories * split.fats / KCAL_PER_GRAM_FAT).round() as i32,
    }
}

/// Macro grams for a meal in the given slot.
pub fn compute_macros(calories: i32, slot: MealSlot) -> MacroGrams {
    macros_from_split(calories, macro_split(slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn profile(weight: f64, height: f64, age: u32) -> PersonalProfile {
        PersonalProfile {
            weight_kg: weight,
            height_cm: height,
            age_years: age,
            objective: Objective::LoseWeight,
            calorie_target: CalorieTarget::Unspecified,
            meal_times: vec![],
        }
    }

    #[test]
    fn test_bmr_male_branch() {
        let bmr = compute_bmr(&profile(70.0, 175.0, 30), Gender::Male);
        // 88.362 + 937.79 + 839.825 - 170.31
        assert_float_absolute_eq!(bmr, 1695.667, 1e-9);
    }

    #[test]
    fn test_bmr_female_branch() {
        let bmr = compute_bmr(&profile(60.0, 165.0, 25), Gender::Female);
        // 447.593 + 554.82 + 511.17 - 108.25
        assert_float_absolute_eq!(bmr, 1405.333, 1e-9);
    }

    #[test]
    fn test_tdee_uses_fixed_multiplier() {
        assert_float_absolute_eq!(compute_tdee(1000.0), 1550.0, 1e-9);
    }

    #[test]
    fn test_objective_deltas() {
        let tdee = 2500.0;
        let cases = [
            (Objective::LoseWeight, 2000.0),
            (Objective::LoseWeightGainMuscle, 2200.0),
            (Objective::DefineAndGainMuscle, 2500.0),
            (Objective::GainMuscle, 2800.0),
            (Objective::Other("mystery".to_string()), 2500.0),
        ];
        for (objective, expected) in cases {
            let target = compute_target_calories(tdee, &objective, CalorieTarget::Unspecified);
            assert_float_absolute_eq!(target, expected, 1e-9);
        }
    }

    #[test]
    fn test_override_replaces_objective() {
        let target =
            compute_target_calories(2500.0, &Objective::GainMuscle, CalorieTarget::Fixed(1800));
        assert_float_absolute_eq!(target, 1800.0, 1e-9);
    }

    #[test]
    fn test_meal_calories_keep_weight_table() {
        assert_eq!(meal_calories(2000.0, MealSlot::Breakfast, false), 500);
        assert_eq!(meal_calories(2000.0, MealSlot::Lunch, false), 700);
        assert_eq!(meal_calories(2000.0, MealSlot::Dinner, false), 600);

        let total: i32 = MealSlot::ALL
            .into_iter()
            .map(|slot| meal_calories(2000.0, slot, false))
            .sum();
        assert_eq!(total, 2400);
    }

    #[test]
    fn test_meal_calories_normalized() {
        let total: i32 = MealSlot::ALL
            .into_iter()
            .map(|slot| meal_calories(2400.0, slot, true))
            .sum();
        assert_eq!(total, 2400);
        assert_eq!(meal_calories(2400.0, MealSlot::Breakfast, true), 500);
    }

    #[test]
    fn test_compute_macros_lunch() {
        // 800 * 0.30 / 4 = 60, 800 * 0.45 / 4 = 90, 800 * 0.25 / 9 = 22.2
        let macros = compute_macros(800, MealSlot::Lunch);
        assert_eq!(
            macros,
            MacroGrams {
                protein: 60,
                carbs: 90,
                fats: 22
            }
        );
    }

    #[test]
    fn test_default_split_used_for_unknown_name() {
        let macros = macros_from_split(1000, macro_split_by_name("brunch"));
        assert_eq!(
            macros,
            MacroGrams {
                protein: 75,
                carbs: 100,
                fats: 33
            }
        );
    }
}
