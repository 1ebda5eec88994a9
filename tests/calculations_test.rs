use assert_float_eq::assert_float_absolute_eq;

use gymmind_diet::models::{CalorieTarget, Gender, MealSlot, Objective, PersonalProfile};
use gymmind_diet::planner::{
    compute_bmr, compute_macros, compute_target_calories, compute_tdee, meal_calories,
    meal_weight_total, objective_delta, sample_size, ACTIVITY_MULTIPLIER,
};

fn make_profile(weight_kg: f64, height_cm: f64, age_years: u32) -> PersonalProfile {
    PersonalProfile {
        weight_kg,
        height_cm,
        age_years,
        objective: Objective::GainMuscle,
        calorie_target: CalorieTarget::Unspecified,
        meal_times: vec![],
    }
}

#[test]
fn test_bmr_harris_benedict() {
    let male = compute_bmr(&make_profile(70.0, 175.0, 30), Gender::Male);
    assert_float_absolute_eq!(male, 1695.667, 0.001);

    let female = compute_bmr(&make_profile(60.0, 165.0, 25), Gender::Female);
    assert_float_absolute_eq!(female, 1405.333, 0.001);
}

#[test]
fn test_bmr_moves_with_inputs() {
    for gender in [Gender::Male, Gender::Female] {
        let base = compute_bmr(&make_profile(70.0, 170.0, 40), gender);
        // Heavier and taller raise BMR, older lowers it.
        assert!(compute_bmr(&make_profile(80.0, 170.0, 40), gender) > base);
        assert!(compute_bmr(&make_profile(70.0, 180.0, 40), gender) > base);
        assert!(compute_bmr(&make_profile(70.0, 170.0, 50), gender) < base);
    }
}

#[test]
fn test_tdee_is_moderate_activity() {
    assert_float_absolute_eq!(compute_tdee(1000.0), 1550.0, 1e-9);
    assert_float_absolute_eq!(compute_tdee(1695.667), 1695.667 * ACTIVITY_MULTIPLIER, 1e-9);
}

#[test]
fn test_objective_deltas() {
    assert_eq!(objective_delta(&Objective::LoseWeight), -500.0);
    assert_eq!(objective_delta(&Objective::LoseWeightGainMuscle), -300.0);
    assert_eq!(objective_delta(&Objective::DefineAndGainMuscle), 0.0);
    assert_eq!(objective_delta(&Objective::GainMuscle), 300.0);
    assert_eq!(objective_delta(&Objective::Other("bulk".to_string())), 0.0);
}

#[test]
fn test_target_uses_objective_unless_overridden() {
    let tdee = 2628.28;
    assert_float_absolute_eq!(
        compute_target_calories(tdee, &Objective::LoseWeight, CalorieTarget::Unspecified),
        2128.28,
        1e-9
    );
    assert_float_absolute_eq!(
        compute_target_calories(tdee, &Objective::GainMuscle, CalorieTarget::Unspecified),
        2928.28,
        1e-9
    );

    // A fixed target ignores both TDEE and objective.
    for objective in Objective::recognized() {
        assert_eq!(
            compute_target_calories(tdee, &objective, CalorieTarget::Fixed(1800)),
            1800.0
        );
    }
}

#[test]
fn test_meal_weights_overshoot_target() {
    assert_float_absolute_eq!(meal_weight_total(), 1.20, 1e-9);

    let total: i32 = MealSlot::ALL
        .into_iter()
        .map(|slot| meal_calories(2000.0, slot, false))
        .sum();
    assert_eq!(total, 2400);
    assert_eq!(meal_calories(2000.0, MealSlot::Lunch, false), 700);
    assert_eq!(meal_calories(2000.0, MealSlot::Breakfast, false), 500);
}

#[test]
fn test_normalized_weights_match_target() {
    let total: i32 = MealSlot::ALL
        .into_iter()
        .map(|slot| meal_calories(2000.0, slot, true))
        .sum();
    assert_eq!(total, 2000);
}

#[test]
fn test_macro_energy_close_to_meal_calories() {
    // Three independently rounded gram counts: at most 2 + 2 + 4.5 kcal off.
    for slot in MealSlot::ALL {
        for calories in (0..3000).step_by(7) {
            let macros = compute_macros(calories, slot);
            let diff = (macros.kcal() - calories).abs();
            assert!(
                diff <= 9,
                "{} at {} kcal: macros give {} kcal",
                slot,
                calories,
                macros.kcal()
            );
        }
    }
}

#[test]
fn test_macros_never_negative() {
    for slot in MealSlot::ALL {
        let macros = compute_macros(0, slot);
        assert_eq!((macros.protein, macros.carbs, macros.fats), (0, 0, 0));
    }
}

#[test]
fn test_sample_size_clamped() {
    assert_eq!(sample_size(0), 3);
    assert_eq!(sample_size(2), 3);
    assert_eq!(sample_size(3), 3);
    assert_eq!(sample_size(4), 4);
    assert_eq!(sample_size(20), 4);
}
