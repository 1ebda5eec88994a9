use gymmind_diet::interface::{plan_to_text, write_csv};
use gymmind_diet::models::{Gender, MealSlot};
use gymmind_diet::planner::{generate_plan, PlanOptions, ProfileField, ValidationIssue};
use gymmind_diet::state::{load_form, save_form, DietForm};

use chrono::NaiveDate;
use tempfile::TempDir;

const FOODS: [&str; 5] = ["Eggs", "Oats", "Banana", "Yogurt", "Chicken"];

fn complete_form() -> DietForm {
    let mut form = DietForm::new();
    form.set_weight("70").unwrap();
    form.set_height("175").unwrap();
    form.set_age("30").unwrap();
    form.set_objective("lose_weight");
    form.set_calorie_target("unspecified").unwrap();
    form.set_meal_times("07:00, 10:00, 12:30, 15:30, 19:30");
    form.select_gender(Gender::Male);

    for slot in MealSlot::ALL {
        for food in FOODS {
            form.toggle_food(slot, food);
        }
    }
    // Dinner keeps only two selections.
    form.toggle_food(MealSlot::Dinner, "Banana");
    form.toggle_food(MealSlot::Dinner, "Yogurt");
    form.toggle_food(MealSlot::Dinner, "Chicken");
    form
}

#[test]
fn test_complete_form_produces_plan() {
    let form = complete_form();
    assert_eq!(form.progress(), 100.0);
    assert!(form.is_ready());

    let input = form.validate().unwrap();
    assert!(input.warnings.is_empty());

    let options = PlanOptions {
        seed: Some(42),
        ..PlanOptions::default()
    };
    let plan = generate_plan(&input, &options);

    assert_eq!(plan.basal_metabolic_rate, 1696);
    assert_eq!(plan.total_daily_energy_expenditure, 2628);
    assert_eq!(plan.target_calories, 2128);

    let slots: Vec<MealSlot> = plan.meal_plan.meals.iter().map(|m| m.slot).collect();
    assert_eq!(slots, MealSlot::ALL.to_vec());

    for meal in &plan.meal_plan.meals {
        let expected = if meal.slot == MealSlot::Dinner { 2 } else { 4 };
        assert_eq!(meal.chosen_foods.len(), expected, "{}", meal.display_name);
        assert!(meal
            .chosen_foods
            .iter()
            .all(|food| FOODS.contains(&food.as_str())));
        assert!(!meal.suggestions.is_empty());
    }

    // Slot weights sum to 1.20 of the target.
    let total = plan.meal_plan.total_calories();
    assert!((total - 2554).abs() <= 2, "total was {}", total);
}

#[test]
fn test_same_seed_same_plan() {
    let input = complete_form().validate().unwrap();
    let options = PlanOptions {
        seed: Some(7),
        ..PlanOptions::default()
    };
    assert_eq!(generate_plan(&input, &options), generate_plan(&input, &options));
}

#[test]
fn test_normalized_plan_matches_target() {
    let input = complete_form().validate().unwrap();
    let options = PlanOptions {
        normalize_meal_weights: true,
        seed: Some(1),
    };
    let plan = generate_plan(&input, &options);
    assert!((plan.meal_plan.total_calories() - plan.target_calories).abs() <= 2);
}

#[test]
fn test_empty_form_reports_everything() {
    let errors = DietForm::new().validate().unwrap_err();

    assert_eq!(errors.missing_fields(), ProfileField::ALL.to_vec());
    assert!(errors.gender_missing());
    assert_eq!(errors.short_slots().len(), MealSlot::ALL.len());

    let message = errors.to_string();
    assert!(message.starts_with("To generate your diet you need to:"));
    assert!(message.contains("gender"));
    assert!(message.contains("Lunch (0 selected)"));
}

#[test]
fn test_single_selection_blocks_plan() {
    let mut form = complete_form();
    form.toggle_food(MealSlot::Dinner, "Oats");

    let errors = form.validate().unwrap_err();
    assert_eq!(errors.short_slots(), vec![(MealSlot::Dinner, 1)]);
    assert!(errors.missing_fields().is_empty());
    assert!(!errors.gender_missing());
}

#[test]
fn test_unknown_objective_is_a_warning() {
    let mut form = complete_form();
    form.set_objective("bulk-up");

    let input = form.validate().unwrap();
    assert_eq!(
        input.warnings,
        vec![ValidationIssue::UnrecognizedObjective("bulk-up".to_string())]
    );

    // No delta for an unknown objective: target equals TDEE.
    let plan = generate_plan(&input, &PlanOptions::default());
    assert_eq!(plan.target_calories, plan.total_daily_energy_expenditure);
}

#[test]
fn test_form_round_trip_then_export() {
    let dir = TempDir::new().unwrap();
    let form_path = dir.path().join("form.json");
    save_form(&form_path, &complete_form()).unwrap();

    let form = load_form(&form_path).unwrap();
    assert_eq!(form, complete_form());

    let options = PlanOptions {
        seed: Some(3),
        ..PlanOptions::default()
    };
    let plan = generate_plan(&form.validate().unwrap(), &options);

    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let text = plan_to_text(&plan, date);
    assert!(text.contains("2128"));
    assert!(text.contains("Generated on: 09/03/2024"));

    let csv_path = dir.path().join("plan.csv");
    write_csv(&csv_path, &plan).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with("breakfast,07:00,"));
    assert!(lines[5].starts_with("dinner,19:30,"));
}

#[test]
fn test_loaded_form_with_bad_values_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{
            "weight_kg": -70,
            "height_cm": 0,
            "age_years": 0,
            "objective": "lose_weight",
            "calorie_target": "unspecified",
            "meal_times": ["07:00"],
            "gender": "male",
            "meals": {
                "breakfast": ["", " "],
                "morning_snack": ["Banana", "Yogurt"],
                "lunch": ["Rice", "Beans"],
                "afternoon_snack": ["Nuts", "Apple"],
                "dinner": ["Fish", "Salad"]
            }
        }"#,
    )
    .unwrap();

    let form = load_form(&path).unwrap();
    assert_eq!(form.meals.count(MealSlot::Breakfast), 0);

    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.invalid_fields(),
        vec![ProfileField::Weight, ProfileField::Height, ProfileField::Age]
    );
    assert_eq!(errors.short_slots(), vec![(MealSlot::Breakfast, 0)]);
}
