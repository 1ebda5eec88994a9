use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Gender, MealSlot, Objective};
use crate::planner::constants::{
    food_catalog, DEFAULT_MEAL_TIMES, FUZZY_MATCH_THRESHOLD, MIN_SELECTIONS_PER_SLOT,
};
use crate::state::DietForm;

/// Prompt until the setter accepts the input.
fn prompt_field<F>(prompt: &str, default: Option<&str>, mut apply: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    loop {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let value = input.interact_text()?;

        match apply(&value) {
            Ok(()) => return Ok(()),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for the personal-data fields of the form.
pub fn prompt_personal_data(form: &mut DietForm) -> Result<()> {
    prompt_field("Weight (kg)", None, |v| form.set_weight(v))?;
    prompt_field("Height (cm)", None, |v| form.set_height(v))?;
    prompt_field("Age (years)", None, |v| form.set_age(v))?;

    let objectives = Objective::recognized();
    let labels: Vec<&str> = objectives.iter().map(|o| o.label()).collect();
    let choice = Select::new()
        .with_prompt("What is your objective?")
        .items(&labels)
        .default(0)
        .interact()?;
    form.objective = Some(objectives[choice].clone());

    prompt_field(
        "Daily calories (number, or 'unspecified' to calculate)",
        Some("unspecified"),
        |v| form.set_calorie_target(v),
    )?;

    let times: String = Input::new()
        .with_prompt("Meal times (comma-separated, one per meal)")
        .default(DEFAULT_MEAL_TIMES.to_string())
        .interact_text()?;
    form.set_meal_times(&times);

    Ok(())
}

/// Prompt for gender.
pub fn prompt_gender(form: &mut DietForm) -> Result<()> {
    let options = [Gender::Male, Gender::Female];
    let labels: Vec<&str> = options.iter().map(|g| g.label()).collect();
    let choice = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(0)
        .interact()?;
    form.select_gender(options[choice]);
    Ok(())
}

/// Catalog foods ranked by similarity to `input`, best first.
pub fn fuzzy_matches<'a>(input: &str, catalog: &[&'a str]) -> Vec<&'a str> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&str, f64)> = catalog
        .iter()
        .map(|name| (*name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(name, _)| name).collect()
}

/// Prompt for foods not in the checklist, with fuzzy matching against it.
fn prompt_extra_foods(form: &mut DietForm, slot: MealSlot) -> Result<()> {
    let catalog = food_catalog(slot);

    loop {
        let input: String = Input::new()
            .with_prompt(format!(
                "Add another food to {} (or press Enter to finish)",
                slot.display_name()
            ))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        let matches = fuzzy_matches(input, catalog);
        let exact = matches
            .iter()
            .find(|name| name.eq_ignore_ascii_case(input))
            .copied();

        let food = match (exact, matches.first()) {
            (Some(name), _) => name.to_string(),
            (None, Some(best)) => {
                let use_match = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", best))
                    .default(true)
                    .interact()?;
                if use_match {
                    best.to_string()
                } else {
                    input.to_string()
                }
            }
            (None, None) => input.to_string(),
        };

        if form.meals.select(slot, &food) {
            println!("Added: {}", food);
        } else {
            println!("'{}' is already selected", food);
        }
    }
}

/// Prompt for the foods of every meal slot.
///
/// Each slot is re-prompted until it has the minimum number of foods.
pub fn prompt_meal_selections(form: &mut DietForm) -> Result<()> {
    for slot in MealSlot::ALL {
        let catalog = food_catalog(slot);

        loop {
            let checked: Vec<bool> = catalog
                .iter()
                .map(|name| form.meals.foods(slot).any(|f| f == *name))
                .collect();

            let picked = MultiSelect::new()
                .with_prompt(format!(
                    "{}: pick at least {} foods (space to toggle, enter to confirm)",
                    slot.display_name(),
                    MIN_SELECTIONS_PER_SLOT
                ))
                .items(catalog)
                .defaults(&checked)
                .interact()?;

            for (i, name) in catalog.iter().enumerate() {
                if picked.contains(&i) != checked[i] {
                    form.toggle_food(slot, name);
                }
            }

            prompt_extra_foods(form, slot)?;

            let count = form.meals.count(slot);
            if count >= MIN_SELECTIONS_PER_SLOT {
                break;
            }
            println!(
                "{} has {} selected; please pick at least {}.",
                slot.display_name(),
                count,
                MIN_SELECTIONS_PER_SLOT
            );
        }
    }

    Ok(())
}

/// Run the full interactive form.
pub fn collect_form() -> Result<DietForm> {
    let mut form = DietForm::new();
    prompt_personal_data(&mut form)?;
    prompt_gender(&mut form)?;
    prompt_meal_selections(&mut form)?;
    println!("Form {:.0}% complete", form.progress());
    Ok(form)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a single line of text.
pub fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
}

/// Prompt for a password without echo.
pub fn prompt_password(prompt: &str) -> Result<String> {
    Ok(dialoguer::Password::new().with_prompt(prompt).interact()?)
}
