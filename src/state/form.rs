use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DietError, Result};
use crate::models::{CalorieTarget, Gender, MealSelections, MealSlot, Objective};
use crate::planner::constants::{FORM_PROGRESS_WEIGHT, READY_PROGRESS};
use crate::planner::validation::{self, ProfileField, ValidatedInput, ValidationErrors};

/// Personal data and meal selections gathered before a plan is computed.
///
/// The only place form input is mutated. The calculator receives a
/// `ValidatedInput` produced by `validate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietForm {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<u32>,
    pub objective: Option<Objective>,
    pub calorie_target: Option<CalorieTarget>,
    pub meal_times: Vec<String>,
    pub gender: Option<Gender>,
    pub meals: MealSelections,
}

fn parse_positive(field: &str, raw: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.replace(',', ".").parse::<f64>() {
        Ok(value) if value > 0.0 && value.is_finite() => Ok(Some(value)),
        _ => Err(DietError::InvalidInput(format!(
            "{} must be a positive number, got '{}'",
            field, raw
        ))),
    }
}

impl DietForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set weight in kg. Empty input clears the field.
    pub fn set_weight(&mut self, raw: &str) -> Result<()> {
        self.weight_kg = parse_positive("Weight", raw)?;
        Ok(())
    }

    /// Set height in cm. Empty input clears the field.
    pub fn set_height(&mut self, raw: &str) -> Result<()> {
        self.height_cm = parse_positive("Height", raw)?;
        Ok(())
    }

    /// Set age in whole years. Empty input clears the field.
    pub fn set_age(&mut self, raw: &str) -> Result<()> {
        let raw = raw.trim();
        self.age_years = if raw.is_empty() {
            None
        } else {
            match raw.parse::<u32>() {
                Ok(age) if age > 0 => Some(age),
                _ => {
                    return Err(DietError::InvalidInput(format!(
                        "Age must be a positive whole number, got '{}'",
                        raw
                    )));
                }
            }
        };
        Ok(())
    }

    pub fn set_objective(&mut self, raw: &str) {
        let raw = raw.trim();
        self.objective = (!raw.is_empty()).then(|| Objective::from(raw.to_string()));
    }

    pub fn set_calorie_target(&mut self, raw: &str) -> Result<()> {
        let raw = raw.trim();
        self.calorie_target = if raw.is_empty() {
            None
        } else {
            Some(raw.parse()?)
        };
        Ok(())
    }

    /// Set meal times from a comma-separated list.
    pub fn set_meal_times(&mut self, raw: &str) {
        self.meal_times = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    /// Flip a food's selection in a slot; returns whether it is now selected.
    pub fn toggle_food(&mut self, slot: MealSlot, food: &str) -> bool {
        let selected = self.meals.toggle(slot, food);
        debug!(slot = slot.key(), food, selected, "toggled food");
        selected
    }

    /// Completion percentage (0-100).
    ///
    /// Personal fields plus gender make up one half, slots with at least
    /// one selection the other.
    pub fn progress(&self) -> f64 {
        let filled = ProfileField::ALL
            .into_iter()
            .filter(|field| self.has_field(*field))
            .count()
            + usize::from(self.gender.is_some());
        let total_fields = ProfileField::ALL.len() + 1;

        let form_part = filled as f64 / total_fields as f64 * FORM_PROGRESS_WEIGHT;
        let meal_part = self.meals.slots_with_selections() as f64 / MealSlot::ALL.len() as f64
            * (100.0 - FORM_PROGRESS_WEIGHT);

        form_part + meal_part
    }

    /// Whether enough is filled in to offer plan generation.
    pub fn is_ready(&self) -> bool {
        self.progress() >= READY_PROGRESS
    }

    fn has_field(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Weight => self.weight_kg.is_some(),
            ProfileField::Height => self.height_cm.is_some(),
            ProfileField::Age => self.age_years.is_some(),
            ProfileField::Objective => self.objective.is_some(),
            ProfileField::CalorieTarget => self.calorie_target.is_some(),
            ProfileField::MealTimes => !self.meal_times.is_empty(),
        }
    }

    pub fn validate(&self) -> std::result::Result<ValidatedInput, ValidationErrors> {
        validation::validate(self)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
