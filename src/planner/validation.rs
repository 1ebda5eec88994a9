use std::fmt;

use tracing::{debug, warn};

use crate::models::{Gender, MealSelections, MealSlot, Objective, PersonalProfile};
use crate::planner::constants::MIN_SELECTIONS_PER_SLOT;
use crate::state::DietForm;

/// Personal-data fields the form must collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Weight,
    Height,
    Age,
    Objective,
    CalorieTarget,
    MealTimes,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Weight,
        ProfileField::Height,
        ProfileField::Age,
        ProfileField::Objective,
        ProfileField::CalorieTarget,
        ProfileField::MealTimes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Weight => "weight",
            ProfileField::Height => "height",
            ProfileField::Age => "age",
            ProfileField::Objective => "objective",
            ProfileField::CalorieTarget => "calorie target",
            ProfileField::MealTimes => "meal times",
        }
    }
}

/// A single problem found in a candidate plan input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingField(ProfileField),
    /// Present but out of range (non-positive or non-finite).
    InvalidValue(ProfileField),
    GenderNotSelected,
    InsufficientSelection { slot: MealSlot, count: usize },
    /// Non-blocking: the target falls back to TDEE.
    UnrecognizedObjective(String),
}

impl ValidationIssue {
    pub fn is_blocking(&self) -> bool {
        !matches!(self, ValidationIssue::UnrecognizedObjective(_))
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingField(field) => write!(f, "missing {}", field.label()),
            ValidationIssue::InvalidValue(field) => {
                write!(f, "{} must be a positive number", field.label())
            }
            ValidationIssue::GenderNotSelected => write!(f, "gender not selected"),
            ValidationIssue::InsufficientSelection { slot, count } => {
                write!(f, "{} ({} selected)", slot.display_name(), count)
            }
            ValidationIssue::UnrecognizedObjective(raw) => {
                write!(f, "unrecognized objective '{}', using maintenance calories", raw)
            }
        }
    }
}

/// Every blocking issue found, reported together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        self.issues
            .iter()
            .filter_map(|issue| match issue {
                ValidationIssue::MissingField(field) => Some(*field),
                _ => None,
            })
            .collect()
    }

    pub fn invalid_fields(&self) -> Vec<ProfileField> {
        self.issues
            .iter()
            .filter_map(|issue| match issue {
                ValidationIssue::InvalidValue(field) => Some(*field),
                _ => None,
            })
            .collect()
    }

    pub fn gender_missing(&self) -> bool {
        self.issues.contains(&ValidationIssue::GenderNotSelected)
    }

    /// Slots below the minimum, with their current counts.
    pub fn short_slots(&self) -> Vec<(MealSlot, usize)> {
        self.issues
            .iter()
            .filter_map(|issue| match issue {
                ValidationIssue::InsufficientSelection { slot, count } => Some((*slot, *count)),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To generate your diet you need to:")?;

        let mut fields: Vec<&str> = self.missing_fields().iter().map(|field| field.label()).collect();
        if self.gender_missing() {
            fields.push("gender");
        }
        if !fields.is_empty() {
            writeln!(f, "  - Fill in the fields: {}", fields.join(", "))?;
        }

        let invalid: Vec<&str> = self.invalid_fields().iter().map(|field| field.label()).collect();
        if !invalid.is_empty() {
            writeln!(f, "  - Enter positive values for: {}", invalid.join(", "))?;
        }

        let short = self.short_slots();
        if !short.is_empty() {
            writeln!(
                f,
                "  - Select at least {} items in each meal:",
                MIN_SELECTIONS_PER_SLOT
            )?;
            for (slot, count) in short {
                writeln!(f, "      * {} ({} selected)", slot.display_name(), count)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Input that passed the validation gate, ready for the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub profile: PersonalProfile,
    pub gender: Gender,
    pub meals: MealSelections,
    /// Non-blocking issues (e.g. an unrecognized objective).
    pub warnings: Vec<ValidationIssue>,
}

/// Check that a plan can be computed from the form.
///
/// Collects every issue instead of stopping at the first one.
pub fn validate(form: &DietForm) -> Result<ValidatedInput, ValidationErrors> {
    let mut issues = Vec::new();

    let objective = form
        .objective
        .as_ref()
        .filter(|o| !o.key().trim().is_empty());

    // Loaded forms skip the setters, so ranges are checked here too.
    let positive = |value: f64| value.is_finite() && value > 0.0;

    for field in ProfileField::ALL {
        let state = match field {
            ProfileField::Weight => form.weight_kg.map(positive),
            ProfileField::Height => form.height_cm.map(positive),
            ProfileField::Age => form.age_years.map(|age| age > 0),
            ProfileField::Objective => objective.map(|_| true),
            ProfileField::CalorieTarget => form.calorie_target.map(|_| true),
            ProfileField::MealTimes => (!form.meal_times.is_empty()).then_some(true),
        };
        match state {
            None => issues.push(ValidationIssue::MissingField(field)),
            Some(false) => issues.push(ValidationIssue::InvalidValue(field)),
            Some(true) => {}
        }
    }

    if form.gender.is_none() {
        issues.push(ValidationIssue::GenderNotSelected);
    }

    for slot in MealSlot::ALL {
        let count = form.meals.count(slot);
        if count < MIN_SELECTIONS_PER_SLOT {
            issues.push(ValidationIssue::InsufficientSelection { slot, count });
        }
    }

    let fields = (
        form.weight_kg,
        form.height_cm,
        form.age_years,
        objective.cloned(),
        form.calorie_target,
        form.gender,
    );

    match fields {
        (
            Some(weight_kg),
            Some(height_cm),
            Some(age_years),
            Some(objective),
            Some(calorie_target),
            Some(gender),
        ) if issues.is_empty() => {
            let mut warnings = Vec::new();
            if let Objective::Other(raw) = &objective {
                warn!(objective = %raw, "unrecognized objective accepted");
                warnings.push(ValidationIssue::UnrecognizedObjective(raw.clone()));
            }

            Ok(ValidatedInput {
                profile: PersonalProfile {
                    weight_kg,
                    height_cm,
                    age_years,
                    objective,
                    calorie_target,
                    meal_times: form.meal_times.clone(),
                },
                gender,
                meals: form.meals.clone(),
                warnings,
            })
        }
        _ => {
            debug!(issues = issues.len(), "form validation failed");
            Err(ValidationErrors { issues })
        }
    }
}
