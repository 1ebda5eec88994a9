use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DietError;

/// Biological sex used to pick the BMR formula branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[serde(alias = "masculino")]
    Male,
    #[serde(alias = "feminino")]
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "masculino" => Ok(Gender::Male),
            "female" | "f" | "feminino" => Ok(Gender::Female),
            other => Err(DietError::InvalidInput(format!("Unknown gender: {}", other))),
        }
    }
}

/// Diet goal that drives the calorie adjustment.
///
/// Unknown values are kept verbatim in `Other` and treated as maintenance
/// (no adjustment) instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Objective {
    LoseWeight,
    LoseWeightGainMuscle,
    DefineAndGainMuscle,
    GainMuscle,
    Other(String),
}

impl Objective {
    /// The four objectives the calculator knows how to adjust for.
    pub fn recognized() -> [Objective; 4] {
        [
            Objective::LoseWeight,
            Objective::LoseWeightGainMuscle,
            Objective::DefineAndGainMuscle,
            Objective::GainMuscle,
        ]
    }

    pub fn key(&self) -> &str {
        match self {
            Objective::LoseWeight => "lose_weight",
            Objective::LoseWeightGainMuscle => "lose_weight_gain_muscle",
            Objective::DefineAndGainMuscle => "define_and_gain_muscle",
            Objective::GainMuscle => "gain_muscle",
            Objective::Other(raw) => raw,
        }
    }

    /// Human-readable label; unknown objectives echo their raw value.
    pub fn label(&self) -> &str {
        match self {
            Objective::LoseWeight => "Lose Weight",
            Objective::LoseWeightGainMuscle => "Lose Weight + Gain Muscle",
            Objective::DefineAndGainMuscle => "Definition + Gain Muscle",
            Objective::GainMuscle => "Gain Muscle",
            Objective::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Objective::Other(_))
    }
}

impl From<String> for Objective {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().replace('-', "_").as_str() {
            "lose_weight" | "emagrecer" => Objective::LoseWeight,
            "lose_weight_gain_muscle" | "emagrecer_massa" => Objective::LoseWeightGainMuscle,
            "define_and_gain_muscle" | "definicao_massa" => Objective::DefineAndGainMuscle,
            "gain_muscle" | "ganhar_massa" => Objective::GainMuscle,
            _ => Objective::Other(raw),
        }
    }
}

impl From<Objective> for String {
    fn from(objective: Objective) -> Self {
        objective.key().to_string()
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily calorie preference: an explicit override, or unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CalorieTarget {
    Unspecified,
    Fixed(u32),
}

impl CalorieTarget {
    pub fn as_override(&self) -> Option<u32> {
        match self {
            CalorieTarget::Unspecified => None,
            CalorieTarget::Fixed(kcal) => Some(*kcal),
        }
    }
}

impl FromStr for CalorieTarget {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "unspecified" | "auto" | "unknown" | "nao-sei" => return Ok(CalorieTarget::Unspecified),
            _ => {}
        }

        match s.parse::<u32>() {
            Ok(kcal) if kcal > 0 => Ok(CalorieTarget::Fixed(kcal)),
            _ => Err(DietError::InvalidInput(format!(
                "Calorie target must be a positive integer or 'unspecified', got '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for CalorieTarget {
    type Error = DietError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalorieTarget> for String {
    fn from(target: CalorieTarget) -> Self {
        match target {
            CalorieTarget::Unspecified => "unspecified".to_string(),
            CalorieTarget::Fixed(kcal) => kcal.to_string(),
        }
    }
}

/// Validated personal data the calculator runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub objective: Objective,
    pub calorie_target: CalorieTarget,
    /// One time-of-day string per meal slot, in slot order.
    pub meal_times: Vec<String>,
}
