use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DietError;

/// Purchasable plans offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanType {
    #[serde(rename = "emagrecimento")]
    WeightLoss,
    #[serde(rename = "dieta-treino")]
    DietAndTraining,
    #[serde(rename = "nutricionista")]
    Nutritionist,
    #[serde(rename = "emagrecer-massa")]
    LoseWeightGainMuscle,
    #[serde(rename = "ganho-massa")]
    MuscleGain,
    #[serde(rename = "definicao-massa")]
    DefinitionAndMuscle,
}

impl PlanType {
    pub const ALL: [PlanType; 6] = [
        PlanType::WeightLoss,
        PlanType::DietAndTraining,
        PlanType::Nutritionist,
        PlanType::LoseWeightGainMuscle,
        PlanType::MuscleGain,
        PlanType::DefinitionAndMuscle,
    ];

    /// Identifier the backend expects.
    pub fn key(&self) -> &'static str {
        match self {
            PlanType::WeightLoss => "emagrecimento",
            PlanType::DietAndTraining => "dieta-treino",
            PlanType::Nutritionist => "nutricionista",
            PlanType::LoseWeightGainMuscle => "emagrecer-massa",
            PlanType::MuscleGain => "ganho-massa",
            PlanType::DefinitionAndMuscle => "definicao-massa",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanType::WeightLoss => "Weight Loss Diet",
            PlanType::DietAndTraining => "Diet + Training",
            PlanType::Nutritionist => "Nutritionist Follow-up",
            PlanType::LoseWeightGainMuscle => "Lose Weight + Muscle Diet",
            PlanType::MuscleGain => "Muscle Gain Diet",
            PlanType::DefinitionAndMuscle => "Definition + Muscle Diet",
        }
    }

    /// Price in BRL.
    pub fn price(&self) -> f64 {
        match self {
            PlanType::WeightLoss => 9.99,
            PlanType::DietAndTraining => 14.99,
            PlanType::Nutritionist => 19.99,
            PlanType::LoseWeightGainMuscle => 10.99,
            PlanType::MuscleGain => 15.99,
            PlanType::DefinitionAndMuscle => 16.99,
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            PlanType::WeightLoss => &[
                "Personalized diet",
                "Adjusted calories",
                "Meal times",
                "Personalized ebook",
            ],
            PlanType::DietAndTraining => &[
                "Personalized diet",
                "Personalized workouts",
                "For home or gym",
                "Complete ebook",
            ],
            PlanType::Nutritionist => &[
                "Diet reviewed by a nutritionist",
                "WhatsApp consultation",
                "Diet adjustments",
                "Full follow-up",
            ],
            PlanType::LoseWeightGainMuscle => &[
                "Personalized diet",
                "To lose weight and define",
                "Adjusted calories",
            ],
            PlanType::MuscleGain => &[
                "Diet for muscle gain",
                "High calorie value",
                "Adequate protein",
            ],
            PlanType::DefinitionAndMuscle => &[
                "Diet for definition",
                "Muscle maintenance",
                "Controlled cutting",
            ],
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PlanType {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PlanType::ALL
            .into_iter()
            .find(|plan| plan.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = PlanType::ALL.iter().map(|p| p.key()).collect();
                DietError::InvalidInput(format!(
                    "Unknown plan '{}', expected one of: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_keys() {
        for plan in PlanType::ALL {
            assert_eq!(plan.key().parse::<PlanType>().unwrap(), plan);
        }
        assert!("premium".parse::<PlanType>().is_err());
    }

    #[test]
    fn test_serializes_to_backend_key() {
        let json = serde_json::to_string(&PlanType::MuscleGain).unwrap();
        assert_eq!(json, "\"ganho-massa\"");
    }
}
