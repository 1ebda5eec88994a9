use serde::{Deserialize, Serialize};

use crate::models::{Gender, MealSlot, Objective};
use crate::planner::constants::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};

/// Macronutrient grams for one meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
}

impl MacroGrams {
    /// Energy represented by these grams.
    pub fn kcal(&self) -> i32 {
        self.protein * KCAL_PER_GRAM_PROTEIN as i32
            + self.carbs * KCAL_PER_GRAM_CARBS as i32
            + self.fats * KCAL_PER_GRAM_FAT as i32
    }
}

/// A single planned meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDetail {
    pub slot: MealSlot,
    pub display_name: String,
    pub calories: i32,
    /// 3-4 foods sampled from the slot's selections (fewer if fewer were picked).
    pub chosen_foods: Vec<String>,
    pub macros: MacroGrams,
    pub suggestions: Vec<String>,
}

/// Meals in schedule order, one per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub meals: Vec<MealDetail>,
}

impl MealPlan {
    pub fn get(&self, slot: MealSlot) -> Option<&MealDetail> {
        self.meals.iter().find(|m| m.slot == slot)
    }

    pub fn total_calories(&self) -> i32 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}

/// Computed diet plan. Never mutated; recompute to change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub basal_metabolic_rate: i32,
    pub total_daily_energy_expenditure: i32,
    pub target_calories: i32,
    pub objective: Objective,
    pub gender: Gender,
    pub meal_plan: MealPlan,
    pub meal_times: Vec<String>,
}

impl DietPlan {
    /// Meals paired with the time at the same position, `None` when absent.
    pub fn schedule(&self) -> impl Iterator<Item = (&MealDetail, Option<&str>)> {
        self.meal_plan
            .meals
            .iter()
            .enumerate()
            .map(|(i, meal)| (meal, self.meal_times.get(i).map(String::as_str)))
    }
}
