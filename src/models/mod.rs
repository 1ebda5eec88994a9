mod meal;
mod plan;
mod profile;

pub use meal::{MealSelections, MealSlot};
pub use plan::{DietPlan, MacroGrams, MealDetail, MealPlan};
pub use profile::{CalorieTarget, Gender, Objective, PersonalProfile};
