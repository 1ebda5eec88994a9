pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{DietError, Result};
pub use models::{DietPlan, MealPlan, MealSelections, MealSlot, PersonalProfile};
