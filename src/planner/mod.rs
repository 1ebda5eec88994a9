pub mod calculations;
pub mod constants;
pub mod meal_plan;
pub mod sampling;
pub mod validation;

pub use calculations::{
    compute_bmr, compute_macros, compute_target_calories, compute_tdee, macros_from_split,
    meal_calories, objective_delta,
};
pub use constants::*;
pub use meal_plan::{build_meal_plan, compute_diet_plan, generate_plan, PlanOptions};
pub use sampling::{sample_foods, sample_size, RandomSource, RngSource, SequenceSource};
pub use validation::{validate, ProfileField, ValidatedInput, ValidationErrors, ValidationIssue};
