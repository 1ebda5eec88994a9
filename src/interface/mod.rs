pub mod export;
pub mod prompts;
pub mod render;

pub use export::{plan_to_text, write_csv, write_text, PlanText};
pub use prompts::{
    collect_form, fuzzy_matches, prompt_gender, prompt_meal_selections, prompt_password,
    prompt_personal_data, prompt_text, prompt_yes_no,
};
pub use render::{display_diet_plan, display_plan_types, display_warnings};
