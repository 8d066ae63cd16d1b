pub mod prompts;
pub mod render;

pub use prompts::{
    collect_preferences, prompt_allergies, prompt_calories, prompt_diet_type, prompt_meal_count,
    prompt_yes_no,
};
pub use render::{
    display_ambiguity_warning, display_meal_plan, display_preferences, display_request_preview,
};
