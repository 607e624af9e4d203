pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plan_csv, write_plan_json};
pub use prompts::{
    collect_profile, prompt_activity_level, prompt_food_choice, prompt_goal, prompt_positive,
    prompt_sex, prompt_yes_no, PartialProfile,
};
pub use render::{display_meal_plan, display_substitution, display_targets};
