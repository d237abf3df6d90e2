pub mod prompts;
pub mod render;

pub use prompts::{
    NextAction, OnboardingDefaults, collect_form, collect_onboarding, parse_age, prompt_activity,
    prompt_age, prompt_calculator, prompt_goal, prompt_next_action, prompt_positive, prompt_sex,
    prompt_text, prompt_units, prompt_yes_no,
};
pub use render::{
    display_calculators, display_personalization, display_result, format_weight,
    format_weight_short, personalization_title, result_lines,
};
