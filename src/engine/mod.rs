pub mod calculators;
pub mod constants;
pub mod conversion;
pub mod personalization;

pub use calculators::{
    CalculatorInputs, bmi, bmi_value, bmr, body_fat, calculate, ideal_weight, macro_policy,
    macros, one_rep_max, tdee,
};
pub use constants::*;
pub use conversion::{cm_to_feet_inches, kg_to_lb, parse_number, round_to_tenth, to_cm, to_kg};
pub use personalization::{
    Personalization, WorkoutPlanSuggestion, calorie_target, personalize, recommended_plan,
    water_liters,
};
