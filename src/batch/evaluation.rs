use crate::batch::input::ProfileRow;
use crate::engine::calculators::{bmi, body_fat, ideal_weight, macros, tdee};
use crate::models::{BmiResult, BodyFatResult, IdealWeightResult, MacroResult, TdeeResult};

/// Body metrics for one profile. Each field is `None` when that
/// calculator's inputs were insufficient.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMetrics {
    pub name: String,
    pub bmi: Option<BmiResult>,
    pub tdee: Option<TdeeResult>,
    pub body_fat: Option<BodyFatResult>,
    pub macros: Option<MacroResult>,
    pub ideal_weight: Option<IdealWeightResult>,
}

/// Run every body calculator on one profile row.
pub fn evaluate_row(row: &ProfileRow) -> ProfileMetrics {
    let inputs = row.to_inputs();

    ProfileMetrics {
        name: row.name.clone(),
        bmi: bmi(inputs.weight_kg, inputs.height_cm),
        tdee: tdee(
            inputs.weight_kg,
            inputs.height_cm,
            inputs.age_years,
            inputs.sex,
            inputs.activity,
        ),
        body_fat: body_fat(inputs.weight_kg, inputs.height_cm, inputs.age_years, inputs.sex),
        macros: macros(inputs.weight_kg, inputs.goal),
        ideal_weight: ideal_weight(inputs.height_cm, inputs.sex),
    }
}

pub fn evaluate_all(rows: &[ProfileRow]) -> Vec<ProfileMetrics> {
    rows.iter().map(evaluate_row).collect()
}
