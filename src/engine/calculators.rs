use tracing::debug;

use crate::engine::constants::*;
use crate::models::{
    ActivityLevel, BmiCategory, BmiResult, BodyFatCategory, BodyFatResult, CalculationResult,
    CalculatorKind, Goal, IdealWeightResult, MacroResult, OneRepMaxResult, Sex, TdeeResult,
    is_positive,
};

/// Normalized (metric) inputs for any calculator.
///
/// Fields a calculator does not use are ignored by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorInputs {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub reps: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            weight_kg: 0.0,
            height_cm: 0.0,
            age_years: 0,
            sex: Sex::Male,
            activity: ActivityLevel::Moderate,
            goal: Goal::WeightLoss,
            reps: 0.0,
        }
    }
}

/// Run one calculator. `None` means required inputs are missing or zero.
pub fn calculate(kind: CalculatorKind, inputs: &CalculatorInputs) -> Option<CalculationResult> {
    let result = match kind {
        CalculatorKind::Tdee => tdee(
            inputs.weight_kg,
            inputs.height_cm,
            inputs.age_years,
            inputs.sex,
            inputs.activity,
        )
        .map(CalculationResult::Tdee),
        CalculatorKind::Bmi => bmi(inputs.weight_kg, inputs.height_cm).map(CalculationResult::Bmi),
        CalculatorKind::BodyFat => body_fat(
            inputs.weight_kg,
            inputs.height_cm,
            inputs.age_years,
            inputs.sex,
        )
        .map(CalculationResult::BodyFat),
        CalculatorKind::Macros => {
            macros(inputs.weight_kg, inputs.goal).map(CalculationResult::Macros)
        }
        CalculatorKind::OneRepMax => {
            one_rep_max(inputs.weight_kg, inputs.reps).map(CalculationResult::OneRepMax)
        }
        CalculatorKind::IdealWeight => {
            ideal_weight(inputs.height_cm, inputs.sex).map(CalculationResult::IdealWeight)
        }
    };

    if result.is_none() {
        debug!(calculator = kind.id(), ?inputs, "calculation suppressed: missing input");
    }
    result
}

/// Mifflin-St Jeor basal metabolic rate, unrounded.
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let base = BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm
        - BMR_AGE_COEF * age_years as f64;
    match sex {
        Sex::Male => base + BMR_MALE_OFFSET,
        Sex::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// Body mass index, unrounded.
pub fn bmi_value(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMR, TDEE and the suggested cut/bulk targets.
pub fn tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    activity: ActivityLevel,
) -> Option<TdeeResult> {
    if !is_positive(weight_kg) || !is_positive(height_cm) || age_years == 0 {
        return None;
    }

    let bmr = bmr(weight_kg, height_cm, age_years, sex);
    let tdee = bmr * activity.factor();

    Some(TdeeResult {
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
        deficit: (tdee - CALORIE_DEFICIT).round() as i64,
        surplus: (tdee + CALORIE_SURPLUS).round() as i64,
    })
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<BmiResult> {
    if !is_positive(weight_kg) || !is_positive(height_cm) {
        return None;
    }

    let bmi = bmi_value(weight_kg, height_cm);
    Some(BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

/// BMI-based body fat estimate.
pub fn body_fat(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Option<BodyFatResult> {
    if !is_positive(weight_kg) || !is_positive(height_cm) || age_years == 0 {
        return None;
    }

    let bmi = bmi_value(weight_kg, height_cm);
    let offset = match sex {
        Sex::Male => BF_MALE_OFFSET,
        Sex::Female => BF_FEMALE_OFFSET,
    };
    let body_fat_pct = BF_BMI_COEF * bmi + BF_AGE_COEF * age_years as f64 - offset;

    Some(BodyFatResult {
        body_fat_pct,
        category: BodyFatCategory::classify(body_fat_pct, sex),
    })
}

/// Calorie and macro policy for a goal. General fitness eats at maintenance.
pub fn macro_policy(goal: Goal) -> MacroPolicy {
    match goal {
        Goal::WeightLoss => WEIGHT_LOSS_MACROS,
        Goal::MuscleGain => MUSCLE_GAIN_MACROS,
        Goal::Maintenance | Goal::GeneralFitness => MAINTENANCE_MACROS,
    }
}

pub fn macros(weight_kg: f64, goal: Goal) -> Option<MacroResult> {
    if !is_positive(weight_kg) {
        return None;
    }

    let policy = macro_policy(goal);
    let calories = weight_kg * policy.kcal_per_kg;

    Some(MacroResult {
        calories: calories.round() as i64,
        protein_g: (calories * policy.protein_ratio / KCAL_PER_G_PROTEIN).round() as i64,
        carbs_g: (calories * policy.carb_ratio() / KCAL_PER_G_CARBS).round() as i64,
        fat_g: (calories * policy.fat_ratio / KCAL_PER_G_FAT).round() as i64,
    })
}

/// Epley one-rep max with 90/80/70% training loads.
pub fn one_rep_max(weight_kg: f64, reps: f64) -> Option<OneRepMaxResult> {
    if !is_positive(weight_kg) || !is_positive(reps) {
        return None;
    }

    let orm = weight_kg * (1.0 + reps / EPLEY_DIVISOR);
    let [p90, p80, p70] = ORM_PERCENTAGES;

    Some(OneRepMaxResult {
        one_rep_max_kg: orm,
        pct90_kg: orm * p90,
        pct80_kg: orm * p80,
        pct70_kg: orm * p70,
    })
}

/// Robinson-style ideal weight with a ±10% range.
pub fn ideal_weight(height_cm: f64, sex: Sex) -> Option<IdealWeightResult> {
    if !is_positive(height_cm) {
        return None;
    }

    let over_inches = (height_cm / CM_PER_IN - IDEAL_BASE_HEIGHT_IN).max(0.0);
    let base = match sex {
        Sex::Male => IDEAL_MALE_BASE_KG,
        Sex::Female => IDEAL_FEMALE_BASE_KG,
    };
    let ideal_kg = base + IDEAL_KG_PER_INCH * over_inches;

    Some(IdealWeightResult {
        ideal_kg,
        range_low_kg: ideal_kg * (1.0 - IDEAL_RANGE_FRACTION),
        range_high_kg: ideal_kg * (1.0 + IDEAL_RANGE_FRACTION),
    })
}
