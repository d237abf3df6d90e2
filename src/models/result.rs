use serde::Serialize;

use crate::engine::constants::{
    BF_FEMALE_BOUNDS, BF_MALE_BOUNDS, BMI_NORMAL_MIN, BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN,
};
use crate::models::calculator::CalculatorKind;
use crate::models::profile::Sex;

/// BMI bracket. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < BMI_OVERWEIGHT_MIN {
            BmiCategory::Normal
        } else if bmi < BMI_OBESE_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Body fat bracket; thresholds depend on sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyFatCategory {
    Essential,
    Athletic,
    Fitness,
    Average,
    AboveAverage,
}

impl BodyFatCategory {
    pub fn classify(body_fat_pct: f64, sex: Sex) -> Self {
        let [essential, athletic, fitness, average] = match sex {
            Sex::Male => BF_MALE_BOUNDS,
            Sex::Female => BF_FEMALE_BOUNDS,
        };

        if body_fat_pct < essential {
            BodyFatCategory::Essential
        } else if body_fat_pct < athletic {
            BodyFatCategory::Athletic
        } else if body_fat_pct < fitness {
            BodyFatCategory::Fitness
        } else if body_fat_pct < average {
            BodyFatCategory::Average
        } else {
            BodyFatCategory::AboveAverage
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::Essential => "Essential",
            BodyFatCategory::Athletic => "Athletic",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::AboveAverage => "Above Average",
        }
    }
}

/// Energy expenditure in whole calories per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TdeeResult {
    pub bmr: i64,
    pub tdee: i64,
    /// Suggested fat-loss intake.
    pub deficit: i64,
    /// Suggested muscle-gain intake.
    pub surplus: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFatResult {
    pub body_fat_pct: f64,
    pub category: BodyFatCategory,
}

/// Daily calories and macro grams, all rounded to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroResult {
    pub calories: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

/// Estimated max and training loads, in kilograms, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OneRepMaxResult {
    pub one_rep_max_kg: f64,
    pub pct90_kg: f64,
    pub pct80_kg: f64,
    pub pct70_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealWeightResult {
    pub ideal_kg: f64,
    pub range_low_kg: f64,
    pub range_high_kg: f64,
}

/// Output of one calculator run, tagged by calculator kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalculationResult {
    Tdee(TdeeResult),
    Bmi(BmiResult),
    #[serde(rename = "bodyfat")]
    BodyFat(BodyFatResult),
    Macros(MacroResult),
    #[serde(rename = "1rm")]
    OneRepMax(OneRepMaxResult),
    #[serde(rename = "ideal")]
    IdealWeight(IdealWeightResult),
}

impl CalculationResult {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationResult::Tdee(_) => CalculatorKind::Tdee,
            CalculationResult::Bmi(_) => CalculatorKind::Bmi,
            CalculationResult::BodyFat(_) => CalculatorKind::BodyFat,
            CalculationResult::Macros(_) => CalculatorKind::Macros,
            CalculationResult::OneRepMax(_) => CalculatorKind::OneRepMax,
            CalculationResult::IdealWeight(_) => CalculatorKind::IdealWeight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_boundaries_go_to_upper_bracket() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_body_fat_thresholds_by_sex() {
        assert_eq!(BodyFatCategory::classify(5.9, Sex::Male), BodyFatCategory::Essential);
        assert_eq!(BodyFatCategory::classify(6.0, Sex::Male), BodyFatCategory::Athletic);
        assert_eq!(BodyFatCategory::classify(17.9, Sex::Male), BodyFatCategory::Fitness);
        assert_eq!(BodyFatCategory::classify(24.9, Sex::Male), BodyFatCategory::Average);
        assert_eq!(BodyFatCategory::classify(25.0, Sex::Male), BodyFatCategory::AboveAverage);

        assert_eq!(BodyFatCategory::classify(13.9, Sex::Female), BodyFatCategory::Essential);
        assert_eq!(BodyFatCategory::classify(20.0, Sex::Female), BodyFatCategory::Athletic);
        assert_eq!(BodyFatCategory::classify(24.0, Sex::Female), BodyFatCategory::Fitness);
        assert_eq!(BodyFatCategory::classify(31.9, Sex::Female), BodyFatCategory::Average);
        assert_eq!(BodyFatCategory::classify(32.0, Sex::Female), BodyFatCategory::AboveAverage);
    }

    #[test]
    fn test_result_serializes_with_kind_tag() {
        let result = CalculationResult::Macros(MacroResult {
            calories: 1760,
            protein_g: 176,
            carbs_g: 132,
            fat_g: 59,
        });
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["kind"], "macros");
        assert_eq!(json["protein_g"], 176);
        assert_eq!(result.kind(), CalculatorKind::Macros);
    }
}
