use serde::{Deserialize, Serialize};

use crate::models::names::resolve_name;
use crate::models::units::UnitSystem;

/// The six calculators offered by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Tdee,
    Bmi,
    #[serde(rename = "bodyfat")]
    BodyFat,
    Macros,
    #[serde(rename = "1rm")]
    OneRepMax,
    #[serde(rename = "ideal")]
    IdealWeight,
}

/// A free-text field on a calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Weight,
    Height,
    HeightFeet,
    HeightInches,
    Age,
    Reps,
}

impl InputField {
    /// Prompt label, with the unit suffix for the active system.
    pub fn label(&self, kind: CalculatorKind, units: UnitSystem) -> String {
        match self {
            InputField::Weight if kind == CalculatorKind::OneRepMax => {
                format!("Weight Lifted ({})", units.weight_unit())
            }
            InputField::Weight => format!("Weight ({})", units.weight_unit()),
            InputField::Height => "Height (cm)".to_string(),
            InputField::HeightFeet => "Height (ft)".to_string(),
            InputField::HeightInches => "Height (in)".to_string(),
            InputField::Age => "Age (years)".to_string(),
            InputField::Reps => "Reps Completed".to_string(),
        }
    }
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 6] = [
        CalculatorKind::Tdee,
        CalculatorKind::Bmi,
        CalculatorKind::BodyFat,
        CalculatorKind::Macros,
        CalculatorKind::OneRepMax,
        CalculatorKind::IdealWeight,
    ];

    /// Short identifier used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            CalculatorKind::Tdee => "tdee",
            CalculatorKind::Bmi => "bmi",
            CalculatorKind::BodyFat => "bodyfat",
            CalculatorKind::Macros => "macros",
            CalculatorKind::OneRepMax => "1rm",
            CalculatorKind::IdealWeight => "ideal",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CalculatorKind::Tdee => "TDEE",
            CalculatorKind::Bmi => "BMI",
            CalculatorKind::BodyFat => "Body Fat %",
            CalculatorKind::Macros => "Macros",
            CalculatorKind::OneRepMax => "1 Rep Max",
            CalculatorKind::IdealWeight => "Ideal Weight",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalculatorKind::Tdee => "Total Daily Energy Expenditure",
            CalculatorKind::Bmi => "Body Mass Index",
            CalculatorKind::BodyFat => "Estimate body fat percentage",
            CalculatorKind::Macros => "Macronutrient breakdown",
            CalculatorKind::OneRepMax => "Estimate your max lift",
            CalculatorKind::IdealWeight => "Based on height & gender",
        }
    }

    /// Text fields the form collects, in display order.
    pub fn fields(&self, units: UnitSystem) -> Vec<InputField> {
        let height: &[InputField] = match units {
            UnitSystem::Metric => &[InputField::Height],
            UnitSystem::Imperial => &[InputField::HeightFeet, InputField::HeightInches],
        };

        let mut fields = Vec::new();
        match self {
            CalculatorKind::Tdee | CalculatorKind::BodyFat => {
                fields.push(InputField::Age);
                fields.push(InputField::Weight);
                fields.extend_from_slice(height);
            }
            CalculatorKind::Bmi => {
                fields.push(InputField::Weight);
                fields.extend_from_slice(height);
            }
            CalculatorKind::Macros => fields.push(InputField::Weight),
            CalculatorKind::OneRepMax => {
                fields.push(InputField::Weight);
                fields.push(InputField::Reps);
            }
            CalculatorKind::IdealWeight => fields.extend_from_slice(height),
        }
        fields
    }

    pub fn uses_sex(&self) -> bool {
        matches!(
            self,
            CalculatorKind::Tdee | CalculatorKind::BodyFat | CalculatorKind::IdealWeight
        )
    }

    pub fn uses_activity(&self) -> bool {
        *self == CalculatorKind::Tdee
    }

    pub fn uses_goal(&self) -> bool {
        *self == CalculatorKind::Macros
    }

    /// Resolve a calculator from its id, name, or a close misspelling.
    pub fn from_name(input: &str) -> Option<CalculatorKind> {
        resolve_name(
            input,
            &[
                (CalculatorKind::Tdee, &["tdee", "bmr", "calories"]),
                (CalculatorKind::Bmi, &["bmi", "body mass index"]),
                (CalculatorKind::BodyFat, &["bodyfat", "body fat", "fat"]),
                (CalculatorKind::Macros, &["macros", "macro"]),
                (CalculatorKind::OneRepMax, &["1rm", "one rep max", "orm", "max lift"]),
                (CalculatorKind::IdealWeight, &["ideal", "ideal weight"]),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_follow_unit_system() {
        assert_eq!(
            CalculatorKind::Bmi.fields(UnitSystem::Metric),
            vec![InputField::Weight, InputField::Height]
        );
        assert_eq!(
            CalculatorKind::IdealWeight.fields(UnitSystem::Imperial),
            vec![InputField::HeightFeet, InputField::HeightInches]
        );
        assert_eq!(
            CalculatorKind::OneRepMax.fields(UnitSystem::Imperial),
            vec![InputField::Weight, InputField::Reps]
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(CalculatorKind::from_name("1rm"), Some(CalculatorKind::OneRepMax));
        assert_eq!(CalculatorKind::from_name("Body Fat %"), Some(CalculatorKind::BodyFat));
        assert_eq!(CalculatorKind::from_name("idael"), Some(CalculatorKind::IdealWeight));
        assert_eq!(CalculatorKind::from_name("TDEE"), Some(CalculatorKind::Tdee));
        assert_eq!(CalculatorKind::from_name("qqqq"), None);
    }

    #[test]
    fn test_weight_label_for_lifts() {
        assert_eq!(
            InputField::Weight.label(CalculatorKind::OneRepMax, UnitSystem::Imperial),
            "Weight Lifted (lbs)"
        );
        assert_eq!(
            InputField::Weight.label(CalculatorKind::Bmi, UnitSystem::Metric),
            "Weight (kg)"
        );
    }
}
