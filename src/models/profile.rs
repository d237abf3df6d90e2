use serde::{Deserialize, Serialize};

use crate::models::names::resolve_name;

/// Biological sex, as used by the sex-specific formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Resolve free text ("m", "Female", "femal") to a sex.
    pub fn from_name(input: &str) -> Option<Sex> {
        resolve_name(
            input,
            &[(Sex::Male, &["male", "m", "man"]), (Sex::Female, &["female", "f", "woman"])],
        )
    }
}

/// Named activity multiplier. Selection is by index into [`ActivityLevel::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Index of the level pre-selected on a fresh form (Moderate).
    pub const DEFAULT_INDEX: usize = 2;

    pub fn from_index(index: usize) -> Option<ActivityLevel> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// TDEE multiplier applied to BMR.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light Active",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

/// Fitness goal; drives calorie targets and macro ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Maintenance")]
    Maintenance,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    #[serde(rename = "General Fitness")]
    GeneralFitness,
}

impl Goal {
    /// Goals offered by the macro calculator, in picker order.
    pub const CALCULATOR_GOALS: [Goal; 3] = [Goal::WeightLoss, Goal::Maintenance, Goal::MuscleGain];

    /// Goals offered during onboarding, in picker order.
    pub const ONBOARDING_GOALS: [Goal; 4] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Maintenance,
        Goal::GeneralFitness,
    ];

    /// Select a calculator goal by picker index.
    pub fn from_calculator_index(index: usize) -> Option<Goal> {
        Self::CALCULATOR_GOALS.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::Maintenance => "Maintenance",
            Goal::MuscleGain => "Muscle Gain",
            Goal::GeneralFitness => "General Fitness",
        }
    }

    /// Short description shown on the onboarding goal cards.
    pub fn description(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Burn fat & get lean",
            Goal::MuscleGain => "Build muscle & strength",
            Goal::Maintenance => "Stay fit & healthy",
            Goal::GeneralFitness => "Overall wellness",
        }
    }

    /// Resolve free text ("weight loss", "bulk", "maintanance") to a goal.
    pub fn from_name(input: &str) -> Option<Goal> {
        resolve_name(
            input,
            &[
                (Goal::WeightLoss, &["Weight Loss", "cut", "fat loss"]),
                (Goal::Maintenance, &["Maintenance", "maintain"]),
                (Goal::MuscleGain, &["Muscle Gain", "bulk"]),
                (Goal::GeneralFitness, &["General Fitness", "fitness"]),
            ],
        )
    }
}

/// Normalized physiological inputs shared by the body calculators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysiologicalProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
}

impl PhysiologicalProfile {
    pub fn new(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
        }
    }

    /// All numeric fields are positive and finite.
    pub fn is_complete(&self) -> bool {
        is_positive(self.weight_kg) && is_positive(self.height_cm) && self.age_years > 0
    }
}

/// Profile fields collected by onboarding and kept on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub sex: Sex,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub goal: Goal,
}

impl StoredProfile {
    pub fn physiology(&self) -> PhysiologicalProfile {
        PhysiologicalProfile::new(self.weight_kg, self.height_cm, self.age, self.sex)
    }
}

/// Guard used by every calculator: a usable measurement is finite and above zero.
#[inline]
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_levels_are_ordered() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.factor()).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
        assert_eq!(
            ActivityLevel::from_index(ActivityLevel::DEFAULT_INDEX),
            Some(ActivityLevel::Moderate)
        );
        assert_eq!(ActivityLevel::from_index(5), None);
        assert_eq!(ActivityLevel::VeryActive.index(), 4);
    }

    #[test]
    fn test_calculator_goal_order() {
        assert_eq!(Goal::from_calculator_index(0), Some(Goal::WeightLoss));
        assert_eq!(Goal::from_calculator_index(1), Some(Goal::Maintenance));
        assert_eq!(Goal::from_calculator_index(2), Some(Goal::MuscleGain));
        assert_eq!(Goal::from_calculator_index(3), None);
    }

    #[test]
    fn test_goal_from_name() {
        assert_eq!(Goal::from_name("weight loss"), Some(Goal::WeightLoss));
        assert_eq!(Goal::from_name("Muscle-Gain"), Some(Goal::MuscleGain));
        assert_eq!(Goal::from_name("maintanance"), Some(Goal::Maintenance));
        assert_eq!(Goal::from_name("bulk"), Some(Goal::MuscleGain));
        assert_eq!(Goal::from_name(""), None);
    }

    #[test]
    fn test_sex_from_name() {
        assert_eq!(Sex::from_name("F"), Some(Sex::Female));
        assert_eq!(Sex::from_name("Male"), Some(Sex::Male));
    }

    #[test]
    fn test_profile_completeness() {
        assert!(PhysiologicalProfile::new(80.0, 180.0, 25, Sex::Male).is_complete());
        assert!(!PhysiologicalProfile::new(80.0, 0.0, 25, Sex::Male).is_complete());
        assert!(!PhysiologicalProfile::new(80.0, 180.0, 0, Sex::Male).is_complete());
        assert!(!PhysiologicalProfile::new(f64::NAN, 180.0, 25, Sex::Male).is_complete());
    }

    #[test]
    fn test_stored_profile_serde_names() {
        let profile = StoredProfile {
            sex: Sex::Female,
            age: 30,
            weight_kg: 62.5,
            height_cm: 165.0,
            goal: Goal::GeneralFitness,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"sex\":\"female\""));
        assert!(json.contains("\"goal\":\"General Fitness\""));
    }
}
