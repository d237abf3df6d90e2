//! Onboarding personalization: the summary shown once a profile and goal
//! are known.

use serde::Serialize;
use tracing::debug;

use crate::engine::calculators::{bmi_value, bmr};
use crate::engine::constants::{
    CALORIE_DEFICIT, CALORIE_SURPLUS, ONBOARDING_ACTIVITY_FACTOR, WATER_LITERS_PER_KG,
};
use crate::engine::conversion::round_to_tenth;
use crate::models::{BmiCategory, Goal, PhysiologicalProfile};

/// A workout plan recommended for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkoutPlanSuggestion {
    pub name: &'static str,
    pub level: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Personalization {
    pub goal: Goal,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    /// Expenditure at the moderate activity default.
    pub tdee: f64,
    pub calorie_target: i64,
    pub plan: WorkoutPlanSuggestion,
    pub tips: Vec<String>,
    pub water_liters: f64,
}

/// Daily calorie target for a goal, given TDEE.
pub fn calorie_target(tdee: f64, goal: Goal) -> i64 {
    let target = match goal {
        Goal::WeightLoss => tdee - CALORIE_DEFICIT,
        Goal::MuscleGain => tdee + CALORIE_SURPLUS,
        Goal::Maintenance | Goal::GeneralFitness => tdee,
    };
    target.round() as i64
}

pub fn recommended_plan(goal: Goal) -> WorkoutPlanSuggestion {
    match goal {
        Goal::WeightLoss => WorkoutPlanSuggestion {
            name: "Full Body Foundation",
            level: "Beginner",
            reason: "Full body workouts maximize calorie burn and build a strong foundation for fat loss.",
        },
        Goal::MuscleGain => WorkoutPlanSuggestion {
            name: "Push / Pull / Legs",
            level: "Intermediate",
            reason: "PPL split provides optimal volume and frequency for muscle growth.",
        },
        Goal::GeneralFitness => WorkoutPlanSuggestion {
            name: "Full Body Foundation",
            level: "Beginner",
            reason: "Full body routine covers all muscle groups efficiently for general fitness.",
        },
        Goal::Maintenance => WorkoutPlanSuggestion {
            name: "Push / Pull / Legs",
            level: "Intermediate",
            reason: "A balanced split to maintain your current physique and keep progressing.",
        },
    }
}

/// Recommended daily water intake in liters, to one decimal.
pub fn water_liters(weight_kg: f64) -> f64 {
    round_to_tenth(weight_kg * WATER_LITERS_PER_KG)
}

fn tips(goal: Goal, tdee: f64, target: i64, water: f64) -> Vec<String> {
    let mut tips = match goal {
        Goal::WeightLoss => vec![
            format!("Aim for {} calories/day ({} cal deficit)", target, CALORIE_DEFICIT),
            "Focus on high protein intake (1.6-2.2g per kg bodyweight)".to_string(),
            "Add 2-3 cardio sessions per week alongside weight training".to_string(),
            "Track your food intake for at least the first 4 weeks".to_string(),
        ],
        Goal::MuscleGain => vec![
            format!("Aim for {} calories/day ({} cal surplus)", target, CALORIE_SURPLUS),
            "Prioritize protein: 1.8-2.2g per kg bodyweight daily".to_string(),
            "Progressive overload: increase weight or reps each week".to_string(),
            "Sleep 7-9 hours for optimal muscle recovery".to_string(),
        ],
        Goal::Maintenance | Goal::GeneralFitness => vec![
            format!("Your maintenance calories are ~{}/day", tdee.round() as i64),
            "Stay consistent with 3-5 workouts per week".to_string(),
            "Drink at least 2L of water daily".to_string(),
            "Mix cardio and resistance training for best results".to_string(),
        ],
    };
    tips.push(format!(
        "Recommended water intake: {}L per day based on your weight",
        water
    ));
    tips
}

/// Build the onboarding summary. `None` until the profile is complete.
pub fn personalize(profile: &PhysiologicalProfile, goal: Goal) -> Option<Personalization> {
    if !profile.is_complete() {
        debug!(?profile, "personalization suppressed: incomplete profile");
        return None;
    }

    let bmi = bmi_value(profile.weight_kg, profile.height_cm);
    let bmr = bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    let tdee = bmr * ONBOARDING_ACTIVITY_FACTOR;
    let target = calorie_target(tdee, goal);
    let water = water_liters(profile.weight_kg);

    Some(Personalization {
        goal,
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        bmr,
        tdee,
        calorie_target: target,
        plan: recommended_plan(goal),
        tips: tips(goal, tdee, target, water),
        water_liters: water,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn sample_profile() -> PhysiologicalProfile {
        PhysiologicalProfile::new(80.0, 180.0, 25, Sex::Male)
    }

    #[test]
    fn test_calorie_target_per_goal() {
        let profile = sample_profile();
        let loss = personalize(&profile, Goal::WeightLoss).unwrap();
        assert_eq!(loss.calorie_target, 2298);
        assert_eq!(personalize(&profile, Goal::MuscleGain).unwrap().calorie_target, 3098);
        assert_eq!(personalize(&profile, Goal::Maintenance).unwrap().calorie_target, 2798);
        assert_eq!(
            personalize(&profile, Goal::GeneralFitness).unwrap().calorie_target,
            2798
        );
    }

    #[test]
    fn test_water_and_tips() {
        let result = personalize(&sample_profile(), Goal::WeightLoss).unwrap();
        assert_eq!(result.water_liters, 2.6);
        assert_eq!(result.tips.len(), 5);
        assert_eq!(result.tips[0], "Aim for 2298 calories/day (500 cal deficit)");
        assert_eq!(
            result.tips[4],
            "Recommended water intake: 2.6L per day based on your weight"
        );
    }

    #[test]
    fn test_maintenance_tip_uses_tdee() {
        let result = personalize(&sample_profile(), Goal::Maintenance).unwrap();
        assert_eq!(result.tips[0], "Your maintenance calories are ~2798/day");
    }

    #[test]
    fn test_recommended_plan() {
        assert_eq!(recommended_plan(Goal::WeightLoss).name, "Full Body Foundation");
        assert_eq!(recommended_plan(Goal::MuscleGain).level, "Intermediate");
        assert_eq!(recommended_plan(Goal::GeneralFitness).level, "Beginner");
        assert_eq!(recommended_plan(Goal::Maintenance).name, "Push / Pull / Legs");
    }

    #[test]
    fn test_incomplete_profile() {
        let profile = PhysiologicalProfile::new(80.0, 180.0, 0, Sex::Female);
        assert!(personalize(&profile, Goal::WeightLoss).is_none());
    }
}
