use assert_float_eq::*;

use fit_metrics_rs::engine::{
    CalculatorInputs, bmi, body_fat, calculate, cm_to_feet_inches, ideal_weight, kg_to_lb, macros,
    one_rep_max, tdee, to_cm, to_kg,
};
use fit_metrics_rs::models::{
    ActivityLevel, BmiCategory, CalculatorKind, FeetInches, Goal, MacroResult, Sex, UnitSystem,
};

#[test]
fn test_bmi_matches_definition() {
    for (w, h) in [(50.0, 150.0), (72.3, 171.5), (120.0, 195.0), (80.0, 180.0)] {
        let result = bmi(w, h).unwrap();
        let expected = w / ((h / 100.0) * (h / 100.0));
        assert_float_absolute_eq!(result.bmi, expected, 1e-12);
        assert_eq!(result.category, BmiCategory::from_bmi(result.bmi));
    }
}

#[test]
fn test_bmi_boundaries_classify_upward() {
    // 1 m tall: BMI equals weight.
    assert_eq!(bmi(18.5, 100.0).unwrap().category, BmiCategory::Normal);
    assert_eq!(bmi(25.0, 100.0).unwrap().category, BmiCategory::Overweight);
    assert_eq!(bmi(30.0, 100.0).unwrap().category, BmiCategory::Obese);
    assert_eq!(bmi(18.4, 100.0).unwrap().category, BmiCategory::Underweight);
}

#[test]
fn test_pound_round_trip() {
    for x in [0.5, 45.0, 80.0, 123.456, 250.0] {
        assert_float_absolute_eq!(to_kg(kg_to_lb(x), UnitSystem::Imperial), x, 1e-6);
    }
}

#[test]
fn test_feet_inches_round_trip() {
    for feet in 0..8 {
        for inches in 0..12 {
            let cm = to_cm(feet as f64, inches as f64);
            assert_eq!(cm_to_feet_inches(cm), FeetInches { feet, inches });
        }
    }
}

#[test]
fn test_calculators_are_idempotent() {
    let inputs = CalculatorInputs {
        weight_kg: 73.4,
        height_cm: 176.2,
        age_years: 41,
        sex: Sex::Female,
        activity: ActivityLevel::Active,
        goal: Goal::MuscleGain,
        reps: 8.0,
    };

    for kind in CalculatorKind::ALL {
        let first = calculate(kind, &inputs).unwrap();
        let second = calculate(kind, &inputs).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_weight_loss_macros() {
    assert_eq!(
        macros(80.0, Goal::WeightLoss),
        Some(MacroResult {
            calories: 1760,
            protein_g: 176,
            carbs_g: 132,
            fat_g: 59,
        })
    );
}

#[test]
fn test_tdee_scenario() {
    let result = tdee(80.0, 180.0, 25, Sex::Male, ActivityLevel::Moderate).unwrap();
    assert_eq!(result.bmr, 1805);
    assert_eq!(result.tdee, 2798);
    assert_eq!(result.deficit, result.tdee - 500);
    assert_eq!(result.surplus, result.tdee + 300);
}

#[test]
fn test_one_rep_max_scenario() {
    let result = one_rep_max(100.0, 5.0).unwrap();
    assert_float_absolute_eq!(result.one_rep_max_kg, 100.0 * (1.0 + 5.0 / 30.0), 1e-12);
    assert_float_absolute_eq!(result.pct90_kg, 105.0, 1e-9);
    assert_float_absolute_eq!(result.pct80_kg, 93.333_333_333, 1e-6);
    assert_float_absolute_eq!(result.pct70_kg, 81.666_666_667, 1e-6);
}

#[test]
fn test_zero_inputs_produce_nothing() {
    assert!(bmi(80.0, 0.0).is_none());
    assert!(body_fat(80.0, 0.0, 25, Sex::Male).is_none());
    assert!(tdee(0.0, 180.0, 25, Sex::Male, ActivityLevel::Sedentary).is_none());
    assert!(macros(0.0, Goal::Maintenance).is_none());
    assert!(one_rep_max(0.0, 5.0).is_none());
    assert!(ideal_weight(0.0, Sex::Female).is_none());

    let empty = CalculatorInputs::default();
    for kind in CalculatorKind::ALL {
        assert!(calculate(kind, &empty).is_none());
    }
}
