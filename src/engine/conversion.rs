use crate::engine::constants::{CM_PER_IN, IN_PER_FT, LB_PER_KG};
use crate::models::{FeetInches, UnitSystem};

/// Normalize a mass to kilograms.
pub fn to_kg(value: f64, unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Imperial => value / LB_PER_KG,
        UnitSystem::Metric => value,
    }
}

/// Combine feet and inches into centimeters.
pub fn to_cm(feet: f64, inches: f64) -> f64 {
    (feet * IN_PER_FT + inches) * CM_PER_IN
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

/// Split centimeters into whole feet and rounded inches.
///
/// Inches are rounded after the split, so 71.99 in reads as 5 ft 12 in.
pub fn cm_to_feet_inches(cm: f64) -> FeetInches {
    let total_in = cm / CM_PER_IN;
    FeetInches {
        feet: (total_in / IN_PER_FT).floor() as i64,
        inches: (total_in % IN_PER_FT).round() as i64,
    }
}

/// Parse free-text numeric input. Anything unusable becomes 0.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Round to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kg() {
        assert_eq!(to_kg(80.0, UnitSystem::Metric), 80.0);
        assert!((to_kg(220.462, UnitSystem::Imperial) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_cm() {
        assert!((to_cm(5.0, 10.0) - 177.8).abs() < 1e-9);
        assert!((to_cm(0.0, 1.0) - 2.54).abs() < 1e-12);
    }

    #[test]
    fn test_cm_to_feet_inches() {
        assert_eq!(cm_to_feet_inches(177.8), FeetInches { feet: 5, inches: 10 });
        assert_eq!(cm_to_feet_inches(185.42), FeetInches { feet: 6, inches: 1 });
    }

    #[test]
    fn test_rounded_inches_are_not_carried() {
        // 71.99 in
        let cm = 71.99 * CM_PER_IN;
        assert_eq!(cm_to_feet_inches(cm), FeetInches { feet: 5, inches: 12 });
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 72.5 "), 72.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(79.96), 80.0);
        assert_eq!(round_to_tenth(177.84), 177.8);
    }
}
