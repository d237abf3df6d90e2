use crate::engine::Personalization;
use crate::engine::conversion::kg_to_lb;
use crate::models::{CalculationResult, CalculatorKind, UnitSystem};

/// Format a weight for the result headline, e.g. "116.7 kg" or "257 lbs".
pub fn format_weight(kg: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Imperial => format!("{} lbs", kg_to_lb(kg).round() as i64),
        UnitSystem::Metric => format!("{:.1} kg", kg),
    }
}

/// Compact weight for result grids, e.g. "105kg" or "231lbs".
pub fn format_weight_short(kg: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Imperial => format!("{}lbs", kg_to_lb(kg).round() as i64),
        UnitSystem::Metric => format!("{}kg", kg.round() as i64),
    }
}

/// Lines of the result card for one calculation.
pub fn result_lines(result: &CalculationResult, units: UnitSystem) -> Vec<String> {
    match result {
        CalculationResult::Tdee(r) => vec![
            "YOUR TDEE".to_string(),
            format!("{} calories/day", r.tdee),
            format!("BMR: {} | Fat Loss: {} | Bulk: {}", r.bmr, r.deficit, r.surplus),
        ],
        CalculationResult::Bmi(r) => vec![
            "YOUR BMI".to_string(),
            format!("{:.1}", r.bmi),
            r.category.label().to_string(),
        ],
        CalculationResult::BodyFat(r) => vec![
            "BODY FAT".to_string(),
            format!("{:.1}%", r.body_fat_pct),
            r.category.label().to_string(),
        ],
        CalculationResult::Macros(r) => vec![
            "DAILY MACROS".to_string(),
            format!("{} calories/day", r.calories),
            format!(
                "Protein: {}g | Carbs: {}g | Fat: {}g",
                r.protein_g, r.carbs_g, r.fat_g
            ),
        ],
        CalculationResult::OneRepMax(r) => vec![
            "1 REP MAX".to_string(),
            format_weight(r.one_rep_max_kg, units),
            format!(
                "90%: {} | 80%: {} | 70%: {}",
                format_weight_short(r.pct90_kg, units),
                format_weight_short(r.pct80_kg, units),
                format_weight_short(r.pct70_kg, units)
            ),
        ],
        CalculationResult::IdealWeight(r) => vec![
            "IDEAL WEIGHT".to_string(),
            format_weight(r.ideal_kg, units),
            format!(
                "Range: {} - {}",
                format_weight(r.range_low_kg, units),
                format_weight(r.range_high_kg, units)
            ),
        ],
    }
}

/// Print a result card.
pub fn display_result(result: &CalculationResult, units: UnitSystem) {
    println!();
    for line in result_lines(result, units) {
        println!("  {}", line);
    }
    println!();
}

/// Print the calculator picker grid.
pub fn display_calculators() {
    println!();
    println!("=== Fitness Calculators ===");
    println!();
    for kind in CalculatorKind::ALL {
        println!("  {:<8} {:<14} {}", kind.id(), kind.name(), kind.description());
    }
    println!();
}

pub fn personalization_title(updated: bool) -> &'static str {
    if updated {
        "Your Updated Plan"
    } else {
        "Your Personalized Plan"
    }
}

/// Print the onboarding summary. `updated` is set when a saved profile was edited.
pub fn display_personalization(p: &Personalization, updated: bool) {
    println!();
    println!("=== {} ===", personalization_title(updated));
    println!();
    println!("BMI: {:.1} ({})", p.bmi, p.bmi_category.label());
    println!(
        "Daily target: {} calories/day for {}",
        p.calorie_target,
        p.goal.label().to_lowercase()
    );
    println!();
    println!("Recommended plan: {} [{}]", p.plan.name, p.plan.level);
    println!("  {}", p.plan.reason);
    println!();
    println!("--- Tips ---");
    for tip in &p.tips {
        println!("  - {}", tip);
    }
    println!();
}
