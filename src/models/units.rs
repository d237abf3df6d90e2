use serde::{Deserialize, Serialize};

/// Measurement system used to interpret raw inputs and format results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    /// Toggle label, e.g. "METRIC (kg/cm)".
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "METRIC (kg/cm)",
            UnitSystem::Imperial => "IMPERIAL (lb/ft)",
        }
    }

    /// Mass unit suffix for input prompts.
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}

/// A height split into whole feet and rounded inches.
///
/// `inches` may be 12 when the fractional part rounds up; it is not carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeetInches {
    pub feet: i64,
    pub inches: i64,
}
