use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::engine::calculators::CalculatorInputs;
use crate::engine::conversion::parse_number;
use crate::error::Result;
use crate::models::{ActivityLevel, Goal, Sex};

/// One row of the profiles CSV, kept as raw text.
///
/// Columns: `name,sex,age,weight_kg,height_cm,activity,goal`. Missing
/// columns read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRow {
    pub name: String,
    pub sex: String,
    pub age: String,
    pub weight_kg: String,
    pub height_cm: String,
    pub activity: String,
    pub goal: String,
}

impl ProfileRow {
    /// Normalize the row. Blank or unparsable cells fall back to 0 or the
    /// calculator defaults (male, moderate, weight loss).
    pub fn to_inputs(&self) -> CalculatorInputs {
        let sex = Sex::from_name(&self.sex).unwrap_or_default();
        let activity = self
            .activity
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(ActivityLevel::from_index)
            .unwrap_or_default();
        let goal = Goal::from_name(&self.goal).unwrap_or(Goal::CALCULATOR_GOALS[0]);

        CalculatorInputs {
            weight_kg: parse_number(&self.weight_kg),
            height_cm: parse_number(&self.height_cm),
            age_years: parse_number(&self.age) as u32,
            sex,
            activity,
            goal,
            reps: 0.0,
        }
    }
}

/// Read every profile row from a CSV file with a header line.
///
/// Rows that fail to deserialize are skipped with a warning.
pub fn read_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<ProfileRow>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (line, record) in rdr.deserialize::<ProfileRow>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => warn!(row = line + 1, error = %e, "skipping unreadable profile row"),
        }
    }

    info!(path = %path.display(), count = rows.len(), "read profiles");
    Ok(rows)
}
