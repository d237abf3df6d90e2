use std::path::Path;

use tracing::info;

use crate::batch::evaluation::ProfileMetrics;
use crate::error::Result;

pub const REPORT_HEADER: [&str; 17] = [
    "name",
    "bmi",
    "bmi_category",
    "bmr",
    "tdee",
    "deficit",
    "surplus",
    "body_fat_pct",
    "body_fat_category",
    "calories",
    "protein_g",
    "carbs_g",
    "fat_g",
    "ideal_kg",
    "ideal_low_kg",
    "ideal_high_kg",
    "complete",
];

/// Format an optional value; suppressed calculations leave the cell empty.
fn cell<T>(value: Option<T>, f: impl Fn(T) -> String) -> String {
    value.map(f).unwrap_or_default()
}

fn report_row(m: &ProfileMetrics) -> Vec<String> {
    let complete = m.bmi.is_some()
        && m.tdee.is_some()
        && m.body_fat.is_some()
        && m.macros.is_some()
        && m.ideal_weight.is_some();

    vec![
        m.name.clone(),
        cell(m.bmi, |r| format!("{:.1}", r.bmi)),
        cell(m.bmi, |r| r.category.label().to_string()),
        cell(m.tdee, |r| r.bmr.to_string()),
        cell(m.tdee, |r| r.tdee.to_string()),
        cell(m.tdee, |r| r.deficit.to_string()),
        cell(m.tdee, |r| r.surplus.to_string()),
        cell(m.body_fat, |r| format!("{:.1}", r.body_fat_pct)),
        cell(m.body_fat, |r| r.category.label().to_string()),
        cell(m.macros, |r| r.calories.to_string()),
        cell(m.macros, |r| r.protein_g.to_string()),
        cell(m.macros, |r| r.carbs_g.to_string()),
        cell(m.macros, |r| r.fat_g.to_string()),
        cell(m.ideal_weight, |r| format!("{:.1}", r.ideal_kg)),
        cell(m.ideal_weight, |r| format!("{:.1}", r.range_low_kg)),
        cell(m.ideal_weight, |r| format!("{:.1}", r.range_high_kg)),
        complete.to_string(),
    ]
}

/// Write the metrics report to a CSV file.
pub fn write_report(metrics: &[ProfileMetrics], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(REPORT_HEADER)?;
    for m in metrics {
        wtr.write_record(report_row(m))?;
    }

    wtr.flush()?;
    info!(path = %path.display(), rows = metrics.len(), "wrote report");
    Ok(())
}

/// Print a one-line-per-profile summary to stdout.
pub fn print_summary(metrics: &[ProfileMetrics]) {
    let width = metrics.iter().map(|m| m.name.len()).max().unwrap_or(4).max(4);

    println!();
    println!("{:<width$}  {:>6}  {:>6}  {:>7}", "Name", "BMI", "TDEE", "BodyFat", width = width);
    for m in metrics {
        println!(
            "{:<width$}  {:>6}  {:>6}  {:>7}",
            m.name,
            cell(m.bmi, |r| format!("{:.1}", r.bmi)),
            cell(m.tdee, |r| r.tdee.to_string()),
            cell(m.body_fat, |r| format!("{:.1}%", r.body_fat_pct)),
            width = width
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::evaluation::evaluate_row;
    use crate::batch::input::ProfileRow;
    use tempfile::NamedTempFile;

    #[test]
    fn test_report_leaves_suppressed_cells_empty() {
        let rows = vec![
            ProfileRow {
                name: "Full".to_string(),
                sex: "male".to_string(),
                age: "25".to_string(),
                weight_kg: "80".to_string(),
                height_cm: "180".to_string(),
                activity: "2".to_string(),
                goal: "Weight Loss".to_string(),
            },
            ProfileRow {
                name: "NoAge".to_string(),
                weight_kg: "80".to_string(),
                height_cm: "180".to_string(),
                ..Default::default()
            },
        ];
        let metrics: Vec<ProfileMetrics> = rows.iter().map(evaluate_row).collect();

        let file = NamedTempFile::new().unwrap();
        write_report(&metrics, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);

        let full = &records[0];
        assert_eq!(&full[0], "Full");
        assert_eq!(&full[1], "24.7");
        assert_eq!(&full[2], "Normal");
        assert_eq!(&full[4], "2798");
        assert_eq!(&full[9], "1760");
        assert_eq!(&full[16], "true");

        let no_age = &records[1];
        assert_eq!(&no_age[1], "24.7");
        assert_eq!(&no_age[3], "");
        assert_eq!(&no_age[7], "");
        assert_eq!(&no_age[16], "false");
    }
}
