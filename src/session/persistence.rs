use std::fs;
use std::path::Path;

use tracing::info;

use crate::engine::conversion::round_to_tenth;
use crate::error::{FitError, Result};
use crate::models::StoredProfile;

/// Load the onboarding profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<StoredProfile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FitError::ProfileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let profile: StoredProfile = serde_json::from_str(&content)?;
    info!(path = %path.display(), "loaded profile");
    Ok(profile)
}

/// Save the onboarding profile to a JSON file.
///
/// Weight and height are stored to one decimal place.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &StoredProfile) -> Result<()> {
    let path = path.as_ref();
    let stored = StoredProfile {
        weight_kg: round_to_tenth(profile.weight_kg),
        height_cm: round_to_tenth(profile.height_cm),
        ..profile.clone()
    };

    let json = serde_json::to_string_pretty(&stored)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved profile");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Sex};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load_roundtrip() {
        let profile = StoredProfile {
            sex: Sex::Female,
            age: 31,
            weight_kg: 63.504,
            height_cm: 167.64,
            goal: Goal::MuscleGain,
        };

        let file = NamedTempFile::new().unwrap();
        save_profile(file.path(), &profile).unwrap();

        let loaded = load_profile(file.path()).unwrap();
        assert_eq!(loaded.sex, Sex::Female);
        assert_eq!(loaded.goal, Goal::MuscleGain);
        assert_eq!(loaded.weight_kg, 63.5);
        assert_eq!(loaded.height_cm, 167.6);
    }

    #[test]
    fn test_load_hand_written_profile() {
        let json = r#"{"sex": "male", "age": 25, "weight_kg": 80, "height_cm": 180, "goal": "Weight Loss"}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.age, 25);
        assert_eq!(profile.goal, Goal::WeightLoss);
        assert!(profile.physiology().is_complete());
    }

    #[test]
    fn test_missing_profile() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FitError::ProfileNotFound(_)));
    }
}
