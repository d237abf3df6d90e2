use dialoguer::{Confirm, Input, Select};

use crate::engine::conversion::{
    cm_to_feet_inches, kg_to_lb, parse_number, round_to_tenth, to_cm, to_kg,
};
use crate::error::{FitError, Result};
use crate::models::{
    ActivityLevel, CalculatorKind, Goal, Sex, StoredProfile, UnitSystem, is_positive,
};
use crate::session::CalculatorSession;

/// What to do after a result card is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Edit the inputs and compute again.
    Recalculate,
    /// Return to the calculator picker.
    Back,
    Quit,
}

/// Pick a calculator. `None` means the user chose to quit.
pub fn prompt_calculator() -> Result<Option<CalculatorKind>> {
    let mut options: Vec<String> = CalculatorKind::ALL
        .iter()
        .map(|k| format!("{} - {}", k.name(), k.description()))
        .collect();
    options.push("Quit".to_string());

    let selection = Select::new()
        .with_prompt("Choose a calculator")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(CalculatorKind::ALL.get(selection).copied())
}

pub fn prompt_units(current: UnitSystem) -> Result<UnitSystem> {
    let options: Vec<&str> = UnitSystem::ALL.iter().map(|u| u.label()).collect();
    let default = UnitSystem::ALL.iter().position(|u| *u == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Units")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(UnitSystem::ALL[selection])
}

pub fn prompt_sex(current: Sex) -> Result<Sex> {
    let options: Vec<String> = Sex::ALL.iter().map(|s| s.label().to_uppercase()).collect();
    let default = Sex::ALL.iter().position(|s| *s == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Sex::ALL[selection])
}

/// Pick an activity level; returns its index.
pub fn prompt_activity(current: usize) -> Result<usize> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|a| format!("{} (x{})", a.label(), a.factor()))
        .collect();

    Ok(Select::new()
        .with_prompt("Activity Level")
        .items(&options)
        .default(current.min(options.len() - 1))
        .interact()?)
}

/// Pick one of `goals`; returns its index.
pub fn prompt_goal(goals: &[Goal], current: usize) -> Result<usize> {
    let options: Vec<String> = goals
        .iter()
        .map(|g| format!("{} - {}", g.label(), g.description()))
        .collect();

    Ok(Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(current.min(options.len().saturating_sub(1)))
        .interact()?)
}

/// Free-text numeric field. Any text is accepted; the engine treats junk as 0.
pub fn prompt_text(label: &str, current: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Numeric field that must be positive (onboarding requires every value).
pub fn prompt_positive(label: &str, current: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(label)
        .with_initial_text(current)
        .validate_with(|text: &String| -> std::result::Result<(), &'static str> {
            if is_positive(parse_number(text)) {
                Ok(())
            } else {
                Err("Please enter a positive number")
            }
        })
        .interact_text()?;

    Ok(parse_number(&input))
}

/// Parse an age in whole years. Fractions, zero and junk are rejected.
pub fn parse_age(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|age| *age >= 1)
}

pub fn prompt_age(current: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .with_initial_text(current)
        .validate_with(|text: &String| -> std::result::Result<(), &'static str> {
            match parse_age(text) {
                Some(_) => Ok(()),
                None => Err("Please enter your age in whole years"),
            }
        })
        .interact_text()?;

    parse_age(&input)
        .ok_or_else(|| FitError::InvalidInput(format!("Invalid age '{}'", input.trim())))
}

pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

pub fn prompt_next_action() -> Result<NextAction> {
    let options = ["Recalculate", "All Calculators", "Quit"];
    let selection = Select::new()
        .with_prompt("Next")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => NextAction::Recalculate,
        1 => NextAction::Back,
        _ => NextAction::Quit,
    })
}

/// Walk the form of the selected calculator, writing answers into the session.
pub fn collect_form(session: &mut CalculatorSession) -> Result<()> {
    let kind = session
        .selected()
        .ok_or_else(|| FitError::InvalidInput("No calculator selected".to_string()))?;

    let units = prompt_units(session.units())?;
    if units != session.units() {
        session.set_units(units);
    }

    if kind.uses_sex() {
        let sex = prompt_sex(session.sex())?;
        session.set_sex(sex);
    }

    for field in kind.fields(session.units()) {
        let text = prompt_text(&field.label(kind, session.units()), session.input(field))?;
        session.set_input(field, text);
    }

    if kind.uses_activity() {
        let index = prompt_activity(session.activity().index())?;
        session.set_activity(index);
    }

    if kind.uses_goal() {
        let current = Goal::CALCULATOR_GOALS
            .iter()
            .position(|g| *g == session.goal())
            .unwrap_or(0);
        let index = prompt_goal(&Goal::CALCULATOR_GOALS, current)?;
        session.set_goal(index);
    }

    Ok(())
}

/// Starting values for the onboarding prompts.
///
/// Blank for a first run; filled from the saved profile when updating it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingDefaults {
    pub sex: Sex,
    pub age: String,
    pub goal_index: usize,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
}

impl OnboardingDefaults {
    pub fn from_profile(profile: &StoredProfile) -> Self {
        Self {
            sex: profile.sex,
            age: profile.age.to_string(),
            goal_index: Goal::ONBOARDING_GOALS
                .iter()
                .position(|g| *g == profile.goal)
                .unwrap_or(0),
            weight_kg: Some(profile.weight_kg),
            height_cm: Some(profile.height_cm),
        }
    }

    /// Saved weight in `units`, one decimal. Empty when nothing is saved.
    pub fn weight(&self, units: UnitSystem) -> String {
        self.weight_kg
            .map(|kg| match units {
                UnitSystem::Metric => round_to_tenth(kg).to_string(),
                UnitSystem::Imperial => round_to_tenth(kg_to_lb(kg)).to_string(),
            })
            .unwrap_or_default()
    }

    pub fn height_cm(&self) -> String {
        self.height_cm
            .map(|cm| round_to_tenth(cm).to_string())
            .unwrap_or_default()
    }

    /// Saved height as (feet, inches) text.
    pub fn height_feet_inches(&self) -> (String, String) {
        match self.height_cm {
            Some(cm) => {
                let split = cm_to_feet_inches(cm);
                (split.feet.to_string(), split.inches.to_string())
            }
            None => (String::new(), String::new()),
        }
    }
}

/// Collect the onboarding profile: sex, body measurements and goal.
pub fn collect_onboarding(defaults: &OnboardingDefaults) -> Result<StoredProfile> {
    let sex = prompt_sex(defaults.sex)?;
    let age = prompt_age(&defaults.age)?;

    let units = prompt_units(UnitSystem::default())?;
    let weight_kg = to_kg(
        prompt_positive(
            &format!("Weight ({})", units.weight_unit()),
            &defaults.weight(units),
        )?,
        units,
    );
    let height_cm = match units {
        UnitSystem::Metric => prompt_positive("Height (cm)", &defaults.height_cm())?,
        UnitSystem::Imperial => {
            let (feet, inches) = defaults.height_feet_inches();
            let feet = prompt_positive("Height (ft)", &feet)?;
            let inches = parse_number(&prompt_text("Height (in)", &inches)?);
            to_cm(feet, inches)
        }
    };

    let goal_index = prompt_goal(&Goal::ONBOARDING_GOALS, defaults.goal_index)?;
    let goal = Goal::ONBOARDING_GOALS[goal_index];

    Ok(StoredProfile {
        sex,
        age,
        weight_kg,
        height_cm,
        goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved() -> StoredProfile {
        StoredProfile {
            sex: Sex::Female,
            age: 34,
            weight_kg: 62.5,
            height_cm: 165.0,
            goal: Goal::MuscleGain,
        }
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age(" 25 "), Some(25));
        assert_eq!(parse_age("1"), Some(1));
        assert_eq!(parse_age("0"), None);
        assert_eq!(parse_age("0.5"), None);
        assert_eq!(parse_age("-3"), None);
        assert_eq!(parse_age("abc"), None);
    }

    #[test]
    fn test_first_run_defaults_are_blank() {
        let defaults = OnboardingDefaults::default();
        assert_eq!(defaults.sex, Sex::Male);
        assert_eq!(defaults.age, "");
        assert_eq!(defaults.goal_index, 0);
        assert_eq!(defaults.weight(UnitSystem::Imperial), "");
        assert_eq!(defaults.height_cm(), "");
        assert_eq!(
            defaults.height_feet_inches(),
            (String::new(), String::new())
        );
    }

    #[test]
    fn test_update_defaults_from_saved_profile() {
        let defaults = OnboardingDefaults::from_profile(&saved());
        assert_eq!(defaults.sex, Sex::Female);
        assert_eq!(defaults.age, "34");
        assert_eq!(Goal::ONBOARDING_GOALS[defaults.goal_index], Goal::MuscleGain);
        assert_eq!(defaults.weight(UnitSystem::Metric), "62.5");
        assert_eq!(defaults.height_cm(), "165");
    }

    #[test]
    fn test_update_defaults_in_imperial() {
        let defaults = OnboardingDefaults::from_profile(&saved());
        assert_eq!(defaults.weight(UnitSystem::Imperial), "137.8");
        assert_eq!(
            defaults.height_feet_inches(),
            ("5".to_string(), "5".to_string())
        );
    }
}
