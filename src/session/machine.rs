use std::collections::HashMap;

use tracing::trace;

use crate::engine::calculators::{CalculatorInputs, calculate};
use crate::engine::conversion::{parse_number, to_cm, to_kg};
use crate::models::{ActivityLevel, CalculationResult, CalculatorKind, Goal, InputField, Sex, UnitSystem};

/// Where the calculator screen is in its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Picking one of the six calculators.
    Selecting,
    /// Filling in the form; no result is shown.
    Collecting,
    /// A result for the current inputs is shown.
    ResultShown,
}

/// State of the calculators screen: selected calculator, raw form text and
/// the last result.
///
/// Every input change discards the result; nothing survives `back()`
/// except the unit toggle.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    selected: Option<CalculatorKind>,
    units: UnitSystem,
    sex: Sex,
    activity_index: usize,
    goal_index: usize,
    inputs: HashMap<InputField, String>,
    result: Option<CalculationResult>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(UnitSystem::default())
    }
}

impl CalculatorSession {
    pub fn new(units: UnitSystem) -> Self {
        Self {
            selected: None,
            units,
            sex: Sex::default(),
            activity_index: ActivityLevel::DEFAULT_INDEX,
            goal_index: 0,
            inputs: HashMap::new(),
            result: None,
        }
    }

    pub fn state(&self) -> SessionState {
        match (self.selected, &self.result) {
            (None, _) => SessionState::Selecting,
            (Some(_), None) => SessionState::Collecting,
            (Some(_), Some(_)) => SessionState::ResultShown,
        }
    }

    pub fn selected(&self) -> Option<CalculatorKind> {
        self.selected
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn activity(&self) -> ActivityLevel {
        ActivityLevel::from_index(self.activity_index).unwrap_or_default()
    }

    pub fn goal(&self) -> Goal {
        Goal::from_calculator_index(self.goal_index).unwrap_or(Goal::WeightLoss)
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Raw text of a form field ("" when untouched).
    pub fn input(&self, field: InputField) -> &str {
        self.inputs.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Open a calculator with an empty form.
    pub fn select(&mut self, kind: CalculatorKind) {
        trace!(calculator = kind.id(), "select");
        self.selected = Some(kind);
        self.inputs.clear();
        self.result = None;
    }

    /// Return to the picker, resetting everything but the unit toggle.
    pub fn back(&mut self) {
        trace!("back to picker");
        *self = Self::new(self.units);
    }

    pub fn set_input(&mut self, field: InputField, text: impl Into<String>) {
        self.inputs.insert(field, text.into());
        self.result = None;
    }

    /// Switch unit system. Typed values are unit-specific, so the form clears.
    pub fn set_units(&mut self, units: UnitSystem) {
        self.units = units;
        self.inputs.clear();
        self.result = None;
    }

    pub fn set_sex(&mut self, sex: Sex) {
        self.sex = sex;
        self.result = None;
    }

    /// Select an activity level by index; out-of-range indices are ignored.
    pub fn set_activity(&mut self, index: usize) {
        if ActivityLevel::from_index(index).is_some() {
            self.activity_index = index;
            self.result = None;
        }
    }

    /// Select a calculator goal by index; out-of-range indices are ignored.
    pub fn set_goal(&mut self, index: usize) {
        if Goal::from_calculator_index(index).is_some() {
            self.goal_index = index;
            self.result = None;
        }
    }

    fn number(&self, field: InputField) -> f64 {
        parse_number(self.input(field))
    }

    pub fn weight_kg(&self) -> f64 {
        to_kg(self.number(InputField::Weight), self.units)
    }

    pub fn height_cm(&self) -> f64 {
        match self.units {
            UnitSystem::Metric => self.number(InputField::Height),
            UnitSystem::Imperial => to_cm(
                self.number(InputField::HeightFeet),
                self.number(InputField::HeightInches),
            ),
        }
    }

    /// Normalized inputs built from the current form text.
    pub fn inputs(&self) -> CalculatorInputs {
        // Fractional and negative ages truncate toward zero (and then fail the guard).
        let age = self.number(InputField::Age);
        CalculatorInputs {
            weight_kg: self.weight_kg(),
            height_cm: self.height_cm(),
            age_years: age as u32,
            sex: self.sex,
            activity: self.activity(),
            goal: self.goal(),
            reps: self.number(InputField::Reps),
        }
    }

    /// Compute the selected calculator once.
    ///
    /// Returns the new result, or `None` when nothing is selected or inputs
    /// are insufficient; the session then stays in `Collecting`.
    pub fn submit(&mut self) -> Option<&CalculationResult> {
        let kind = self.selected?;
        self.result = calculate(kind, &self.inputs());
        trace!(calculator = kind.id(), computed = self.result.is_some(), "submit");
        self.result.as_ref()
    }
}
