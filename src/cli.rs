use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::{FitError, Result};
use crate::models::{CalculatorKind, Goal, InputField, Sex, UnitSystem};
use crate::session::CalculatorSession;

/// fit_metrics: fitness calculators for TDEE, BMI, body fat, macros, 1RM and ideal weight.
#[derive(Parser, Debug)]
#[command(name = "fit_metrics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved profile JSON file.
    #[arg(short, long, default_value = "fit_profile.json", global = true)]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick calculators and fill in their forms interactively.
    Calc {
        /// Unit system to start in.
        #[arg(short, long, value_enum, default_value_t = Units::Metric)]
        units: Units,
    },

    /// Run one calculator from command-line values.
    Run(RunArgs),

    /// Set up your profile and get a personalized plan.
    Onboard,

    /// Show the personalized plan for the saved profile.
    Summary,
}

impl Default for Command {
    fn default() -> Self {
        Command::Calc {
            units: Units::Metric,
        }
    }
}

/// Unit system as a command-line value.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl From<Units> for UnitSystem {
    fn from(units: Units) -> Self {
        match units {
            Units::Metric => UnitSystem::Metric,
            Units::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Calculator: tdee, bmi, bodyfat, macros, 1rm or ideal (close spellings accepted).
    pub calculator: String,

    #[arg(short, long, value_enum)]
    pub units: Option<Units>,

    /// Body weight, or weight lifted for 1rm (kg or lbs).
    #[arg(long, default_value = "")]
    pub weight: String,

    /// Height in cm (metric).
    #[arg(long, default_value = "")]
    pub height: String,

    /// Height feet (imperial).
    #[arg(long, default_value = "")]
    pub feet: String,

    /// Height inches (imperial).
    #[arg(long, default_value = "")]
    pub inches: String,

    /// Age in years.
    #[arg(long, default_value = "")]
    pub age: String,

    /// male or female.
    #[arg(long, default_value = "male")]
    pub sex: String,

    /// Activity level index: 0 sedentary .. 4 very active.
    #[arg(long, default_value_t = 2)]
    pub activity: usize,

    /// Goal for macros: weight loss, maintenance or muscle gain.
    #[arg(long, default_value = "weight loss")]
    pub goal: String,

    /// Reps completed (1rm).
    #[arg(long, default_value = "")]
    pub reps: String,
}

impl RunArgs {
    /// Build a calculator session holding these values, ready to submit.
    pub fn to_session(&self) -> Result<CalculatorSession> {
        let kind = CalculatorKind::from_name(&self.calculator).ok_or_else(|| {
            FitError::InvalidInput(format!("Unknown calculator '{}'", self.calculator))
        })?;
        let sex = Sex::from_name(&self.sex)
            .ok_or_else(|| FitError::InvalidInput(format!("Unknown sex '{}'", self.sex)))?;
        let goal = Goal::from_name(&self.goal)
            .and_then(|g| Goal::CALCULATOR_GOALS.iter().position(|c| *c == g))
            .ok_or_else(|| FitError::InvalidInput(format!("Unknown goal '{}'", self.goal)))?;

        let mut session = CalculatorSession::new(self.units.map(UnitSystem::from).unwrap_or_default());
        session.select(kind);
        session.set_sex(sex);
        session.set_activity(self.activity);
        session.set_goal(goal);

        let fields = [
            (InputField::Weight, &self.weight),
            (InputField::Height, &self.height),
            (InputField::HeightFeet, &self.feet),
            (InputField::HeightInches, &self.inches),
            (InputField::Age, &self.age),
            (InputField::Reps, &self.reps),
        ];
        for (field, text) in fields {
            if !text.is_empty() {
                session.set_input(field, text.as_str());
            }
        }

        Ok(session)
    }
}
