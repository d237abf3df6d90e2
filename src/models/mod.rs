pub mod calculator;
pub mod names;
pub mod profile;
pub mod result;
pub mod units;

pub use calculator::{CalculatorKind, InputField};
pub use profile::{ActivityLevel, Goal, PhysiologicalProfile, Sex, StoredProfile, is_positive};
pub use result::{
    BmiCategory, BmiResult, BodyFatCategory, BodyFatResult, CalculationResult, IdealWeightResult,
    MacroResult, OneRepMaxResult, TdeeResult,
};
pub use units::{FeetInches, UnitSystem};
