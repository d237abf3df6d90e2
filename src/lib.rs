pub mod batch;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod session;

pub use engine::{CalculatorInputs, calculate};
pub use error::{FitError, Result};
pub use models::{CalculationResult, CalculatorKind};
