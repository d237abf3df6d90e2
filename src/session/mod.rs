mod machine;
mod persistence;

pub use machine::{CalculatorSession, SessionState};
pub use persistence::{load_profile, save_profile};
