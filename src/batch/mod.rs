pub mod evaluation;
pub mod input;
pub mod output;

pub use evaluation::{ProfileMetrics, evaluate_all, evaluate_row};
pub use input::{ProfileRow, read_profiles};
pub use output::{print_summary, write_report};
