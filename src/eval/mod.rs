//! Evaluation-mode dispatch.
//!
//! [`EvalMode`] is chosen once per run. [`Evaluator`] scores positions under
//! that mode and [`update_slots`] applies the mode's generate/evaluate/merge
//! ordering to any vector of solutions (the main population or an auxiliary
//! leader set).

mod evaluator;
mod mode;

pub use evaluator::{update_slots, Evaluator};
pub use mode::EvalMode;
