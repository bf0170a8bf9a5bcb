//! Population mechanics shared by every update strategy.
//!
//! - [`special_solutions`]: rank a population and snapshot its leaders
//! - [`better_solution`] / [`greedy_selection_population`]: strict greedy replacement
//! - [`sorted_trim`]: elitist truncation of an oversized candidate set
//! - [`update_global_best`]: monotone global-best tracking

mod leaders;
mod replacement;

pub use leaders::{best_of, sort_population, sorted_trim, special_solutions, SpecialSolutions};
pub use replacement::{
    better_solution, greedy_selection_population, replace_if_better, update_global_best,
};
