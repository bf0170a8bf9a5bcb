//! Problem definition: search space, optimization sense and scoring.
//!
//! # Key Types
//!
//! - [`Bounds`]: validated box constraints, uniform sampling and boundary repair
//! - [`Sense`]: minimize or maximize, with a NaN-safe strict comparison
//! - [`Target`] / [`Solution`]: an evaluated position
//! - [`Problem`]: the trait users implement; [`FnProblem`] wraps a closure

mod bounds;
mod types;

pub use bounds::Bounds;
pub use types::{FnProblem, Problem, Sense, Solution, Target};
