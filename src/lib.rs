//! Grey Wolf Optimizer family for continuous, box-constrained problems.
//!
//! Provides four population-based swarm optimizers over one shared engine:
//!
//! - **GWO**: the original Grey Wolf Optimizer, where every wolf moves
//!   toward the mean of three leader-centred encircling steps.
//! - **RW-GWO**: leaders first take Cauchy random walks, then compete with
//!   the pack for survival.
//! - **GWO-WOA (M / O)**: hybrids that mix Whale Optimization encircling and
//!   exploration moves with the GWO leader step.
//!
//! # Modules
//!
//! - [`problem`]: bounds, optimization sense and the [`problem::Problem`] trait
//! - [`population`]: leader extraction, greedy replacement, elitist trimming
//! - [`eval`]: evaluation modes (incremental, batch, parallel)
//! - [`gwo`]: the update rules, configuration and runner
//! - [`random`]: seeded generators
//!
//! # Example
//!
//! ```
//! use u_swarm::gwo::{GwoConfig, GwoRunner, Variant};
//! use u_swarm::problem::{Bounds, FnProblem, Problem, Sense};
//!
//! let bounds = Bounds::new(
//!     vec![-10.0, -15.0, -4.0, -2.0, -8.0],
//!     vec![10.0, 15.0, 12.0, 8.0, 20.0],
//! )?;
//! let problem = FnProblem::new(bounds, Sense::Minimize, |x: &[f64]| {
//!     x.iter().map(|v| v * v).sum()
//! });
//!
//! let config = GwoConfig::new(Variant::RandomWalk)
//!     .with_epoch(200)
//!     .with_pop_size(30)
//!     .with_seed(1);
//! let result = GwoRunner::run(&problem, &config)?;
//! assert!(problem.bounds().contains(&result.best.position));
//! # Ok::<(), u_swarm::SwarmError>(())
//! ```

pub mod error;
pub mod eval;
pub mod gwo;
pub mod population;
pub mod problem;
pub mod random;

pub use error::{Result, SwarmError};
