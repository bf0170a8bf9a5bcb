//! Grey Wolf Optimizer family.
//!
//! Four update rules share one population model: each epoch the three
//! fittest wolves (alpha, beta, delta) are copied out as leaders, every wolf
//! proposes a candidate position, candidates are repaired into the bounds,
//! evaluated and greedily merged into their slots.
//!
//! # Key Types
//!
//! - [`GwoConfig`]: Run parameters (variant, epochs, population, evaluation mode)
//! - [`GwoRunner`]: Executes the epoch loop
//! - [`GwoResult`]: Best solution, termination reason and convergence history
//! - [`Strategy`] / [`Swarm`]: The per-epoch entry point, for callers that
//!   drive the loop themselves
//!
//! # Variants
//!
//! - [`BaseGwo`]: original GWO
//! - [`RwGwo`]: leaders take Cauchy random walks
//! - [`GwoWoaM`], [`GwoWoaO`]: GWO / Whale Optimization hybrids
//!
//! # References
//!
//! - Mirjalili, Mirjalili & Lewis (2014), *Grey Wolf Optimizer*
//! - Gupta & Deep (2019), *A novel random walk grey wolf optimizer*
//! - Mohammed & Rashid (2020), *A novel hybrid GWO with WOA for global numerical optimization*
//! - Obadina, Thaha & Saheed (2021), *A hybrid grey wolf–whale optimization algorithm*

mod base;
mod config;
mod hybrid;
mod random_walk;
mod runner;
mod strategy;
#[cfg(test)]
mod testing;

pub use base::BaseGwo;
pub use config::{GwoConfig, HybridMerge, Variant, EPOCH_RANGE, POP_SIZE_RANGE};
pub use hybrid::{GwoWoaM, GwoWoaO};
pub use random_walk::RwGwo;
pub use runner::{GwoResult, GwoRunner};
pub use strategy::{half_decay, linear_decay, Strategy, Swarm, N_LEADERS};
