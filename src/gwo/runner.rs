//! GWO-family optimization loop.
//!
//! [`GwoRunner`] drives a complete run:
//! validation → initial population → `epoch` calls to [`Strategy::evolve`] →
//! result with convergence history.

use super::config::GwoConfig;
use super::strategy::{Strategy, Swarm};
use crate::error::{Result, SwarmError};
use crate::eval::Evaluator;
use crate::problem::{Problem, Solution};
use crate::random::create_rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Result of a GWO-family run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GwoResult {
    /// Best solution found during the entire run.
    pub best: Solution,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of epochs actually executed.
    pub epochs: usize,

    /// Total objective evaluations, including the initial population.
    pub evaluations: usize,

    /// Whether the run stopped on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on the time limit.
    pub timed_out: bool,

    /// Global-best fitness after initialization and after each epoch
    /// (`epochs + 1` entries, never worsening).
    pub global_best_history: Vec<f64>,

    /// Best fitness of the current population, sampled like
    /// `global_best_history`.
    pub current_best_history: Vec<f64>,

    /// Final population.
    pub population: Vec<Solution>,
}

/// Executes a GWO-family run.
///
/// # Usage
///
/// ```
/// use u_swarm::gwo::{GwoConfig, GwoRunner, Variant};
/// use u_swarm::problem::{Bounds, FnProblem, Sense};
///
/// let problem = FnProblem::new(
///     Bounds::uniform(3, -5.0, 5.0).unwrap(),
///     Sense::Minimize,
///     |x: &[f64]| x.iter().map(|v| v * v).sum(),
/// );
/// let config = GwoConfig::new(Variant::Base)
///     .with_epoch(100)
///     .with_pop_size(20)
///     .with_seed(42);
///
/// let result = GwoRunner::run(&problem, &config).unwrap();
/// assert!(result.best_fitness < 1e-3);
/// assert_eq!(result.global_best_history.len(), 101);
/// ```
pub struct GwoRunner;

impl GwoRunner {
    /// Runs the optimizer to completion.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid, the worker pool
    /// cannot be built, or the problem's objective weights do not match
    /// its objectives.
    pub fn run<P: Problem>(problem: &P, config: &GwoConfig) -> Result<GwoResult> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the optimizer with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next epoch and returns the best solution found so far.
    #[instrument(
        skip_all,
        fields(variant = ?config.variant, mode = ?config.mode, pop_size = config.pop_size)
    )]
    pub fn run_with_cancel<P: Problem>(
        problem: &P,
        config: &GwoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GwoResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let mut evaluator = Evaluator::new(problem, config.mode, config.n_workers)?;
        let sense = problem.sense();

        info!(
            epochs = config.epoch,
            n_dims = problem.bounds().n_dims(),
            "starting run"
        );

        // 1. Initial population
        let bounds = problem.bounds();
        let positions = (0..config.pop_size).map(|_| bounds.sample(&mut rng)).collect();
        let population = evaluator.evaluate_batch(positions);

        if let Some(weights) = problem.objective_weights() {
            let objectives = population[0].target.objectives.len();
            if weights.len() != objectives {
                return Err(SwarmError::ObjectiveWeights {
                    weights: weights.len(),
                    objectives,
                });
            }
        }

        let mut swarm = Swarm::from_population(population, sense);
        let strategy = Strategy::new(config.variant, config.epoch, config.hybrid_merge);

        let mut global_best_history = Vec::with_capacity(config.epoch + 1);
        let mut current_best_history = Vec::with_capacity(config.epoch + 1);
        global_best_history.push(swarm.g_best.fitness());
        current_best_history.push(swarm.current_best(sense).fitness());

        let started = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);
        let mut stagnation_counter = 0usize;
        let mut epochs = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let mut timed_out = false;

        // 2. Epoch loop
        for epoch in 0..config.epoch {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    warn!(epoch, "run cancelled");
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = time_limit {
                if started.elapsed() >= limit {
                    warn!(
                        epoch,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "time limit reached"
                    );
                    timed_out = true;
                    break;
                }
            }

            let previous = swarm.g_best.fitness();
            strategy.evolve(&mut swarm, epoch, &mut evaluator, &mut rng);
            epochs += 1;

            let best = swarm.g_best.fitness();
            global_best_history.push(best);
            current_best_history.push(swarm.current_best(sense).fitness());
            debug!(epoch, a = strategy.coefficient(epoch), best, "epoch done");

            if sense.is_better(best, previous) {
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                warn!(epoch, stagnation_counter, "stagnation limit reached");
                stagnated = true;
                break;
            }
        }

        info!(
            epochs,
            evaluations = evaluator.evaluations(),
            best = swarm.g_best.fitness(),
            "run finished"
        );

        Ok(GwoResult {
            best_fitness: swarm.g_best.fitness(),
            best: swarm.g_best,
            epochs,
            evaluations: evaluator.evaluations(),
            stagnated,
            cancelled,
            timed_out,
            global_best_history,
            current_best_history,
            population: swarm.population,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
