//! Shared fixtures for the strategy tests.

use super::strategy::Swarm;
use crate::eval::Evaluator;
use crate::problem::{Bounds, FnProblem, Problem, Sense};
use rand::Rng;

pub(crate) type TestProblem = FnProblem<fn(&[f64]) -> f64>;

fn sum_of_squares(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

/// Sum of squares on `[-10, 10]^n`.
pub(crate) fn sphere(n: usize) -> TestProblem {
    FnProblem::new(
        Bounds::uniform(n, -10.0, 10.0).unwrap(),
        Sense::Minimize,
        sum_of_squares,
    )
}

/// Sum of squares on an asymmetric 5-D box.
pub(crate) fn box_sphere() -> TestProblem {
    FnProblem::new(
        Bounds::new(
            vec![-10.0, -15.0, -4.0, -2.0, -8.0],
            vec![10.0, 15.0, 12.0, 8.0, 20.0],
        )
        .unwrap(),
        Sense::Minimize,
        sum_of_squares,
    )
}

/// Uniform random, evaluated population wrapped in a swarm.
pub(crate) fn initial_swarm<P: Problem, R: Rng>(
    evaluator: &mut Evaluator<'_, P>,
    pop_size: usize,
    rng: &mut R,
) -> Swarm {
    let bounds = evaluator.bounds();
    let positions = (0..pop_size).map(|_| bounds.sample(rng)).collect();
    let population = evaluator.evaluate_batch(positions);
    Swarm::from_population(population, evaluator.sense())
}
