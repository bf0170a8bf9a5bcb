//! Per-epoch state and the closed set of update strategies.
//!
//! A driver owns a [`Swarm`] and a [`Strategy`] and calls
//! [`Strategy::evolve`] once per epoch. The swarm is borrowed exclusively for
//! the duration of that call; nothing else holds population state.

use super::base::BaseGwo;
use super::config::{HybridMerge, Variant};
use super::hybrid::{GwoWoaM, GwoWoaO};
use super::random_walk::RwGwo;
use crate::eval::Evaluator;
use crate::population::{best_of, update_global_best};
use crate::problem::{Problem, Sense, Solution};
use rand::Rng;

/// Number of leaders (alpha, beta, delta) every variant extracts.
pub const N_LEADERS: usize = 3;

/// Population and global best carried from epoch to epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct Swarm {
    /// Current wolves. Order carries no meaning.
    pub population: Vec<Solution>,
    /// Best solution seen since the swarm was created.
    pub g_best: Solution,
    pop_size: usize,
}

impl Swarm {
    /// Wraps an evaluated initial population and seeds the global best.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn from_population(population: Vec<Solution>, sense: Sense) -> Self {
        let g_best = best_of(&population, sense)
            .expect("population must not be empty")
            .clone();
        let pop_size = population.len();
        Self {
            population,
            g_best,
            pop_size,
        }
    }

    /// The size the population must have at every epoch boundary.
    pub fn pop_size(&self) -> usize {
        self.pop_size
    }

    /// Best member of the current population.
    pub fn current_best(&self, sense: Sense) -> &Solution {
        best_of(&self.population, sense).expect("population must not be empty")
    }

    /// Moves the global best forward if the population improved on it.
    pub fn refresh_global_best(&mut self, sense: Sense) -> bool {
        update_global_best(&mut self.g_best, &self.population, sense)
    }
}

/// Linear decay of `a` from 2 at epoch 0 to 0 at epoch `total - 1`.
///
/// A single-epoch run stays at 2.
pub fn linear_decay(epoch: usize, total: usize) -> f64 {
    if total <= 1 {
        return 2.0;
    }
    2.0 - 2.0 * epoch as f64 / (total - 1) as f64
}

/// Decay of `a` used by [`Variant::WoaO`]: `2 (1 - t / 2T)`, from 2 to 1.
pub fn half_decay(epoch: usize, total: usize) -> f64 {
    2.0 * (1.0 - epoch as f64 / (2.0 * total.max(1) as f64))
}

/// Draws `(A_i, C_i)` for the three leaders: `A = a (2U - 1)`, `C = 2U`.
pub(crate) fn leader_coefficients<R: Rng + ?Sized>(a: f64, rng: &mut R) -> [(f64, f64); N_LEADERS] {
    let big_a: [f64; N_LEADERS] = std::array::from_fn(|_| a * (2.0 * rng.random::<f64>() - 1.0));
    let c: [f64; N_LEADERS] = std::array::from_fn(|_| 2.0 * rng.random::<f64>());
    std::array::from_fn(|i| (big_a[i], c[i]))
}

/// `anchor - step * |c * reference - current|`, elementwise.
pub(crate) fn pull(
    anchor: &[f64],
    reference: &[f64],
    current: &[f64],
    step: f64,
    c: f64,
) -> Vec<f64> {
    anchor
        .iter()
        .zip(reference.iter())
        .zip(current.iter())
        .map(|((&l, &r), &x)| l - step * (c * r - x).abs())
        .collect()
}

/// Mean of the leader pulls `X_i = L_i - A_i |C_i R_i - x|`.
///
/// `R_i` is the leader itself unless a shared `reference` is given.
pub(crate) fn pack_mean(
    leaders: &[Solution],
    reference: Option<&[f64]>,
    current: &[f64],
    coefficients: &[(f64, f64)],
) -> Vec<f64> {
    let mut mean = vec![0.0; current.len()];
    for (leader, &(step, c)) in leaders.iter().zip(coefficients) {
        let anchor = &leader.position;
        let x = pull(anchor, reference.unwrap_or(anchor), current, step, c);
        for (m, v) in mean.iter_mut().zip(x) {
            *m += v;
        }
    }
    let n = leaders.len().min(coefficients.len()) as f64;
    mean.iter_mut().for_each(|m| *m /= n);
    mean
}

/// One of the four update rules, holding its run-level parameters.
#[derive(Debug, Clone)]
pub enum Strategy {
    Base(BaseGwo),
    RandomWalk(RwGwo),
    WoaM(GwoWoaM),
    WoaO(GwoWoaO),
}

impl Strategy {
    /// Builds the strategy for `variant` over a run of `epochs` epochs.
    pub fn new(variant: Variant, epochs: usize, merge: HybridMerge) -> Self {
        match variant {
            Variant::Base => Strategy::Base(BaseGwo::new(epochs)),
            Variant::RandomWalk => Strategy::RandomWalk(RwGwo::new(epochs)),
            Variant::WoaM => Strategy::WoaM(GwoWoaM::new(epochs, merge)),
            Variant::WoaO => Strategy::WoaO(GwoWoaO::new(epochs, merge)),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Strategy::Base(_) => Variant::Base,
            Strategy::RandomWalk(_) => Variant::RandomWalk,
            Strategy::WoaM(_) => Variant::WoaM,
            Strategy::WoaO(_) => Variant::WoaO,
        }
    }

    /// The exploration coefficient `a` this strategy uses at `epoch`.
    pub fn coefficient(&self, epoch: usize) -> f64 {
        match self {
            Strategy::Base(s) => linear_decay(epoch, s.epochs),
            Strategy::RandomWalk(s) => linear_decay(epoch, s.epochs),
            Strategy::WoaM(s) => linear_decay(epoch, s.epochs),
            Strategy::WoaO(s) => half_decay(epoch, s.epochs),
        }
    }

    /// Advances the swarm by one epoch (`epoch` is 0-based).
    ///
    /// On return the population has exactly `swarm.pop_size()` members, all
    /// inside the problem bounds, and the global best reflects them.
    ///
    /// # Panics
    /// Panics if an update rule changed the population size.
    pub fn evolve<P, R>(
        &self,
        swarm: &mut Swarm,
        epoch: usize,
        evaluator: &mut Evaluator<'_, P>,
        rng: &mut R,
    ) where
        P: Problem,
        R: Rng + ?Sized,
    {
        match self {
            Strategy::Base(s) => s.evolve(swarm, epoch, evaluator, rng),
            Strategy::RandomWalk(s) => s.evolve(swarm, epoch, evaluator, rng),
            Strategy::WoaM(s) => s.evolve(swarm, epoch, evaluator, rng),
            Strategy::WoaO(s) => s.evolve(swarm, epoch, evaluator, rng),
        }

        assert_eq!(
            swarm.population.len(),
            swarm.pop_size,
            "{:?} changed the population size at epoch {}",
            self.variant(),
            epoch
        );
        swarm.refresh_global_best(evaluator.sense());
    }
}
