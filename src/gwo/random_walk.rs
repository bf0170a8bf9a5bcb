//! Random-walk Grey Wolf Optimizer (RW-GWO).
//!
//! Two phases per epoch:
//!
//! 1. **Leader walk**: alpha, beta and delta each take a Cauchy-distributed
//!    step scaled by `a`; a step is kept only if it improves the leader.
//! 2. **Pack update**: every wolf is pulled toward the walked leaders, with
//!    the distance measured against the global best:
//!    `X_i = L_i - mu_i |c_i g - x|`, `mu_i = b (2U - 1)`, `c_i = 2U`.
//!
//! Finally the walked leaders rejoin the pack and only the best `pop_size`
//! members of the union survive.
//!
//! # References
//!
//! - Gupta & Deep (2019), "A novel random walk grey wolf optimizer",
//!   *Swarm and Evolutionary Computation* 44, 101–112

use super::strategy::{leader_coefficients, linear_decay, pack_mean, Swarm, N_LEADERS};
use crate::eval::{update_slots, Evaluator};
use crate::population::{sorted_trim, special_solutions};
use crate::problem::{Problem, Solution};
use rand::Rng;
use rand_distr::{Cauchy, Distribution};

/// Cauchy step of one leader; a collapsed walk (`scale = 0`) leaves it in place.
fn walk_leader<R: Rng + ?Sized>(
    position: &[f64],
    walk: Option<&Cauchy<f64>>,
    rng: &mut R,
) -> Vec<f64> {
    match walk {
        Some(walk) => position.iter().map(|&x| x + walk.sample(rng)).collect(),
        None => position.to_vec(),
    }
}

/// Pack candidate: leader pulls measured against the global best.
fn pack_candidate(
    leaders: &[Solution],
    g_best: &[f64],
    x: &[f64],
    coefficients: &[(f64, f64)],
) -> Vec<f64> {
    pack_mean(leaders, Some(g_best), x, coefficients)
}

/// Random-walk Grey Wolf Optimizer.
#[derive(Debug, Clone)]
pub struct RwGwo {
    pub(crate) epochs: usize,
}

impl RwGwo {
    /// Creates the update rule for a run of `epochs` epochs.
    pub fn new(epochs: usize) -> Self {
        Self { epochs }
    }

    pub(crate) fn evolve<P, R>(
        &self,
        swarm: &mut Swarm,
        epoch: usize,
        evaluator: &mut Evaluator<'_, P>,
        rng: &mut R,
    ) where
        P: Problem,
        R: Rng + ?Sized,
    {
        let sense = evaluator.sense();
        // Eq. 5: both schedules decay linearly from 2 to 0.
        let a = linear_decay(epoch, self.epochs);
        let b = linear_decay(epoch, self.epochs);

        // `a * Cauchy(0, 1)` is `Cauchy(0, a)`; the last epoch has a = 0.
        let walk = Cauchy::new(0.0, a).ok();
        let mut leaders = special_solutions(&swarm.population, N_LEADERS, sense).best;
        update_slots(&mut leaders, evaluator, rng, |_, leader, rng| {
            Some(walk_leader(&leader.position, walk.as_ref(), rng))
        });

        let g_best = swarm.g_best.position.as_slice();
        update_slots(&mut swarm.population, evaluator, rng, |_, wolf, rng| {
            let coefficients = leader_coefficients(b, rng);
            Some(pack_candidate(&leaders, g_best, &wolf.position, &coefficients))
        });

        let mut combined = std::mem::take(&mut swarm.population);
        combined.extend(leaders);
        swarm.population = sorted_trim(combined, swarm.pop_size(), sense);
    }
}
