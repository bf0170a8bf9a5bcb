//! Grey wolf / whale hybrids.
//!
//! Both hybrids flip a fair coin `p` per wolf. Below one half they take a
//! Whale Optimization step: encircle the global best while `|A| < 1`,
//! otherwise move relative to a freshly sampled random position. Above one
//! half they take the GWO three-leader step.
//!
//! | | `a` schedule | encircle | explore |
//! |---|---|---|---|
//! | [`GwoWoaM`] | `2 - 2t / (T - 1)` | `g - A \|C g - x\|` | `r - A \|C r - x\|` |
//! | [`GwoWoaO`] | `2 (1 - t / 2T)` | `g - A r3 \|C g - x\|` | `r - A s \|C1 alpha - x\|` |
//!
//! where `r` is the random position and `s = w e^l cos(2 pi l)` is a
//! log-spiral factor with `w ~ U(0, 1)` and `l ~ U(-1, 1)`.
//!
//! # References
//!
//! - Mohammed & Rashid (2020), "A novel hybrid GWO with WOA for global
//!   numerical optimization and solving pressure vessel design",
//!   *Neural Computing and Applications* 32, 14701–14718
//! - Obadina, Thaha & Saheed (2021), "Dynamic characterization of a
//!   master–slave robotic manipulator using a hybrid grey wolf–whale
//!   optimization algorithm", *Journal of Vibration and Control*

use super::config::HybridMerge;
use super::strategy::{
    half_decay, leader_coefficients, linear_decay, pack_mean, pull, Swarm, N_LEADERS,
};
use crate::eval::{update_slots, Evaluator};
use crate::population::special_solutions;
use crate::problem::{Problem, Solution};
use rand::Rng;
use std::f64::consts::PI;

/// Applies the merge policy; `whale` marks candidates from the `p < 0.5` branches.
fn keep(merge: HybridMerge, whale: bool, candidate: Vec<f64>) -> Option<Vec<f64>> {
    (!whale || merge.keeps_whale_branches()).then_some(candidate)
}

/// Random draws behind one hybrid candidate.
#[derive(Debug, Clone, Copy)]
struct Draw {
    /// Whale coefficient `A = 2a r1 - a`.
    big_a: f64,
    /// Whale coefficient `C = 2 r2`.
    c: f64,
    /// Damping of the encircling step; 1 for [`GwoWoaM`].
    r3: f64,
    /// Log-spiral factor of the exploration step; unused by [`GwoWoaM`].
    spiral: f64,
    /// Branch coin.
    p: f64,
    coefficients: [(f64, f64); N_LEADERS],
}

impl Draw {
    fn woa_m<R: Rng + ?Sized>(a: f64, rng: &mut R) -> Self {
        let big_a = 2.0 * a * rng.random::<f64>() - a;
        let c = 2.0 * rng.random::<f64>();
        let p = rng.random::<f64>();
        Self {
            big_a,
            c,
            r3: 1.0,
            spiral: 1.0,
            p,
            coefficients: leader_coefficients(a, rng),
        }
    }

    fn woa_o<R: Rng + ?Sized>(a: f64, rng: &mut R) -> Self {
        let big_a = 2.0 * a * rng.random::<f64>() - a;
        let c = 2.0 * rng.random::<f64>();
        let r3 = rng.random::<f64>();
        let w = rng.random::<f64>();
        let l: f64 = rng.random_range(-1.0..1.0);
        let p = rng.random::<f64>();
        Self {
            big_a,
            c,
            r3,
            spiral: spiral_factor(w, l),
            p,
            coefficients: leader_coefficients(a, rng),
        }
    }

    fn is_whale(&self) -> bool {
        self.p < 0.5
    }
}

/// `w e^l cos(2 pi l)`.
fn spiral_factor(w: f64, l: f64) -> f64 {
    w * l.exp() * (2.0 * PI * l).cos()
}

/// Candidate of [`GwoWoaM`]. `x_rand` is only called on the exploration branch.
fn woa_m_candidate(
    draw: &Draw,
    x: &[f64],
    g_best: &[f64],
    leaders: &[Solution],
    x_rand: impl FnOnce() -> Vec<f64>,
) -> Vec<f64> {
    if !draw.is_whale() {
        pack_mean(leaders, None, x, &draw.coefficients)
    } else if draw.big_a.abs() < 1.0 {
        pull(g_best, g_best, x, draw.big_a, draw.c)
    } else {
        let r = x_rand();
        pull(&r, &r, x, draw.big_a, draw.c)
    }
}

/// Candidate of [`GwoWoaO`]. `x_rand` is only called on the exploration branch.
fn woa_o_candidate(
    draw: &Draw,
    x: &[f64],
    g_best: &[f64],
    leaders: &[Solution],
    x_rand: impl FnOnce() -> Vec<f64>,
) -> Vec<f64> {
    if !draw.is_whale() {
        pack_mean(leaders, None, x, &draw.coefficients)
    } else if draw.big_a.abs() < 1.0 {
        pull(g_best, g_best, x, draw.big_a * draw.r3, draw.c)
    } else {
        let r = x_rand();
        let (_, c1) = draw.coefficients[0];
        pull(&r, &leaders[0].position, x, draw.big_a * draw.spiral, c1)
    }
}

/// GWO-WOA hybrid with the linear `a` schedule.
#[derive(Debug, Clone)]
pub struct GwoWoaM {
    pub(crate) epochs: usize,
    merge: HybridMerge,
}

impl GwoWoaM {
    /// Creates the update rule for a run of `epochs` epochs.
    pub fn new(epochs: usize, merge: HybridMerge) -> Self {
        Self { epochs, merge }
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
        let a = linear_decay(epoch, self.epochs);
        let leaders = special_solutions(&swarm.population, N_LEADERS, evaluator.sense()).best;
        let bounds = evaluator.bounds();
        let g_best = swarm.g_best.position.as_slice();

        update_slots(&mut swarm.population, evaluator, rng, |_, wolf, rng| {
            let draw = Draw::woa_m(a, rng);
            let candidate =
                woa_m_candidate(&draw, &wolf.position, g_best, &leaders, || bounds.sample(rng));
            keep(self.merge, draw.is_whale(), candidate)
        });
    }
}

/// GWO-WOA hybrid with the slower `a` schedule and a log-spiral
/// exploration step.
#[derive(Debug, Clone)]
pub struct GwoWoaO {
    pub(crate) epochs: usize,
    merge: HybridMerge,
}

impl GwoWoaO {
    /// Creates the update rule for a run of `epochs` epochs.
    pub fn new(epochs: usize, merge: HybridMerge) -> Self {
        Self { epochs, merge }
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
        let a = half_decay(epoch, self.epochs);
        let leaders = special_solutions(&swarm.population, N_LEADERS, evaluator.sense()).best;
        let bounds = evaluator.bounds();
        let g_best = swarm.g_best.position.as_slice();

        update_slots(&mut swarm.population, evaluator, rng, |_, wolf, rng| {
            let draw = Draw::woa_o(a, rng);
            let candidate =
                woa_o_candidate(&draw, &wolf.position, g_best, &leaders, || bounds.sample(rng));
            keep(self.merge, draw.is_whale(), candidate)
        });
    }
}
