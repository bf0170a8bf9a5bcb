//! Original Grey Wolf Optimizer update.
//!
//! Each epoch the three fittest wolves (alpha, beta, delta) are copied out.
//! Every wolf then moves to the mean of three encircling steps, one around
//! each leader:
//!
//! ```text
//! a   = 2 - 2t / (T - 1)
//! A_i = a (2 U - 1),  C_i = 2 U
//! X_i = L_i - A_i |C_i L_i - x|
//! x'  = (X_1 + X_2 + X_3) / 3
//! ```
//!
//! # References
//!
//! - Mirjalili, Mirjalili & Lewis (2014), "Grey Wolf Optimizer",
//!   *Advances in Engineering Software* 69, 46–61

use super::strategy::{leader_coefficients, linear_decay, pack_mean, Swarm, N_LEADERS};
use crate::eval::{update_slots, Evaluator};
use crate::population::special_solutions;
use crate::problem::Problem;
use rand::Rng;

/// Grey Wolf Optimizer.
#[derive(Debug, Clone)]
pub struct BaseGwo {
    pub(crate) epochs: usize,
}

impl BaseGwo {
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
        let a = linear_decay(epoch, self.epochs);
        let leaders = special_solutions(&swarm.population, N_LEADERS, evaluator.sense()).best;

        update_slots(&mut swarm.population, evaluator, rng, |_, wolf, rng| {
            let coefficients = leader_coefficients(a, rng);
            Some(pack_mean(&leaders, None, &wolf.position, &coefficients))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EvalMode;
    use crate::gwo::testing::{initial_swarm, sphere};
    use crate::problem::{Bounds, FnProblem, Sense, Solution, Target};
    use crate::random::create_rng;

    #[test]
    fn test_converges_on_sphere() {
        let problem = sphere(5);
        let gwo = BaseGwo::new(200);
        let mut rng = create_rng(42);
        let mut evaluator = Evaluator::new(&problem, EvalMode::Incremental, None).unwrap();
        let mut swarm = initial_swarm(&mut evaluator, 30, &mut rng);

        for epoch in 0..200 {
            gwo.evolve(&mut swarm, epoch, &mut evaluator, &mut rng);
            swarm.refresh_global_best(Sense::Minimize);
        }

        assert!(
            swarm.g_best.fitness() < 1e-6,
            "expected near-zero fitness, got {}",
            swarm.g_best.fitness()
        );
        assert_eq!(evaluator.evaluations(), 30 + 200 * 30);
    }

    #[test]
    fn test_zero_coefficient_collapses_on_leader_centroid() {
        // At the last epoch a = 0, so A_i = 0 and every candidate is the
        // centroid of the three leaders.
        let problem = FnProblem::new(
            Bounds::uniform(2, -10.0, 10.0).unwrap(),
            Sense::Minimize,
            |x: &[f64]| x.iter().map(|v| v.abs()).sum(),
        );
        let population: Vec<Solution> = [[1.0, 1.0], [2.0, -2.0], [3.0, 4.0], [9.0, 9.0]]
            .iter()
            .map(|p| Solution::new(p.to_vec(), Target::single(p[0].abs() + p[1].abs())))
            .collect();
        let mut swarm = Swarm::from_population(population, Sense::Minimize);
        let leaders = special_solutions(&swarm.population, 3, Sense::Minimize).best;
        assert_eq!(leaders[2].position, vec![3.0, 4.0]);

        let gwo = BaseGwo::new(5);
        let mut rng = create_rng(0);
        let mut evaluator = Evaluator::new(&problem, EvalMode::Batch, None).unwrap();
        gwo.evolve(&mut swarm, 4, &mut evaluator, &mut rng);

        // Centroid (2, 1) has fitness 3: every slot but the alpha takes it.
        let expected = [vec![1.0, 1.0], vec![2.0, 1.0], vec![2.0, 1.0], vec![2.0, 1.0]];
        for (s, e) in swarm.population.iter().zip(expected.iter()) {
            assert_eq!(&s.position, e);
        }
    }

    #[test]
    fn test_batch_uses_pre_epoch_leaders() {
        let problem = sphere(3);
        let gwo = BaseGwo::new(50);
        let mut rng = create_rng(8);
        let mut evaluator = Evaluator::new(&problem, EvalMode::Batch, None).unwrap();
        let mut swarm = initial_swarm(&mut evaluator, 10, &mut rng);

        gwo.evolve(&mut swarm, 0, &mut evaluator, &mut rng);

        // One batch of 10 on top of the initial 10.
        assert_eq!(evaluator.evaluations(), 20);
        assert_eq!(swarm.population.len(), 10);
    }
}
