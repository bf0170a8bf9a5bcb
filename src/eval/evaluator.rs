//! Objective evaluation and the per-epoch generate/evaluate/merge pass.

use super::mode::EvalMode;
use crate::error::Result;
use crate::population::{greedy_selection_population, replace_if_better};
use crate::problem::{Bounds, Problem, Sense, Solution};
use rand::Rng;

#[cfg(feature = "parallel")]
use crate::error::SwarmError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores positions against a [`Problem`] under a fixed [`EvalMode`].
///
/// Counts every objective evaluation it performs.
pub struct Evaluator<'a, P: Problem> {
    problem: &'a P,
    mode: EvalMode,
    evaluations: usize,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl<'a, P: Problem> Evaluator<'a, P> {
    /// Creates an evaluator.
    ///
    /// With [`EvalMode::Parallel`] and `n_workers = Some(n)`, a dedicated
    /// rayon pool of `n` threads is built; `None` uses rayon's global pool.
    /// `n_workers` is ignored by the other modes.
    pub fn new(problem: &'a P, mode: EvalMode, n_workers: Option<usize>) -> Result<Self> {
        #[cfg(feature = "parallel")]
        let pool = match (mode, n_workers) {
            (EvalMode::Parallel, Some(n)) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SwarmError::ThreadPool(e.to_string()))?,
            ),
            _ => None,
        };
        #[cfg(not(feature = "parallel"))]
        let _ = n_workers;

        Ok(Self {
            problem,
            mode,
            evaluations: 0,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    pub fn problem(&self) -> &'a P {
        self.problem
    }

    pub fn bounds(&self) -> &'a Bounds {
        self.problem.bounds()
    }

    pub fn sense(&self) -> Sense {
        self.problem.sense()
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    /// Total objective evaluations performed so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Evaluates one position.
    pub fn evaluate(&mut self, position: Vec<f64>) -> Solution {
        self.evaluations += 1;
        let target = self.problem.target(&position);
        Solution::new(position, target)
    }

    /// Evaluates a batch of positions, preserving their order.
    ///
    /// Runs on the thread pool in [`EvalMode::Parallel`], sequentially
    /// otherwise.
    pub fn evaluate_batch(&mut self, positions: Vec<Vec<f64>>) -> Vec<Solution> {
        self.evaluations += positions.len();
        self.score_batch(positions)
    }

    #[cfg(feature = "parallel")]
    fn score_batch(&self, positions: Vec<Vec<f64>>) -> Vec<Solution> {
        if self.mode != EvalMode::Parallel {
            return score_sequential(self.problem, positions);
        }
        let problem = self.problem;
        let score = move || {
            positions
                .into_par_iter()
                .map(|p| {
                    let target = problem.target(&p);
                    Solution::new(p, target)
                })
                .collect::<Vec<Solution>>()
        };
        match &self.pool {
            Some(pool) => pool.install(score),
            None => score(),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_batch(&self, positions: Vec<Vec<f64>>) -> Vec<Solution> {
        score_sequential(self.problem, positions)
    }
}

fn score_sequential<P: Problem>(problem: &P, positions: Vec<Vec<f64>>) -> Vec<Solution> {
    positions
        .into_iter()
        .map(|p| {
            let target = problem.target(&p);
            Solution::new(p, target)
        })
        .collect()
}

/// Runs one generate/repair/evaluate/merge pass over `slots`.
///
/// `generate(idx, member, rng)` builds the raw candidate for slot `idx`
/// from its current member, or returns `None` to leave the slot alone.
/// Every candidate is repaired with [`Bounds::amend`] before evaluation.
///
/// - [`EvalMode::Incremental`]: each candidate is evaluated and greedily
///   merged into its slot before the next one is generated.
/// - Batch modes: all candidates are generated first, evaluated as one
///   batch, then merged slot by slot.
///
/// Incumbents survive ties. The number of slots never changes. Returns the
/// number of slots that were replaced.
pub fn update_slots<P, R, F>(
    slots: &mut Vec<Solution>,
    evaluator: &mut Evaluator<'_, P>,
    rng: &mut R,
    mut generate: F,
) -> usize
where
    P: Problem,
    R: Rng + ?Sized,
    F: FnMut(usize, &Solution, &mut R) -> Option<Vec<f64>>,
{
    let bounds = evaluator.bounds();
    let sense = evaluator.sense();

    if !evaluator.mode().is_batch() {
        let mut replaced = 0;
        for idx in 0..slots.len() {
            if let Some(raw) = generate(idx, &slots[idx], rng) {
                let candidate = evaluator.evaluate(bounds.amend(raw, rng));
                if replace_if_better(&mut slots[idx], candidate, sense) {
                    replaced += 1;
                }
            }
        }
        return replaced;
    }

    let mut indices = Vec::with_capacity(slots.len());
    let mut positions = Vec::with_capacity(slots.len());
    for (idx, member) in slots.iter().enumerate() {
        if let Some(raw) = generate(idx, member, rng) {
            indices.push(idx);
            positions.push(bounds.amend(raw, rng));
        }
    }
    let candidates = evaluator.evaluate_batch(positions);

    if indices.len() == slots.len() {
        let before: Vec<f64> = slots.iter().map(Solution::fitness).collect();
        let merged = greedy_selection_population(std::mem::take(slots), candidates, sense);
        let replaced = merged
            .iter()
            .zip(before)
            .filter(|(s, f)| sense.is_better(s.fitness(), *f))
            .count();
        *slots = merged;
        replaced
    } else {
        let mut replaced = 0;
        for (idx, candidate) in indices.into_iter().zip(candidates) {
            if replace_if_better(&mut slots[idx], candidate, sense) {
                replaced += 1;
            }
        }
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{FnProblem, Target};
    use crate::random::create_rng;

    fn sphere(n: usize) -> FnProblem<impl Fn(&[f64]) -> f64 + Send + Sync> {
        FnProblem::new(
            Bounds::uniform(n, -5.0, 5.0).unwrap(),
            Sense::Minimize,
            |x: &[f64]| x.iter().map(|v| v * v).sum(),
        )
    }

    fn at(x: f64, n: usize) -> Solution {
        Solution::new(vec![x; n], Target::single(x * x * n as f64))
    }

    // ---- Evaluator ----

    #[test]
    fn test_evaluate_counts() {
        let p = sphere(2);
        let mut ev = Evaluator::new(&p, EvalMode::Incremental, None).unwrap();
        let s = ev.evaluate(vec![1.0, 2.0]);
        assert_eq!(s.fitness(), 5.0);
        assert_eq!(s.position, vec![1.0, 2.0]);
        assert_eq!(ev.evaluations(), 1);
    }

    #[test]
    fn test_batch_preserves_order_in_every_mode() {
        let p = sphere(1);
        let positions: Vec<Vec<f64>> = (0..64).map(|i| vec![i as f64 * 0.05]).collect();

        for mode in [EvalMode::Incremental, EvalMode::Batch, EvalMode::Parallel] {
            let mut ev = Evaluator::new(&p, mode, Some(3)).unwrap();
            let sols = ev.evaluate_batch(positions.clone());
            assert_eq!(sols.len(), 64);
            for (i, s) in sols.iter().enumerate() {
                assert_eq!(s.position, positions[i], "mode {:?}", mode);
                assert!((s.fitness() - positions[i][0].powi(2)).abs() < 1e-12);
            }
            assert_eq!(ev.evaluations(), 64);
        }
    }

    #[test]
    fn test_parallel_on_global_pool() {
        let p = sphere(3);
        let mut ev = Evaluator::new(&p, EvalMode::Parallel, None).unwrap();
        let sols = ev.evaluate_batch(vec![vec![1.0, 1.0, 1.0], vec![0.0, 0.0, 2.0]]);
        assert_eq!(sols[0].fitness(), 3.0);
        assert_eq!(sols[1].fitness(), 4.0);
    }

    // ---- update_slots ----

    #[test]
    fn test_update_slots_incremental() {
        let p = sphere(1);
        let mut ev = Evaluator::new(&p, EvalMode::Incremental, None).unwrap();
        let mut rng = create_rng(1);
        let mut slots = vec![at(4.0, 1), at(3.0, 1)];
        let mut seen = Vec::new();

        // Slot 0 moves to the origin; slot 1 proposes a tie.
        let replaced = update_slots(&mut slots, &mut ev, &mut rng, |idx, member, _| {
            seen.push((idx, member.position[0]));
            Some(vec![if idx == 0 { 0.0 } else { 3.0 }])
        });

        assert_eq!(replaced, 1);
        assert_eq!(slots[0].position, vec![0.0]);
        assert_eq!(slots[1].position, vec![3.0]);
        assert_eq!(seen, vec![(0, 4.0), (1, 3.0)]);
        assert_eq!(ev.evaluations(), 2);
    }

    #[test]
    fn test_update_slots_generation_order() {
        use std::sync::Mutex;

        let log = Mutex::new(Vec::new());
        let p = FnProblem::new(
            Bounds::uniform(1, -5.0, 5.0).unwrap(),
            Sense::Minimize,
            |x: &[f64]| {
                log.lock().unwrap().push(format!("eval {}", x[0]));
                x[0] * x[0]
            },
        );

        let run = |mode| {
            log.lock().unwrap().clear();
            let mut ev = Evaluator::new(&p, mode, None).unwrap();
            let mut rng = create_rng(5);
            let mut slots = vec![at(4.0, 1), at(3.0, 1)];
            update_slots(&mut slots, &mut ev, &mut rng, |idx, _, _| {
                log.lock().unwrap().push(format!("gen {}", idx));
                Some(vec![idx as f64])
            });
            log.lock().unwrap().clone()
        };

        assert_eq!(
            run(EvalMode::Incremental),
            vec!["gen 0", "eval 0", "gen 1", "eval 1"]
        );
        assert_eq!(
            run(EvalMode::Batch),
            vec!["gen 0", "gen 1", "eval 0", "eval 1"]
        );
        // Parallel evaluation order is unspecified; generation still comes first.
        let parallel = run(EvalMode::Parallel);
        assert_eq!(parallel[..2], ["gen 0", "gen 1"]);
        assert_eq!(parallel.len(), 4);
    }

    #[test]
    fn test_update_slots_batch_merges_after_generation() {
        let p = sphere(1);
        for mode in [EvalMode::Batch, EvalMode::Parallel] {
            let mut ev = Evaluator::new(&p, mode, None).unwrap();
            let mut rng = create_rng(2);
            let mut slots = vec![at(1.0, 1), at(2.0, 1), at(3.0, 1)];

            let replaced = update_slots(&mut slots, &mut ev, &mut rng, |idx, _, _| {
                Some(vec![[0.5, 2.5, -3.0][idx]])
            });

            let xs: Vec<f64> = slots.iter().map(|s| s.position[0]).collect();
            // Improvement, worse, tie (incumbent kept).
            assert_eq!(xs, vec![0.5, 2.0, 3.0]);
            assert_eq!(replaced, 1);
            assert_eq!(ev.evaluations(), 3);
        }
    }

    #[test]
    fn test_update_slots_skipped_candidates() {
        let p = sphere(1);
        for mode in [EvalMode::Incremental, EvalMode::Batch] {
            let mut ev = Evaluator::new(&p, mode, None).unwrap();
            let mut rng = create_rng(3);
            let mut slots = vec![at(1.0, 1), at(2.0, 1), at(3.0, 1)];

            let replaced = update_slots(&mut slots, &mut ev, &mut rng, |idx, _, _| {
                (idx != 1).then(|| vec![0.0])
            });

            assert_eq!(slots.len(), 3);
            assert_eq!(replaced, 2);
            assert_eq!(slots[1].position, vec![2.0]);
            assert_eq!(ev.evaluations(), 2);
        }
    }

    #[test]
    fn test_update_slots_repairs_candidates() {
        let p = sphere(2);
        let mut ev = Evaluator::new(&p, EvalMode::Batch, None).unwrap();
        let mut rng = create_rng(4);
        let mut slots = vec![at(5.0, 2); 4];

        update_slots(&mut slots, &mut ev, &mut rng, |_, _, _| {
            Some(vec![f64::NAN, 1e9])
        });

        for s in &slots {
            assert!(p.bounds().contains(&s.position));
        }
    }
}
