//! Ranking: leader extraction, best-of scans and elitist truncation.
//!
//! All rankings use [`Sense::compare`] with a stable sort, so members with
//! equal fitness keep their original relative order (first seen wins).

use crate::problem::{Sense, Solution};

/// Snapshot of a population ranked by fitness.
///
/// Every member is an owned copy; editing the source population afterwards
/// does not change the leaders.
#[derive(Debug, Clone)]
pub struct SpecialSolutions {
    /// The whole population, best first.
    pub sorted: Vec<Solution>,
    /// The `k` best members, best first.
    pub best: Vec<Solution>,
    /// The `k` worst members, worst first.
    pub worst: Vec<Solution>,
}

/// Stable in-place sort, best first.
pub fn sort_population(population: &mut [Solution], sense: Sense) {
    population.sort_by(|a, b| sense.compare(a.fitness(), b.fitness()));
}

/// Ranks a population and copies out its `k` best and `k` worst members.
///
/// The input is not reordered. `k` is capped at the population size.
///
/// # Examples
///
/// ```
/// use u_swarm::population::special_solutions;
/// use u_swarm::problem::{Sense, Solution, Target};
///
/// let pop: Vec<Solution> = [3.0, 1.0, 2.0]
///     .iter()
///     .map(|&f| Solution::new(vec![f], Target::single(f)))
///     .collect();
///
/// let ranked = special_solutions(&pop, 2, Sense::Minimize);
/// assert_eq!(ranked.best[0].fitness(), 1.0);
/// assert_eq!(ranked.worst[0].fitness(), 3.0);
/// assert_eq!(pop[0].fitness(), 3.0); // untouched
/// ```
pub fn special_solutions(population: &[Solution], k: usize, sense: Sense) -> SpecialSolutions {
    let mut sorted = population.to_vec();
    sort_population(&mut sorted, sense);

    let k = k.min(sorted.len());
    let best = sorted[..k].to_vec();
    let worst = sorted.iter().rev().take(k).cloned().collect();

    SpecialSolutions {
        sorted,
        best,
        worst,
    }
}

/// Returns the best member; the earliest one wins ties.
///
/// Returns `None` for an empty population.
pub fn best_of(population: &[Solution], sense: Sense) -> Option<&Solution> {
    population.iter().fold(None, |best, sol| match best {
        Some(b) if !sense.is_better(sol.fitness(), b.fitness()) => Some(b),
        _ => Some(sol),
    })
}

/// Keeps the best `size` members of `combined`, sorted best first.
///
/// Ties are broken exactly as in [`special_solutions`].
pub fn sorted_trim(mut combined: Vec<Solution>, size: usize, sense: Sense) -> Vec<Solution> {
    sort_population(&mut combined, sense);
    combined.truncate(size);
    combined
}
