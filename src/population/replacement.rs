//! Greedy replacement and global-best tracking.
//!
//! A challenger only displaces an incumbent when it is strictly better;
//! on an exact tie the incumbent stays.

use super::leaders::best_of;
use crate::problem::{Sense, Solution};

/// Returns the fitter of `a` and `b`; `a` wins an exact tie.
///
/// Call it as `better_solution(incumbent, challenger, sense)` so that a tie
/// keeps the existing member.
pub fn better_solution(a: Solution, b: Solution, sense: Sense) -> Solution {
    if sense.is_better(b.fitness(), a.fitness()) {
        b
    } else {
        a
    }
}

/// Replaces `slot` with `candidate` if the candidate is strictly better.
///
/// Returns whether the slot changed.
pub fn replace_if_better(slot: &mut Solution, candidate: Solution, sense: Sense) -> bool {
    if sense.is_better(candidate.fitness(), slot.fitness()) {
        *slot = candidate;
        true
    } else {
        false
    }
}

/// Positional greedy merge of a freshly evaluated population into the old one.
///
/// Slot `i` of the result is the better of `old[i]` and `new[i]`, keeping
/// `old[i]` on ties.
///
/// # Panics
/// Panics if the two populations differ in length.
pub fn greedy_selection_population(
    old: Vec<Solution>,
    new: Vec<Solution>,
    sense: Sense,
) -> Vec<Solution> {
    assert_eq!(
        old.len(),
        new.len(),
        "greedy selection requires equally sized populations"
    );
    old.into_iter()
        .zip(new)
        .map(|(incumbent, challenger)| better_solution(incumbent, challenger, sense))
        .collect()
}

/// Moves the global best forward if the population holds a strictly better
/// member. Returns whether it changed.
pub fn update_global_best(g_best: &mut Solution, population: &[Solution], sense: Sense) -> bool {
    match best_of(population, sense) {
        Some(candidate) if sense.is_better(candidate.fitness(), g_best.fitness()) => {
            *g_best = candidate.clone();
            true
        }
        _ => false,
    }
}
