//! Property-based tests for u-swarm
//!
//! Uses proptest to check the population mechanics on arbitrary inputs.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use u_swarm::population::{
    better_solution, greedy_selection_population, sorted_trim, special_solutions,
};
use u_swarm::problem::{Bounds, Sense, Solution, Target};

fn solutions(fitness: &[f64]) -> Vec<Solution> {
    fitness
        .iter()
        .enumerate()
        .map(|(i, &f)| Solution::new(vec![i as f64], Target::single(f)))
        .collect()
}

fn sense_strategy() -> impl Strategy<Value = Sense> {
    prop_oneof![Just(Sense::Minimize), Just(Sense::Maximize)]
}

proptest! {
    // ==================== Bounds ====================

    #[test]
    fn amend_always_lands_inside(
        raw in prop::collection::vec(prop_oneof![
            -1e6..1e6f64,
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ], 5),
        seed in any::<u64>()
    ) {
        let bounds = Bounds::new(
            vec![-10.0, -15.0, -4.0, -2.0, -8.0],
            vec![10.0, 15.0, 12.0, 8.0, 20.0],
        ).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let amended = bounds.amend(raw.clone(), &mut rng);

        prop_assert!(bounds.contains(&amended));
        for (i, (&r, &a)) in raw.iter().zip(&amended).enumerate() {
            if r.is_finite() && r >= bounds.lower()[i] && r <= bounds.upper()[i] {
                prop_assert_eq!(r, a);
            }
        }
    }

    #[test]
    fn sample_within_bounds(
        dim in 1usize..20,
        half_width in 0.1f64..100.0,
        seed in any::<u64>()
    ) {
        let bounds = Bounds::uniform(dim, -half_width, half_width).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let x = bounds.sample(&mut rng);
        prop_assert_eq!(x.len(), dim);
        prop_assert!(bounds.contains(&x));
    }

    // ==================== Selection ====================

    #[test]
    fn greedy_never_keeps_the_worse_member(
        old in prop::collection::vec(-100.0..100.0f64, 1..30),
        offsets in prop::collection::vec(-5.0..5.0f64, 30),
        sense in sense_strategy()
    ) {
        let new: Vec<f64> = old.iter().zip(&offsets).map(|(o, d)| o + d).collect();
        let merged = greedy_selection_population(solutions(&old), solutions(&new), sense);

        prop_assert_eq!(merged.len(), old.len());
        for ((m, &o), &n) in merged.iter().zip(&old).zip(&new) {
            prop_assert!(!sense.is_better(o, m.fitness()));
            prop_assert!(!sense.is_better(n, m.fitness()));
        }
    }

    #[test]
    fn better_solution_prefers_first_on_ties(f in -100.0..100.0f64, sense in sense_strategy()) {
        let a = Solution::new(vec![1.0], Target::single(f));
        let b = Solution::new(vec![2.0], Target::single(f));
        prop_assert_eq!(better_solution(a, b, sense).position, vec![1.0]);
    }

    // ==================== Ranking ====================

    #[test]
    fn sorted_trim_keeps_the_best_in_order(
        fitness in prop::collection::vec(-100.0..100.0f64, 1..50),
        size in 1usize..50,
        sense in sense_strategy()
    ) {
        let trimmed = sorted_trim(solutions(&fitness), size, sense);

        prop_assert_eq!(trimmed.len(), size.min(fitness.len()));
        for pair in trimmed.windows(2) {
            prop_assert!(!sense.is_better(pair[1].fitness(), pair[0].fitness()));
        }
        if let Some(last) = trimmed.last() {
            let better_than_last = fitness
                .iter()
                .filter(|&&f| sense.is_better(f, last.fitness()))
                .count();
            prop_assert!(better_than_last < trimmed.len());
        }
    }

    #[test]
    fn leaders_are_the_top_of_the_ranking(
        fitness in prop::collection::vec(-100.0..100.0f64, 3..40),
        sense in sense_strategy()
    ) {
        let pop = solutions(&fitness);
        let ranked = special_solutions(&pop, 3, sense);

        prop_assert_eq!(ranked.best.len(), 3);
        prop_assert_eq!(&ranked.best[..], &ranked.sorted[..3]);
        for member in &pop {
            prop_assert!(!sense.is_better(member.fitness(), ranked.best[0].fitness()));
            prop_assert!(!sense.is_better(ranked.worst[0].fitness(), member.fitness()));
        }
    }
}
