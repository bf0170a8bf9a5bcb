//! Optimization sense, fitness targets, solutions and the problem trait.

use super::bounds::Bounds;
use std::cmp::Ordering;

/// Whether the objective is minimized or maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

impl Sense {
    /// Ranks two fitness values: `Less` means `a` is better than `b`.
    ///
    /// NaN ranks worst under both senses and ties with another NaN.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match self {
                Sense::Minimize => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                Sense::Maximize => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            },
        }
    }

    /// Returns `true` only if `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// The worst representable fitness for this sense.
    pub fn worst(self) -> f64 {
        match self {
            Sense::Minimize => f64::INFINITY,
            Sense::Maximize => f64::NEG_INFINITY,
        }
    }
}

/// The evaluated value of a position.
///
/// `objectives` holds the raw objective values returned by the problem;
/// `fitness` is the scalar used for every comparison. With one objective the
/// two coincide; with several, fitness is their weighted sum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub fitness: f64,
    pub objectives: Vec<f64>,
}

impl Target {
    /// A single-objective target.
    pub fn single(value: f64) -> Self {
        Self {
            fitness: value,
            objectives: vec![value],
        }
    }

    /// Combines objective values into a target.
    ///
    /// Without weights every objective counts once. Weights are paired with
    /// objectives positionally; callers validate the lengths up front
    /// (see [`crate::gwo::GwoRunner`]).
    pub fn weighted(objectives: Vec<f64>, weights: Option<&[f64]>) -> Self {
        let fitness = match (objectives.as_slice(), weights) {
            ([only], None) => *only,
            (objs, None) => objs.iter().sum(),
            (objs, Some(w)) => objs.iter().zip(w.iter()).map(|(o, w)| o * w).sum(),
        };
        Self {
            fitness,
            objectives,
        }
    }
}

/// An evaluated candidate: a position and its target.
///
/// Unevaluated candidates are plain `Vec<f64>` positions; a `Solution` always
/// carries a defined target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub position: Vec<f64>,
    pub target: Target,
}

impl Solution {
    pub fn new(position: Vec<f64>, target: Target) -> Self {
        Self { position, target }
    }

    /// Shorthand for `self.target.fitness`.
    pub fn fitness(&self) -> f64 {
        self.target.fitness
    }
}

/// Defines a continuous optimization problem.
///
/// The swarm engine only needs the search box, the optimization sense and a
/// way to score positions.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because batch evaluation may score
/// candidates in parallel using rayon.
///
/// # Examples
///
/// ```
/// use u_swarm::problem::{Bounds, Problem, Sense};
///
/// struct Sphere {
///     bounds: Bounds,
/// }
///
/// impl Problem for Sphere {
///     fn bounds(&self) -> &Bounds {
///         &self.bounds
///     }
///
///     fn objectives(&self, position: &[f64]) -> Vec<f64> {
///         vec![position.iter().map(|x| x * x).sum()]
///     }
/// }
///
/// let p = Sphere { bounds: Bounds::uniform(3, -5.0, 5.0).unwrap() };
/// assert_eq!(p.sense(), Sense::Minimize);
/// assert_eq!(p.target(&[1.0, 2.0, 0.0]).fitness, 5.0);
/// ```
pub trait Problem: Send + Sync {
    /// The search box.
    fn bounds(&self) -> &Bounds;

    /// Optimization sense. Defaults to minimization.
    fn sense(&self) -> Sense {
        Sense::Minimize
    }

    /// Computes the raw objective values of a position.
    ///
    /// Must return the same number of objectives for every position.
    fn objectives(&self, position: &[f64]) -> Vec<f64>;

    /// Weights used to fold several objectives into one fitness value.
    ///
    /// `None` (the default) weighs every objective by one.
    fn objective_weights(&self) -> Option<&[f64]> {
        None
    }

    /// Scores a position.
    fn target(&self, position: &[f64]) -> Target {
        Target::weighted(self.objectives(position), self.objective_weights())
    }
}

/// Adapts a closure `Fn(&[f64]) -> f64` into a single-objective [`Problem`].
///
/// ```
/// use u_swarm::problem::{Bounds, FnProblem, Problem, Sense};
///
/// let problem = FnProblem::new(
///     Bounds::uniform(2, -1.0, 1.0).unwrap(),
///     Sense::Maximize,
///     |x: &[f64]| -x.iter().map(|v| v * v).sum::<f64>(),
/// );
/// assert_eq!(problem.target(&[0.0, 0.0]).fitness, 0.0);
/// ```
pub struct FnProblem<F> {
    bounds: Bounds,
    sense: Sense,
    func: F,
}

impl<F> FnProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    pub fn new(bounds: Bounds, sense: Sense, func: F) -> Self {
        Self {
            bounds,
            sense,
            func,
        }
    }
}

impl<F> Problem for FnProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn sense(&self) -> Sense {
        self.sense
    }

    fn objectives(&self, position: &[f64]) -> Vec<f64> {
        vec![(self.func)(position)]
    }

    fn target(&self, position: &[f64]) -> Target {
        Target::single((self.func)(position))
    }
}
