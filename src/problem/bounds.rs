//! Box constraints of the search space and boundary repair.

use crate::error::{Result, SwarmError};
use rand::Rng;

/// Per-dimension box constraints `lower[i] <= x[i] <= upper[i]`.
///
/// Bounds are validated once on construction and stay constant for a run.
///
/// # Examples
///
/// ```
/// use u_swarm::problem::Bounds;
///
/// let bounds = Bounds::new(vec![-10.0, -15.0], vec![10.0, 15.0]).unwrap();
/// assert_eq!(bounds.n_dims(), 2);
/// assert!(bounds.contains(&[0.0, 15.0]));
/// assert!(Bounds::new(vec![1.0], vec![0.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Creates validated bounds.
    ///
    /// Fails if the vectors differ in length, are empty, contain a non-finite
    /// value or span, or have `lower[i] > upper[i]` anywhere.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(SwarmError::BoundsMismatch {
                lower_len: lower.len(),
                upper_len: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(SwarmError::EmptyBounds);
        }
        for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() || !(hi - lo).is_finite() {
                return Err(SwarmError::NonFiniteBounds { index });
            }
            if lo > hi {
                return Err(SwarmError::InvalidBounds {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Creates bounds with the same interval in every dimension.
    pub fn uniform(n_dims: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::new(vec![lower; n_dims], vec![upper; n_dims])
    }

    /// Number of decision variables.
    pub fn n_dims(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Returns `true` if every coordinate is finite and inside its interval.
    pub fn contains(&self, position: &[f64]) -> bool {
        position.len() == self.n_dims()
            && position
                .iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&x, (&lo, &hi))| x.is_finite() && lo <= x && x <= hi)
    }

    /// Draws a position uniformly from the box.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| rng.random_range(lo..=hi))
            .collect()
    }

    /// Repairs a candidate position so that it lies inside the box.
    ///
    /// Coordinates that are finite and in range are kept. Any other
    /// coordinate (out of range, NaN, infinite) is resampled uniformly from
    /// its interval; nothing is clamped onto the faces of the box.
    ///
    /// # Panics
    /// Panics if `position` has a different dimensionality than the bounds.
    pub fn amend<R: Rng + ?Sized>(&self, mut position: Vec<f64>, rng: &mut R) -> Vec<f64> {
        assert_eq!(
            position.len(),
            self.n_dims(),
            "position dimensionality does not match bounds"
        );

        let mut resampled = 0usize;
        for ((x, &lo), &hi) in position
            .iter_mut()
            .zip(self.lower.iter())
            .zip(self.upper.iter())
        {
            if !(x.is_finite() && lo <= *x && *x <= hi) {
                *x = rng.random_range(lo..=hi);
                resampled += 1;
            }
        }
        if resampled > 0 {
            tracing::trace!(resampled, "boundary repair resampled coordinates");
        }
        position
    }
}
