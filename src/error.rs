//! Error types for u-swarm.
//!
//! Only construction-time problems surface as errors: malformed bounds,
//! out-of-range configuration, mismatched objective weights. Once a run is
//! validated the per-epoch update has no recoverable failure modes.

use thiserror::Error;

/// Errors raised while validating a problem or a run configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SwarmError {
    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds vector
        lower_len: usize,
        /// Length of the upper bounds vector
        upper_len: usize,
    },

    /// Bounds with zero dimensions.
    #[error("bounds must have at least one dimension")]
    EmptyBounds,

    /// A lower bound exceeds its corresponding upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// A bound is NaN or infinite.
    #[error("non-finite bound at index {index}")]
    NonFiniteBounds {
        /// Index of the offending bound pair
        index: usize,
    },

    /// Epoch count outside the supported range.
    #[error("epoch ({epoch}) must be in [{min}, {max}]")]
    EpochOutOfRange {
        /// The rejected epoch count
        epoch: usize,
        /// Smallest accepted value
        min: usize,
        /// Largest accepted value
        max: usize,
    },

    /// Population size outside the supported range.
    #[error("pop_size ({pop_size}) must be in [{min}, {max}]")]
    PopSizeOutOfRange {
        /// The rejected population size
        pop_size: usize,
        /// Smallest accepted value
        min: usize,
        /// Largest accepted value
        max: usize,
    },

    /// Worker count of zero for parallel evaluation.
    #[error("n_workers must be positive when set")]
    InvalidWorkers,

    /// A time limit of zero milliseconds.
    #[error("time_limit_ms must be positive or None")]
    InvalidTimeLimit,

    /// Objective weights do not match the number of objectives.
    #[error("objective weights mismatch: {weights} weights for {objectives} objectives")]
    ObjectiveWeights {
        /// Number of weights provided by the problem
        weights: usize,
        /// Number of objectives returned by the problem
        objectives: usize,
    },

    /// The rayon worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// A specialized `Result` type for u-swarm operations.
pub type Result<T> = std::result::Result<T, SwarmError>;

impl SwarmError {
    /// Returns `true` for errors describing malformed search-space bounds.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            SwarmError::BoundsMismatch { .. }
                | SwarmError::EmptyBounds
                | SwarmError::InvalidBounds { .. }
                | SwarmError::NonFiniteBounds { .. }
        )
    }

    /// Returns `true` for errors describing an invalid run configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SwarmError::EpochOutOfRange { .. }
                | SwarmError::PopSizeOutOfRange { .. }
                | SwarmError::InvalidWorkers
                | SwarmError::InvalidTimeLimit
        )
    }
}
