//! GWO configuration.
//!
//! [`GwoConfig`] holds all parameters that control a run: which update rule,
//! how many epochs, population size, evaluation mode and termination.

use crate::error::{Result, SwarmError};
use crate::eval::EvalMode;

/// Accepted range for [`GwoConfig::epoch`].
pub const EPOCH_RANGE: (usize, usize) = (1, 100_000);

/// Accepted range for [`GwoConfig::pop_size`].
pub const POP_SIZE_RANGE: (usize, usize) = (10, 10_000);

/// Position-update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Original Grey Wolf Optimizer: every wolf moves to the mean of three
    /// leader-centred encircling steps.
    ///
    /// Reference: Mirjalili, Mirjalili & Lewis (2014), *Adv. Eng. Softw.* 69
    #[default]
    Base,

    /// Random-walk GWO: leaders take Cauchy random-walk steps first, the pack
    /// follows the refreshed leaders around the global best, and the leaders
    /// compete for a place in the population.
    ///
    /// Reference: Gupta & Deep (2019), *Swarm Evol. Comput.* 44
    RandomWalk,

    /// GWO-WOA hybrid (M): whale encircling or random exploration half of the
    /// time, the GWO leader average otherwise.
    ///
    /// Reference: Mohammed & Rashid (2020), *Neural Comput. Appl.*
    WoaM,

    /// GWO-WOA hybrid (O): like [`WoaM`](Variant::WoaM) with a damped
    /// encircling step, a log-spiral exploration step and a slower `a` decay.
    ///
    /// Reference: Obadina, Thaha & Saheed (2021), *J. Vib. Control*
    WoaO,
}

/// Which hybrid candidates are evaluated and merged.
///
/// Only affects [`Variant::WoaM`] and [`Variant::WoaO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HybridMerge {
    /// Every candidate, whichever branch produced it, is repaired, evaluated
    /// and greedily merged into its slot.
    #[default]
    AllBranches,

    /// Only candidates from the GWO leader-average branch (`p >= 0.5`) are
    /// evaluated and merged; whale encircling and exploration candidates are
    /// computed and discarded, so those slots keep their incumbent.
    ExploitationOnly,
}

impl HybridMerge {
    /// Whether candidates from the `p < 0.5` branches are kept.
    pub fn keeps_whale_branches(self) -> bool {
        matches!(self, HybridMerge::AllBranches)
    }
}

/// Configuration for a GWO-family run.
///
/// # Defaults
///
/// ```
/// use u_swarm::gwo::{GwoConfig, Variant};
/// use u_swarm::eval::EvalMode;
///
/// let config = GwoConfig::default();
/// assert_eq!(config.variant, Variant::Base);
/// assert_eq!(config.epoch, 10_000);
/// assert_eq!(config.pop_size, 100);
/// assert_eq!(config.mode, EvalMode::Incremental);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_swarm::gwo::{GwoConfig, Variant};
/// use u_swarm::eval::EvalMode;
///
/// let config = GwoConfig::new(Variant::RandomWalk)
///     .with_epoch(500)
///     .with_pop_size(50)
///     .with_mode(EvalMode::Parallel)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GwoConfig {
    /// Update rule.
    pub variant: Variant,

    /// Total planned epochs, in [`EPOCH_RANGE`].
    ///
    /// Also the horizon of the decay schedules.
    pub epoch: usize,

    /// Number of wolves, in [`POP_SIZE_RANGE`].
    pub pop_size: usize,

    /// Evaluation mode.
    pub mode: EvalMode,

    /// Worker threads for [`EvalMode::Parallel`].
    ///
    /// `None` uses rayon's global pool.
    pub n_workers: Option<usize>,

    /// Merge policy of the hybrid variants.
    pub hybrid_merge: HybridMerge,

    /// Epochs without global-best improvement before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination (the default).
    pub stagnation_limit: usize,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked before each epoch; the run may overshoot by one epoch.
    pub time_limit_ms: Option<u64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GwoConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Base,
            epoch: 10_000,
            pop_size: 100,
            mode: EvalMode::Incremental,
            n_workers: None,
            hybrid_merge: HybridMerge::AllBranches,
            stagnation_limit: 0,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl GwoConfig {
    /// Default configuration for the given update rule.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_epoch(mut self, n: usize) -> Self {
        self.epoch = n;
        self
    }

    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self
    }

    pub fn with_mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the worker count for parallel evaluation.
    pub fn with_n_workers(mut self, n: usize) -> Self {
        self.n_workers = Some(n);
        self
    }

    pub fn with_hybrid_merge(mut self, merge: HybridMerge) -> Self {
        self.hybrid_merge = merge;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let (min, max) = EPOCH_RANGE;
        if !(min..=max).contains(&self.epoch) {
            return Err(SwarmError::EpochOutOfRange {
                epoch: self.epoch,
                min,
                max,
            });
        }
        let (min, max) = POP_SIZE_RANGE;
        if !(min..=max).contains(&self.pop_size) {
            return Err(SwarmError::PopSizeOutOfRange {
                pop_size: self.pop_size,
                min,
                max,
            });
        }
        if self.n_workers == Some(0) {
            return Err(SwarmError::InvalidWorkers);
        }
        if self.time_limit_ms == Some(0) {
            return Err(SwarmError::InvalidTimeLimit);
        }
        Ok(())
    }
}
