//! Evaluation modes.

/// How candidates of an epoch are evaluated and merged.
///
/// Selected once per run and passed to every epoch.
///
/// # Examples
///
/// ```
/// use u_swarm::eval::EvalMode;
///
/// assert!(!EvalMode::Incremental.is_batch());
/// assert!(EvalMode::Batch.is_batch());
/// assert!(EvalMode::Parallel.is_batch());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvalMode {
    /// Evaluate each candidate right after it is generated and replace its
    /// slot before the next candidate is built.
    ///
    /// Later candidates of the same epoch see earlier replacements.
    #[default]
    Incremental,

    /// Generate every candidate first, evaluate them sequentially as one
    /// batch, then merge slot by slot.
    ///
    /// Every candidate is built from the pre-epoch population.
    Batch,

    /// Like [`Batch`](EvalMode::Batch), but the batch is evaluated on a
    /// rayon thread pool.
    ///
    /// Without the `parallel` feature this behaves exactly like `Batch`.
    Parallel,
}

impl EvalMode {
    /// Returns `true` for the generate-all-then-merge modes.
    pub fn is_batch(self) -> bool {
        !matches!(self, EvalMode::Incremental)
    }
}
