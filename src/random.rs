//! Seeded random sources.
//!
//! Every operation that needs randomness takes an explicit `&mut R: Rng`.
//! [`create_rng`] builds the concrete generator a run threads through its
//! epochs, so two runs with the same seed draw the same sequence.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The generator type used by [`crate::gwo::GwoRunner`].
pub type SwarmRng = StdRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> SwarmRng {
    StdRng::seed_from_u64(seed)
}
