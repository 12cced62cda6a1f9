//! Per-system random derivers for ore generation.

use orogen_utils::random::{PositionalRandom, Random, RandomSource, RandomSplitter};
use orogen_utils::random::xoroshiro::Xoroshiro;

/// Random derivers handed to the generation systems.
///
/// Built once per world from its seed. For every placement attempt the
/// host derives a per-position source from the matching deriver, which
/// keeps the outcome independent of chunk generation order.
pub struct WorldRandomConfig {
    /// The world seed.
    pub seed: u64,
    /// Base random deriver.
    pub base_deriver: RandomSplitter,
    /// Deriver for band-ore vein attempts.
    pub vein_deriver: RandomSplitter,
    /// Deriver for lode attempts.
    pub lode_deriver: RandomSplitter,
}

impl WorldRandomConfig {
    /// Creates the derivers for a world seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = Xoroshiro::from_seed(seed);
        let base_deriver = rng.next_positional();

        let vein_deriver = fork_deriver(&base_deriver, "orogen:vein");
        let lode_deriver = fork_deriver(&base_deriver, "orogen:lode");

        Self {
            seed,
            base_deriver,
            vein_deriver,
            lode_deriver,
        }
    }
}

fn fork_deriver(base: &RandomSplitter, name: &str) -> RandomSplitter {
    match base.with_hash_of(name) {
        RandomSource::Xoroshiro(mut random) => random.next_positional(),
        RandomSource::Legacy(mut random) => random.next_positional(),
    }
}
