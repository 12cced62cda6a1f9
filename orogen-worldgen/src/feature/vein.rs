//! Contiguous band-ore veins grown by bounded random walk.

use orogen_utils::random::Random;
use orogen_utils::{BlockPos, ChunkPos};
use smallvec::SmallVec;

use super::{is_exposed, is_in_chunk_column, shrunk_target, try_place_ore};
use crate::direction::Direction;
use crate::feature::ore::OreConfiguration;
use crate::level::WorldAccess;

/// Shape parameters of a vein feature, fixed at registration time.
#[derive(Debug, Clone, Copy)]
pub struct VeinSpec {
    /// Smallest target size in blocks.
    pub min_size: i32,
    /// Largest target size in blocks.
    pub max_size: i32,
    /// Shrink the remaining target once the vein first touches open space.
    pub shrink_on_exposure: bool,
    /// Remaining-target multiplier applied by the one-shot shrink.
    pub exposure_shrink_factor: f32,
    /// Whether fluids count as open space for the shrink rule.
    pub count_fluids_as_exposure: bool,
}

impl VeinSpec {
    /// A vein with the given size range and no exposure shrink.
    #[must_use]
    pub const fn sized(min_size: i32, max_size: i32) -> Self {
        Self {
            min_size,
            max_size,
            shrink_on_exposure: false,
            exposure_shrink_factor: 1.0,
            count_fluids_as_exposure: false,
        }
    }
}

/// Grows a connected ore cluster of a randomized target size, instead of
/// the speckled single blocks a plain scatter would produce.
#[derive(Debug, Clone, Copy)]
pub struct VeinFeature {
    spec: VeinSpec,
}

impl VeinFeature {
    /// Creates the feature from its spec.
    #[must_use]
    pub const fn new(spec: VeinSpec) -> Self {
        Self { spec }
    }

    /// Attempts one vein placement at `origin`.
    ///
    /// Returns whether at least one block was placed. A degenerate size
    /// range, a start search that finds no replaceable block, and
    /// exhaustion of the attempt ceiling are all ordinary `false` results.
    pub fn place<W: WorldAccess, R: Random>(
        &self,
        world: &mut W,
        random: &mut R,
        config: &OreConfiguration,
        origin: BlockPos,
    ) -> bool {
        let spec = self.spec;
        if spec.min_size <= 0 || spec.max_size < spec.min_size {
            return false;
        }

        let origin_chunk = ChunkPos::containing(origin);
        let mut target_blocks = random.next_i32_between(spec.min_size, spec.max_size);
        let mut shrink_applied = false;

        // Start at the origin if it is replaceable, otherwise probe its
        // immediate surroundings.
        let mut placed: SmallVec<[BlockPos; 16]> = SmallVec::new();
        if try_place_ore(world, random, config, origin) {
            placed.push(origin);
        } else {
            let Some(start) = find_and_place_start(world, random, config, origin, origin_chunk)
            else {
                return false;
            };
            placed.push(start);
        }

        if spec.shrink_on_exposure && is_exposed(world, placed[0], spec.count_fluids_as_exposure) {
            target_blocks = shrunk_target(target_blocks, spec.exposure_shrink_factor);
            shrink_applied = true;
        }

        let max_attempts = 48.max(target_blocks * 24);
        let mut attempts = 0;
        while attempts < max_attempts && (placed.len() as i32) < target_blocks {
            attempts += 1;

            // Walk one step from any block already in the vein.
            let base = placed[random.next_i32_bounded(placed.len() as i32) as usize];
            let direction = Direction::ALL[random.next_i32_bounded(6) as usize];
            let next = direction.relative(base);

            if !world.contains_y(next.0.y) || !is_in_chunk_column(next, origin_chunk) {
                continue;
            }

            if try_place_ore(world, random, config, next) {
                placed.push(next);

                if spec.shrink_on_exposure
                    && !shrink_applied
                    && is_exposed(world, next, spec.count_fluids_as_exposure)
                {
                    target_blocks = shrunk_target(target_blocks, spec.exposure_shrink_factor);
                    shrink_applied = true;
                }
            }
        }

        true
    }
}

/// Short local search around the origin; raises the odds of starting
/// inside a replaceable block at all.
fn find_and_place_start<W: WorldAccess, R: Random>(
    world: &mut W,
    random: &mut R,
    config: &OreConfiguration,
    origin: BlockPos,
    origin_chunk: ChunkPos,
) -> Option<BlockPos> {
    for _ in 0..32 {
        let dx = random.next_i32_bounded(5) - 2;
        let dy = random.next_i32_bounded(5) - 2;
        let dz = random.next_i32_bounded(5) - 2;
        let candidate = origin.offset(dx, dy, dz);

        if !world.contains_y(candidate.0.y) || !is_in_chunk_column(candidate, origin_chunk) {
            continue;
        }
        if try_place_ore(world, random, config, candidate) {
            return Some(candidate);
        }
    }
    None
}
