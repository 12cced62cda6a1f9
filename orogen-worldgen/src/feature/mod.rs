//! Generation features: contiguous ore veins and rare lode deposits.
//!
//! Both features mutate the world through the [`WorldAccess`] capability,
//! draw from a host-supplied random source, and by construction never
//! write outside the chunk column containing their origin. Every failure
//! mode is an ordinary `false` result; the host simply moves on to the
//! next attempt.

pub mod lode;
pub mod ore;
pub mod vein;

pub use lode::{LodeConfig, LodeEntry, LodeFeature};
pub use ore::{OreConfiguration, OreTarget, TargetPredicate};
pub use vein::{VeinFeature, VeinSpec};

use orogen_utils::random::Random;
use orogen_utils::{BlockPos, ChunkPos};

use crate::direction::Direction;
use crate::level::WorldAccess;

/// Attempts to replace the block at `pos` with the first matching target's
/// ore state.
///
/// A match can still be discarded by the config's `discard_on_air_chance`
/// when the position is exposed to air.
fn try_place_ore<W: WorldAccess, R: Random>(
    world: &mut W,
    random: &mut R,
    config: &OreConfiguration,
    pos: BlockPos,
) -> bool {
    for target in &config.targets {
        if target.target.test(world.block_state(pos), random) {
            if should_discard_for_air_exposure(world, random, config, pos) {
                return false;
            }
            world.set_block_state(pos, target.state);
            return true;
        }
    }
    false
}

fn should_discard_for_air_exposure<W: WorldAccess, R: Random>(
    world: &W,
    random: &mut R,
    config: &OreConfiguration,
    pos: BlockPos,
) -> bool {
    if config.discard_on_air_chance <= 0.0 {
        return false;
    }
    if !is_exposed_to_air(world, pos) {
        return false;
    }
    random.next_f32() < config.discard_on_air_chance
}

/// Whether any in-world neighbor of `pos` is air.
fn is_exposed_to_air<W: WorldAccess>(world: &W, pos: BlockPos) -> bool {
    Direction::ALL.iter().any(|direction| {
        let adjacent = direction.relative(pos);
        world.contains_y(adjacent.0.y) && world.block_state(adjacent).is_air()
    })
}

/// Whether any in-world neighbor of `pos` is air or, when `count_fluids`,
/// holds a fluid.
fn is_exposed<W: WorldAccess>(world: &W, pos: BlockPos, count_fluids: bool) -> bool {
    Direction::ALL.iter().any(|direction| {
        let adjacent = direction.relative(pos);
        if !world.contains_y(adjacent.0.y) {
            return false;
        }
        world.block_state(adjacent).is_air()
            || (count_fluids && !world.fluid_state(adjacent).is_empty())
    })
}

/// Whether `pos` lies in the given chunk column.
fn is_in_chunk_column(pos: BlockPos, origin_chunk: ChunkPos) -> bool {
    ChunkPos::containing(pos) == origin_chunk
}

/// One-shot shrink applied when a growing deposit first touches open
/// space; never drops the target below one block.
fn shrunk_target(target_blocks: i32, exposure_shrink_factor: f32) -> i32 {
    1.max((target_blocks as f32 * exposure_shrink_factor).floor() as i32)
}
