//! Rare lode deposits: weighted entry selection plus spherical cluster
//! growth at a height-scaled Y.

use orogen_utils::math;
use orogen_utils::random::Random;
use orogen_utils::{BlockPos, ChunkPos};
use serde::Deserialize;

use super::{is_exposed, is_in_chunk_column, shrunk_target, try_place_ore};
use crate::feature::ore::OreConfiguration;
use crate::height::HeightScaler;
use crate::level::WorldAccess;

/// One weighted lode option.
#[derive(Debug, Clone, Deserialize)]
pub struct LodeEntry {
    /// Selection weight; entries with `weight <= 0` are inert.
    pub weight: i32,
    /// Bottom of the authored (reference-space) Y band.
    pub min_y: i32,
    /// Top of the authored (reference-space) Y band.
    pub max_y: i32,
    /// Smallest cluster size in blocks.
    pub min_size: i32,
    /// Largest cluster size in blocks.
    pub max_size: i32,
    /// Ore written by this entry.
    pub ore: OreConfiguration,
}

/// Full lode table for one placed feature.
#[derive(Debug, Clone, Deserialize)]
pub struct LodeConfig {
    /// Candidate entries, selected proportionally to their weights.
    pub entries: Vec<LodeEntry>,
    /// Remaining-target multiplier applied by the one-shot exposure
    /// shrink; clamped to [0, 1] at use.
    #[serde(default = "default_exposure_shrink_factor")]
    pub exposure_shrink_factor: f32,
}

fn default_exposure_shrink_factor() -> f32 {
    0.55
}

/// Places at most one rare deposit per invocation: pick one weighted
/// entry, resolve its Y band against the effective world height, then
/// grow a roughly spherical cluster.
pub struct LodeFeature {
    config: LodeConfig,
}

impl LodeFeature {
    /// Creates the feature from its lode table.
    #[must_use]
    pub fn new(config: LodeConfig) -> Self {
        Self { config }
    }

    /// Attempts one lode placement in `origin`'s chunk column.
    ///
    /// Returns whether at least one block was placed. An empty or
    /// all-inert entry table, a degenerate size range, and a Y band that
    /// clamps to nothing in this world are all ordinary `false` results.
    pub fn place<W: WorldAccess, R: Random>(
        &self,
        world: &mut W,
        random: &mut R,
        scaler: &HeightScaler,
        origin: BlockPos,
    ) -> bool {
        let origin_chunk = ChunkPos::containing(origin);

        let Some(entry) = pick_entry(&self.config.entries, random) else {
            return false;
        };
        if entry.min_size <= 0 || entry.max_size < entry.min_size {
            return false;
        }

        // The band is authored in reference space; move it to this world.
        let effective = scaler.resolve_effective_max_height(world.top_y_exclusive());
        let scaled_min_y = HeightScaler::scale_y(entry.min_y, effective);
        let scaled_max_y = HeightScaler::scale_y(entry.max_y, effective);

        let clamped_min_y = scaled_min_y.max(world.bottom_y());
        let clamped_max_y = scaled_max_y.min(world.top_y_exclusive() - 1);
        if clamped_min_y > clamped_max_y {
            return false;
        }

        let y = random.next_i32_between(clamped_min_y, clamped_max_y);
        let lode_origin = origin.with_y(y);

        let target_blocks = random.next_i32_between(entry.min_size, entry.max_size);
        let shrink_factor = self.config.exposure_shrink_factor.clamp(0.0, 1.0);
        grow_cluster(
            world,
            random,
            &entry.ore,
            lode_origin,
            target_blocks,
            shrink_factor,
            origin_chunk,
        )
    }
}

/// Selects one entry with probability proportional to its weight.
///
/// Entries with `weight <= 0` are skipped without consuming roll space,
/// so they can never be selected regardless of the random stream.
fn pick_entry<'a, R: Random>(entries: &'a [LodeEntry], random: &mut R) -> Option<&'a LodeEntry> {
    let total_weight: i32 = entries
        .iter()
        .filter(|entry| entry.weight > 0)
        .map(|entry| entry.weight)
        .sum();
    if total_weight <= 0 {
        return None;
    }

    let roll = random.next_i32_bounded(total_weight);
    let mut cumulative = 0;
    for entry in entries {
        if entry.weight <= 0 {
            continue;
        }
        cumulative += entry.weight;
        if roll < cumulative {
            return Some(entry);
        }
    }
    None
}

fn grow_cluster<W: WorldAccess, R: Random>(
    world: &mut W,
    random: &mut R,
    ore: &OreConfiguration,
    origin: BlockPos,
    mut target_blocks: i32,
    exposure_shrink_factor: f32,
    origin_chunk: ChunkPos,
) -> bool {
    if target_blocks <= 0 {
        return false;
    }

    let mut generated = false;
    let mut shrink_applied = false;
    let mut placed = 0;

    let radius = 2.0_f64.max(f64::from(target_blocks).cbrt() * 2.0);
    let max_attempts = 12.max(target_blocks * 6);

    let mut attempts = 0;
    while attempts < max_attempts && placed < target_blocks {
        attempts += 1;
        let pos = random_pos_in_sphere(origin, radius, random);

        if !world.contains_y(pos.0.y) || !is_in_chunk_column(pos, origin_chunk) {
            continue;
        }

        if try_place_ore(world, random, ore, pos) {
            placed += 1;
            generated = true;

            if !shrink_applied && is_exposed(world, pos, true) {
                target_blocks = shrunk_target(target_blocks, exposure_shrink_factor);
                shrink_applied = true;
            }
        }
    }

    generated
}

/// Samples an integer offset from `origin` roughly inside the sphere of
/// the given radius.
///
/// Rejection-samples the bounding cube up to five times; on exhaustion
/// the last cube sample is accepted even when it lies outside the sphere,
/// so a draw never costs more than five tries.
fn random_pos_in_sphere<R: Random>(origin: BlockPos, radius: f64, random: &mut R) -> BlockPos {
    let radius_sq = radius * radius;

    let mut x = 0.0;
    let mut y = 0.0;
    let mut z = 0.0;

    for _ in 0..5 {
        x = (random.next_f64() * 2.0 - 1.0) * radius;
        y = (random.next_f64() * 2.0 - 1.0) * radius;
        z = (random.next_f64() * 2.0 - 1.0) * radius;

        if x * x + y * y + z * z <= radius_sq {
            break;
        }
    }

    origin.offset(math::round(x), math::round(y), math::round(z))
}
