//! Attempt-count modifier scaled to the effective world height.

use orogen_utils::BlockPos;
use orogen_utils::random::Random;
use serde::Deserialize;

use super::{PlacementContext, PlacementModifier};
use crate::height::HeightScaler;
use crate::placement::providers::IntProvider;

/// A drop-in replacement for a plain count modifier that scales the
/// attempt count proportionally to the effective world height.
///
/// When the world is shorter than the reference height, above-ground
/// bands compress into fewer Y levels; an unscaled count would raise ore
/// density (ores per stone block) by the same ratio. Scaling the count by
/// the same linear factor keeps density level. At the reference height
/// this behaves identically to a plain count.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScaledCount {
    /// Attempt count in reference space.
    pub count: IntProvider,
}

impl ScaledCount {
    /// Creates the modifier from its count provider.
    #[must_use]
    pub const fn new(count: IntProvider) -> Self {
        Self { count }
    }
}

impl PlacementModifier for ScaledCount {
    fn positions<R: Random>(
        &self,
        context: &PlacementContext<'_>,
        random: &mut R,
        origin: BlockPos,
    ) -> Vec<BlockPos> {
        let effective = context
            .scaler
            .resolve_effective_max_height(context.top_y_exclusive());
        let raw = self.count.get(random);
        let scaled = HeightScaler::scale_count(raw, effective);
        vec![origin; scaled as usize]
    }
}
