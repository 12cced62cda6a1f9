//! Height-range modifier scaled to the effective world height.

use orogen_utils::BlockPos;
use orogen_utils::random::Random;
use serde::Deserialize;

use super::{PlacementContext, PlacementModifier};
use crate::height::HeightScaler;
use crate::placement::providers::HeightProvider;

/// A drop-in replacement for a plain height-range modifier that
/// transparently rescales the sampled Y above the scale threshold.
///
/// The wrapped provider samples in reference space (the values authored
/// in the placed-feature data); the result is then remapped to the
/// effective world height so the full band fits the actual world. At the
/// reference height this behaves identically to a plain height range.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScaledHeightRange {
    /// Height distribution in reference space.
    pub height: HeightProvider,
}

impl ScaledHeightRange {
    /// Creates the modifier from its height provider.
    #[must_use]
    pub const fn new(height: HeightProvider) -> Self {
        Self { height }
    }
}

impl PlacementModifier for ScaledHeightRange {
    fn positions<R: Random>(
        &self,
        context: &PlacementContext<'_>,
        random: &mut R,
        origin: BlockPos,
    ) -> Vec<BlockPos> {
        let y = self
            .height
            .sample(random, context.bottom_y, context.top_y_exclusive());
        let effective = context
            .scaler
            .resolve_effective_max_height(context.top_y_exclusive());
        vec![origin.with_y(HeightScaler::scale_y(y, effective))]
    }
}
