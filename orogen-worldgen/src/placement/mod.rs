//! Placement modifiers: the host's placement pipeline calls these to turn
//! one candidate origin into the final attempt positions.
//!
//! Counts and heights are sampled in reference space and rescaled to the
//! generating world through the session [`HeightScaler`]; at the reference
//! height both modifiers behave exactly like their unscaled counterparts.

pub mod providers;
pub mod scaled_count;
pub mod scaled_height_range;

pub use providers::{HeightProvider, IntProvider, VerticalAnchor};
pub use scaled_count::ScaledCount;
pub use scaled_height_range::ScaledHeightRange;

use orogen_utils::BlockPos;
use orogen_utils::random::Random;

use crate::height::HeightScaler;

/// Context the host supplies to placement modifiers.
pub struct PlacementContext<'a> {
    /// Session height scaler.
    pub scaler: &'a HeightScaler,
    /// Lowest buildable Y of the generating world.
    pub bottom_y: i32,
    /// World height in blocks.
    pub height: i32,
}

impl PlacementContext<'_> {
    /// The first Y above the world.
    #[must_use]
    pub const fn top_y_exclusive(&self) -> i32 {
        self.bottom_y + self.height
    }
}

/// Turns one candidate position into zero or more attempt positions.
pub trait PlacementModifier {
    /// Produces the attempt positions derived from `origin`.
    fn positions<R: Random>(
        &self,
        context: &PlacementContext<'_>,
        random: &mut R,
        origin: BlockPos,
    ) -> Vec<BlockPos>;
}
