//! Sparse in-memory world used by the feature tests. Positions absent
//! from the map read as air.

use orogen_utils::{BlockPos, BlockStateId};
use rustc_hash::FxHashMap;

use crate::level::{FluidState, WorldAccess};

/// Plain stone, the usual replacement target.
pub(crate) const STONE: BlockStateId = BlockStateId(1);
/// The ore state the test configs write.
pub(crate) const ORE: BlockStateId = BlockStateId(10);

pub(crate) struct GridWorld {
    blocks: FxHashMap<(i32, i32, i32), BlockStateId>,
    fluids: FxHashMap<(i32, i32, i32), FluidState>,
    bottom_y: i32,
    height: i32,
}

impl GridWorld {
    pub(crate) fn empty(bottom_y: i32, height: i32) -> Self {
        Self {
            blocks: FxHashMap::default(),
            fluids: FxHashMap::default(),
            bottom_y,
            height,
        }
    }

    pub(crate) fn set(&mut self, pos: BlockPos, state: BlockStateId) {
        if state.is_air() {
            self.blocks.remove(&(pos.0.x, pos.0.y, pos.0.z));
        } else {
            self.blocks.insert((pos.0.x, pos.0.y, pos.0.z), state);
        }
    }

    pub(crate) fn set_fluid(&mut self, pos: BlockPos, fluid: FluidState) {
        self.fluids.insert((pos.0.x, pos.0.y, pos.0.z), fluid);
    }

    /// Fills the inclusive box between the two corners with one state.
    pub(crate) fn fill_box(&mut self, min: BlockPos, max: BlockPos, state: BlockStateId) {
        for x in min.0.x..=max.0.x {
            for y in min.0.y..=max.0.y {
                for z in min.0.z..=max.0.z {
                    self.set(BlockPos::new(x, y, z), state);
                }
            }
        }
    }

    pub(crate) fn count_state(&self, state: BlockStateId) -> usize {
        self.blocks.values().filter(|&&s| s == state).count()
    }

    pub(crate) fn positions_with(&self, state: BlockStateId) -> Vec<BlockPos> {
        self.blocks
            .iter()
            .filter(|&(_, &s)| s == state)
            .map(|(&(x, y, z), _)| BlockPos::new(x, y, z))
            .collect()
    }
}

impl WorldAccess for GridWorld {
    fn block_state(&self, pos: BlockPos) -> BlockStateId {
        self.blocks
            .get(&(pos.0.x, pos.0.y, pos.0.z))
            .copied()
            .unwrap_or(BlockStateId::AIR)
    }

    fn set_block_state(&mut self, pos: BlockPos, state: BlockStateId) {
        self.set(pos, state);
    }

    fn fluid_state(&self, pos: BlockPos) -> FluidState {
        self.fluids
            .get(&(pos.0.x, pos.0.y, pos.0.z))
            .copied()
            .unwrap_or(FluidState::EMPTY)
    }

    fn bottom_y(&self) -> i32 {
        self.bottom_y
    }

    fn height(&self) -> i32 {
        self.height
    }
}
