#![allow(missing_docs)]
//! Benchmarks for vein growth.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use orogen_utils::random::xoroshiro::Xoroshiro;
use orogen_utils::{BlockPos, BlockStateId};
use orogen_worldgen::feature::{OreConfiguration, TargetPredicate, VeinFeature, VeinSpec};
use orogen_worldgen::level::{FluidState, WorldAccess};

const STONE: BlockStateId = BlockStateId(1);
const ORE: BlockStateId = BlockStateId(10);

/// One chunk column of solid stone.
struct StoneColumn {
    blocks: Vec<BlockStateId>,
    bottom_y: i32,
    height: i32,
}

impl StoneColumn {
    fn new(bottom_y: i32, height: i32) -> Self {
        Self {
            blocks: vec![STONE; (16 * 16 * height) as usize],
            bottom_y,
            height,
        }
    }

    fn index(&self, pos: BlockPos) -> usize {
        let y = (pos.0.y - self.bottom_y) as usize;
        (y * 16 + (pos.0.z & 15) as usize) * 16 + (pos.0.x & 15) as usize
    }
}

impl WorldAccess for StoneColumn {
    fn block_state(&self, pos: BlockPos) -> BlockStateId {
        self.blocks[self.index(pos)]
    }

    fn set_block_state(&mut self, pos: BlockPos, state: BlockStateId) {
        let index = self.index(pos);
        self.blocks[index] = state;
    }

    fn fluid_state(&self, _pos: BlockPos) -> FluidState {
        FluidState::EMPTY
    }

    fn bottom_y(&self) -> i32 {
        self.bottom_y
    }

    fn height(&self) -> i32 {
        self.height
    }
}

fn bench_vein_growth(c: &mut Criterion) {
    let feature = VeinFeature::new(VeinSpec::sized(4, 12));
    let config = OreConfiguration::single(TargetPredicate::BlockMatch { state: STONE }, ORE);

    c.bench_function("vein_growth", |b| {
        b.iter(|| {
            let mut world = StoneColumn::new(0, 128);
            let mut random = Xoroshiro::from_seed(12345);
            black_box(feature.place(
                &mut world,
                &mut random,
                &config,
                black_box(BlockPos::new(8, 64, 8)),
            ))
        });
    });
}

criterion_group!(benches, bench_vein_growth);
criterion_main!(benches);
