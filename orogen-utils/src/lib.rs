//! Shared primitives for the orogen worldgen stack: wrapper coordinate
//! types, vector math and the deterministic random sources generation
//! draws from.

pub mod math;
pub mod random;
pub mod types;

pub use types::{BlockPos, BlockStateId, ChunkPos};
