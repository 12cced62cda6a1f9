//! Ore replacement configuration: which existing states a deposit may
//! replace, and what it writes instead.

use orogen_utils::BlockStateId;
use orogen_utils::random::Random;
use serde::Deserialize;

/// Decides whether an existing block state may be replaced.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "predicate_type", rename_all = "snake_case")]
pub enum TargetPredicate {
    /// Matches any state.
    AlwaysTrue,
    /// Matches one exact state.
    BlockMatch {
        /// The state to match.
        state: BlockStateId,
    },
    /// Matches any state in the list.
    AnyOf {
        /// Matching states.
        states: Vec<BlockStateId>,
    },
    /// Matches one exact state with the given probability; the draw is
    /// only consumed when the state matches.
    RandomBlockMatch {
        /// The state to match.
        state: BlockStateId,
        /// Match probability in [0, 1].
        probability: f32,
    },
}

impl TargetPredicate {
    /// Tests this predicate against an existing state.
    pub fn test(&self, state: BlockStateId, random: &mut impl Random) -> bool {
        match self {
            Self::AlwaysTrue => true,
            Self::BlockMatch { state: target } => state == *target,
            Self::AnyOf { states } => states.contains(&state),
            Self::RandomBlockMatch {
                state: target,
                probability,
            } => state == *target && random.next_f32() < *probability,
        }
    }
}

/// One replaceable target and the ore state written over it.
#[derive(Debug, Clone, Deserialize)]
pub struct OreTarget {
    /// Predicate over the existing state.
    pub target: TargetPredicate,
    /// State written when the predicate matches.
    pub state: BlockStateId,
}

/// Per-ore placement data: ordered targets plus the surface discard chance.
#[derive(Debug, Clone, Deserialize)]
pub struct OreConfiguration {
    /// Candidate targets; the first match wins.
    pub targets: Vec<OreTarget>,
    /// Chance in [0, 1] to discard an otherwise valid placement whose
    /// position is exposed to air.
    #[serde(default)]
    pub discard_on_air_chance: f32,
}

impl OreConfiguration {
    /// Config with a single target and no discard chance.
    #[must_use]
    pub fn single(target: TargetPredicate, state: BlockStateId) -> Self {
        Self {
            targets: vec![OreTarget { target, state }],
            discard_on_air_chance: 0.0,
        }
    }
}
