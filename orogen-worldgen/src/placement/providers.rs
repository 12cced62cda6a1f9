//! Reference-space samplers for attempt counts and heights.

use orogen_utils::random::Random;
use serde::Deserialize;

/// Provides an integer, either fixed or drawn uniformly from a range.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum IntProvider {
    /// Always the same value.
    Constant(i32),
    /// Uniform over an inclusive range.
    Uniform {
        /// Lowest value.
        min_inclusive: i32,
        /// Highest value.
        max_inclusive: i32,
    },
}

impl IntProvider {
    /// Draws a value.
    pub fn get(&self, random: &mut impl Random) -> i32 {
        match *self {
            Self::Constant(value) => value,
            Self::Uniform {
                min_inclusive,
                max_inclusive,
            } => random.next_i32_between(min_inclusive, max_inclusive),
        }
    }
}

/// Anchors an authored height to the world's vertical bounds.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    /// A fixed Y value.
    Absolute(i32),
    /// Blocks above the world bottom.
    AboveBottom(i32),
    /// Blocks below the world top.
    BelowTop(i32),
}

impl VerticalAnchor {
    /// Resolves the anchor against the given bounds.
    #[must_use]
    pub const fn resolve(self, bottom_y: i32, top_y_exclusive: i32) -> i32 {
        match self {
            Self::Absolute(y) => y,
            Self::AboveBottom(dy) => bottom_y + dy,
            Self::BelowTop(dy) => top_y_exclusive - 1 - dy,
        }
    }
}

/// Samples a reference-space Y position.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HeightProvider {
    /// Uniform across the band.
    Uniform {
        /// Bottom of the band (inclusive).
        min_inclusive: VerticalAnchor,
        /// Top of the band (inclusive).
        max_inclusive: VerticalAnchor,
    },
    /// Trapezoid-distributed: a flat plateau with linear ramps down to
    /// the band edges, summed from two uniform draws.
    Trapezoid {
        /// Bottom of the band (inclusive).
        min_inclusive: VerticalAnchor,
        /// Top of the band (inclusive).
        max_inclusive: VerticalAnchor,
        /// Width of the flat top of the distribution.
        plateau: i32,
    },
}

impl HeightProvider {
    /// Draws a Y value; `bottom_y`/`top_y_exclusive` resolve the anchors.
    pub fn sample(
        &self,
        random: &mut impl Random,
        bottom_y: i32,
        top_y_exclusive: i32,
    ) -> i32 {
        match *self {
            Self::Uniform {
                min_inclusive,
                max_inclusive,
            } => {
                let min = min_inclusive.resolve(bottom_y, top_y_exclusive);
                let max = max_inclusive.resolve(bottom_y, top_y_exclusive);
                if min > max {
                    log::warn!("empty height range: min={min} max={max}");
                    return min;
                }
                random.next_i32_between(min, max)
            }
            Self::Trapezoid {
                min_inclusive,
                max_inclusive,
                plateau,
            } => {
                let min = min_inclusive.resolve(bottom_y, top_y_exclusive);
                let max = max_inclusive.resolve(bottom_y, top_y_exclusive);
                if min > max {
                    log::warn!("empty height range: min={min} max={max}");
                    return min;
                }
                let range = max - min;
                if plateau >= range {
                    return random.next_i32_between(min, max);
                }
                let slope = (range - plateau) / 2;
                let rest = range - slope;
                min + random.next_i32_bounded(rest + 1) + random.next_i32_bounded(slope + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orogen_utils::random::legacy_random::LegacyRandom;

    #[test]
    fn test_constant_int_provider() {
        let mut random = LegacyRandom::from_seed(0);
        let provider = IntProvider::Constant(8);
        for _ in 0..8 {
            assert_eq!(provider.get(&mut random), 8);
        }
    }

    #[test]
    fn test_uniform_int_provider_in_range() {
        let mut random = LegacyRandom::from_seed(0);
        let provider = IntProvider::Uniform {
            min_inclusive: 3,
            max_inclusive: 9,
        };
        for _ in 0..200 {
            assert!((3..=9).contains(&provider.get(&mut random)));
        }
    }

    #[test]
    fn test_anchor_resolution() {
        assert_eq!(VerticalAnchor::Absolute(120).resolve(-64, 320), 120);
        assert_eq!(VerticalAnchor::AboveBottom(8).resolve(-64, 320), -56);
        assert_eq!(VerticalAnchor::BelowTop(10).resolve(-64, 320), 309);
    }

    #[test]
    fn test_trapezoid_stays_in_band() {
        let mut random = LegacyRandom::from_seed(5);
        let provider = HeightProvider::Trapezoid {
            min_inclusive: VerticalAnchor::Absolute(120),
            max_inclusive: VerticalAnchor::Absolute(260),
            plateau: 72,
        };
        for _ in 0..500 {
            let y = provider.sample(&mut random, -64, 2032);
            assert!((120..=260).contains(&y));
        }
    }

    #[test]
    fn test_trapezoid_wide_plateau_degrades_to_uniform() {
        let mut random = LegacyRandom::from_seed(5);
        let provider = HeightProvider::Trapezoid {
            min_inclusive: VerticalAnchor::Absolute(10),
            max_inclusive: VerticalAnchor::Absolute(20),
            plateau: 10,
        };
        for _ in 0..100 {
            assert!((10..=20).contains(&provider.sample(&mut random, -64, 2032)));
        }
    }

    #[test]
    fn test_empty_band_returns_min() {
        let mut random = LegacyRandom::from_seed(0);
        let provider = HeightProvider::Uniform {
            min_inclusive: VerticalAnchor::Absolute(30),
            max_inclusive: VerticalAnchor::Absolute(20),
        };
        assert_eq!(provider.sample(&mut random, -64, 2032), 30);
    }

    #[test]
    fn test_provider_json_shapes() {
        let constant: IntProvider = serde_json::from_str("8").expect("parse");
        assert!(matches!(constant, IntProvider::Constant(8)));

        let uniform: IntProvider =
            serde_json::from_str(r#"{ "min_inclusive": 2, "max_inclusive": 6 }"#).expect("parse");
        let mut random = LegacyRandom::from_seed(0);
        assert!((2..=6).contains(&uniform.get(&mut random)));

        let height: HeightProvider = serde_json::from_str(
            r#"{
                "type": "trapezoid",
                "min_inclusive": { "absolute": 120 },
                "max_inclusive": { "absolute": 260 },
                "plateau": 72
            }"#,
        )
        .expect("parse");
        assert!((120..=260).contains(&height.sample(&mut random, -64, 2032)));
    }
}
