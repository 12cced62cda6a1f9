//! Central height scaling for ore placement.
//!
//! All above-ground placement (Y >= [`SCALE_THRESHOLD`]) is authored for a
//! reference maximum world height of [`REFERENCE_HEIGHT`]. At runtime the
//! effective max height is either auto-detected from the hosting world
//! (e.g. 320 vanilla, taller with a height datapack) or taken from the
//! config, and every Y value and attempt count is remapped through one
//! linear factor. Underground values (Y < [`SCALE_THRESHOLD`]) are never
//! touched, so caves and deepslate bands keep their authored shape.

use std::sync::atomic::{AtomicBool, Ordering};

use orogen_utils::math;

use crate::config::OreGenConfig;

/// Y values below this are considered underground and never scaled.
pub const SCALE_THRESHOLD: i32 = 64;

/// The max world height the authored placement values are designed for.
pub const REFERENCE_HEIGHT: i32 = 2032;

/// Resolves the effective world height and remaps Y values and attempt
/// counts against it.
///
/// One scaler is built per session from the loaded config and shared
/// across all generation threads. Apart from the one-shot log latch it is
/// stateless; the latch only ever transitions unset -> set.
pub struct HeightScaler {
    auto_detect: bool,
    max_world_height: i32,
    logged_resolved_height: AtomicBool,
}

impl HeightScaler {
    /// Creates a scaler honoring the given config.
    #[must_use]
    pub fn new(config: &OreGenConfig) -> Self {
        Self {
            auto_detect: config.auto_detect_world_height,
            max_world_height: config.max_world_height,
            logged_resolved_height: AtomicBool::new(false),
        }
    }

    /// Resolves the effective maximum world height.
    ///
    /// With auto-detection enabled (the default) the given world top Y is
    /// returned directly, otherwise the configured `max_world_height`.
    /// The first call logs the resolution; all later calls are silent.
    pub fn resolve_effective_max_height(&self, actual_world_top_y: i32) -> i32 {
        let effective = if self.auto_detect {
            actual_world_top_y
        } else {
            self.max_world_height
        };

        if self
            .logged_resolved_height
            .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok()
        {
            log::info!(
                "world height resolved: detected={actual_world_top_y}, effective={effective}, factor={:.4}, mode={}",
                Self::factor(effective),
                if self.auto_detect { "auto-detect" } else { "manual" }
            );
        }

        effective
    }

    /// Returns the linear scaling factor for the given world height.
    ///
    /// Exactly `1.0` when `max_world_height == REFERENCE_HEIGHT`.
    #[must_use]
    pub fn factor(max_world_height: i32) -> f64 {
        if max_world_height == REFERENCE_HEIGHT {
            return 1.0;
        }
        f64::from(max_world_height - SCALE_THRESHOLD)
            / f64::from(REFERENCE_HEIGHT - SCALE_THRESHOLD)
    }

    /// Scales a Y value from the reference coordinate space to the given
    /// maximum world height.
    ///
    /// Identity at the reference height and for underground values. The
    /// result is rounded first, then clamped to
    /// `[SCALE_THRESHOLD, max_world_height]`.
    #[must_use]
    pub fn scale_y(y: i32, max_world_height: i32) -> i32 {
        if max_world_height == REFERENCE_HEIGHT || y < SCALE_THRESHOLD {
            return y;
        }
        let scaled = SCALE_THRESHOLD
            + math::round(f64::from(y - SCALE_THRESHOLD) * Self::factor(max_world_height));
        SCALE_THRESHOLD.max(scaled.min(max_world_height))
    }

    /// Scales a count proportionally to the given world height.
    ///
    /// Always returns at least 1 so ore placement never drops out entirely
    /// in short worlds.
    #[must_use]
    #[allow(clippy::float_cmp)] // factor() returns exactly 1.0 at the reference height
    pub fn scale_count(count: i32, max_world_height: i32) -> i32 {
        let factor = Self::factor(max_world_height);
        if factor == 1.0 {
            return count;
        }
        1.max(math::round(f64::from(count) * factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_scaler() -> HeightScaler {
        HeightScaler::new(&OreGenConfig::default())
    }

    #[test]
    fn test_scale_y_identity_at_reference_height() {
        for y in [-64, 0, 63, 64, 200, 1000, 2032] {
            assert_eq!(HeightScaler::scale_y(y, REFERENCE_HEIGHT), y);
        }
    }

    #[test]
    fn test_scale_y_identity_underground() {
        for h in [128, 320, 512, 4064] {
            for y in [-64, -1, 0, 32, 63] {
                assert_eq!(HeightScaler::scale_y(y, h), y);
            }
        }
    }

    #[test]
    fn test_scale_y_concrete_vanilla_world() {
        assert_eq!(HeightScaler::scale_y(64, 320), 64);
        assert_eq!(HeightScaler::scale_y(2032, 320), 320);
        // factor = 256/1968 ~ 0.130081; 64 + round(936 * factor) = 64 + 122
        assert_eq!(HeightScaler::scale_y(1000, 320), 186);
    }

    #[test]
    fn test_scale_y_monotonic_and_bounded() {
        for h in [128, 320, 512] {
            let mut previous = SCALE_THRESHOLD;
            for y in SCALE_THRESHOLD..=REFERENCE_HEIGHT {
                let scaled = HeightScaler::scale_y(y, h);
                assert!(scaled >= previous, "not monotonic at y={y} h={h}");
                assert!(
                    (SCALE_THRESHOLD..=h).contains(&scaled),
                    "out of range at y={y} h={h}"
                );
                previous = scaled;
            }
        }
    }

    #[test]
    fn test_scale_y_clamps_overshoot() {
        // Authored values above the reference height may scale past the
        // world top; the clamp catches them.
        assert_eq!(HeightScaler::scale_y(4000, 320), 320);
    }

    #[test]
    fn test_scale_count_identity_at_reference_height() {
        for count in [0, 1, 8, 100] {
            assert_eq!(HeightScaler::scale_count(count, REFERENCE_HEIGHT), count);
        }
    }

    #[test]
    fn test_scale_count_concrete_vanilla_world() {
        // 8 * 0.130081 ~ 1.04 -> 1
        assert_eq!(HeightScaler::scale_count(8, 320), 1);
    }

    #[test]
    fn test_scale_count_floor_of_one() {
        for h in [65, 128, 320, 512] {
            for count in 0..64 {
                assert!(HeightScaler::scale_count(count, h) >= 1);
            }
        }
    }

    #[test]
    fn test_factor() {
        assert!((HeightScaler::factor(REFERENCE_HEIGHT) - 1.0).abs() < f64::EPSILON);
        assert!((HeightScaler::factor(320) - 256.0 / 1968.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_auto_detect() {
        let scaler = auto_scaler();
        assert_eq!(scaler.resolve_effective_max_height(320), 320);
        assert_eq!(scaler.resolve_effective_max_height(512), 512);
    }

    #[test]
    fn test_resolve_manual_override() {
        let config = OreGenConfig {
            auto_detect_world_height: false,
            max_world_height: 1024,
            ..OreGenConfig::default()
        };
        let scaler = HeightScaler::new(&config);
        assert_eq!(scaler.resolve_effective_max_height(320), 1024);
    }
}
