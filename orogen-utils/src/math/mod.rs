//! Math utilities for world generation.
//!
//! The scalar helpers are exact ports of the JVM `Math`/`Mth` methods the
//! generation math was authored against, ensuring parity with worlds
//! generated on that platform.

pub mod vector2;
pub mod vector3;

pub use vector2::Vector2;
pub use vector3::Vector3;

/// Floor function returning i32 (matches Java's floor).
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let i = value as i32;
    if value < f64::from(i) { i - 1 } else { i }
}

/// Rounds to the nearest integer, halves towards positive infinity
/// (matches Java's `Math.round`, including `round(-0.5) == 0`).
#[inline]
#[must_use]
pub fn round(value: f64) -> i32 {
    floor(value + 0.5)
}
