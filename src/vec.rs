//! Plain 2D point type for surface samples.

use crate::float::Float;

/// 2D point in the host's world units.
///
/// `x` runs along the strip, `y` is the surface height at that sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D point.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}
