//! Axis-aligned rectangle math
//!
//! Every body and every piece of static geometry in the game is an AABB
//! with a top-left origin and y growing downward.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle. Invariant: `w` and `h` are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Overlap test with strict inequalities: rectangles that merely share
    /// an edge do not overlap. Symmetric in `self` and `other`.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}
