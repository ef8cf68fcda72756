//! Hazards and enemies
//!
//! Icicles are static rectangles that only participate in overlap queries.
//! Polar bears oscillate horizontally between two bounds, one step per
//! tick, clamped at the bound on the tick the flip happens.

use serde::{Deserialize, Serialize};

use super::level::Platform;
use super::rect::Rect;
use crate::consts::ICICLE_STRIP_H;

/// A patrolling polar bear. Touching it resets the level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolarBear {
    pub rect: Rect,
    /// Pixels moved per tick
    pub speed: f32,
    /// Left patrol bound (inclusive)
    pub min_x: f32,
    /// Right patrol bound (inclusive)
    pub max_x: f32,
    /// +1.0 moving right, -1.0 moving left
    pub direction: f32,
}

impl PolarBear {
    pub fn new(rect: Rect, speed: f32, min_x: f32, max_x: f32) -> Self {
        Self {
            rect,
            speed,
            min_x,
            max_x,
            direction: 1.0,
        }
    }

    /// Advance one tick of the patrol. Position is clamped to the bound
    /// on the flipping tick, never carried past it.
    pub fn patrol(&mut self) {
        self.rect.x += self.speed * self.direction;

        if self.rect.x <= self.min_x {
            self.rect.x = self.min_x;
            self.direction = 1.0;
        } else if self.rect.x >= self.max_x {
            self.rect.x = self.max_x;
            self.direction = -1.0;
        }
    }
}

/// Lethal strips hanging under `icicles`-flagged platforms, generated once
/// at level load so the per-tick hazard pass stays a flat rect scan.
pub fn derive_icicle_strips(platforms: &[Platform]) -> Vec<Rect> {
    platforms
        .iter()
        .filter(|p| p.icicles)
        .map(|p| {
            Rect::new(
                p.rect.x,
                p.rect.y + p.rect.h,
                p.rect.w,
                ICICLE_STRIP_H,
            )
        })
        .collect()
}
