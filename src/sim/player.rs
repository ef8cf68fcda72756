//! Player body: per-tick physics integration and collision resolution
//!
//! Single-step explicit Euler against gravity, then four-way AABB
//! resolution against platforms and walls. Collisions are classified by
//! where the body's edge was before the move, not by penetration depth.

use glam::Vec2;

use super::level::Platform;
use super::rect::Rect;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Edge signals produced by a single physics step, consumed by the event
/// queue (the audio collaborator keys off these).
#[derive(Debug, Clone, Copy, Default)]
pub struct StepSignals {
    /// A jump impulse was applied this tick
    pub jumped: bool,
    /// Airborne-to-grounded transition happened this tick
    pub landed: bool,
}

/// The player's physics body.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub w: f32,
    pub h: f32,
    pub on_ground: bool,
    /// Previous tick's `on_ground`, for landing-edge detection
    pub was_on_ground: bool,
}

impl Player {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            w,
            h,
            on_ground: false,
            was_on_ground: false,
        }
    }

    /// Reposition with zeroed velocity (spawn and death resets).
    pub fn reset(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::ZERO;
    }

    /// Current hitbox.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.w, self.h)
    }

    /// Advance one tick: apply input, gravity, integrate, then resolve
    /// against platforms and walls in list order.
    pub fn step(
        &mut self,
        input: &TickInput,
        platforms: &[Platform],
        walls: &[Rect],
        tuning: &Tuning,
    ) -> StepSignals {
        // Horizontal intent. Grounded with no input stops instantly; in
        // the air velocity bleeds off by a fixed amount per tick, clamped
        // so it never crosses zero.
        if input.move_left {
            self.vel.x = -tuning.move_speed;
        } else if input.move_right {
            self.vel.x = tuning.move_speed;
        } else if self.on_ground {
            self.vel.x = 0.0;
        } else if self.vel.x > 0.0 {
            self.vel.x = (self.vel.x - tuning.air_deceleration).max(0.0);
        } else if self.vel.x < 0.0 {
            self.vel.x = (self.vel.x + tuning.air_deceleration).min(0.0);
        }

        // Gravity every tick, no terminal velocity.
        self.vel.y += tuning.gravity;

        // Single explicit Euler step. Thin geometry can tunnel at extreme
        // velocity; accepted behavior, matched to the tick-per-frame model.
        self.pos += self.vel;

        self.was_on_ground = self.on_ground;
        self.on_ground = false;

        // Platforms first, then walls; within each list the order is the
        // authored order and the last overlapping rectangle wins.
        for platform in platforms {
            self.resolve(&platform.rect);
        }
        for wall in walls {
            self.resolve(wall);
        }

        let mut signals = StepSignals::default();
        if input.jump && self.on_ground {
            self.vel.y = tuning.jump_force;
            signals.jumped = true;
        }
        signals.landed = !self.was_on_ground && self.on_ground;
        signals
    }

    /// Resolve one overlapping rectangle. The collision side is decided by
    /// backing the moved edge up by this tick's velocity: if the bottom
    /// edge was at or above the rectangle's top before the move, this is a
    /// landing, and so on. Falls through to a side hit keyed on `vel.x`.
    fn resolve(&mut self, rect: &Rect) {
        if !self.bounds().overlaps(rect) {
            return;
        }
        if self.vel.y > 0.0 && self.pos.y + self.h - self.vel.y <= rect.y {
            // Landing from above
            self.pos.y = rect.y - self.h;
            self.vel.y = 0.0;
            self.on_ground = true;
        } else if self.vel.y < 0.0 && self.pos.y - self.vel.y >= rect.y + rect.h {
            // Head bump from below
            self.pos.y = rect.y + rect.h;
            self.vel.y = 0.0;
        } else if self.vel.x > 0.0 {
            self.pos.x = rect.x - self.w;
            self.vel.x = 0.0;
        } else if self.vel.x < 0.0 {
            self.pos.x = rect.x + rect.w;
            self.vel.x = 0.0;
        }
    }
}
