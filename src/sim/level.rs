//! Level data model
//!
//! A `Level` is an immutable template. Per-play state (live collectibles,
//! bear positions/directions, the effective wall set) is derived from it
//! on every load, so reloading a level is a full respawn.

use serde::{Deserialize, Serialize};

use super::hazard::PolarBear;
use super::rect::Rect;
use crate::consts::{COLLECTIBLE_RISE, COLLECTIBLE_SIZE};

/// A platform the player can stand on. The two flags mark derived content
/// that is expanded into flat hazard/collectible lists at load time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    /// Emits a lethal icicle strip flush under the platform
    #[serde(default)]
    pub icicles: bool,
    /// Spawns a collectible above the platform's center
    #[serde(default)]
    pub collectible: bool,
}

impl Platform {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            icicles: false,
            collectible: false,
        }
    }

    pub fn with_icicles(mut self) -> Self {
        self.icicles = true;
        self
    }

    pub fn with_collectible(mut self) -> Self {
        self.collectible = true;
        self
    }
}

/// One level: static geometry, hazards and the goal region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
    /// Reaching this rect with zero collectibles left completes the level
    pub goal: Rect,
    /// Authored collectibles (flagged platforms add more on load)
    #[serde(default)]
    pub collectibles: Vec<Rect>,
    /// Authored standalone icicles (flagged platforms add strips on load)
    #[serde(default)]
    pub icicles: Vec<Rect>,
    #[serde(default)]
    pub bears: Vec<PolarBear>,
    /// Level-scoped walls, combined with the global wall list
    #[serde(default)]
    pub walls: Vec<Rect>,
}

impl Level {
    /// The live collectible set for one playthrough: the authored list
    /// plus one pickup per flagged platform, placed a fixed rise above
    /// the platform's center.
    pub fn spawn_collectibles(&self) -> Vec<Rect> {
        let mut live = self.collectibles.clone();
        for platform in self.platforms.iter().filter(|p| p.collectible) {
            live.push(Rect::new(
                platform.rect.x + platform.rect.w / 2.0,
                platform.rect.y - COLLECTIBLE_RISE,
                COLLECTIBLE_SIZE,
                COLLECTIBLE_SIZE,
            ));
        }
        live
    }

    /// Sanity-check authored content. Levels are shipped data, not user
    /// input, so malformed geometry panics at load time.
    pub fn validate(&self) {
        assert!(!self.platforms.is_empty(), "level has no platforms");
        for platform in &self.platforms {
            assert_rect(&platform.rect, "platform");
        }
        assert_rect(&self.goal, "goal");
        for rect in &self.collectibles {
            assert_rect(rect, "collectible");
        }
        for rect in &self.icicles {
            assert_rect(rect, "icicle");
        }
        for rect in &self.walls {
            assert_rect(rect, "wall");
        }
        for bear in &self.bears {
            assert_rect(&bear.rect, "polar bear");
            assert!(
                bear.min_x <= bear.max_x,
                "polar bear patrol bounds inverted: {} > {}",
                bear.min_x,
                bear.max_x
            );
        }
    }
}

fn assert_rect(rect: &Rect, what: &str) {
    assert!(
        rect.w >= 0.0 && rect.h >= 0.0,
        "{} has negative dimensions: {}x{}",
        what,
        rect.w,
        rect.h
    );
}
