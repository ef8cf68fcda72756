//! Data-driven game balance
//!
//! All gameplay numbers the simulation consumes, supplied once at startup.
//! Defaults reproduce the shipped game; on wasm a LocalStorage override
//! can be dropped in for tuning sessions without rebuilding.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants plus the two schema-compatibility toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Jump impulse; negative is up
    pub jump_force: f32,
    /// Horizontal speed while an arrow is held, pixels per tick
    pub move_speed: f32,
    /// Per-tick horizontal decay while airborne with no input
    pub air_deceleration: f32,

    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,

    pub arena_width: f32,
    /// Falling past this y resets the level
    pub arena_height: f32,

    /// Pause between clearing a level and loading the next
    pub transition_delay_ms: f32,

    /// Level-scoped walls replace the global wall list instead of being
    /// unioned with it (earlier level-schema revision)
    pub level_walls_replace_global: bool,
    /// Derive lethal icicle strips under `icicles`-flagged platforms
    pub platform_icicle_strips: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            move_speed: MOVE_SPEED,
            air_deceleration: AIR_DECELERATION,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            transition_delay_ms: LEVEL_TRANSITION_DELAY_MS,

            level_walls_replace_global: false,
            platform_icicle_strips: true,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "penguin_peaks_tuning";

    /// The configured transition delay in whole simulation ticks. The ms
    /// value is authored content; the conversion goes through `TICK_HZ` so
    /// a different frame coupling only touches that constant.
    pub fn transition_delay_ticks(&self) -> u32 {
        (self.transition_delay_ms / 1000.0 * TICK_HZ).round().max(1.0) as u32
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning overrides from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
