//! Penguin Peaks - a penguin platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level state)
//! - `tuning`: Data-driven game balance
//! - `progress`: Tutorial-completed flag persistence
//! - `web`: wasm-bindgen session facade for the browser shell
//!
//! Rendering, audio and input wiring live in the embedding shell; the
//! crate only exposes queries and events at that boundary.

pub mod progress;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use progress::Progress;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate. One tick per display frame; gameplay numbers are
    /// authored against 60 Hz refresh and integrate per tick, not per
    /// second, so this constant is the single place the coupling lives.
    pub const TICK_HZ: f32 = 60.0;
    /// Nominal tick length in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ;

    /// Arena dimensions (canvas-sized playfield)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player hitbox
    pub const PLAYER_WIDTH: f32 = 28.0;
    pub const PLAYER_HEIGHT: f32 = 38.0;

    /// Spawn point (top-left of the player hitbox)
    pub const SPAWN_X: f32 = 50.0;
    pub const SPAWN_Y: f32 = 20.0;

    /// Physics defaults
    pub const GRAVITY: f32 = 0.5;
    /// Jump impulse (negative is up; y grows downward)
    pub const JUMP_FORCE: f32 = -12.0;
    pub const MOVE_SPEED: f32 = 4.0;
    /// Per-tick horizontal velocity decay while airborne with no input
    pub const AIR_DECELERATION: f32 = 0.25;

    /// Delay between clearing a level and loading the next
    pub const LEVEL_TRANSITION_DELAY_MS: f32 = 1200.0;

    /// Collectible hitbox edge length
    pub const COLLECTIBLE_SIZE: f32 = 20.0;
    /// Gap between a flagged platform's top and the collectible above it
    pub const COLLECTIBLE_RISE: f32 = 20.0;

    /// Height of the lethal strip hanging under an icicle platform
    pub const ICICLE_STRIP_H: f32 = 12.0;
}

/// Initialize panic hook and console logging (call once from the shell).
#[cfg(target_arch = "wasm32")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
