//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, integration in per-tick units
//! - Stable iteration order (authored list order)
//! - No rendering or platform dependencies

pub mod hazard;
pub mod level;
pub mod levels;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use hazard::{PolarBear, derive_icicle_strips};
pub use level::{Level, Platform};
pub use levels::{builtin_levels, global_walls};
pub use player::{Player, StepSignals};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
