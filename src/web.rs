//! wasm-bindgen session facade
//!
//! The boundary the browser shell talks to: it samples input, ticks once
//! per animation frame, and reads geometry and flags back for drawing.
//! Rendering, audio and DOM work all stay on the JS side; this type only
//! exposes queries and drained events.

use wasm_bindgen::prelude::*;

use crate::progress::Progress;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Event codes handed across the boundary, in `GameEvent` order.
fn event_code(event: GameEvent) -> u8 {
    match event {
        GameEvent::Jumped => 0,
        GameEvent::Landed => 1,
        GameEvent::Fell => 2,
        GameEvent::Collected => 3,
        GameEvent::IcicleHit => 4,
        GameEvent::BearHit => 5,
        GameEvent::LevelComplete { .. } => 6,
        GameEvent::GameComplete => 7,
    }
}

fn flatten_rects(rects: &[crate::sim::Rect]) -> Vec<f32> {
    let mut out = Vec::with_capacity(rects.len() * 4);
    for rect in rects {
        out.extend_from_slice(&[rect.x, rect.y, rect.w, rect.h]);
    }
    out
}

/// One game session over the shipped campaign.
#[wasm_bindgen]
pub struct Session {
    state: GameState,
    progress: Progress,
    input: TickInput,
}

#[wasm_bindgen]
impl Session {
    /// Build a session, honoring the persisted tutorial flag and any
    /// tuning overrides in LocalStorage.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Session {
        crate::init_browser_logging();
        let tuning = Tuning::load();
        let progress = Progress::load();
        let state = GameState::with_builtin_levels(tuning, progress.tutorial_done);
        Session {
            state,
            progress,
            input: TickInput::default(),
        }
    }

    /// Record this frame's input snapshot. Held keys are re-sent by the
    /// shell every frame; jump is consumed by the next tick.
    pub fn set_input(&mut self, move_left: bool, move_right: bool, jump: bool) {
        self.input.move_left = move_left;
        self.input.move_right = move_right;
        self.input.jump = self.input.jump || jump;
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        let input = self.input;
        tick(&mut self.state, &input);
        self.input.jump = false;
    }

    /// Dismiss the tutorial overlay and persist the flag.
    pub fn complete_tutorial(&mut self) {
        self.state.complete_tutorial();
        self.progress.complete_tutorial();
    }

    /// Events since the last call, as `event_code` values.
    pub fn drain_events(&mut self) -> Vec<u8> {
        self.state.take_events().into_iter().map(event_code).collect()
    }

    // Scalar queries

    pub fn player_x(&self) -> f32 {
        self.state.player.pos.x
    }

    pub fn player_y(&self) -> f32 {
        self.state.player.pos.y
    }

    pub fn player_vx(&self) -> f32 {
        self.state.player.vel.x
    }

    pub fn player_vy(&self) -> f32 {
        self.state.player.vel.y
    }

    pub fn player_on_ground(&self) -> bool {
        self.state.player.on_ground
    }

    pub fn level(&self) -> usize {
        self.state.current_level()
    }

    pub fn total_levels(&self) -> usize {
        self.state.total_levels()
    }

    pub fn won(&self) -> bool {
        self.state.is_won()
    }

    pub fn transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn tutorial_active(&self) -> bool {
        self.state.is_tutorial_active()
    }

    // Geometry queries, flattened as [x, y, w, h] per rectangle

    pub fn platforms(&self) -> Vec<f32> {
        let rects: Vec<_> = self.state.platforms().iter().map(|p| p.rect).collect();
        flatten_rects(&rects)
    }

    pub fn walls(&self) -> Vec<f32> {
        flatten_rects(self.state.walls())
    }

    pub fn icicles(&self) -> Vec<f32> {
        flatten_rects(self.state.icicles())
    }

    pub fn collectibles(&self) -> Vec<f32> {
        flatten_rects(self.state.collectibles())
    }

    pub fn goal(&self) -> Vec<f32> {
        flatten_rects(&[self.state.goal()])
    }

    /// Bears as [x, y, w, h, direction] per bear.
    pub fn bears(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.state.bears().len() * 5);
        for bear in self.state.bears() {
            out.extend_from_slice(&[
                bear.rect.x,
                bear.rect.y,
                bear.rect.w,
                bear.rect.h,
                bear.direction,
            ]);
        }
        out
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
