//! Game state and level progression
//!
//! `GameState` owns the immutable level templates and the live per-play
//! copies derived from them. Loading a level is a full respawn, and the
//! same call implements reset-on-death.

use super::hazard::{PolarBear, derive_icicle_strips};
use super::level::{Level, Platform};
use super::player::Player;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Tutorial overlay is up; the simulation does not advance
    Tutorial,
    /// Normal gameplay
    Playing,
    /// Level cleared; waiting out the transition delay
    Transitioning,
    /// Every level cleared; terminal
    Complete,
}

/// Discrete things that happened during a tick. The owning session drains
/// these after each update; audio and UI collaborators key off them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    Landed,
    /// Fell past the arena's lower bound
    Fell,
    Collected,
    IcicleHit,
    BearHit,
    LevelComplete { level: usize },
    GameComplete,
}

/// Complete session state.
#[derive(Debug)]
pub struct GameState {
    levels: Vec<Level>,
    global_walls: Vec<Rect>,
    pub tuning: Tuning,

    pub phase: GamePhase,
    /// 1-based level index
    current_level: usize,
    /// Ticks left on the deferred level transition
    pub(crate) transition_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,

    pub player: Player,

    // Live per-play copies, replaced wholesale on every load
    pub(crate) platforms: Vec<Platform>,
    pub(crate) walls: Vec<Rect>,
    pub(crate) icicles: Vec<Rect>,
    pub(crate) collectibles: Vec<Rect>,
    pub(crate) bears: Vec<PolarBear>,
    pub(crate) goal: Rect,

    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session over the given level set. Panics on malformed
    /// level data; levels are authored content, not user input.
    pub fn new(
        levels: Vec<Level>,
        global_walls: Vec<Rect>,
        tuning: Tuning,
        tutorial_done: bool,
    ) -> Self {
        assert!(!levels.is_empty(), "no levels defined");
        for level in &levels {
            level.validate();
        }

        let player = Player::new(
            tuning.spawn_x,
            tuning.spawn_y,
            tuning.player_width,
            tuning.player_height,
        );

        let mut state = Self {
            levels,
            global_walls,
            tuning,
            phase: if tutorial_done {
                GamePhase::Playing
            } else {
                GamePhase::Tutorial
            },
            current_level: 1,
            transition_ticks: 0,
            time_ticks: 0,
            player,
            platforms: Vec::new(),
            walls: Vec::new(),
            icicles: Vec::new(),
            collectibles: Vec::new(),
            bears: Vec::new(),
            goal: Rect::default(),
            events: Vec::new(),
        };
        state.load_level(1);
        state
    }

    /// Session over the shipped campaign.
    pub fn with_builtin_levels(tuning: Tuning, tutorial_done: bool) -> Self {
        Self::new(
            super::levels::builtin_levels(),
            super::levels::global_walls(),
            tuning,
            tutorial_done,
        )
    }

    /// Load a level by 1-based index: fresh collectibles (authored plus
    /// derived), fresh hazards with bears facing right, the effective wall
    /// set, and the player back at spawn. Reloading the current level is
    /// the death reset.
    pub fn load_level(&mut self, number: usize) {
        assert!(
            number >= 1 && number <= self.levels.len(),
            "level index {} out of range 1..={}",
            number,
            self.levels.len()
        );
        self.current_level = number;
        let level = &self.levels[number - 1];

        self.platforms = level.platforms.clone();
        self.goal = level.goal;

        self.collectibles = level.spawn_collectibles();

        self.icicles = level.icicles.clone();
        if self.tuning.platform_icicle_strips {
            self.icicles.extend(derive_icicle_strips(&level.platforms));
        }

        self.bears = level
            .bears
            .iter()
            .cloned()
            .map(|mut bear| {
                bear.direction = 1.0;
                bear
            })
            .collect();

        // Level walls either join the global set or, under the older
        // schema reading, stand in for it when the level defines any.
        self.walls = if self.tuning.level_walls_replace_global && !level.walls.is_empty() {
            level.walls.clone()
        } else {
            let mut walls = self.global_walls.clone();
            walls.extend(level.walls.iter().copied());
            walls
        };

        self.transition_ticks = 0;
        // A load clears won/transitioning; the tutorial gate is orthogonal
        // and survives it.
        if self.phase != GamePhase::Tutorial {
            self.phase = GamePhase::Playing;
        }
        self.player.reset(self.tuning.spawn_x, self.tuning.spawn_y);

        log::info!(
            "Loaded level {}/{} ({} collectibles, {} icicles, {} bears)",
            number,
            self.levels.len(),
            self.collectibles.len(),
            self.icicles.len(),
            self.bears.len()
        );
    }

    /// Load the next level if one remains.
    pub(crate) fn advance_level(&mut self) -> bool {
        if self.current_level < self.levels.len() {
            self.load_level(self.current_level + 1);
            true
        } else {
            false
        }
    }

    /// One-way tutorial dismissal. Persisting the flag is the session's
    /// job (see `Progress`).
    pub fn complete_tutorial(&mut self) {
        if self.phase == GamePhase::Tutorial {
            self.phase = GamePhase::Playing;
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // Read-only queries for the render/audio collaborators

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn total_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn is_tutorial_active(&self) -> bool {
        self.phase == GamePhase::Tutorial
    }

    /// True from the moment the goal is reached. Stays true forever once
    /// the last level is cleared.
    pub fn is_won(&self) -> bool {
        matches!(self.phase, GamePhase::Transitioning | GamePhase::Complete)
    }

    /// True while the level-complete delay runs, and permanently in the
    /// terminal game-complete state.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, GamePhase::Transitioning | GamePhase::Complete)
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// The effective wall set for the current level.
    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn icicles(&self) -> &[Rect] {
        &self.icicles
    }

    pub fn collectibles(&self) -> &[Rect] {
        &self.collectibles
    }

    pub fn bears(&self) -> &[PolarBear] {
        &self.bears
    }

    pub fn goal(&self) -> Rect {
        self.goal
    }
}
