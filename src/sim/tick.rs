//! Per-frame simulation tick
//!
//! One tick per display frame, strictly sequential with the draw that
//! follows it. The tick advances enemies, steps the player, then applies
//! the hazard/collect/goal checks in a fixed order.

use super::state::{GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick, sampled by the shell before `tick`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// Advance the game by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        // Tutorial gates the simulation entirely; terminal state is inert.
        GamePhase::Tutorial | GamePhase::Complete => return,

        // Level cleared: nothing moves, only the deferred transition
        // counts down. It runs between player ticks by construction and
        // cannot be cancelled.
        GamePhase::Transitioning => {
            state.transition_ticks = state.transition_ticks.saturating_sub(1);
            if state.transition_ticks == 0 && !state.advance_level() {
                state.phase = GamePhase::Complete;
                state.push_event(GameEvent::GameComplete);
                log::info!("All {} levels complete", state.total_levels());
            }
            return;
        }

        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Enemies move first, then the player resolves against the static set.
    for bear in &mut state.bears {
        bear.patrol();
    }

    let signals = state
        .player
        .step(input, &state.platforms, &state.walls, &state.tuning);
    if signals.jumped {
        state.push_event(GameEvent::Jumped);
    }
    if signals.landed {
        state.push_event(GameEvent::Landed);
    }

    // Fell out of the playfield: soft fail, full respawn.
    if state.player.pos.y > state.tuning.arena_height {
        state.push_event(GameEvent::Fell);
        state.load_level(state.current_level());
        return;
    }

    let player_bounds = state.player.bounds();

    if state.icicles.iter().any(|r| player_bounds.overlaps(r)) {
        state.push_event(GameEvent::IcicleHit);
        state.load_level(state.current_level());
        return;
    }

    if state.bears.iter().any(|b| player_bounds.overlaps(&b.rect)) {
        state.push_event(GameEvent::BearHit);
        state.load_level(state.current_level());
        return;
    }

    // At most one pickup per tick. The reverse scan makes removal during
    // iteration safe and breaks ties toward the last-listed collectible.
    for i in (0..state.collectibles.len()).rev() {
        if player_bounds.overlaps(&state.collectibles[i]) {
            state.collectibles.remove(i);
            state.push_event(GameEvent::Collected);
            break;
        }
    }

    // The goal only counts once every collectible is gone.
    if state.collectibles.is_empty() && player_bounds.overlaps(&state.goal()) {
        let level = state.current_level();
        state.phase = GamePhase::Transitioning;
        state.transition_ticks = state.tuning.transition_delay_ticks();
        state.push_event(GameEvent::LevelComplete { level });
        log::info!("Level {} complete", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::hazard::PolarBear;
    use crate::sim::level::{Level, Platform};
    use crate::sim::rect::Rect;
    use crate::tuning::Tuning;

    const IDLE: TickInput = TickInput {
        move_left: false,
        move_right: false,
        jump: false,
    };
    const RIGHT: TickInput = TickInput {
        move_left: false,
        move_right: true,
        jump: false,
    };
    const LEFT: TickInput = TickInput {
        move_left: true,
        move_right: false,
        jump: false,
    };

    /// A flat 800-wide floor at y=550 with the given extras.
    fn floor_level(goal: Rect) -> Level {
        Level {
            platforms: vec![Platform::new(Rect::new(0.0, 550.0, 800.0, 50.0))],
            goal,
            collectibles: Vec::new(),
            icicles: Vec::new(),
            bears: Vec::new(),
            walls: Vec::new(),
        }
    }

    fn session(levels: Vec<Level>) -> GameState {
        GameState::new(levels, Vec::new(), Tuning::default(), true)
    }

    fn drain(state: &mut GameState) -> Vec<GameEvent> {
        state.take_events()
    }

    #[test]
    fn test_goal_without_collectibles_wins_immediately() {
        // Scenario A: no collectibles, so the first goal overlap wins.
        let goal = Rect::new(680.0, 480.0, 35.0, 35.0);
        let mut state = session(vec![floor_level(goal)]);

        let mut won_at = None;
        for i in 0..400 {
            tick(&mut state, &RIGHT);
            if state.is_won() {
                won_at = Some(i);
                break;
            }
        }
        assert!(won_at.is_some(), "player never reached the goal");
        assert!(
            drain(&mut state)
                .iter()
                .any(|e| matches!(e, GameEvent::LevelComplete { level: 1 }))
        );
    }

    #[test]
    fn test_collectible_gates_the_goal() {
        // Scenario B: goal near spawn, collectible further right. The
        // first pass over the goal must not win; after pickup it must.
        let goal = Rect::new(100.0, 480.0, 35.0, 35.0);
        let mut level = floor_level(goal);
        level.collectibles.push(Rect::new(270.0, 515.0, 20.0, 20.0));
        let mut state = session(vec![level]);

        let mut collected_at = None;
        for i in 0..150 {
            tick(&mut state, &RIGHT);
            assert!(!state.is_won(), "goal must stay gated while a collectible remains");
            if drain(&mut state)
                .iter()
                .any(|e| matches!(e, GameEvent::Collected))
            {
                collected_at = Some(i);
                break;
            }
        }
        assert!(collected_at.is_some(), "collectible never picked up");
        assert!(state.collectibles().is_empty());

        // Walk back over the goal; now it counts.
        for _ in 0..150 {
            tick(&mut state, &LEFT);
            if state.is_won() {
                return;
            }
        }
        panic!("goal did not trigger after the collectible was gone");
    }

    #[test]
    fn test_fall_reset_respawns_collectibles_and_player() {
        // Scenario C: run off the right edge of a short floor.
        let goal = Rect::new(20.0, 480.0, 35.0, 35.0);
        let mut level = floor_level(goal);
        level.platforms[0].rect.w = 200.0;
        level.collectibles.push(Rect::new(120.0, 515.0, 20.0, 20.0));
        let mut state = session(vec![level]);

        // Settle onto the floor first
        for _ in 0..120 {
            tick(&mut state, &IDLE);
        }
        assert!(state.player.on_ground);
        drain(&mut state);

        // Walk right: pick up the collectible on the way out, then run off
        // the edge so the reset provably respawns it.
        let mut fell = false;
        let mut collected = false;
        for _ in 0..600 {
            tick(&mut state, &RIGHT);
            for event in drain(&mut state) {
                match event {
                    GameEvent::Collected => collected = true,
                    GameEvent::Fell => fell = true,
                    _ => {}
                }
            }
            if fell {
                break;
            }
        }
        assert!(collected, "player never picked up the collectible");
        assert!(fell, "player never fell past the arena bound");
        assert_eq!(state.collectibles().len(), 1);
        assert_eq!(state.player.pos.x, state.tuning.spawn_x);
        assert_eq!(state.player.pos.y, state.tuning.spawn_y);
        assert!(!state.is_won());
    }

    #[test]
    fn test_icicle_contact_resets_level() {
        let goal = Rect::new(700.0, 480.0, 35.0, 35.0);
        let mut level = floor_level(goal);
        // Standing spikes across the walking route
        level.icicles.push(Rect::new(300.0, 520.0, 26.0, 30.0));
        let mut state = session(vec![level]);

        let mut hit = false;
        for _ in 0..200 {
            tick(&mut state, &RIGHT);
            if drain(&mut state)
                .iter()
                .any(|e| matches!(e, GameEvent::IcicleHit))
            {
                hit = true;
                break;
            }
        }
        assert!(hit, "player never touched the icicle");
        assert_eq!(state.player.pos.x, state.tuning.spawn_x);
        assert_eq!(state.icicles().len(), 1);
    }

    #[test]
    fn test_bear_contact_resets_level() {
        let goal = Rect::new(700.0, 480.0, 35.0, 35.0);
        let mut level = floor_level(goal);
        level.bears.push(PolarBear::new(
            Rect::new(300.0, 520.0, 40.0, 30.0),
            1.0,
            250.0,
            400.0,
        ));
        let mut state = session(vec![level]);

        let mut hit = false;
        for _ in 0..300 {
            tick(&mut state, &RIGHT);
            if drain(&mut state)
                .iter()
                .any(|e| matches!(e, GameEvent::BearHit))
            {
                hit = true;
                break;
            }
        }
        assert!(hit, "player never met the bear");
        assert_eq!(state.player.pos.x, state.tuning.spawn_x);
        // Reset puts the bear back at its template position, facing right
        assert_eq!(state.bears()[0].rect.x, 300.0);
        assert_eq!(state.bears()[0].direction, 1.0);
    }

    #[test]
    fn test_one_pickup_per_tick_last_listed_wins() {
        let goal = Rect::new(700.0, 480.0, 35.0, 35.0);
        let mut level = floor_level(goal);
        // Two overlapping collectibles right under the spawn drop
        level.collectibles.push(Rect::new(46.0, 515.0, 20.0, 20.0));
        level.collectibles.push(Rect::new(54.0, 515.0, 20.0, 20.0));
        let mut state = session(vec![level]);

        let mut first_pickup_tick = None;
        for _ in 0..200 {
            tick(&mut state, &IDLE);
            let events = drain(&mut state);
            if events.iter().any(|e| matches!(e, GameEvent::Collected)) {
                first_pickup_tick = Some(state.time_ticks);
                break;
            }
        }
        assert!(first_pickup_tick.is_some());
        // Only one was taken, and it was the later-listed one
        assert_eq!(state.collectibles().len(), 1);
        assert_eq!(state.collectibles()[0].x, 46.0);
    }

    #[test]
    fn test_transition_fires_after_configured_delay() {
        let goal = Rect::new(60.0, 480.0, 35.0, 35.0);
        let second = floor_level(Rect::new(700.0, 480.0, 35.0, 35.0));
        let mut state = session(vec![floor_level(goal), second]);

        for _ in 0..200 {
            tick(&mut state, &IDLE);
            if state.is_won() {
                break;
            }
        }
        assert!(state.is_won());
        assert_eq!(state.current_level(), 1);

        let delay = state.tuning.transition_delay_ticks();
        // Frozen for the whole delay
        for _ in 0..delay - 1 {
            tick(&mut state, &RIGHT);
            assert_eq!(state.current_level(), 1);
            assert!(state.is_transitioning());
        }
        // The firing tick loads the next level and resumes play
        tick(&mut state, &RIGHT);
        assert_eq!(state.current_level(), 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.is_won());
        assert_eq!(state.player.pos.x, state.tuning.spawn_x);
    }

    #[test]
    fn test_last_level_completion_is_terminal() {
        let goal = Rect::new(60.0, 480.0, 35.0, 35.0);
        let mut state = session(vec![floor_level(goal)]);

        for _ in 0..500 {
            tick(&mut state, &IDLE);
        }
        assert_eq!(state.phase, GamePhase::Complete);
        assert!(state.is_won());
        assert!(state.is_transitioning());
        assert!(
            drain(&mut state)
                .iter()
                .any(|e| matches!(e, GameEvent::GameComplete))
        );

        // Terminal state is inert
        let ticks = state.time_ticks;
        tick(&mut state, &RIGHT);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_tutorial_blocks_simulation() {
        let goal = Rect::new(700.0, 480.0, 35.0, 35.0);
        let mut state = GameState::new(
            vec![floor_level(goal)],
            Vec::new(),
            Tuning::default(),
            false,
        );
        let spawn_y = state.player.pos.y;

        for _ in 0..10 {
            tick(&mut state, &RIGHT);
        }
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.pos.y, spawn_y);

        state.complete_tutorial();
        tick(&mut state, &RIGHT);
        assert_eq!(state.time_ticks, 1);
        assert!(state.player.pos.y > spawn_y);
    }

    #[test]
    fn test_jump_and_land_events_reach_the_queue() {
        let goal = Rect::new(700.0, 480.0, 35.0, 35.0);
        let mut state = session(vec![floor_level(goal)]);

        // Fall from spawn to the floor
        let mut events = Vec::new();
        for _ in 0..120 {
            tick(&mut state, &IDLE);
            events.extend(drain(&mut state));
        }
        assert!(events.iter().any(|e| matches!(e, GameEvent::Landed)));

        // Jump off the floor
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump);
        assert!(
            drain(&mut state)
                .iter()
                .any(|e| matches!(e, GameEvent::Jumped))
        );
        assert!(!state.player.on_ground || state.player.vel.y < 0.0);
    }
}
