//! Penguin Peaks entry point
//!
//! Native builds run a short scripted headless session as a smoke check
//! of the whole stack. The browser build is driven through the
//! `web::Session` facade instead and never enters `main`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use penguin_peaks::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use penguin_peaks::{Progress, Tuning};

    env_logger::init();
    log::info!("Penguin Peaks (native) starting headless session...");

    let tuning = Tuning::load();
    let progress = Progress::load();
    let mut state = GameState::with_builtin_levels(tuning, progress.tutorial_done);
    if state.is_tutorial_active() {
        // No overlay to click through in a headless run
        state.complete_tutorial();
    }

    // Scripted input: hold right, hop every half second. Enough to cross
    // level one's starting platforms and trip most of the event kinds.
    let mut jumps = 0u32;
    let mut landings = 0u32;
    let mut resets = 0u32;
    let mut collected = 0u32;
    let mut cleared = 0u32;

    for frame in 0u32..3600 {
        let input = TickInput {
            move_right: true,
            jump: frame % 30 == 0,
            ..Default::default()
        };
        tick(&mut state, &input);

        for event in state.take_events() {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::Landed => landings += 1,
                GameEvent::Fell | GameEvent::IcicleHit | GameEvent::BearHit => resets += 1,
                GameEvent::Collected => collected += 1,
                GameEvent::LevelComplete { level } => {
                    cleared += 1;
                    log::info!("Cleared level {level}");
                }
                GameEvent::GameComplete => log::info!("Campaign complete"),
            }
        }

        if state.phase == GamePhase::Complete {
            break;
        }
    }

    log::info!(
        "Session over: level {}/{}, {} ticks, {} jumps, {} landings, {} resets, {} collected, {} cleared",
        state.current_level(),
        state.total_levels(),
        state.time_ticks,
        jumps,
        landings,
        resets,
        collected,
        cleared
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds boot through the library's `web::Session`.
}
