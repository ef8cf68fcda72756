//! Built-in level campaign
//!
//! Five levels, ramping from bare platforming to the full hazard set:
//! collectible-gated goals, icicles (standalone and platform strips),
//! patrolling polar bears and a level-scoped wall.

use super::hazard::PolarBear;
use super::level::{Level, Platform};
use super::rect::Rect;
use crate::consts::ARENA_WIDTH;

fn plat(x: f32, y: f32, w: f32, h: f32) -> Platform {
    Platform::new(Rect::new(x, y, w, h))
}

/// Walls shared by every level: columns just outside the arena keep the
/// player horizontally inside the playfield. There is deliberately no
/// floor; falling out the bottom is the state machine's reset case.
pub fn global_walls() -> Vec<Rect> {
    vec![
        Rect::new(-40.0, -400.0, 40.0, 1400.0),
        Rect::new(ARENA_WIDTH, -400.0, 40.0, 1400.0),
    ]
}

/// The shipped campaign, in play order.
pub fn builtin_levels() -> Vec<Level> {
    vec![
        level_introduction(),
        level_stepping_up(),
        level_zigzag(),
        level_complex_jumps(),
        level_final_challenge(),
    ]
}

/// Level 1 - Introduction. No hazards, no collectibles: walk and jump to
/// the mountain.
fn level_introduction() -> Level {
    Level {
        platforms: vec![
            plat(0.0, 550.0, 200.0, 50.0),
            plat(250.0, 480.0, 150.0, 20.0),
            plat(450.0, 420.0, 120.0, 20.0),
            plat(620.0, 480.0, 180.0, 50.0),
        ],
        goal: Rect::new(680.0, 420.0, 35.0, 35.0),
        collectibles: Vec::new(),
        icicles: Vec::new(),
        bears: Vec::new(),
        walls: Vec::new(),
    }
}

/// Level 2 - Stepping up. First collectible, derived from a flagged
/// platform, gates the goal.
fn level_stepping_up() -> Level {
    Level {
        platforms: vec![
            plat(0.0, 550.0, 150.0, 50.0),
            plat(200.0, 460.0, 100.0, 20.0),
            plat(350.0, 500.0, 100.0, 20.0).with_collectible(),
            plat(500.0, 420.0, 100.0, 20.0),
            plat(650.0, 360.0, 150.0, 50.0),
        ],
        goal: Rect::new(700.0, 295.0, 35.0, 35.0),
        collectibles: Vec::new(),
        icicles: Vec::new(),
        bears: Vec::new(),
        walls: Vec::new(),
    }
}

/// Level 3 - Zigzag. Ground spikes in the pit under the zigzag and an
/// authored collectible on the low route.
fn level_zigzag() -> Level {
    Level {
        platforms: vec![
            plat(0.0, 550.0, 120.0, 50.0),
            plat(170.0, 470.0, 80.0, 20.0),
            plat(300.0, 400.0, 80.0, 20.0),
            plat(430.0, 470.0, 80.0, 20.0),
            plat(560.0, 400.0, 80.0, 20.0),
            plat(690.0, 320.0, 110.0, 50.0),
        ],
        goal: Rect::new(720.0, 255.0, 35.0, 35.0),
        collectibles: vec![Rect::new(270.0, 440.0, 20.0, 20.0)],
        icicles: vec![Rect::new(500.0, 560.0, 26.0, 40.0), Rect::new(532.0, 560.0, 26.0, 40.0)],
        bears: Vec::new(),
        walls: Vec::new(),
    }
}

/// Level 4 - Complex jumps. A bear guards the summit platform and one
/// mid-route platform grows an icicle strip.
fn level_complex_jumps() -> Level {
    Level {
        platforms: vec![
            plat(0.0, 550.0, 100.0, 50.0),
            plat(140.0, 480.0, 90.0, 20.0),
            plat(270.0, 410.0, 70.0, 20.0),
            plat(380.0, 480.0, 80.0, 20.0),
            plat(500.0, 400.0, 90.0, 20.0).with_icicles(),
            plat(630.0, 470.0, 80.0, 20.0),
            plat(350.0, 300.0, 100.0, 20.0).with_collectible(),
            plat(500.0, 230.0, 150.0, 50.0),
        ],
        goal: Rect::new(550.0, 165.0, 35.0, 35.0),
        collectibles: Vec::new(),
        icicles: Vec::new(),
        bears: vec![PolarBear::new(
            Rect::new(505.0, 200.0, 40.0, 30.0),
            1.0,
            505.0,
            610.0,
        )],
        walls: Vec::new(),
    }
}

/// Level 5 - Final challenge. Everything at once, plus an ice column wall
/// closing off the straight route.
fn level_final_challenge() -> Level {
    Level {
        platforms: vec![
            plat(0.0, 550.0, 100.0, 50.0),
            plat(130.0, 460.0, 70.0, 20.0),
            plat(230.0, 500.0, 70.0, 20.0),
            plat(330.0, 420.0, 70.0, 20.0).with_collectible(),
            plat(430.0, 480.0, 70.0, 20.0),
            plat(530.0, 400.0, 70.0, 20.0).with_icicles(),
            plat(630.0, 460.0, 70.0, 20.0),
            plat(250.0, 320.0, 80.0, 20.0),
            plat(400.0, 260.0, 80.0, 20.0),
            plat(550.0, 200.0, 120.0, 50.0),
        ],
        goal: Rect::new(585.0, 135.0, 35.0, 35.0),
        collectibles: vec![Rect::new(280.0, 280.0, 20.0, 20.0)],
        icicles: vec![Rect::new(470.0, 560.0, 26.0, 40.0)],
        bears: vec![PolarBear::new(
            Rect::new(550.0, 170.0, 40.0, 30.0),
            1.2,
            550.0,
            630.0,
        )],
        walls: vec![Rect::new(230.0, 380.0, 16.0, 120.0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels_validate() {
        let levels = builtin_levels();
        assert_eq!(levels.len(), 5);
        for level in &levels {
            level.validate();
        }
    }

    #[test]
    fn test_campaign_exercises_every_feature() {
        let levels = builtin_levels();
        assert!(levels.iter().any(|l| !l.spawn_collectibles().is_empty()));
        assert!(levels.iter().any(|l| !l.icicles.is_empty()));
        assert!(levels.iter().any(|l| l.platforms.iter().any(|p| p.icicles)));
        assert!(levels.iter().any(|l| !l.bears.is_empty()));
        assert!(levels.iter().any(|l| !l.walls.is_empty()));
    }

    #[test]
    fn test_global_walls_flank_the_arena() {
        let walls = global_walls();
        assert_eq!(walls.len(), 2);
        assert!(walls[0].x + walls[0].w <= 0.0);
        assert!(walls[1].x >= ARENA_WIDTH);
    }
}
