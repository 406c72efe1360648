//! Headless autoplay demo
//!
//! Runs one session with a trivial chase-the-nearest-star bot at a fixed
//! 60 Hz step, logging progress. Useful for balance tuning and as a
//! reference for the shell-side loop contract: supply elapsed time, call
//! `tick`, drain events.
//!
//! Usage: `star-dash [seed] [tunables.json]`

use std::error::Error;

use star_dash::Tunables;
use star_dash::sim::{GameEvent, GamePhase, GameState, TickInput, Viewport, tick};

const STEP_DT: f32 = 1.0 / 60.0;

/// Hold the direction keys that close the gap to the nearest star.
fn chase_nearest_star(state: &GameState) -> TickInput {
    let player = state.player.pos;
    let Some(star) = state.stars.iter().min_by(|a, b| {
        let da = a.pos.distance_squared(player);
        let db = b.pos.distance_squared(player);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return TickInput::default();
    };

    // Dead zone so the bot doesn't jitter on top of a star
    let delta = star.pos - player;
    TickInput {
        left: delta.x < -4.0,
        right: delta.x > 4.0,
        up: delta.y < -4.0,
        down: delta.y > 4.0,
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 0xDA5E,
    };
    let tuning = match args.next() {
        Some(path) => Tunables::from_json(&std::fs::read_to_string(path)?)?,
        None => Tunables::default(),
    };

    let viewport = Viewport::new(1280.0, 720.0);
    let mut state = GameState::with_tuning(seed, viewport, tuning);

    let mut elapsed = 0.0f32;
    let mut frames = 0u64;
    while state.phase != GamePhase::GameOver {
        let input = chase_nearest_star(&state);
        tick(&mut state, &input, viewport, STEP_DT);
        elapsed += STEP_DT;
        frames += 1;

        for event in state.drain_events() {
            if let GameEvent::StarCollected { pos } = event {
                log::debug!("chime: star collected at {pos:?}");
            }
        }

        // Once a second
        if frames % 60 == 0 {
            log::info!(
                "t = {elapsed:>6.1}s  score {:>5}  clock {:>5.1}s  difficulty {:.2}  enemies {}",
                state.score,
                state.time_left,
                state.difficulty,
                state.enemies.len(),
            );
        }
    }

    println!(
        "game over after {elapsed:.1}s: score {}, difficulty {:.2}",
        state.score, state.difficulty
    );
    Ok(())
}
