//! Procedural entity spawning
//!
//! Stars appear inside the viewport; enemies materialize just past a random
//! edge and drift in. Both run on timer accumulators whose thresholds shrink
//! with difficulty toward a fixed floor, so the pressure ramps but the spawn
//! interval never reaches zero.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameState, Star, Viewport};
use crate::uniform;

/// Seconds between star spawns at the given difficulty.
#[inline]
pub fn star_spawn_interval(state: &GameState) -> f32 {
    let t = &state.tuning;
    (t.star_interval_base - t.star_interval_per_difficulty * state.difficulty)
        .max(t.star_interval_min)
}

/// Seconds between enemy spawns at the given difficulty.
#[inline]
pub fn enemy_spawn_interval(state: &GameState) -> f32 {
    let t = &state.tuning;
    (t.enemy_interval_base - t.enemy_interval_per_difficulty * state.difficulty)
        .max(t.enemy_interval_min)
}

/// Add one star at a uniform position inside the viewport, inset by the
/// spawn margin so it never clips an edge.
pub fn spawn_star(state: &mut GameState, viewport: Viewport) {
    let t = state.tuning.clone();
    let star = Star {
        pos: Vec2::new(
            uniform(&mut state.rng, t.star_margin, viewport.width - t.star_margin),
            uniform(&mut state.rng, t.star_margin, viewport.height - t.star_margin),
        ),
        radius: uniform(&mut state.rng, t.star_radius_min, t.star_radius_max),
        wobble: uniform(&mut state.rng, 0.0, TAU),
    };
    log::trace!("star spawned at {:?}", star.pos);
    state.stars.push(star);
}

/// Add one enemy just outside a uniformly chosen viewport edge.
///
/// Speed carries a difficulty-proportional term, so later spawns are
/// strictly faster on average. Velocity starts at zero; homing is resolved
/// by the step, not at spawn.
pub fn spawn_enemy(state: &mut GameState, viewport: Viewport) {
    let t = state.tuning.clone();
    let offset = t.enemy_spawn_offset;

    let side = state.rng.random_range(0..4u8);
    let pos = match side {
        // Left, right, top, bottom
        0 => Vec2::new(-offset, uniform(&mut state.rng, 0.0, viewport.height)),
        1 => Vec2::new(
            viewport.width + offset,
            uniform(&mut state.rng, 0.0, viewport.height),
        ),
        2 => Vec2::new(uniform(&mut state.rng, 0.0, viewport.width), -offset),
        _ => Vec2::new(
            uniform(&mut state.rng, 0.0, viewport.width),
            viewport.height + offset,
        ),
    };

    let half = Vec2::new(
        uniform(&mut state.rng, t.enemy_size_min, t.enemy_size_max) / 2.0,
        uniform(&mut state.rng, t.enemy_size_min, t.enemy_size_max) / 2.0,
    );
    let speed = uniform(&mut state.rng, t.enemy_speed_min, t.enemy_speed_max)
        + t.enemy_speed_per_difficulty * state.difficulty;

    log::trace!("enemy spawned at {pos:?} (speed {speed:.0})");
    state.enemies.push(Enemy {
        pos,
        half,
        speed,
        vel: Vec2::ZERO,
    });
}
