//! Per-frame simulation step
//!
//! The shell calls [`tick`] once per display frame with the elapsed
//! wall-clock time and the current viewport. Step order is a fixed contract:
//! clock → expiry short-circuit → input → player movement → spawners → star
//! pass → enemy pass → difficulty creep. Star collection effects (time
//! refund, difficulty bump) are therefore visible to the enemy pass within
//! the same step, and nothing moves on the frame the clock hits zero.

use glam::Vec2;

use super::collision::{circles_overlap, player_hits_enemy};
use super::spawn::{enemy_spawn_interval, spawn_enemy, spawn_star, star_spawn_interval};
use super::state::{GameEvent, GameOverReason, GamePhase, GameState, Viewport};
use crate::clamp;
use crate::consts::MAX_FRAME_DT;

/// Input snapshot for a single step.
///
/// Directions are level-triggered (held state, sampled per frame); the two
/// actions are edge-triggered and must be set for exactly one step per
/// user action.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Toggle Playing <-> Paused
    pub toggle_pause: bool,
    /// Tear down the session and start a fresh one
    pub restart: bool,
}

impl TickInput {
    /// Directional intent as a raw vector; opposing keys cancel additively.
    fn intent(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        v
    }
}

/// Advance the session by one frame.
///
/// `dt` is clamped into `[0, MAX_FRAME_DT]` before use, so stalled frames
/// and clock irregularities degrade to small or empty steps instead of
/// teleporting entities. Paused sessions and toggle/restart frames mutate
/// nothing else; their delta is discarded.
pub fn tick(state: &mut GameState, input: &TickInput, viewport: Viewport, dt: f32) {
    if input.restart {
        state.reset(viewport);
        return;
    }

    if input.toggle_pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                // Resume; the frame's delta is discarded so paused wall time
                // never reaches the clock
                state.phase = GamePhase::Playing;
                return;
            }
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = clamp(dt, 0.0, MAX_FRAME_DT);

    // Clock. Expiry ends the step before anything moves.
    state.time_left -= dt;
    if state.time_left <= 0.0 {
        state.time_left = 0.0;
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            reason: GameOverReason::TimeUp,
        });
        log::info!("game over: time up (score {})", state.score);
        return;
    }

    // Input resolution: normalize so diagonals aren't faster, zero intent
    // stops instantly
    state.player.vel = input.intent().normalize_or_zero() * state.player.speed;
    state.player.pos += state.player.vel * dt;
    let r = state.player.radius;
    state.player.pos.x = clamp(state.player.pos.x, r, viewport.width - r);
    state.player.pos.y = clamp(state.player.pos.y, r, viewport.height - r);

    // Spawn accumulators. Reset to zero on fire: overshoot from a long frame
    // is discarded rather than banked into a burst.
    state.star_spawn_timer += dt;
    if state.star_spawn_timer > star_spawn_interval(state) {
        spawn_star(state, viewport);
        state.star_spawn_timer = 0.0;
    }
    state.enemy_spawn_timer += dt;
    if state.enemy_spawn_timer > enemy_spawn_interval(state) {
        spawn_enemy(state, viewport);
        state.enemy_spawn_timer = 0.0;
    }

    // Star pass. Reverse traversal with swap_remove: indices above the
    // cursor are already processed, so the element swapped in from the tail
    // is never skipped or seen twice.
    for i in (0..state.stars.len()).rev() {
        state.stars[i].wobble += state.tuning.star_wobble_rate * dt;
        let star = &state.stars[i];
        if circles_overlap(
            star.pos,
            star.radius,
            state.player.pos,
            state.player.radius,
            state.tuning.collect_tolerance,
        ) {
            let star = state.stars.swap_remove(i);
            state.score += state.tuning.score_per_star;
            state.time_left = (state.time_left + state.tuning.time_per_star).min(state.tuning.max_time);
            state.difficulty += state.tuning.difficulty_per_star;
            state.events.push(GameEvent::StarCollected { pos: star.pos });
            log::debug!("star collected (score {})", state.score);
        }
    }

    // Enemy pass: re-aim at the player, move, cull, then collide. Culling
    // runs for every enemy every step; contact ends the session on the spot.
    let cull = state.tuning.enemy_cull_margin;
    let target = state.player.pos;
    for i in (0..state.enemies.len()).rev() {
        let enemy = &mut state.enemies[i];
        enemy.vel = (target - enemy.pos).normalize_or_zero() * enemy.speed;
        enemy.pos += enemy.vel * dt;

        if enemy.pos.x < -cull
            || enemy.pos.x > viewport.width + cull
            || enemy.pos.y < -cull
            || enemy.pos.y > viewport.height + cull
        {
            state.enemies.swap_remove(i);
            continue;
        }

        if player_hits_enemy(&state.player, &state.enemies[i]) {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver {
                reason: GameOverReason::EnemyContact,
            });
            log::info!("game over: enemy contact (score {})", state.score);
            return;
        }
    }

    // Continuous difficulty creep, independent of the per-star bumps
    state.difficulty += state.tuning.difficulty_per_second * dt;
}
