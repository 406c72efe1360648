//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied elapsed time only (clamped, never read from a clock)
//! - Seeded RNG only
//! - Viewport dimensions passed in every step, never cached
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, closest_point_on_rect, player_hits_enemy};
pub use spawn::{enemy_spawn_interval, spawn_enemy, spawn_star, star_spawn_interval};
pub use state::{
    Enemy, GameEvent, GameOverReason, GamePhase, GameState, Player, Star, Viewport,
};
pub use tick::{TickInput, tick};
