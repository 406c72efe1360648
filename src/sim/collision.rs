//! Collision tests for the two shapes in play
//!
//! Circles (player, stars) against circles, and a circle against an
//! axis-aligned rectangle (enemies). Everything compares squared distances;
//! no square roots are taken.

use glam::Vec2;

use super::state::{Enemy, Player};
use crate::clamp;

/// Squared-distance circle overlap test.
///
/// `tolerance` is subtracted from the combined radius before comparing, so a
/// positive value demands deeper overlap than exact contact (used to make
/// star pickup feel forgiving without the circles merely grazing).
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32, tolerance: f32) -> bool {
    let combined = ra + rb - tolerance;
    a.distance_squared(b) < combined * combined
}

/// Closest point on an axis-aligned rectangle (given by center and
/// half-extents) to `p`.
///
/// Per-axis clamping handles `p` inside, beside, or diagonal from the
/// rectangle uniformly; the corner cases need no special-casing.
#[inline]
pub fn closest_point_on_rect(p: Vec2, center: Vec2, half: Vec2) -> Vec2 {
    Vec2::new(
        clamp(p.x, center.x - half.x, center.x + half.x),
        clamp(p.y, center.y - half.y, center.y + half.y),
    )
}

/// True when the player's collision circle reaches the enemy's rectangle.
#[inline]
pub fn player_hits_enemy(player: &Player, enemy: &Enemy) -> bool {
    let closest = closest_point_on_rect(player.pos, enemy.pos, enemy.half);
    player.pos.distance_squared(closest) < player.radius * player.radius
}
