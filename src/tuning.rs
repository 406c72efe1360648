//! Data-driven game balance
//!
//! Every balance number the simulation consumes lives in [`Tunables`], so a
//! shell can ship alternate difficulty tables as JSON without recompiling.
//! `Default` is the canonical balance.

use serde::{Deserialize, Serialize};

/// Balance table for one session.
///
/// Missing fields in a JSON table fall back to the canonical values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    // === Player ===
    /// Collision + draw radius, logical pixels
    pub player_radius: f32,
    /// Movement speed, pixels per second
    pub player_speed: f32,

    // === Clock ===
    /// Seconds on the clock at session start
    pub start_time: f32,
    /// Hard cap on the clock; collection can never push it past this
    pub max_time: f32,
    /// Seconds refunded per star collected
    pub time_per_star: f32,

    // === Scoring ===
    /// Points per star collected
    pub score_per_star: u32,

    // === Stars ===
    /// Spawn inset from the viewport edges (avoids edge clipping)
    pub star_margin: f32,
    /// Radius range at spawn, `[min, max)`
    pub star_radius_min: f32,
    pub star_radius_max: f32,
    /// Wobble phase advance per second (cosmetic)
    pub star_wobble_rate: f32,
    /// Spawn cadence: `max(min, base - per_difficulty * difficulty)` seconds
    pub star_interval_base: f32,
    pub star_interval_min: f32,
    pub star_interval_per_difficulty: f32,

    // === Enemies ===
    /// Full-size range per axis at spawn, `[min, max)`
    pub enemy_size_min: f32,
    pub enemy_size_max: f32,
    /// Base speed range at spawn, `[min, max)` pixels per second
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    /// Extra speed per point of difficulty
    pub enemy_speed_per_difficulty: f32,
    /// How far beyond the chosen edge an enemy materializes
    pub enemy_spawn_offset: f32,
    /// Center distance past any edge at which an enemy is removed
    pub enemy_cull_margin: f32,
    /// Spawn cadence: `max(min, base - per_difficulty * difficulty)` seconds
    pub enemy_interval_base: f32,
    pub enemy_interval_min: f32,
    pub enemy_interval_per_difficulty: f32,

    // === Collision ===
    /// Shaved off the combined radii for star pickup, making collection
    /// slightly more permissive than exact circle contact
    pub collect_tolerance: f32,

    // === Difficulty ===
    /// Continuous ramp per second of play
    pub difficulty_per_second: f32,
    /// Discrete bump per star collected
    pub difficulty_per_star: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            player_radius: 18.0,
            player_speed: 220.0,

            start_time: 60.0,
            max_time: 300.0,
            time_per_star: 1.8,

            score_per_star: 10,

            star_margin: 30.0,
            star_radius_min: 10.0,
            star_radius_max: 16.0,
            star_wobble_rate: 6.0,
            star_interval_base: 1.6,
            star_interval_min: 0.45,
            star_interval_per_difficulty: 0.09,

            enemy_size_min: 24.0,
            enemy_size_max: 42.0,
            enemy_speed_min: 60.0,
            enemy_speed_max: 140.0,
            enemy_speed_per_difficulty: 12.0,
            enemy_spawn_offset: 30.0,
            enemy_cull_margin: 150.0,
            enemy_interval_base: 2.8,
            enemy_interval_min: 0.6,
            enemy_interval_per_difficulty: 0.12,

            collect_tolerance: 2.0,

            difficulty_per_second: 0.01,
            difficulty_per_star: 0.02,
        }
    }
}

impl Tunables {
    /// Parse a balance table from JSON. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the full table as pretty JSON (for shipping editable copies).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
