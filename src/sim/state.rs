//! Simulation state and core entity types
//!
//! One [`GameState`] is one play session. Shells own the state, feed it to
//! [`tick`](super::tick::tick) each frame, and read it back afterwards;
//! nothing in here touches a display, a clock, or global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn::spawn_star;
use crate::Tunables;
use crate::consts::INITIAL_STAR_COUNT;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen; no time passes
    Paused,
    /// Session ended (clock ran out or an enemy connected)
    GameOver,
}

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The clock reached zero
    TimeUp,
    /// An enemy rectangle touched the player
    EnemyContact,
}

/// Side-effect notifications for the shell, drained after each step.
///
/// The simulation never plays sounds or draws; it records that something
/// observable happened and lets the adapters react.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A star was collected at this position (one per pickup; the audio
    /// adapter's chime hook)
    StarCollected { pos: Vec2 },
    /// The session just ended
    GameOver { reason: GameOverReason },
}

/// Playable surface dimensions in logical pixels.
///
/// Passed into every spawn and step call rather than stored, so a resize
/// between frames is picked up immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player avatar (circular collision shape)
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Last-applied velocity, recomputed from input each step
    pub vel: Vec2,
    pub radius: f32,
    /// Movement speed, pixels per second
    pub speed: f32,
}

impl Player {
    fn new(pos: Vec2, tuning: &Tunables) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: tuning.player_radius,
            speed: tuning.player_speed,
        }
    }
}

/// A collectible star (circular collision shape)
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Cosmetic animation phase, monotonically increasing; no gameplay effect
    pub wobble: f32,
}

/// A hostile rectangle that homes toward the player
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Center position
    pub pos: Vec2,
    /// Axis-aligned half-extents
    pub half: Vec2,
    /// Movement speed, fixed at spawn (difficulty-scaled)
    pub speed: f32,
    /// Recomputed every step to point at the player; no inertia
    pub vel: Vec2,
}

/// Complete state of one play session.
///
/// Deterministic: two states built with the same seed and tunables, stepped
/// with the same inputs, deltas, and viewports, stay byte-for-byte in sync.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Seconds left on the clock
    pub time_left: f32,
    /// Drives enemy speed and spawn cadence; only ever increases during play
    pub difficulty: f32,
    pub player: Player,
    pub stars: Vec<Star>,
    pub enemies: Vec<Enemy>,
    /// Elapsed-time accumulator toward the next star spawn
    pub star_spawn_timer: f32,
    /// Elapsed-time accumulator toward the next enemy spawn
    pub enemy_spawn_timer: f32,
    /// Pending notifications; see [`GameState::drain_events`]
    pub events: Vec<GameEvent>,
    /// Balance table, fixed for the lifetime of the state
    pub tuning: Tunables,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session with canonical balance.
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self::with_tuning(seed, viewport, Tunables::default())
    }

    /// Create a session with a custom balance table.
    pub fn with_tuning(seed: u64, viewport: Viewport, tuning: Tunables) -> Self {
        let player = Player::new(viewport.center(), &tuning);
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            time_left: tuning.start_time,
            difficulty: 1.0,
            player,
            stars: Vec::new(),
            enemies: Vec::new(),
            star_spawn_timer: 0.0,
            enemy_spawn_timer: 0.0,
            events: Vec::new(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.seed_initial_stars(viewport);
        log::info!("session started (seed {seed})");
        state
    }

    /// Restart: wipe everything back to a fresh Playing session.
    ///
    /// Only the balance table and the RNG stream carry over; reseeding here
    /// would make every replay identical to the first run.
    pub fn reset(&mut self, viewport: Viewport) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.time_left = self.tuning.start_time;
        self.difficulty = 1.0;
        self.player = Player::new(viewport.center(), &self.tuning);
        self.stars.clear();
        self.enemies.clear();
        self.star_spawn_timer = 0.0;
        self.enemy_spawn_timer = 0.0;
        self.events.clear();
        self.seed_initial_stars(viewport);
        log::info!("session restarted");
    }

    fn seed_initial_stars(&mut self, viewport: Viewport) {
        for _ in 0..INITIAL_STAR_COUNT {
            spawn_star(self, viewport);
        }
    }

    /// Take all events recorded since the last drain (shell side: audio,
    /// score display, game-over overlay).
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(42, VIEW);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, 60.0);
        assert_eq!(state.difficulty, 1.0);
        assert_eq!(state.stars.len(), 5);
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_reset_wipes_session() {
        let mut state = GameState::new(42, VIEW);
        state.score = 170;
        state.time_left = 3.5;
        state.difficulty = 2.4;
        state.phase = GamePhase::GameOver;
        state.enemies.push(Enemy {
            pos: Vec2::new(10.0, 10.0),
            half: Vec2::new(12.0, 12.0),
            speed: 100.0,
            vel: Vec2::ZERO,
        });

        state.reset(VIEW);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, 60.0);
        assert_eq!(state.difficulty, 1.0);
        assert!(state.enemies.is_empty());
        assert_eq!(state.stars.len(), 5);
    }

    #[test]
    fn test_reset_does_not_replay_first_session() {
        // The RNG stream continues across restarts, so a fresh board is a
        // different board.
        let mut state = GameState::new(42, VIEW);
        let first: Vec<Vec2> = state.stars.iter().map(|s| s.pos).collect();
        state.reset(VIEW);
        let second: Vec<Vec2> = state.stars.iter().map(|s| s.pos).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(1, VIEW);
        state.events.push(GameEvent::GameOver {
            reason: GameOverReason::TimeUp,
        });
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.drain_events().is_empty());
    }
}
