//! Star Dash - an arcade survival simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! The crate is headless by design: a shell supplies per-frame input and
//! elapsed time, calls [`sim::tick`], then reads the state and drains the
//! event queue to drive rendering and audio.

pub mod sim;
pub mod tuning;

pub use tuning::Tunables;

/// Game configuration constants
pub mod consts {
    /// Largest elapsed time accepted per step. A stalled frame (background
    /// tab, debugger) is clamped to this instead of teleporting entities
    /// or draining the clock.
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Stars seeded into a fresh session before play begins
    pub const INITIAL_STAR_COUNT: usize = 5;
}

/// Restrict `v` to `[lo, hi]`.
///
/// Resolves as `max(lo, min(hi, v))`, so a degenerate range (`lo > hi`,
/// e.g. a viewport narrower than the player) collapses to `lo` instead of
/// panicking like `f32::clamp`.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

/// Uniform sample in `[lo, hi)`.
///
/// An empty range returns `lo`, which keeps spawning well-defined on
/// tiny viewports.
#[inline]
pub fn uniform<R: rand::Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}
