//! Squad Volley - simulation core for a top-down squad shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation, combat, spawning, collisions, game state)
//! - `config`: Validated game configuration
//! - `error`: Configuration errors
//!
//! Rendering, input wiring and the frame loop live outside this crate. They feed
//! [`sim::TickInput`] in and read [`sim::Snapshot`] out.

pub mod config;
pub mod error;
pub mod sim;

pub use config::{GameConfig, TargetingMode, TriggerMode};
pub use error::ConfigError;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Upper bound on a single simulation step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Starting (and maximum) squad health
    pub const STARTING_HEALTH: u8 = 3;
    /// Score awarded per enemy destroyed
    pub const KILL_SCORE: u64 = 10;
    /// Wave advances each time score crosses a multiple of this
    pub const WAVE_SCORE_THRESHOLD: u64 = 80;

    /// Formation layout: slots per ring
    pub const RING_SLOTS: u32 = 6;
    /// Formation layout: radius growth per ring (in spacing units)
    pub const RING_RADIUS_STEP: f32 = 0.9;
    /// Exponential pursuit rate of units toward their slot (1/s)
    pub const FORMATION_SMOOTHING: f32 = 8.0;

    /// Straight shots leave this far above the shooter
    pub const MUZZLE_OFFSET: f32 = 6.0;
    /// Projectiles survive this far outside the playfield
    pub const PROJECTILE_CULL_MARGIN: f32 = 40.0;
    /// Enemies escape once this far below the playfield
    pub const ENEMY_CULL_MARGIN: f32 = 50.0;

    /// Enemy spawn row (above the visible area)
    pub const ENEMY_SPAWN_Y: f32 = -20.0;
    /// Horizontal margin kept free of spawns on each side
    pub const ENEMY_SPAWN_MARGIN_X: f32 = 40.0;
    /// Spawn interval floor (seconds)
    pub const MIN_SPAWN_INTERVAL: f32 = 0.35;
    /// Spawn interval reduction per wave (seconds)
    pub const SPAWN_INTERVAL_PER_WAVE: f32 = 0.05;
    /// Enemy speed bonus per wave (pixels/s)
    pub const ENEMY_SPEED_PER_WAVE: f32 = 12.0;
    /// Cap on the wave speed bonus (pixels/s)
    pub const MAX_ENEMY_SPEED_BONUS: f32 = 140.0;
    /// Enemies gain one hit-point every this many waves
    pub const WAVES_PER_ENEMY_HP: u32 = 4;
}

/// Circle overlap test: true iff the squared center distance is strictly
/// less than the squared sum of radii. Touching circles do not intersect.
#[inline]
pub fn circles_intersect(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Unit vector from `from` toward `to`, or `fallback` when the points coincide
#[inline]
pub fn direction_or(from: Vec2, to: Vec2, fallback: Vec2) -> Vec2 {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO { fallback } else { dir }
}

/// Clamp a point into an axis-aligned rectangle
#[inline]
pub fn clamp_to_rect(p: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    p.clamp(min, max)
}

/// Clamp a raw frame delta into `[0, MAX_FRAME_DT]`; NaN and infinities become 0
#[inline]
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, consts::MAX_FRAME_DT)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_intersect_strict_boundary() {
        // Exactly touching: distance 10, radii 4 + 6
        assert!(!circles_intersect(Vec2::ZERO, 4.0, Vec2::new(10.0, 0.0), 6.0));
        assert!(circles_intersect(Vec2::ZERO, 4.0, Vec2::new(9.99, 0.0), 6.0));
        assert!(!circles_intersect(Vec2::ZERO, 4.0, Vec2::new(10.01, 0.0), 6.0));
    }

    #[test]
    fn test_circles_intersect_diagonal() {
        // 3-4-5 triangle
        assert!(!circles_intersect(Vec2::ZERO, 2.0, Vec2::new(3.0, 4.0), 3.0));
        assert!(circles_intersect(Vec2::ZERO, 2.5, Vec2::new(3.0, 4.0), 3.0));
    }

    #[test]
    fn test_direction_or_fallback() {
        let up = Vec2::new(0.0, -1.0);
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(direction_or(p, p, up), up);

        let dir = direction_or(Vec2::ZERO, Vec2::new(3.0, 4.0), up);
        assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_clamp_frame_dt() {
        assert_eq!(clamp_frame_dt(0.016), 0.016);
        assert_eq!(clamp_frame_dt(0.5), consts::MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(-1.0), 0.0);
        assert_eq!(clamp_frame_dt(f32::NAN), 0.0);
        assert_eq!(clamp_frame_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_clamp_to_rect() {
        let min = Vec2::new(80.0, 200.0);
        let max = Vec2::new(880.0, 640.0);
        assert_eq!(clamp_to_rect(Vec2::new(0.0, 700.0), min, max), Vec2::new(80.0, 640.0));
        assert_eq!(clamp_to_rect(Vec2::new(400.0, 300.0), min, max), Vec2::new(400.0, 300.0));
    }
}
