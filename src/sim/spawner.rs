//! Time-gated enemy spawning with wave scaling

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{GameEvent, GameState};
use crate::config::GameConfig;
use crate::consts::*;

/// Seconds between spawns at a given wave (shrinks with wave, floored)
pub fn spawn_interval(spawn_delay: f32, wave: u32) -> f32 {
    (spawn_delay - wave as f32 * SPAWN_INTERVAL_PER_WAVE).max(MIN_SPAWN_INTERVAL)
}

/// Descent speed of enemies spawned at a given wave
pub fn enemy_speed(base_speed: f32, wave: u32) -> f32 {
    base_speed + (wave as f32 * ENEMY_SPEED_PER_WAVE).min(MAX_ENEMY_SPEED_BONUS)
}

/// Hit-points of enemies spawned at a given wave
pub fn enemy_hp(wave: u32) -> u32 {
    1 + wave / WAVES_PER_ENEMY_HP
}

/// Spawn one enemy if the wave-scaled interval has passed.
///
/// Returns the new enemy's id.
pub fn try_spawn<R: RandomSource + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
) -> Option<u32> {
    let interval = spawn_interval(config.spawn_delay, state.wave);
    if state.since_last_spawn() <= f64::from(interval) {
        return None;
    }

    let lane_width = config.playfield_width - 2.0 * ENEMY_SPAWN_MARGIN_X;
    let x = ENEMY_SPAWN_MARGIN_X + rng.next_unit() * lane_width;
    let pos = Vec2::new(x, ENEMY_SPAWN_Y);
    let vel = Vec2::new(0.0, enemy_speed(config.enemy_base_speed, state.wave));
    let hp = enemy_hp(state.wave);

    let id = state.insert_enemy(pos, vel, hp);
    state.last_spawn = state.time;
    state.events.push(GameEvent::EnemySpawned { enemy_id: id });
    log::debug!("Wave {}: enemy {} at x={:.1} (hp {}, speed {:.0})", state.wave, id, x, hp, vel.y);
    Some(id)
}
