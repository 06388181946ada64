//! Target acquisition and firing

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Enemy, GameEvent, GameState};
use crate::config::{GameConfig, TargetingMode, TriggerMode};
use crate::consts::MUZZLE_OFFSET;
use crate::direction_or;

/// Straight up in screen space (y grows downward)
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Index of the enemy closest to `point`. Ties go to the first one found.
pub fn nearest_enemy(enemies: &[Enemy], point: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, enemy) in enemies.iter().enumerate() {
        let dist = enemy.pos.distance_squared(point);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

/// Spawn position and velocity of the next shot, or `None` if nothing can fire
fn aim<R: RandomSource + ?Sized>(
    state: &GameState,
    config: &GameConfig,
    rng: &mut R,
) -> Option<(Vec2, Vec2)> {
    if state.units.is_empty() {
        return None;
    }

    match config.targeting {
        TargetingMode::StraightUp => {
            let shooter = &state.units[rng.pick_index(state.units.len())];
            let origin = shooter.pos + UP * MUZZLE_OFFSET;
            Some((origin, UP * config.projectile_speed))
        }
        TargetingMode::NearestToCenter => {
            let target = nearest_enemy(&state.enemies, state.center.pos)?;
            let target_pos = state.enemies[target].pos;
            let shooter = &state.units[rng.pick_index(state.units.len())];
            let dir = direction_or(shooter.pos, target_pos, UP);
            Some((shooter.pos, dir * config.projectile_speed))
        }
    }
}

/// Fire one projectile if the trigger and cooldown allow it.
///
/// Returns the new projectile's id.
pub fn try_fire<R: RandomSource + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    fire_held: bool,
) -> Option<u32> {
    if config.trigger == TriggerMode::Held && !fire_held {
        return None;
    }
    if state.since_last_shot() < f64::from(config.fire_delay) {
        return None;
    }

    let (origin, vel) = aim(state, config, rng)?;
    let id = state.insert_projectile(origin, vel);
    state.last_shot = state.time;
    state.events.push(GameEvent::ShotFired { projectile_id: id });
    log::trace!("Projectile {} fired from {:?} with {:?}", id, origin, vel);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRandom;
    use crate::sim::state::Unit;

    fn ready_state(config: &GameConfig) -> GameState {
        let mut state = GameState::new(config);
        state.time = 1.0;
        state
    }

    fn homing() -> GameConfig {
        GameConfig {
            targeting: TargetingMode::NearestToCenter,
            trigger: TriggerMode::Auto,
            ..Default::default()
        }
    }

    #[test]
    fn test_nearest_enemy_tie_goes_to_first() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let c = state.center.pos;
        state.insert_enemy(c + Vec2::new(50.0, 0.0), Vec2::ZERO, 1);
        state.insert_enemy(c + Vec2::new(-20.0, 0.0), Vec2::ZERO, 1);
        state.insert_enemy(c + Vec2::new(0.0, 20.0), Vec2::ZERO, 1);
        assert_eq!(nearest_enemy(&state.enemies, c), Some(1));
        assert_eq!(nearest_enemy(&[], c), None);
    }

    #[test]
    fn test_held_trigger_requires_input() {
        let config = GameConfig::default();
        let mut state = ready_state(&config);
        let mut rng = ScriptedRandom::constant(0.0);

        assert_eq!(try_fire(&mut state, &config, &mut rng, false), None);
        assert!(state.projectiles.is_empty());

        assert!(try_fire(&mut state, &config, &mut rng, true).is_some());
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.last_shot, 1.0);
    }

    #[test]
    fn test_cooldown_blocks_second_shot() {
        let config = GameConfig::default();
        let mut state = ready_state(&config);
        let mut rng = ScriptedRandom::constant(0.0);

        assert!(try_fire(&mut state, &config, &mut rng, true).is_some());
        state.time += 0.1;
        assert_eq!(try_fire(&mut state, &config, &mut rng, true), None);
        state.time += 0.2;
        assert!(try_fire(&mut state, &config, &mut rng, true).is_some());
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn test_straight_shot_from_random_shooter() {
        let config = GameConfig::default();
        let mut state = ready_state(&config);
        state.units = (0..4)
            .map(|i| Unit::new(i, Vec2::new(100.0 * (i + 1) as f32, 500.0)))
            .collect();
        // 0.6 * 4 units -> index 2
        let mut rng = ScriptedRandom::constant(0.6);

        try_fire(&mut state, &config, &mut rng, true);
        let shot = &state.projectiles[0];
        assert_eq!(shot.pos, Vec2::new(300.0, 494.0));
        assert_eq!(shot.vel, Vec2::new(0.0, -420.0));
    }

    #[test]
    fn test_straight_shot_needs_no_enemies() {
        let config = GameConfig::default();
        let mut state = ready_state(&config);
        assert!(state.enemies.is_empty());
        let mut rng = ScriptedRandom::constant(0.3);
        assert!(try_fire(&mut state, &config, &mut rng, true).is_some());
    }

    #[test]
    fn test_homing_needs_enemy() {
        let config = homing();
        let mut state = ready_state(&config);
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(try_fire(&mut state, &config, &mut rng, false), None);
        assert_eq!(state.last_shot, 0.0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_no_units_no_shot() {
        let config = GameConfig::default();
        let mut state = ready_state(&config);
        state.units.clear();
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(try_fire(&mut state, &config, &mut rng, true), None);
    }

    #[test]
    fn test_homing_aims_at_nearest() {
        let config = homing();
        let mut state = ready_state(&config);
        state.units = vec![Unit::new(0, Vec2::new(300.0, 500.0))];
        state.center.pos = Vec2::new(300.0, 500.0);
        state.insert_enemy(Vec2::new(300.0, 100.0), Vec2::ZERO, 1);
        state.insert_enemy(Vec2::new(600.0, 900.0), Vec2::ZERO, 1);
        state.insert_enemy(Vec2::new(600.0, 100.0), Vec2::ZERO, 1);
        state.enemies[2].pos = Vec2::new(330.0, 540.0); // nearest: 3-4-5 from shooter

        let mut rng = ScriptedRandom::constant(0.0);
        try_fire(&mut state, &config, &mut rng, false);
        let shot = &state.projectiles[0];
        assert_eq!(shot.pos, Vec2::new(300.0, 500.0));
        assert!((shot.vel - Vec2::new(0.6, 0.8) * 420.0).length() < 1e-3);
    }

    #[test]
    fn test_homing_zero_distance_falls_back_up() {
        let config = homing();
        let mut state = ready_state(&config);
        let p = Vec2::new(300.0, 500.0);
        state.units = vec![Unit::new(0, p)];
        state.center.pos = p;
        state.insert_enemy(p, Vec2::ZERO, 1);

        let mut rng = ScriptedRandom::constant(0.0);
        try_fire(&mut state, &config, &mut rng, false);
        assert_eq!(state.projectiles[0].vel, Vec2::new(0.0, -420.0));
    }

    #[test]
    fn test_fire_emits_event() {
        let config = GameConfig::default();
        let mut state = ready_state(&config);
        let mut rng = ScriptedRandom::constant(0.0);
        let id = try_fire(&mut state, &config, &mut rng, true).expect("fires");
        assert_eq!(state.events, vec![GameEvent::ShotFired { projectile_id: id }]);
    }
}
