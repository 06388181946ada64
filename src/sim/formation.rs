//! Squad formation and steering
//!
//! Units sit in concentric rings of six around the squad center. Odd rings are
//! rotated half a slot so neighbouring rings do not line up radially.

use std::f32::consts::{FRAC_PI_3, FRAC_PI_6};

use glam::Vec2;

use super::state::{SquadCenter, Unit};
use crate::clamp_to_rect;
use crate::config::GameConfig;
use crate::consts::{FORMATION_SMOOTHING, RING_RADIUS_STEP, RING_SLOTS};

/// Formation offset for a slot index, in spacing units.
///
/// Depends on the index only. A unit keeps its index for life, so losses leave
/// gaps in the rings instead of reshuffling survivors.
pub fn formation_offset(index: u32) -> Vec2 {
    let ring = index / RING_SLOTS;
    let slot = index % RING_SLOTS;

    let radius = 1.0 + ring as f32 * RING_RADIUS_STEP;
    let stagger = if ring % 2 == 0 { 0.0 } else { FRAC_PI_6 };
    let angle = slot as f32 * FRAC_PI_3 + stagger;

    Vec2::from_angle(angle) * radius
}

/// Formation offset for `index` in a squad of `_squad_size`.
///
/// The squad size is accepted for callers that think in terms of the whole
/// squad; the layout ignores it.
pub fn formation_target(index: u32, _squad_size: usize) -> Vec2 {
    formation_offset(index)
}

/// World-space slot position for a unit
pub fn slot_position(center: Vec2, index: u32, spacing: f32) -> Vec2 {
    center + formation_offset(index) * spacing
}

/// Move every unit toward its slot with exponential smoothing
pub fn update_units(units: &mut [Unit], center: Vec2, spacing: f32, dt: f32) {
    for unit in units.iter_mut() {
        let target = slot_position(center, unit.index, spacing);
        unit.pos += (target - unit.pos) * FORMATION_SMOOTHING * dt;
    }
}

/// Normalize a movement intent so diagonals are not faster than straight moves
pub fn normalize_intent(intent: Vec2) -> Vec2 {
    let len = intent.length();
    if len > 0.0 && len.is_finite() {
        intent / len
    } else {
        Vec2::ZERO
    }
}

/// Drive the squad center from movement intent and clamp it to the playfield
pub fn steer_center(center: &mut SquadCenter, intent: Vec2, config: &GameConfig, dt: f32) {
    center.vel = normalize_intent(intent) * config.unit_speed;
    center.pos = clamp_to_rect(
        center.pos + center.vel * dt,
        config.center_min(),
        config.center_max(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_first_ring_layout() {
        // Slot 0 sits to the right at radius 1
        assert!((formation_offset(0) - Vec2::new(1.0, 0.0)).length() < EPS);
        // Slot 3 sits opposite
        assert!((formation_offset(3) - Vec2::new(-1.0, 0.0)).length() < EPS);
        for i in 0..6 {
            assert!((formation_offset(i).length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_second_ring_is_staggered() {
        let offset = formation_offset(6);
        assert!((offset.length() - 1.9).abs() < EPS);
        let angle = offset.y.atan2(offset.x);
        assert!((angle - FRAC_PI_6).abs() < EPS);
    }

    #[test]
    fn test_third_ring_not_staggered() {
        let offset = formation_offset(12);
        assert!((offset - Vec2::new(2.8, 0.0)).length() < EPS);
    }

    #[test]
    fn test_target_ignores_squad_size() {
        for i in 0..20 {
            let expected = formation_target(i, 1);
            for n in [2, 7, 20, 100] {
                assert_eq!(formation_target(i, n), expected);
            }
        }
    }

    #[test]
    fn test_target_ignores_other_units() {
        let center = Vec2::new(400.0, 500.0);
        let mut lone = vec![Unit::new(4, center)];
        let mut crowd = vec![
            Unit::new(0, Vec2::new(10.0, 10.0)),
            Unit::new(4, center),
            Unit::new(9, Vec2::new(900.0, 50.0)),
        ];
        update_units(&mut lone, center, 26.0, 0.016);
        update_units(&mut crowd, center, 26.0, 0.016);
        assert_eq!(lone[0].pos, crowd[1].pos);
    }

    #[test]
    fn test_units_converge_on_slots() {
        let center = Vec2::new(300.0, 300.0);
        let mut units: Vec<Unit> = (0..8).map(|i| Unit::new(i, center)).collect();
        for _ in 0..200 {
            update_units(&mut units, center, 26.0, 0.02);
        }
        for unit in &units {
            let slot = slot_position(center, unit.index, 26.0);
            assert!((unit.pos - slot).length() < 0.01);
        }
    }

    #[test]
    fn test_zero_dt_does_not_move_units() {
        let mut units = vec![Unit::new(2, Vec2::new(5.0, 5.0))];
        update_units(&mut units, Vec2::new(100.0, 100.0), 26.0, 0.0);
        assert_eq!(units[0].pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_normalize_intent_diagonal() {
        let n = normalize_intent(Vec2::new(1.0, -1.0));
        assert!((n.length() - 1.0).abs() < EPS);
        assert_eq!(normalize_intent(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(normalize_intent(Vec2::new(-1.0, 0.0)), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_steer_center_clamps() {
        let config = GameConfig::default();
        let mut center = SquadCenter {
            pos: config.center_start(),
            vel: Vec2::ZERO,
        };
        for _ in 0..200 {
            steer_center(&mut center, Vec2::new(-1.0, 1.0), &config, 0.05);
        }
        assert_eq!(center.pos, Vec2::new(80.0, 640.0));
        assert!((center.vel.length() - config.unit_speed).abs() < 1e-3);
    }

    #[test]
    fn test_steer_center_idle() {
        let config = GameConfig::default();
        let start = config.center_start();
        let mut center = SquadCenter {
            pos: start,
            vel: Vec2::new(5.0, 5.0),
        };
        steer_center(&mut center, Vec2::ZERO, &config, 0.05);
        assert_eq!(center.pos, start);
        assert_eq!(center.vel, Vec2::ZERO);
    }
}
