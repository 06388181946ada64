//! Integration and out-of-bounds culling

use super::state::{GameEvent, GameState};
use crate::config::GameConfig;
use crate::consts::{ENEMY_CULL_MARGIN, PROJECTILE_CULL_MARGIN};

/// Advance projectiles and enemies by `velocity * dt`
pub fn advance(state: &mut GameState, dt: f32) {
    for projectile in &mut state.projectiles {
        projectile.pos += projectile.vel * dt;
    }
    for enemy in &mut state.enemies {
        enemy.pos += enemy.vel * dt;
    }
}

/// Drop projectiles outside the padded playfield and enemies that slipped past
/// the bottom edge. Escaped enemies cost nothing.
pub fn cull(state: &mut GameState, config: &GameConfig) {
    let m = PROJECTILE_CULL_MARGIN;
    let (w, h) = (config.playfield_width, config.playfield_height);
    let horizontal = config.targeting.culls_horizontally();

    state.projectiles.retain(|p| {
        let in_y = p.pos.y > -m && p.pos.y < h + m;
        let in_x = !horizontal || (p.pos.x > -m && p.pos.x < w + m);
        in_x && in_y
    });

    let floor = h + ENEMY_CULL_MARGIN;
    let events = &mut state.events;
    state.enemies.retain(|e| {
        let inside = e.pos.y < floor;
        if !inside {
            events.push(GameEvent::EnemyEscaped { enemy_id: e.id });
        }
        inside
    });
}
