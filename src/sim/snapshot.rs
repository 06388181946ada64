//! Read-only view of a run for rendering
//!
//! Carries positions and counters only, so a renderer never needs to know how
//! the simulation works. Serializable for renderers on the other side of a
//! process or wasm boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub center: Vec2,
    pub units: Vec<Vec2>,
    pub enemies: Vec<Vec2>,
    pub projectiles: Vec<Vec2>,
    pub score: u64,
    pub wave: u32,
    pub health: u8,
    pub game_over: bool,
    // Drawing hints
    pub playfield: Vec2,
    pub unit_radius: f32,
    pub enemy_radius: f32,
    pub projectile_radius: f32,
}

impl Snapshot {
    pub fn capture(state: &GameState, config: &GameConfig) -> Self {
        Self {
            center: state.center.pos,
            units: state.units.iter().map(|u| u.pos).collect(),
            enemies: state.enemies.iter().map(|e| e.pos).collect(),
            projectiles: state.projectiles.iter().map(|p| p.pos).collect(),
            score: state.score,
            wave: state.wave,
            health: state.health,
            game_over: state.is_game_over(),
            playfield: Vec2::new(config.playfield_width, config.playfield_height),
            unit_radius: config.unit_radius,
            enemy_radius: config.enemy_radius,
            projectile_radius: config.projectile_radius,
        }
    }

    /// Alive squad size (for the HUD)
    pub fn squad_size(&self) -> usize {
        self.units.len()
    }
}
