//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Injected RNG only
//! - Stable iteration order (insertion order, ids ascending)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod combat;
pub mod formation;
pub mod kinematics;
pub mod rng;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{CollisionReport, resolve_collisions};
pub use combat::{nearest_enemy, try_fire};
pub use formation::{formation_offset, formation_target, steer_center, update_units};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use snapshot::Snapshot;
pub use spawner::{enemy_hp, enemy_speed, spawn_interval, try_spawn};
pub use state::{Enemy, GameEvent, GamePhase, GameState, Projectile, SquadCenter, Unit};
pub use tick::{Simulation, TickInput, check_game_over, tick};
