//! Game state and core simulation types
//!
//! Everything a run needs between ticks lives in [`GameState`]. The state is
//! plain data; the systems in the sibling modules mutate it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::STARTING_HEALTH;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended (terminal, never left)
    GameOver,
}

/// Things that happened during the last tick, for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { projectile_id: u32 },
    EnemySpawned { enemy_id: u32 },
    EnemyKilled { enemy_id: u32, pos: Vec2 },
    /// Enemy left the bottom of the playfield (no penalty)
    EnemyEscaped { enemy_id: u32 },
    /// One enemy/unit overlap; each costs one health
    SquadHit { enemy_id: u32, index: u32 },
    UnitDown { index: u32, pos: Vec2 },
    WaveAdvanced { wave: u32 },
    GameOver { score: u64, wave: u32 },
}

/// A squad member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Formation slot index, fixed for the unit's lifetime
    pub index: u32,
    pub pos: Vec2,
    /// Struck by an enemy this tick; removed during collision resolution
    #[serde(default)]
    pub down: bool,
}

impl Unit {
    pub fn new(index: u32, pos: Vec2) -> Self {
        Self {
            index,
            pos,
            down: false,
        }
    }
}

/// A descending enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub hp: u32,
    #[serde(default)]
    pub dead: bool,
}

/// A projectile fired by the squad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    #[serde(default)]
    pub hit: bool,
}

/// The point the player steers; formation offsets are relative to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquadCenter {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Elapsed simulation time (seconds)
    pub time: f64,
    /// Time of the last shot
    pub last_shot: f64,
    /// Time of the last enemy spawn
    pub last_spawn: f64,
    pub score: u64,
    /// Difficulty tier, starts at 1
    pub wave: u32,
    pub health: u8,
    pub phase: GamePhase,
    pub center: SquadCenter,
    /// Alive units (ordered by formation index)
    pub units: Vec<Unit>,
    /// Active enemies (ordered by id)
    pub enemies: Vec<Enemy>,
    /// Active projectiles (ordered by id)
    pub projectiles: Vec<Projectile>,
    /// Events from the most recent tick. Once the run is over `tick` stops
    /// clearing this, so it keeps the final tick's events; read events through
    /// `Simulation::step`, which returns nothing for a finished run.
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh run: full health, wave 1, every unit stacked on the squad center
    pub fn new(config: &GameConfig) -> Self {
        let start = config.center_start();
        let units = (0..config.unit_count).map(|i| Unit::new(i, start)).collect();

        Self {
            time: 0.0,
            last_shot: 0.0,
            last_spawn: 0.0,
            score: 0,
            wave: 1,
            health: STARTING_HEALTH,
            phase: GamePhase::Running,
            center: SquadCenter {
                pos: start,
                vel: Vec2::ZERO,
            },
            units,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Seconds since the last shot
    pub fn since_last_shot(&self) -> f64 {
        self.time - self.last_shot
    }

    /// Seconds since the last spawn
    pub fn since_last_spawn(&self) -> f64 {
        self.time - self.last_spawn
    }

    /// Place an enemy directly (scenario setup and tests)
    pub fn insert_enemy(&mut self, pos: Vec2, vel: Vec2, hp: u32) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            pos,
            vel,
            hp,
            dead: false,
        });
        id
    }

    /// Place a projectile directly (scenario setup and tests)
    pub fn insert_projectile(&mut self, pos: Vec2, vel: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos,
            vel,
            hit: false,
        });
        id
    }
}
