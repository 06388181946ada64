//! Simulation tick
//!
//! Core game loop that advances a run by one frame. Order within a tick:
//! steer, formation, fire, spawn, integrate and cull, collide, terminal check.

use glam::Vec2;

use super::collision::{CollisionReport, resolve_collisions};
use super::combat::try_fire;
use super::formation::{steer_center, update_units};
use super::kinematics::{advance, cull};
use super::rng::{RandomSource, SeededRandom};
use super::snapshot::Snapshot;
use super::spawner::try_spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::clamp_frame_dt;
use crate::config::GameConfig;
use crate::error::ConfigResult;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Movement intent, each axis in {-1, 0, 1} (normalized by the core)
    pub movement: Vec2,
    /// Fire button held
    pub fire_held: bool,
}

impl TickInput {
    /// Build from held directional keys
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool, fire: bool) -> Self {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Self {
            movement: Vec2::new(axis(left, right), axis(up, down)),
            fire_held: fire,
        }
    }
}

/// Move the run to `GameOver` if the squad is out of health or units.
///
/// Returns true on the tick the transition happens.
pub fn check_game_over(state: &mut GameState) -> bool {
    if state.phase == GamePhase::GameOver {
        return false;
    }
    if state.health == 0 || state.units.is_empty() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            score: state.score,
            wave: state.wave,
        });
        log::info!(
            "Game over at {:.2}s: score {}, wave {}",
            state.time,
            state.score,
            state.wave
        );
        return true;
    }
    false
}

/// Advance the game state by one frame.
///
/// `dt` is clamped into `[0, MAX_FRAME_DT]`. A finished run is left untouched,
/// including `state.events`, which then still holds the final tick's events.
/// Callers that consume events should go through [`Simulation::step`].
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    input: &TickInput,
    dt: f32,
) -> CollisionReport {
    if state.is_game_over() {
        return CollisionReport::default();
    }

    let dt = clamp_frame_dt(dt);
    state.events.clear();
    state.time += f64::from(dt);

    steer_center(&mut state.center, input.movement, config, dt);
    update_units(&mut state.units, state.center.pos, config.formation_spacing, dt);

    try_fire(state, config, rng, input.fire_held);
    try_spawn(state, config, rng);

    advance(state, dt);
    cull(state, config);

    let report = resolve_collisions(state, config);
    check_game_over(state);
    report
}

/// Owns one run: configuration, state and random source
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = SeededRandom> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl Simulation<SeededRandom> {
    /// Start a seeded run. Fails if the configuration is invalid.
    pub fn new(config: GameConfig, seed: u64) -> ConfigResult<Self> {
        Self::with_rng(config, SeededRandom::new(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Start a run with a caller-supplied random source
    pub fn with_rng(config: GameConfig, rng: R) -> ConfigResult<Self> {
        config.validate()?;
        let state = GameState::new(&config);
        log::info!(
            "New run: {} units, {:?} targeting, {:.0}x{:.0} playfield",
            config.unit_count,
            config.targeting,
            config.playfield_width,
            config.playfield_height
        );
        Ok(Self { config, state, rng })
    }

    /// Advance one frame and return the events it produced
    pub fn step(&mut self, dt: f32, input: &TickInput) -> &[GameEvent] {
        if self.state.is_game_over() {
            return &[];
        }
        tick(&mut self.state, &self.config, &mut self.rng, input, dt);
        &self.state.events
    }

    /// Throw the current run away and start over with the same configuration
    pub fn restart(&mut self) {
        self.state = GameState::new(&self.config);
        log::info!("Run restarted");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scenario setup
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}
