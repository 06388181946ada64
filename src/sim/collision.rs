//! Collision resolution and scoring
//!
//! Two phases, each flag-then-filter: projectiles against enemies, then the
//! surviving enemies against units. Nothing is removed while a pass iterates,
//! so every pair in a pass is tested against the same snapshot.

use super::state::{GameEvent, GameState};
use crate::circles_intersect;
use crate::config::GameConfig;
use crate::consts::{KILL_SCORE, WAVE_SCORE_THRESHOLD};

/// What collision resolution changed this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub kills: u32,
    /// Enemy/unit overlaps, one health each
    pub squad_hits: u32,
    pub units_lost: u32,
    pub waves_gained: u32,
}

/// Number of wave thresholds crossed when the score moves from `before` to `after`
pub fn thresholds_crossed(before: u64, after: u64) -> u32 {
    (after / WAVE_SCORE_THRESHOLD).saturating_sub(before / WAVE_SCORE_THRESHOLD) as u32
}

/// Award a kill: bump score and advance the wave on each threshold crossing
fn award_kill(state: &mut GameState, report: &mut CollisionReport) {
    let before = state.score;
    state.score += KILL_SCORE;
    report.kills += 1;

    let crossed = thresholds_crossed(before, state.score);
    if crossed > 0 {
        state.wave += crossed;
        report.waves_gained += crossed;
        state.events.push(GameEvent::WaveAdvanced { wave: state.wave });
        log::info!("Wave {} reached at score {}", state.wave, state.score);
    }
}

/// Projectiles against enemies. A projectile is consumed by the first enemy it
/// overlaps; an enemy already killed this tick still stops it but takes no
/// further damage and scores nothing.
fn resolve_projectile_hits(state: &mut GameState, config: &GameConfig, report: &mut CollisionReport) {
    let mut killed = Vec::new();

    for projectile in &mut state.projectiles {
        let target = state.enemies.iter_mut().find(|enemy| {
            circles_intersect(
                projectile.pos,
                config.projectile_radius,
                enemy.pos,
                config.enemy_radius,
            )
        });

        let Some(enemy) = target else { continue };
        projectile.hit = true;
        if enemy.dead {
            continue;
        }
        enemy.hp = enemy.hp.saturating_sub(1);
        if enemy.hp == 0 {
            enemy.dead = true;
            killed.push((enemy.id, enemy.pos));
        }
    }

    for (enemy_id, pos) in killed {
        state.events.push(GameEvent::EnemyKilled { enemy_id, pos });
        award_kill(state, report);
    }

    state.projectiles.retain(|p| !p.hit);
    state.enemies.retain(|e| !e.dead);
}

/// Enemies against units. Every overlapping pair costs one health, so an
/// enemy touching two units downs both, and two enemies on one unit both die.
fn resolve_unit_hits(state: &mut GameState, config: &GameConfig, report: &mut CollisionReport) {
    for enemy in &mut state.enemies {
        for unit in &mut state.units {
            if !circles_intersect(enemy.pos, config.enemy_radius, unit.pos, config.unit_radius) {
                continue;
            }

            enemy.dead = true;
            state.health = state.health.saturating_sub(1);
            report.squad_hits += 1;
            state.events.push(GameEvent::SquadHit {
                enemy_id: enemy.id,
                index: unit.index,
            });

            if !unit.down {
                unit.down = true;
                report.units_lost += 1;
                state.events.push(GameEvent::UnitDown {
                    index: unit.index,
                    pos: unit.pos,
                });
            }
        }
    }

    state.enemies.retain(|e| !e.dead);
    state.units.retain(|u| !u.down);
}

/// Resolve every overlap for this tick
pub fn resolve_collisions(state: &mut GameState, config: &GameConfig) -> CollisionReport {
    let mut report = CollisionReport::default();
    resolve_projectile_hits(state, config, &mut report);
    resolve_unit_hits(state, config, &mut report);
    report
}
