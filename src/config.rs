//! Game configuration
//!
//! Supplied once when a run starts and never mutated afterwards. Loaded either
//! from defaults or from JSON, and always validated before a simulation is built.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ENEMY_SPAWN_MARGIN_X;
use crate::error::{ConfigError, ConfigResult, require_non_negative, require_positive};

/// How the squad picks a firing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TargetingMode {
    /// Aim at the enemy closest to the squad center
    NearestToCenter,
    /// Fire straight up regardless of enemies
    #[default]
    StraightUp,
}

impl TargetingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetingMode::NearestToCenter => "NearestToCenter",
            TargetingMode::StraightUp => "StraightUp",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nearest" | "nearesttocenter" | "homing" => Some(TargetingMode::NearestToCenter),
            "straight" | "straightup" => Some(TargetingMode::StraightUp),
            _ => None,
        }
    }

    /// Whether projectiles are culled on both axes (aimed shots travel sideways)
    pub fn culls_horizontally(&self) -> bool {
        match self {
            TargetingMode::NearestToCenter => true,
            TargetingMode::StraightUp => false,
        }
    }
}

/// When the squad pulls the trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TriggerMode {
    /// Fire only while the fire input is held
    #[default]
    Held,
    /// Fire every time the cooldown elapses
    Auto,
}

impl TriggerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerMode::Held => "Held",
            TriggerMode::Auto => "Auto",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "held" | "hold" => Some(TriggerMode::Held),
            "auto" => Some(TriggerMode::Auto),
            _ => None,
        }
    }
}

/// Tunable constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Squad ===
    /// Units in the squad at the start of a run
    pub unit_count: u32,
    /// Pixels per formation unit (ring radius multiplier)
    pub formation_spacing: f32,
    /// Squad center movement speed (pixels/s)
    pub unit_speed: f32,

    // === Radii ===
    pub unit_radius: f32,
    pub enemy_radius: f32,
    pub projectile_radius: f32,

    // === Combat ===
    /// Projectile speed (pixels/s)
    pub projectile_speed: f32,
    /// Minimum time between shots (seconds)
    pub fire_delay: f32,
    pub targeting: TargetingMode,
    pub trigger: TriggerMode,

    // === Enemies ===
    /// Enemy descent speed at wave 0, before the wave bonus (pixels/s)
    pub enemy_base_speed: f32,
    /// Base time between spawns before the wave reduction (seconds)
    pub spawn_delay: f32,

    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Squad center keeps this far from the left and right edges
    pub center_margin_x: f32,
    /// Squad center keeps this far from the top edge
    pub center_margin_top: f32,
    /// Squad center keeps this far from the bottom edge
    pub center_margin_bottom: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            unit_count: 10,
            formation_spacing: 26.0,
            unit_speed: 220.0,

            unit_radius: 10.0,
            enemy_radius: 14.0,
            projectile_radius: 4.0,

            projectile_speed: 420.0,
            fire_delay: 0.22,
            targeting: TargetingMode::StraightUp,
            trigger: TriggerMode::Held,

            enemy_base_speed: 90.0,
            spawn_delay: 1.1,

            playfield_width: 960.0,
            playfield_height: 720.0,
            center_margin_x: 80.0,
            center_margin_top: 200.0,
            center_margin_bottom: 80.0,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded config: {} units, {:?} targeting, {:?} trigger",
            config.unit_count,
            config.targeting,
            config.trigger
        );
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject any configuration the simulation cannot run sensibly with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.unit_count == 0 {
            return Err(ConfigError::NoUnits);
        }

        require_positive("formation_spacing", self.formation_spacing)?;
        require_non_negative("unit_speed", self.unit_speed)?;

        require_positive("unit_radius", self.unit_radius)?;
        require_positive("enemy_radius", self.enemy_radius)?;
        require_positive("projectile_radius", self.projectile_radius)?;

        require_positive("projectile_speed", self.projectile_speed)?;
        require_non_negative("fire_delay", self.fire_delay)?;
        require_non_negative("enemy_base_speed", self.enemy_base_speed)?;
        require_non_negative("spawn_delay", self.spawn_delay)?;

        require_positive("playfield_width", self.playfield_width)?;
        require_positive("playfield_height", self.playfield_height)?;
        require_non_negative("center_margin_x", self.center_margin_x)?;
        require_non_negative("center_margin_top", self.center_margin_top)?;
        require_non_negative("center_margin_bottom", self.center_margin_bottom)?;

        let fits_center = self.playfield_width > 2.0 * self.center_margin_x
            && self.playfield_height > self.center_margin_top + self.center_margin_bottom;
        let fits_spawns = self.playfield_width > 2.0 * ENEMY_SPAWN_MARGIN_X;
        if !fits_center || !fits_spawns {
            return Err(ConfigError::PlayfieldTooSmall {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }

        Ok(())
    }

    /// Top-left corner of the region the squad center may occupy
    pub fn center_min(&self) -> Vec2 {
        Vec2::new(self.center_margin_x, self.center_margin_top)
    }

    /// Bottom-right corner of the region the squad center may occupy
    pub fn center_max(&self) -> Vec2 {
        Vec2::new(
            self.playfield_width - self.center_margin_x,
            self.playfield_height - self.center_margin_bottom,
        )
    }

    /// Squad center at the start of a run: horizontally centered, low on the field
    pub fn center_start(&self) -> Vec2 {
        let start = Vec2::new(self.playfield_width * 0.5, self.playfield_height * 0.72);
        start.clamp(self.center_min(), self.center_max())
    }
}
