//! Demo autopilot
//!
//! Produces input the way a player would: line the squad up under the most
//! pressing enemy and keep the trigger down. Used by the headless runner and
//! for soak tests; the simulation never calls it itself.

use glam::Vec2;

use super::state::GameState;
use super::tick::TickInput;

/// Horizontal distance treated as "lined up"
const DEAD_ZONE: f32 = 6.0;

/// Input for the current state
pub fn autopilot_input(state: &GameState, playfield_width: f32) -> TickInput {
    let center = state.center.pos;

    // Lowest enemy still above the squad is the next one to arrive
    let threat = state
        .enemies
        .iter()
        .filter(|e| e.pos.y < center.y)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let goal_x = threat.map(|e| e.pos.x).unwrap_or(playfield_width * 0.5);
    let dx = goal_x - center.x;
    let steer = if dx.abs() <= DEAD_ZONE { 0.0 } else { dx.signum() };

    TickInput {
        movement: Vec2::new(steer, 0.0),
        fire_held: true,
    }
}
