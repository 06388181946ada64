//! Headless runner
//!
//! Plays one seeded run with the demo autopilot and prints the final snapshot
//! as JSON. Useful for balance checks and for reproducing a run from its seed.
//!
//! Usage: `squad-volley [seed] [max_seconds] [straight|homing] [held|auto] [config.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is driven by the host page on the web
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use squad_volley::sim::{GameEvent, Simulation, autopilot_input};
    use squad_volley::{ConfigError, GameConfig, TargetingMode, TriggerMode};

    /// Fixed frame step for headless runs (60 Hz)
    const FRAME_DT: f32 = 1.0 / 60.0;

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let args: Vec<String> = std::env::args().skip(1).collect();

        let seed = args
            .first()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0)
            });
        let max_seconds = args
            .get(1)
            .and_then(|s| s.parse::<f32>().ok())
            .unwrap_or(120.0);

        let mut config = match args.get(4) {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                GameConfig::from_json(&json)?
            }
            None => GameConfig::default(),
        };
        if let Some(mode) = args.get(2) {
            config.targeting = TargetingMode::from_str(mode).ok_or_else(|| {
                ConfigError::Parse(format!("unknown targeting mode '{}'", mode))
            })?;
        }
        if let Some(mode) = args.get(3) {
            config.trigger = TriggerMode::from_str(mode).ok_or_else(|| {
                ConfigError::Parse(format!("unknown trigger mode '{}'", mode))
            })?;
        }

        log::info!(
            "Squad Volley (headless) starting with seed {} ({} targeting, {} trigger)",
            seed,
            config.targeting.as_str(),
            config.trigger.as_str()
        );
        let width = config.playfield_width;
        let mut sim = Simulation::new(config, seed)?;

        let max_frames = (max_seconds / FRAME_DT).ceil() as u64;
        let mut kills = 0u32;
        let mut frames = 0u64;
        while frames < max_frames && !sim.is_game_over() {
            let input = autopilot_input(sim.state(), width);
            for event in sim.step(FRAME_DT, &input) {
                match event {
                    GameEvent::EnemyKilled { .. } => kills += 1,
                    GameEvent::UnitDown { index, .. } => log::info!("Unit {} down", index),
                    _ => {}
                }
            }
            frames += 1;
        }

        let snapshot = sim.snapshot();
        log::info!(
            "Finished after {:.1}s: score {}, wave {}, health {}, {} kills, {} units left",
            sim.state().time,
            snapshot.score,
            snapshot.wave,
            snapshot.health,
            kills,
            snapshot.squad_size()
        );

        let json = serde_json::to_string_pretty(&snapshot)?;
        println!("{}", json);
        Ok(())
    }
}
