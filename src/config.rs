use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_MACHINE_PATH: &str = "config/machine.toml";

/// Configuration for the headless auto-clicker demo.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Seed for the deterministic demo scene.
    pub world_seed: u64,
    /// Number of ticks to simulate.
    pub ticks: u64,
    /// Speed setting (0 = slowest, 8 = every tick).
    pub speed_index: usize,
    /// Right-click mode (false = attack mode).
    pub right_clicking: bool,
    /// Direction the machine clicks in.
    pub direction: String,
    /// What the machine holds: "none", "sword", "planks", or "food".
    pub held: String,
    /// Number of mobs scattered around the machine.
    pub mob_count: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            world_seed: 1,
            ticks: 200,
            speed_index: 4,
            right_clicking: true,
            direction: "east".to_string(),
            held: "none".to_string(),
            mob_count: 6,
        }
    }
}

impl MachineConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_MACHINE_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on
    /// errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<MachineConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    MachineConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_MACHINE_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                MachineConfig::default()
            }
        }
    }
}
