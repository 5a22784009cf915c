use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{DeckError, DeckResult};

/// Timer cadences and field tuning, persisted as JSON at
/// `~/.aether/config.json`. Unknown or missing fields fall back to the
/// defaults, so old config files keep loading after upgrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Particles simulated in the backdrop field.
    pub particle_count: usize,

    /// Distance under which two particles get a connection line.
    pub link_distance: f32,

    /// Milliseconds per typed character in the terminal panel.
    pub type_interval_ms: u64,

    /// Idle gap between two terminal lines.
    pub line_pause_ms: u64,

    /// Frame tick driving the particle field and the pipeline clock.
    pub frame_interval_ms: u64,

    /// Period of the cosmetic telemetry refresh.
    pub telemetry_interval_ms: u64,

    /// Draws the particle backdrop when true.
    pub field_enabled: bool,

    /// Fixed seed for the particle layout; None draws a fresh one per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 60,
            link_distance: 100.0,
            type_interval_ms: 5,
            line_pause_ms: 50,
            frame_interval_ms: 16,
            telemetry_interval_ms: 2000,
            field_enabled: true,
            seed: None,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DeckError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config.sanitized())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DeckError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".aether").join("config.json")
    }

    pub fn load_or_default() -> DeckResult<Self> {
        let config_path = Self::get_config_path();

        // Try to load existing config
        if config_path.exists() {
            if let Ok(config) = Self::load_from_file(&config_path) {
                return Ok(config);
            }
        }

        // Return default config if loading fails
        Ok(Self::default())
    }

    pub fn save(&self) -> Result<(), DeckError> {
        self.save_to_file(Self::get_config_path())
    }

    /// Replaces values the deck cannot run with by their defaults. A zero
    /// timer period would stall its subscription and an empty or degenerate
    /// field has nothing to draw.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.particle_count == 0 {
            self.particle_count = defaults.particle_count;
        }
        if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
            self.link_distance = defaults.link_distance;
        }
        if self.type_interval_ms == 0 {
            self.type_interval_ms = defaults.type_interval_ms;
        }
        if self.frame_interval_ms == 0 {
            self.frame_interval_ms = defaults.frame_interval_ms;
        }
        if self.telemetry_interval_ms == 0 {
            self.telemetry_interval_ms = defaults.telemetry_interval_ms;
        }
        self
    }

    /// Ticks of the type timer covered by one inter-line pause.
    pub fn cooldown_ticks(&self) -> u32 {
        (self.line_pause_ms / self.type_interval_ms.max(1)) as u32
    }
}
