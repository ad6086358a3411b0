// settings.rs - Startup settings from a TOML file and the command line

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use conway::SceneId;
use egui::Color32;
use serde::Deserialize;

use crate::cli::Cli;

// Bounds of the speed input; startup values outside them are rejected.
pub const MIN_SPEED_MS: u64 = 1;
pub const MAX_SPEED_MS: u64 = 60_000;

pub const SPEED_RANGE: RangeInclusive<u64> = MIN_SPEED_MS..=MAX_SPEED_MS;

/// Startup settings. Read once; nothing is written back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub speed_ms: u64,
    pub initial_scene: Option<SceneId>,
    pub cell_size: f32,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_ms: 1000,
            initial_scene: None,
            cell_size: 22.0,
            live_color: [0, 200, 0],
            dead_color: [40, 40, 40],
        }
    }
}

impl Settings {
    /// File values (if `--config` was given) overridden by explicit flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(speed) = cli.speed {
            settings.speed_ms = speed;
        }
        if let Some(scene) = cli.scene {
            settings.initial_scene = Some(scene);
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            SPEED_RANGE.contains(&self.speed_ms),
            "speed_ms must be between {MIN_SPEED_MS} and {MAX_SPEED_MS} milliseconds, got {}",
            self.speed_ms
        );
        ensure!(
            self.cell_size.is_finite() && self.cell_size >= 4.0,
            "cell_size must be at least 4 points, got {}",
            self.cell_size
        );
        Ok(())
    }

    pub fn live_color(&self) -> Color32 {
        let [r, g, b] = self.live_color;
        Color32::from_rgb(r, g, b)
    }

    pub fn dead_color(&self) -> Color32 {
        let [r, g, b] = self.dead_color;
        Color32::from_rgb(r, g, b)
    }
}
