//! TOML configuration for the demo host and the lantern effect
//!
//! Every field has a default, so an empty file (or no file) is valid.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::effect::LanternEffect;
use crate::error::LanternError;
use crate::light::{DistanceTable, Jitter};
use crate::palette::PaletteRamp;

#[derive(Clone, Debug, Deserialize, Default)]
#[serde(default)]
pub struct LanternConfig {
    pub light: LightConfig,
    pub screen: ScreenConfig,
    pub tiles: TileConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub rings: u16,
    pub band_width: u16,
    pub center_radius: u16,
    pub breathing: bool,
    pub breathing_interval_ms: u64,
    pub jitter: bool,
    /// Fixed seed for reproducible dithering
    pub seed: Option<u64>,
    /// Custom remap image, one row of 16 hex digits per level
    pub ramp: Option<String>,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            rings: 4,
            band_width: 13,
            center_radius: 1,
            breathing: true,
            breathing_interval_ms: 150,
            jitter: true,
            seed: None,
            ramp: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: usize,
    pub height: usize,
    /// Window pixels per screen pixel
    pub scale: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self { width: 160, height: 120, scale: 4 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self { width: 16, height: 16 }
    }
}

impl LanternConfig {
    pub fn load(path: &Path) -> Result<Self, LanternError> {
        let text = std::fs::read_to_string(path).map_err(|source| LanternError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, LanternError> {
        let cfg: LanternConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), LanternError> {
        let light = &self.light;
        // Breathing grows the core by one pixel
        let widest = DistanceTable::reach_for(
            light.rings,
            light.band_width,
            light.center_radius.saturating_add(1),
        );
        let checks = [
            (light.rings == 0, "light.rings must be at least 1"),
            (light.band_width == 0, "light.band_width must be at least 1"),
            (self.screen.width == 0 || self.screen.height == 0, "screen size must be non-zero"),
            (self.screen.scale == 0, "screen.scale must be at least 1"),
            (self.tiles.width <= 0 || self.tiles.height <= 0, "tile size must be positive"),
            (
                widest > DistanceTable::MAX_REACH,
                "light reach (center_radius + 1 + rings * band_width) must not exceed 65535",
            ),
        ];
        match checks.iter().find(|(bad, _)| *bad) {
            Some((_, msg)) => Err(LanternError::InvalidConfig(msg.to_string())),
            None => Ok(()),
        }
    }

    pub fn ramp(&self) -> Result<PaletteRamp, LanternError> {
        match &self.light.ramp {
            Some(image) => PaletteRamp::from_image(image),
            None => PaletteRamp::arcade(),
        }
    }

    pub fn breathing_interval(&self) -> Duration {
        Duration::from_millis(self.light.breathing_interval_ms)
    }

    /// Build the lantern described by `[light]`.
    pub fn build_lantern(&self) -> Result<LanternEffect, LanternError> {
        self.validate()?;
        let ramp = Arc::new(self.ramp()?);
        log::debug!("palette ramp with {} levels", ramp.len());
        let light = &self.light;
        let mut lantern = LanternEffect::new(ramp, light.rings, light.band_width, light.center_radius);
        lantern.set_breathing_enabled(light.breathing);
        lantern.set_jitter(match (light.jitter, light.seed) {
            (false, _) => Jitter::Off,
            (true, Some(seed)) => Jitter::seeded(seed),
            (true, None) => Jitter::from_entropy(),
        });
        Ok(lantern)
    }
}
