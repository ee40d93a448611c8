//! Lantern: a single breathing light that follows an anchor

use std::sync::Arc;

use super::BackgroundEffect;
use crate::host::{Camera, Point, Surface, TileGrid};
use crate::light::{self, DistanceTable, Jitter, LightProfile, Occluder};
use crate::palette::PaletteRamp;

pub struct LanternEffect {
    ramp: Arc<PaletteRamp>,
    // Swapped wholesale on reconfiguration, never edited in place
    profiles: Arc<[LightProfile]>,
    rings: u16,
    center_radius: u16,
    breath: usize,
    inhaling: bool,
    breathing: bool,
    anchor: Point,
    running: bool,
    jitter: Jitter,
}

impl LanternEffect {
    /// Panics if `rings` or `band_width` is zero, or if the largest breathing
    /// profile reaches past `DistanceTable::MAX_REACH`.
    pub fn new(ramp: Arc<PaletteRamp>, rings: u16, band_width: u16, center_radius: u16) -> Self {
        let profiles: Arc<[LightProfile]> =
            LightProfile::breathing_set(rings, band_width, center_radius).into();
        let breath = profiles.len() / 2;
        LanternEffect {
            ramp,
            profiles,
            rings,
            center_radius,
            breath,
            inhaling: true,
            breathing: true,
            anchor: Point::default(),
            running: false,
            jitter: Jitter::from_entropy(),
        }
    }

    /// Rebuild every profile with a new band width.
    pub fn set_band_width(&mut self, width: u16) {
        if width == 0 {
            log::warn!("ignoring zero band width");
            return;
        }
        let reach = DistanceTable::reach_for(self.rings, width, self.center_radius.saturating_add(1));
        if reach > DistanceTable::MAX_REACH {
            log::warn!("ignoring band width {}: reach {} is too large", width, reach);
            return;
        }
        self.profiles = LightProfile::breathing_set(self.rings, width, self.center_radius).into();
        self.breath = self.breath.min(self.profiles.len() - 1);
        log::debug!("lantern band width {} (reach {})", width, self.active_profile().reach());
    }

    pub fn band_width(&self) -> u16 {
        self.active_profile().band_width()
    }

    /// With breathing off the light rests at its nominal radius.
    pub fn set_breathing_enabled(&mut self, enabled: bool) {
        self.breathing = enabled;
        if !enabled {
            self.breath = self.profiles.len() / 2;
            self.inhaling = true;
        }
        log::debug!("lantern breathing {}", if enabled { "on" } else { "off" });
    }

    pub fn breathing_enabled(&self) -> bool {
        self.breathing
    }

    pub fn set_jitter(&mut self, jitter: Jitter) {
        self.jitter = jitter;
    }

    pub fn jitter_enabled(&self) -> bool {
        self.jitter.is_enabled()
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn active_profile(&self) -> &LightProfile {
        &self.profiles[self.breath]
    }

    /// Advance the breathing cycle: middle, larger, middle, smaller, ...
    pub fn step_breathing(&mut self) {
        if !self.breathing {
            return;
        }
        let last = self.profiles.len() - 1;
        if self.breath >= last {
            self.inhaling = false;
        } else if self.breath == 0 {
            self.inhaling = true;
        }
        self.breath = if self.inhaling {
            self.breath + 1
        } else {
            self.breath.saturating_sub(1)
        };
    }
}

impl BackgroundEffect for LanternEffect {
    fn start(&mut self, anchor: Point) {
        self.anchor = anchor;
        self.running = true;
        log::info!("lantern started at ({}, {})", anchor.x, anchor.y);
    }

    fn stop(&mut self) {
        self.running = false;
        log::info!("lantern stopped");
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn render(&mut self, camera: &Camera, tiles: Option<&dyn TileGrid>, surface: &mut dyn Surface) {
        if !self.running {
            return;
        }
        let center = camera.to_screen(self.anchor);
        let occluder = tiles.map(|grid| Occluder::new(grid, camera.draw_offset));
        let profile = &self.profiles[self.breath];
        light::apply(profile, &self.ramp, center, occluder.as_ref(), surface, &mut self.jitter);
    }

    fn tick(&mut self) {
        if self.running {
            self.step_breathing();
        }
    }
}
