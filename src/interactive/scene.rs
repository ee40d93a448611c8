//! Demo scene shared by the CPU and GPU viewers

use std::time::Instant;

use crate::config::LanternConfig;
use crate::effect::{BackgroundEffect, LanternEffect};
use crate::error::LanternError;
use crate::host::{Camera, IndexedFrame, IntervalTimer, Point, TileGrid, WallGrid};
use crate::light::Jitter;

/// Sample level: `#` wall, `.` floor
pub const SAMPLE_ROOM: &str = "
    ################
    #..............#
    #..##......#...#
    #..##......#...#
    #..........#...#
    #......#########
    #......#.......#
    #..............#
    #...#####......#
    #..........##..#
    #..........##..#
    ################
";

const FLOOR_ALT: u8 = 11;
const VOID: u8 = 12;
const SPRITE: u8 = 5;

/// Input actions both viewers map their key events onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleRunning,
    ToggleBreathing,
    ToggleJitter,
    WiderBands,
    NarrowerBands,
    ClearWalls,
    Pan(i32, i32),
}

pub struct Scene {
    pub config: LanternConfig,
    pub tiles: WallGrid,
    pub frame: IndexedFrame,
    pub lantern: LanternEffect,
    pub camera: Camera,
    breathing_timer: IntervalTimer,
    last_update: Instant,
}

impl Scene {
    pub fn new(config: LanternConfig) -> Result<Self, LanternError> {
        let mut lantern = config.build_lantern()?;
        let tiles = WallGrid::from_ascii(SAMPLE_ROOM, config.tiles.width, config.tiles.height);
        let frame = IndexedFrame::new(config.screen.width, config.screen.height);
        let breathing_timer = IntervalTimer::new(config.breathing_interval());
        log::debug!("breathing every {:?}", breathing_timer.interval());

        let start = Point::new(3 * config.tiles.width, 2 * config.tiles.height);
        lantern.start(start);

        Ok(Scene {
            config,
            tiles,
            frame,
            lantern,
            camera: Camera::default(),
            breathing_timer,
            last_update: Instant::now(),
        })
    }

    pub fn print_controls(&self) {
        println!("Controls:");
        println!("  Mouse      - Move lantern");
        println!("  Left Click - Toggle wall tile");
        println!("  Space      - Start/stop lantern");
        println!("  B          - Toggle breathing");
        println!("  J          - Toggle edge jitter");
        println!("  +/-        - Band width");
        println!("  Arrows     - Pan camera");
        println!("  C          - Clear walls");
        println!("  ESC        - Exit");
        println!();
    }

    /// Screen pixel to world pixel
    pub fn screen_to_world(&self, sx: i32, sy: i32) -> Point {
        Point::new(sx + self.camera.draw_offset.x, sy + self.camera.draw_offset.y)
    }

    pub fn move_lantern(&mut self, sx: i32, sy: i32) {
        let world = self.screen_to_world(sx, sy);
        self.lantern.set_anchor(world);
    }

    /// Toggle the wall under a screen pixel; returns the tile cell
    pub fn toggle_wall_at(&mut self, sx: i32, sy: i32) -> (i32, i32) {
        let world = self.screen_to_world(sx, sy);
        let cell = (
            world.x.div_euclid(self.tiles.tile_width()),
            world.y.div_euclid(self.tiles.tile_height()),
        );
        self.tiles.toggle_wall(cell.0, cell.1);
        cell
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::ToggleRunning => {
                if self.lantern.is_running() {
                    self.lantern.stop();
                } else {
                    let anchor = self.lantern.anchor();
                    self.breathing_timer.reset();
                    self.lantern.start(anchor);
                }
            }
            Action::ToggleBreathing => {
                let enabled = !self.lantern.breathing_enabled();
                self.lantern.set_breathing_enabled(enabled);
                println!("Breathing: {}", if enabled { "ON" } else { "OFF" });
            }
            Action::ToggleJitter => {
                let jitter = if self.lantern.jitter_enabled() {
                    Jitter::Off
                } else {
                    Jitter::from_entropy()
                };
                println!("Jitter: {}", if jitter.is_enabled() { "ON" } else { "OFF" });
                self.lantern.set_jitter(jitter);
            }
            Action::WiderBands => {
                let width = self.lantern.band_width().saturating_add(1).min(40);
                self.lantern.set_band_width(width);
                println!("Band width: {}", width);
            }
            Action::NarrowerBands => {
                let width = self.lantern.band_width().saturating_sub(1).max(1);
                self.lantern.set_band_width(width);
                println!("Band width: {}", width);
            }
            Action::ClearWalls => {
                self.tiles.clear_walls();
                println!("Walls cleared");
            }
            Action::Pan(dx, dy) => {
                self.camera.draw_offset.x += dx;
                self.camera.draw_offset.y += dy;
            }
        }
    }

    /// Fire any breathing ticks that came due since the last update.
    pub fn update(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_update);
        self.last_update = now;
        for _ in 0..self.breathing_timer.advance(dt) {
            self.lantern.tick();
        }
    }

    /// Paint tiles and the lantern bearer, then light the frame.
    pub fn render(&mut self) {
        self.draw_background();
        self.draw_sprite();
        self.lantern
            .render(&self.camera, Some(&self.tiles), &mut self.frame);
    }

    fn draw_background(&mut self) {
        let (w, h) = self.frame.size();
        let (tw, th) = (self.tiles.tile_width(), self.tiles.tile_height());
        for sy in 0..h {
            for sx in 0..w {
                let world = self.screen_to_world(sx as i32, sy as i32);
                let (col, row) = (world.x.div_euclid(tw), world.y.div_euclid(th));
                // Checker the floor so panning is visible
                let color = match self.tiles.tile(col, row) {
                    Some(t) if !t.is_wall() && (col + row) % 2 != 0 => FLOOR_ALT,
                    Some(t) => t.index,
                    None => VOID,
                };
                self.frame.set(sx, sy, color);
            }
        }
    }

    fn draw_sprite(&mut self) {
        use crate::host::Surface;
        let at = self.camera.to_screen(self.lantern.anchor());
        self.frame.fill_rect(at.x - 2, at.y - 2, 5, 5, SPRITE);
    }
}
