//! Host-side collaborators: screen surface, tile grid, camera and timers.
//!
//! The lighting code only talks to the traits in this module. The concrete
//! types here are the demo host used by the viewers, benchmark and tests.

mod frame;
mod tilemap;
mod timer;

#[cfg(test)]
pub mod recorder;

pub use frame::IndexedFrame;
pub use tilemap::WallGrid;
pub use timer::IntervalTimer;

use crate::palette::RemapBuffer;

/// Integer pixel position (world or screen space depending on context)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Camera draw offset; world position minus offset is screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Camera {
    pub draw_offset: Point,
}

impl Camera {
    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(world.x - self.draw_offset.x, world.y - self.draw_offset.y)
    }
}

/// A palette-indexed drawing target. Both operations clip silently.
pub trait Surface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Flat fill with a single palette index
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8);

    /// Replace every pixel's index through `remap`
    fn map_rect(&mut self, x: i32, y: i32, w: i32, h: i32, remap: &RemapBuffer);
}

/// One cell of a tile map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub index: u8,
    pub wall: bool,
}

impl Tile {
    pub fn is_wall(&self) -> bool {
        self.wall
    }
}

/// Tile map queries needed for occlusion.
pub trait TileGrid {
    fn tile_width(&self) -> i32;
    fn tile_height(&self) -> i32;
    fn columns(&self) -> i32;
    fn rows(&self) -> i32;

    /// Tile at a cell, `None` for empty cells or cells outside the grid.
    fn tile(&self, col: i32, row: i32) -> Option<Tile>;

    /// Out-of-bounds cells are never walls.
    fn is_wall(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 || col >= self.columns() || row >= self.rows() {
            return false;
        }
        self.tile(col, row).is_some_and(|t| t.is_wall())
    }
}
