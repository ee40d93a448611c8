//! Simple in-memory tile map with wall flags

use super::{Tile, TileGrid};

#[derive(Debug, Clone)]
pub struct WallGrid {
    tile_size: (i32, i32),
    columns: i32,
    rows: i32,
    // Row-major: index = row * columns + col
    tiles: Vec<Option<Tile>>,
}

impl WallGrid {
    /// Empty grid of `columns` x `rows` cells, each `tile_w` x `tile_h` pixels.
    pub fn new(columns: usize, rows: usize, tile_w: i32, tile_h: i32) -> Self {
        WallGrid {
            tile_size: (tile_w.max(1), tile_h.max(1)),
            columns: columns as i32,
            rows: rows as i32,
            tiles: vec![None; columns * rows],
        }
    }

    /// Build from an ASCII layout: `#` is a wall, `.` a floor tile, anything
    /// else an empty cell. Short rows are padded with empty cells.
    pub fn from_ascii(layout: &str, tile_w: i32, tile_h: i32) -> Self {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let columns = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut grid = WallGrid::new(columns, lines.len(), tile_w, tile_h);

        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                let tile = match c {
                    '#' => Some(Tile { index: 14, wall: true }),
                    '.' => Some(Tile { index: 13, wall: false }),
                    _ => None,
                };
                grid.tiles[row * columns + col] = tile;
            }
        }
        grid
    }

    fn idx(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.columns || row >= self.rows {
            return None;
        }
        Some((row * self.columns + col) as usize)
    }

    pub fn set_wall(&mut self, col: i32, row: i32, wall: bool) {
        if let Some(i) = self.idx(col, row) {
            let index = self.tiles[i].map_or(13, |t| t.index);
            self.tiles[i] = Some(Tile { index: if wall { 14 } else { index.min(13) }, wall });
        }
    }

    pub fn toggle_wall(&mut self, col: i32, row: i32) {
        let wall = self.is_wall(col, row);
        self.set_wall(col, row, !wall);
    }

    pub fn clear_walls(&mut self) {
        for tile in self.tiles.iter_mut().flatten() {
            tile.wall = false;
            tile.index = 13;
        }
    }
}

impl TileGrid for WallGrid {
    fn tile_width(&self) -> i32 {
        self.tile_size.0
    }

    fn tile_height(&self) -> i32 {
        self.tile_size.1
    }

    fn columns(&self) -> i32 {
        self.columns
    }

    fn rows(&self) -> i32 {
        self.rows
    }

    fn tile(&self, col: i32, row: i32) -> Option<Tile> {
        self.idx(col, row).and_then(|i| self.tiles[i])
    }
}
