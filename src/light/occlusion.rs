//! Wall occlusion along a single screen row.
//!
//! Each row is scanned outward from the light centre, tile by tile, in both
//! directions. The first wall found on a side caps every run drawn on that
//! side at the wall's near edge.

use crate::host::{Point, TileGrid};

/// Screen-space bounds for one row. Rightward runs end at or before `right`,
/// leftward runs start at or after `left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLimits {
    pub left: i32,
    pub right: i32,
}

impl RowLimits {
    /// No walls: the limits are the edges of the light's bounding square.
    pub fn open(cx: i32, reach: i32) -> Self {
        RowLimits {
            left: cx - reach,
            right: cx + reach,
        }
    }

    /// Clip a run right of centre, `None` if nothing is left.
    #[inline]
    pub fn clip_right(&self, x0: i32, x1: i32) -> Option<(i32, i32)> {
        let x1 = x1.min(self.right);
        (x1 > x0).then_some((x0, x1))
    }

    /// Clip a run left of centre, `None` if nothing is left.
    #[inline]
    pub fn clip_left(&self, x0: i32, x1: i32) -> Option<(i32, i32)> {
        let x0 = x0.max(self.left);
        (x1 > x0).then_some((x0, x1))
    }
}

/// Tile grid plus the camera offset that maps screen pixels into it.
pub struct Occluder<'a> {
    grid: &'a dyn TileGrid,
    camera: Point,
}

impl<'a> Occluder<'a> {
    pub fn new(grid: &'a dyn TileGrid, camera: Point) -> Self {
        Occluder { grid, camera }
    }

    /// Limits for screen row `sy` of a light centred at screen x `cx`.
    pub fn row_limits(&self, sy: i32, cx: i32, reach: i32) -> RowLimits {
        let mut limits = RowLimits::open(cx, reach);

        let (tw, th) = (self.grid.tile_width(), self.grid.tile_height());
        let row = (sy + self.camera.y).div_euclid(th);
        if row < 0 || row >= self.grid.rows() {
            return limits;
        }
        let columns = self.grid.columns();
        let wx = cx + self.camera.x;

        // Rightward over world pixels [wx, wx + reach)
        let first = wx.div_euclid(tw).max(0);
        let last = (wx + reach - 1).div_euclid(tw).min(columns - 1);
        if let Some(col) = (first..=last).find(|&c| self.grid.is_wall(c, row)) {
            limits.right = (col * tw - self.camera.x).max(cx);
        }

        // Leftward over world pixels [wx - reach, wx)
        let first = (wx - 1).div_euclid(tw).min(columns - 1);
        let last = (wx - reach).div_euclid(tw).max(0);
        if let Some(col) = (last..=first).rev().find(|&c| self.grid.is_wall(c, row)) {
            limits.left = ((col + 1) * tw - self.camera.x).min(cx);
        }

        limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::WallGrid;

    fn grid_with_walls(walls: &[(i32, i32)]) -> WallGrid {
        let mut grid = WallGrid::new(10, 8, 16, 16);
        for &(c, r) in walls {
            grid.set_wall(c, r, true);
        }
        grid
    }

    #[test]
    fn test_empty_grid_leaves_row_open() {
        let grid = grid_with_walls(&[]);
        let occ = Occluder::new(&grid, Point::default());
        assert_eq!(occ.row_limits(60, 80, 53), RowLimits::open(80, 53));
    }

    #[test]
    fn test_nearest_wall_wins_on_each_side() {
        // Light at x=80 is in column 5; walls at columns 7, 8 (right) and 2, 3 (left)
        let grid = grid_with_walls(&[(7, 3), (8, 3), (2, 3), (3, 3)]);
        let occ = Occluder::new(&grid, Point::default());
        let limits = occ.row_limits(50, 80, 53);
        assert_eq!(limits.right, 7 * 16);
        assert_eq!(limits.left, 4 * 16);
        // Other tile rows are untouched
        assert_eq!(occ.row_limits(70, 80, 53), RowLimits::open(80, 53));
    }

    #[test]
    fn test_wall_beyond_reach_is_ignored() {
        let grid = grid_with_walls(&[(9, 3)]);
        let occ = Occluder::new(&grid, Point::default());
        // Reach ends at x=100, column 9 starts at 144
        assert_eq!(occ.row_limits(50, 80, 20).right, 100);
    }

    #[test]
    fn test_wall_under_centre_closes_both_sides() {
        let grid = grid_with_walls(&[(5, 3)]);
        let occ = Occluder::new(&grid, Point::default());
        let limits = occ.row_limits(50, 84, 53);
        assert_eq!((limits.left, limits.right), (84, 84));
    }

    #[test]
    fn test_camera_offset_shifts_lookup() {
        // Wall at world column 7 (x 112..128); camera scrolled 32px right
        let grid = grid_with_walls(&[(7, 3)]);
        let occ = Occluder::new(&grid, Point::new(32, 0));
        let limits = occ.row_limits(50, 50, 53);
        assert_eq!(limits.right, 112 - 32);
    }

    #[test]
    fn test_rows_outside_grid_are_open() {
        let grid = grid_with_walls(&[(6, 0)]);
        let occ = Occluder::new(&grid, Point::default());
        assert_eq!(occ.row_limits(-5, 80, 53), RowLimits::open(80, 53));
        assert_eq!(occ.row_limits(8 * 16 + 3, 80, 53), RowLimits::open(80, 53));
    }

    #[test]
    fn test_clip_helpers() {
        let limits = RowLimits { left: 40, right: 96 };
        assert_eq!(limits.clip_right(90, 120), Some((90, 96)));
        assert_eq!(limits.clip_right(96, 120), None);
        assert_eq!(limits.clip_left(20, 50), Some((40, 50)));
        assert_eq!(limits.clip_left(20, 40), None);
    }
}
