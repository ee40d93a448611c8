//! Surface that records draw calls instead of touching pixels (tests only)

use super::Surface;
use crate::palette::RemapBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Fill { x: i32, y: i32, w: i32, h: i32, color: u8 },
    Map { x: i32, y: i32, w: i32, h: i32, remap: RemapBuffer },
}

impl DrawCall {
    pub fn row(&self) -> i32 {
        match *self {
            DrawCall::Fill { y, .. } | DrawCall::Map { y, .. } => y,
        }
    }

    /// Horizontal extent as a half-open range
    pub fn span(&self) -> (i32, i32) {
        match *self {
            DrawCall::Fill { x, w, .. } | DrawCall::Map { x, w, .. } => (x, x + w),
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, DrawCall::Map { .. })
    }
}

pub struct DrawRecorder {
    pub width: i32,
    pub height: i32,
    pub calls: Vec<DrawCall>,
}

impl DrawRecorder {
    pub fn new(width: i32, height: i32) -> Self {
        DrawRecorder { width, height, calls: Vec::new() }
    }

    /// Calls that touch screen row `y` and are one pixel high
    pub fn row_calls(&self, y: i32) -> Vec<DrawCall> {
        self.calls
            .iter()
            .copied()
            .filter(|c| c.row() == y && matches!(c, DrawCall::Fill { h: 1, .. } | DrawCall::Map { h: 1, .. }))
            .collect()
    }
}

impl Surface for DrawRecorder {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        self.calls.push(DrawCall::Fill { x, y, w, h, color });
    }

    fn map_rect(&mut self, x: i32, y: i32, w: i32, h: i32, remap: &RemapBuffer) {
        self.calls.push(DrawCall::Map { x, y, w, h, remap: *remap });
    }
}
