//! 16-colour framebuffer implementing `Surface`

use rayon::prelude::*;

use super::Surface;
use crate::palette::{ARCADE_COLORS, PALETTE_SIZE, RemapBuffer};

/// Row-major buffer of palette indices: index = y * width + x
#[derive(Debug, Clone)]
pub struct IndexedFrame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl IndexedFrame {
    pub fn new(width: usize, height: usize) -> Self {
        IndexedFrame {
            width,
            height,
            pixels: vec![0u8; width * height],
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, color: u8) {
        self.pixels[y * self.width + x] = color;
    }

    pub fn clear(&mut self, color: u8) {
        self.pixels.fill(color);
    }

    /// Clip a rectangle to the frame; `None` when nothing is left.
    fn clip(&self, x: i32, y: i32, w: i32, h: i32) -> Option<(usize, usize, usize, usize)> {
        if w <= 0 || h <= 0 {
            return None;
        }
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }

    /// Expand to RGBA8 through the display palette.
    pub fn to_rgba(&self) -> Vec<[u8; 4]> {
        let lut: [[u8; 4]; PALETTE_SIZE] = std::array::from_fn(|i| {
            let c = ARCADE_COLORS[i];
            [(c >> 16) as u8, (c >> 8) as u8, c as u8, 255]
        });

        let mut out = vec![[0u8; 4]; self.pixels.len()];
        if self.width == 0 {
            return out;
        }
        out.par_chunks_mut(self.width)
            .zip(self.pixels.par_chunks(self.width))
            .for_each(|(dst, src)| {
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d = lut[(s as usize) & (PALETTE_SIZE - 1)];
                }
            });
        out
    }

    /// Expand to 0x00RRGGBB words, upscaled by `scale` (minifb layout).
    pub fn to_argb_scaled(&self, scale: usize, out: &mut [u32]) {
        let out_w = self.width * scale;
        if out_w == 0 {
            return;
        }
        out.par_chunks_mut(out_w).enumerate().for_each(|(oy, dst)| {
            let src = &self.pixels[(oy / scale) * self.width..][..self.width];
            for (ox, d) in dst.iter_mut().enumerate() {
                *d = ARCADE_COLORS[(src[ox / scale] as usize) & (PALETTE_SIZE - 1)];
            }
        });
    }
}

impl Surface for IndexedFrame {
    fn width(&self) -> i32 {
        self.width as i32
    }

    fn height(&self) -> i32 {
        self.height as i32
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        for row in y0..y1 {
            self.pixels[row * self.width + x0..row * self.width + x1].fill(color);
        }
    }

    fn map_rect(&mut self, x: i32, y: i32, w: i32, h: i32, remap: &RemapBuffer) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        for row in y0..y1 {
            for p in &mut self.pixels[row * self.width + x0..row * self.width + x1] {
                *p = remap.map(*p);
            }
        }
    }
}
