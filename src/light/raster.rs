//! Row rasterizer: turns a light profile into palette-indexed horizontal runs.
//!
//! The light's bounding square is processed one quadrant row at a time. Row
//! `y` of the distance table stands for screen rows `cy - y` and `cy + y + 1`,
//! and every run is mirrored left and right of `cx`. Bands are drawn outer to
//! inner so brighter remaps are never overwritten by darker ones.

use super::{Jitter, LightProfile, Occluder, RowLimits};
use crate::host::{Point, Surface};
use crate::palette::{DARKEST, PaletteRamp, RemapBuffer};

/// Darken `surface` around screen-space `center` for one frame.
///
/// Without an occluder every run is drawn at full width.
pub fn apply<S: Surface + ?Sized>(
    profile: &LightProfile,
    ramp: &PaletteRamp,
    center: Point,
    occluder: Option<&Occluder<'_>>,
    surface: &mut S,
    jitter: &mut Jitter,
) {
    let table = profile.table();
    let rings = table.rings();
    let reach = table.reach() as i32;
    let Point { x: cx, y: cy } = center;

    fill_outside(surface, cx, cy, reach);

    for y in 0..table.reach() {
        let rows = [cy - y as i32, cy + y as i32 + 1];
        let limits = rows.map(|sy| match occluder {
            Some(occ) => occ.row_limits(sy, cx, reach),
            None => RowLimits::open(cx, reach),
        });
        let edges = table.row(y);

        // Beyond all bands
        let mut prev = edges[rings - 1] as i32;
        for (&sy, lim) in rows.iter().zip(&limits) {
            fill_dark(surface, sy, cx, prev, reach, lim);
        }

        for band in (1..=rings).rev() {
            let inner = if band > 1 { edges[band - 2] } else { table.lit_edge(y) };
            let mut offset = inner as i32;
            if offset != 0 {
                offset += jitter.nudge();
            }
            let offset = offset.clamp(0, prev);

            if offset < prev {
                let remap = ramp.level(band);
                for (&sy, lim) in rows.iter().zip(&limits) {
                    map_band(surface, sy, cx, offset, prev, lim, remap);
                }
            }
            prev = offset;
        }
    }

    log::trace!("lantern frame at ({}, {}) reach {}", cx, cy, reach);
}

/// Top, bottom, left and right strips outside the bounding square.
fn fill_outside<S: Surface + ?Sized>(surface: &mut S, cx: i32, cy: i32, reach: i32) {
    let (sw, sh) = (surface.width(), surface.height());
    let top = cy - reach + 1;
    let bottom = cy + reach + 1;
    let side_h = bottom - top;

    fill(surface, 0, 0, sw, top);
    fill(surface, 0, bottom, sw, sh - bottom);
    fill(surface, 0, top, cx - reach, side_h);
    fill(surface, cx + reach, top, sw - (cx + reach), side_h);
}

#[inline]
fn fill<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, w: i32, h: i32) {
    if w > 0 && h > 0 {
        surface.fill_rect(x, y, w, h, DARKEST);
    }
}

/// Darkest run from the outer band edge to the square's edge on both sides.
/// A wall nearer than the band edge pulls the start of the run in to it.
fn fill_dark<S: Surface + ?Sized>(
    surface: &mut S,
    sy: i32,
    cx: i32,
    edge: i32,
    reach: i32,
    lim: &RowLimits,
) {
    let start = (cx + edge).min(lim.right);
    fill(surface, start, sy, cx + reach - start, 1);

    let end = (cx - edge).max(lim.left);
    fill(surface, cx - reach, sy, end - (cx - reach), 1);
}

/// Remap `[inner, outer)` on both sides of centre, clipped at walls.
fn map_band<S: Surface + ?Sized>(
    surface: &mut S,
    sy: i32,
    cx: i32,
    inner: i32,
    outer: i32,
    lim: &RowLimits,
    remap: &RemapBuffer,
) {
    if let Some((x0, x1)) = lim.clip_right(cx + inner, cx + outer) {
        surface.map_rect(x0, sy, x1 - x0, 1, remap);
    }
    if let Some((x0, x1)) = lim.clip_left(cx - outer, cx - inner) {
        surface.map_rect(x0, sy, x1 - x0, 1, remap);
    }
}
