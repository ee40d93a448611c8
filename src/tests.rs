//! End-to-end tests for the lantern rasterizer

use std::sync::Arc;

use crate::host::recorder::{DrawCall, DrawRecorder};
use crate::{
    BackgroundEffect, Camera, DARKEST, IndexedFrame, Jitter, LanternEffect, LightProfile, Occluder,
    PaletteRamp, Point, Surface, WallGrid, apply,
};

const CENTER: Point = Point::new(80, 60);

fn scenario_profile() -> LightProfile {
    LightProfile::new(4, 13, 1)
}

fn record(grid: Option<&WallGrid>, jitter: &mut Jitter) -> DrawRecorder {
    let ramp = PaletteRamp::arcade().unwrap();
    let mut rec = DrawRecorder::new(160, 128);
    let occ = grid.map(|g| Occluder::new(g, Point::default()));
    apply(&scenario_profile(), &ramp, CENTER, occ.as_ref(), &mut rec, jitter);
    rec
}

/// 10x8 grid of 16px tiles covering the 160x128 screen
fn grid_with_wall(col: i32, row: i32) -> WallGrid {
    let mut grid = WallGrid::new(10, 8, 16, 16);
    grid.set_wall(col, row, true);
    grid
}

fn maps_right_of(calls: &[DrawCall], cx: i32) -> Vec<(i32, i32)> {
    calls
        .iter()
        .filter(|c| c.is_map() && c.span().0 >= cx)
        .map(|c| c.span())
        .collect()
}

fn calls_left_of(calls: &[DrawCall], cx: i32) -> Vec<DrawCall> {
    calls.iter().copied().filter(|c| c.span().1 <= cx).collect()
}

#[test]
fn test_main_prints_usage() {
    crate::run(&["lantern".to_string()]).unwrap();
}

#[test]
fn test_snapshot_writes_ppm() {
    let path = std::env::temp_dir().join(format!("lantern-snapshot-{}.ppm", std::process::id()));
    let path_str = path.to_string_lossy().to_string();
    crate::run(&["lantern".into(), "--snapshot".into(), path_str]).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("P3\n640 480\n255\n"));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_scenario_outside_strips_come_first() {
    let rec = record(None, &mut Jitter::Off);
    assert_eq!(scenario_profile().reach(), 53);

    let expected = [
        DrawCall::Fill { x: 0, y: 0, w: 160, h: 8, color: DARKEST },
        DrawCall::Fill { x: 0, y: 114, w: 160, h: 14, color: DARKEST },
        DrawCall::Fill { x: 0, y: 8, w: 27, h: 106, color: DARKEST },
        DrawCall::Fill { x: 133, y: 8, w: 27, h: 106, color: DARKEST },
    ];
    assert_eq!(&rec.calls[..4], &expected);
    // Nothing after the strips is taller than one row
    assert!(rec.calls[4..].iter().all(|c| matches!(c,
        DrawCall::Fill { h: 1, .. } | DrawCall::Map { h: 1, .. })));
}

#[test]
fn test_scenario_four_bands_and_one_dark_run_per_side() {
    let rec = record(None, &mut Jitter::Off);

    for y in 1..14 {
        for sy in [60 - y, 61 + y] {
            let calls = rec.row_calls(sy);
            for side in [calls_left_of(&calls, 80), calls.iter().copied().filter(|c| c.span().0 >= 80).collect()] {
                let maps = side.iter().filter(|c| c.is_map()).count();
                let fills = side.iter().filter(|c| !c.is_map()).count();
                assert_eq!((maps, fills), (4, 1), "screen row {}: {:?}", sy, side);
            }
        }
    }

    // Centre row: the outermost band reaches the square's edge, so no dark run
    let centre = rec.row_calls(60);
    assert_eq!(centre.iter().filter(|c| c.is_map()).count(), 8);
    assert_eq!(centre.iter().filter(|c| !c.is_map()).count(), 0);
}

#[test]
fn test_scenario_wall_right_of_centre() {
    // Column 6 spans x 96..112, tile row 3 spans y 48..64
    let grid = grid_with_wall(6, 3);
    let open = record(None, &mut Jitter::Off);
    let walled = record(Some(&grid), &mut Jitter::Off);

    let open_row = open.row_calls(60);
    let walled_row = walled.row_calls(60);

    // Rightward runs stop at the wall's left edge
    let right = maps_right_of(&walled_row, 80);
    assert!(!right.is_empty());
    assert!(right.iter().all(|&(_, x1)| x1 <= 96), "{:?}", right);
    let expected: Vec<(i32, i32)> = maps_right_of(&open_row, 80)
        .into_iter()
        .map(|(x0, x1)| (x0, x1.min(96)))
        .filter(|&(x0, x1)| x1 > x0)
        .collect();
    assert_eq!(right, expected);
    let lit_end = right.iter().map(|s| s.1).max();
    assert_eq!(lit_end, Some(96));

    // Beyond the wall is fully dark
    assert!(walled_row.contains(&DrawCall::Fill { x: 96, y: 60, w: 133 - 96, h: 1, color: DARKEST }));

    // Leftward runs are untouched
    assert_eq!(calls_left_of(&walled_row, 80), calls_left_of(&open_row, 80));

    // Rows outside the wall's tile row are untouched
    for sy in (8..48).chain(64..114) {
        assert_eq!(walled.row_calls(sy), open.row_calls(sy), "screen row {}", sy);
    }
}

#[test]
fn test_wall_adjacent_occludes_every_row_it_spans() {
    let grid = grid_with_wall(6, 3);
    let rec = record(Some(&grid), &mut Jitter::seeded(11));
    for sy in 48..64 {
        for call in rec.row_calls(sy).iter().filter(|c| c.is_map()) {
            assert!(call.span().1 <= 96, "row {} remap passes the wall: {:?}", sy, call);
        }
    }
}

#[test]
fn test_shadowed_pixels_are_darkest() {
    let ramp = PaletteRamp::arcade().unwrap();
    let grid = grid_with_wall(6, 3);
    let occ = Occluder::new(&grid, Point::default());
    let mut frame = IndexedFrame::new(160, 128);
    frame.clear(1);
    apply(&scenario_profile(), &ramp, CENTER, Some(&occ), &mut frame, &mut Jitter::Off);

    // Behind the wall, inside the light's reach
    for x in 96..133 {
        assert_eq!(frame.get(x, 55), DARKEST, "x={}", x);
    }
    // Same distance on the open side is lit by the inner bands
    assert_ne!(frame.get(160 - 97, 55), DARKEST);
    assert_eq!(frame.get(80, 60), 1);
}

#[test]
fn test_rows_mirror_even_with_jitter() {
    let rec = record(None, &mut Jitter::seeded(99));
    for y in 0..53 {
        let top: Vec<(bool, i32, i32)> =
            rec.row_calls(60 - y).iter().map(|c| (c.is_map(), c.span().0, c.span().1)).collect();
        let bottom: Vec<(bool, i32, i32)> =
            rec.row_calls(61 + y).iter().map(|c| (c.is_map(), c.span().0, c.span().1)).collect();
        assert_eq!(top, bottom, "row pair {}", y);
    }
}

#[test]
fn test_repeat_frames_are_identical_without_jitter() {
    let grid = grid_with_wall(3, 2);
    let first = record(Some(&grid), &mut Jitter::Off);
    let second = record(Some(&grid), &mut Jitter::Off);
    assert_eq!(first.calls, second.calls);

    let ramp = PaletteRamp::arcade().unwrap();
    let occ = Occluder::new(&grid, Point::default());
    let render = || {
        let mut frame = IndexedFrame::new(160, 128);
        frame.clear(7);
        apply(&scenario_profile(), &ramp, CENTER, Some(&occ), &mut frame, &mut Jitter::Off);
        frame
    };
    assert_eq!(render().pixels(), render().pixels());
}

#[test]
fn test_light_near_screen_edge_clips_silently() {
    let ramp = PaletteRamp::arcade().unwrap();
    let mut frame = IndexedFrame::new(160, 128);
    frame.clear(1);
    apply(&scenario_profile(), &ramp, Point::new(2, 3), None, &mut frame, &mut Jitter::Off);
    assert_eq!(frame.get(2, 3), 1);
    assert_eq!(frame.get(159, 127), DARKEST);

    // Entirely off-screen light leaves the screen dark
    frame.clear(1);
    apply(&scenario_profile(), &ramp, Point::new(-500, -500), None, &mut frame, &mut Jitter::Off);
    assert!(frame.pixels().iter().all(|&p| p == DARKEST));
}

#[test]
fn test_effect_selected_as_trait_object() {
    let ramp = Arc::new(PaletteRamp::arcade().unwrap());
    let mut lantern = LanternEffect::new(ramp, 4, 13, 1);
    lantern.set_jitter(Jitter::Off);
    let mut effect: Box<dyn BackgroundEffect> = Box::new(lantern);

    let grid = grid_with_wall(6, 3);
    let mut frame = IndexedFrame::new(160, 128);
    frame.clear(1);

    effect.start(Point::new(100, 80));
    effect.set_anchor(Point::new(112, 60));
    let camera = Camera { draw_offset: Point::new(32, 0) };
    effect.render(&camera, Some(&grid), &mut frame);

    // Anchor lands on screen (80, 60) and the wall at world column 6 sits at screen x 64..80,
    // directly left of the light
    assert_eq!(frame.get(80, 60), 1);
    assert_eq!(frame.get(70, 59), DARKEST);
    assert_ne!(frame.get(90, 59), DARKEST);
    assert_eq!(frame.width(), 160);
}
