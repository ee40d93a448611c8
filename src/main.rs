mod config;
mod effect;
mod error;
mod gpu;
mod host;
mod interactive;
mod light;
mod palette;
mod render;

#[cfg(test)]
mod tests;

// Re-export public API
pub use config::LanternConfig;
pub use effect::{BackgroundEffect, LanternEffect};
pub use error::LanternError;
pub use host::{Camera, IndexedFrame, IntervalTimer, Point, Surface, Tile, TileGrid, WallGrid};
pub use interactive::{InteractiveViewer, Scene, run_gpu_viewer};
pub use light::{DistanceTable, Jitter, LightProfile, Occluder, apply};
pub use palette::{DARKEST, PaletteRamp, RemapBuffer};
pub use render::save_ppm;

use std::path::Path;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = match flag_value(args, "--config") {
        Some(path) => LanternConfig::load(Path::new(path)).map_err(|e| e.to_string())?,
        None => LanternConfig::default(),
    };

    if has_flag(args, "--interactive") {
        let mut viewer = InteractiveViewer::new(config)?;
        viewer.run()
    } else if has_flag(args, "--gpu") {
        run_gpu_viewer(config)
    } else if has_flag(args, "--benchmark") {
        run_benchmark(&config).map_err(|e| e.to_string())
    } else if let Some(path) = flag_value(args, "--snapshot") {
        run_snapshot(config, path)
    } else {
        println!("Lantern");
        println!("Run with --interactive for the minifb viewer");
        println!("Run with --gpu for the wgpu viewer");
        println!("Run with --benchmark to time the rasterizer");
        println!("Run with --snapshot <file.ppm> to render one frame");
        println!("Add --config <file.toml> to any of the above");
        Ok(())
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().skip(1).any(|a| a == flag)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn run_snapshot(config: LanternConfig, path: &str) -> Result<(), String> {
    let scale = config.screen.scale;
    let mut scene = Scene::new(config).map_err(|e| e.to_string())?;
    let (w, h) = scene.frame.size();
    scene.move_lantern(w as i32 / 2, h as i32 / 2);
    scene.render();
    save_ppm(&scene.frame, path, scale).map_err(|e| e.to_string())?;
    println!("Wrote {}x{} snapshot to {}", w * scale, h * scale, path);
    Ok(())
}

fn run_benchmark(config: &LanternConfig) -> Result<(), LanternError> {
    use rayon::prelude::*;
    use std::time::Instant;

    println!("=== Lantern Rasterizer Benchmark ===\n");

    let iterations = 200;
    let sizes = [(160usize, 120usize), (320, 240), (640, 480)];
    let ramp = config.ramp()?;
    let light = &config.light;
    let tiles = WallGrid::from_ascii(interactive::SAMPLE_ROOM, config.tiles.width, config.tiles.height);

    for (width, height) in sizes {
        println!("Screen size: {}x{}", width, height);
        println!("-----------------------");

        // Scale the light with the screen so the occluded share stays similar
        let factor = (width / 160).max(1) as u16;
        let profile = LightProfile::new(light.rings, light.band_width * factor, light.center_radius);
        let center = Point::new(width as i32 / 2, height as i32 / 2);
        let mut frame = IndexedFrame::new(width, height);
        let mut jitter = Jitter::seeded(light.seed.unwrap_or(0));

        let start = Instant::now();
        for _ in 0..iterations {
            apply(&profile, &ramp, center, None, &mut frame, &mut jitter);
        }
        let open_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

        let occluder = Occluder::new(&tiles, Point::default());
        let start = Instant::now();
        for _ in 0..iterations {
            apply(&profile, &ramp, center, Some(&occluder), &mut frame, &mut jitter);
        }
        let occluded_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

        let start = Instant::now();
        for _ in 0..iterations {
            let _ = frame.to_rgba();
        }
        let expand_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

        println!("  Unoccluded:      {:.4} ms/frame", open_ms);
        println!("  Wall-occluded:   {:.4} ms/frame", occluded_ms);
        println!("  RGBA expansion:  {:.4} ms/frame", expand_ms);
        println!();
    }

    // Whole breathing set, one frame per profile
    println!("=== Breathing Set ===\n");
    let (width, height) = (config.screen.width, config.screen.height);
    let profiles = LightProfile::breathing_set(light.rings, light.band_width, light.center_radius);
    let center = Point::new(width as i32 / 2, height as i32 / 2);

    let start = Instant::now();
    for _ in 0..iterations {
        let _frames: Vec<IndexedFrame> = profiles
            .iter()
            .map(|p| {
                let mut frame = IndexedFrame::new(width, height);
                apply(p, &ramp, center, None, &mut frame, &mut Jitter::Off);
                frame
            })
            .collect();
    }
    let sequential_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

    let start = Instant::now();
    for _ in 0..iterations {
        let _frames: Vec<IndexedFrame> = profiles
            .par_iter()
            .map(|p| {
                let mut frame = IndexedFrame::new(width, height);
                apply(p, &ramp, center, None, &mut frame, &mut Jitter::Off);
                frame
            })
            .collect();
    }
    let parallel_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

    println!("Screen size: {}x{}, {} profiles", width, height, profiles.len());
    println!("  Sequential: {:.4} ms/iter", sequential_ms);
    println!("  Parallel:   {:.4} ms/iter", parallel_ms);
    println!();
    println!("Estimated max FPS (lighting only, one profile):");
    println!("  {:.1} FPS", 1000.0 * profiles.len() as f64 / sequential_ms.max(f64::EPSILON));

    Ok(())
}
