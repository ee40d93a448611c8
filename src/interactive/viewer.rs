//! minifb viewer - mouse carries the lantern through the sample room

use std::time::Instant;

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use super::scene::{Action, Scene};
use crate::config::LanternConfig;

/// Camera pan per arrow key press, in screen pixels
const PAN_STEP: i32 = 8;

pub struct InteractiveViewer {
    scene: Scene,
    window: Window,
    buffer: Vec<u32>,
    last_wall_cell: Option<(i32, i32)>,
}

impl InteractiveViewer {
    pub fn new(config: LanternConfig) -> Result<Self, String> {
        let scene = Scene::new(config).map_err(|e| e.to_string())?;
        let screen = &scene.config.screen;
        let window_w = screen.width * screen.scale;
        let window_h = screen.height * screen.scale;

        let window = Window::new(
            "Lantern - Interactive Viewer (ESC to exit)",
            window_w,
            window_h,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        Ok(Self {
            scene,
            window,
            buffer: vec![0u32; window_w * window_h],
            last_wall_cell: None,
        })
    }

    pub fn run(&mut self) -> Result<(), String> {
        let scale = self.scene.config.screen.scale;
        let (window_w, window_h) = {
            let s = &self.scene.config.screen;
            (s.width * scale, s.height * scale)
        };

        self.window.set_target_fps(60);

        println!("=== Lantern Viewer ===");
        self.scene.print_controls();

        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            for action in self.pressed_actions() {
                self.scene.apply_action(action);
            }

            if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Discard) {
                let (sx, sy) = (mx as i32 / scale as i32, my as i32 / scale as i32);
                self.scene.move_lantern(sx, sy);

                // One toggle per cell while the button is held
                if self.window.get_mouse_down(MouseButton::Left) {
                    let world = self.scene.screen_to_world(sx, sy);
                    let cell = (
                        world.x.div_euclid(self.scene.config.tiles.width),
                        world.y.div_euclid(self.scene.config.tiles.height),
                    );
                    if self.last_wall_cell != Some(cell) {
                        self.scene.toggle_wall_at(sx, sy);
                        self.last_wall_cell = Some(cell);
                    }
                } else {
                    self.last_wall_cell = None;
                }
            }

            self.scene.update(Instant::now());
            self.scene.render();
            self.scene.frame.to_argb_scaled(scale, &mut self.buffer);

            self.window
                .update_with_buffer(&self.buffer, window_w, window_h)
                .map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    fn pressed_actions(&self) -> Vec<Action> {
        let bindings = [
            (Key::Space, KeyRepeat::No, Action::ToggleRunning),
            (Key::B, KeyRepeat::No, Action::ToggleBreathing),
            (Key::J, KeyRepeat::No, Action::ToggleJitter),
            (Key::C, KeyRepeat::No, Action::ClearWalls),
            (Key::Equal, KeyRepeat::Yes, Action::WiderBands),
            (Key::NumPadPlus, KeyRepeat::Yes, Action::WiderBands),
            (Key::Minus, KeyRepeat::Yes, Action::NarrowerBands),
            (Key::NumPadMinus, KeyRepeat::Yes, Action::NarrowerBands),
            (Key::Left, KeyRepeat::Yes, Action::Pan(-PAN_STEP, 0)),
            (Key::Right, KeyRepeat::Yes, Action::Pan(PAN_STEP, 0)),
            (Key::Up, KeyRepeat::Yes, Action::Pan(0, -PAN_STEP)),
            (Key::Down, KeyRepeat::Yes, Action::Pan(0, PAN_STEP)),
        ];
        bindings
            .into_iter()
            .filter(|&(key, repeat, _)| self.window.is_key_pressed(key, repeat))
            .map(|(_, _, action)| action)
            .collect()
    }
}
