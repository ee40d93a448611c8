//! Lantern viewer presented through wgpu + winit

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use super::scene::{Action, Scene};
use crate::config::LanternConfig;
use crate::gpu::{FramePresenter, GpuContext};

const PAN_STEP: i32 = 8;

struct ViewerState {
    scene: Scene,
    gpu_ctx: GpuContext,
    presenter: FramePresenter,
    // Last cursor position in screen (not window) pixels
    cursor: Option<(i32, i32)>,
}

impl ViewerState {
    fn new(window: Arc<Window>, scene: Scene) -> Result<Self, String> {
        let gpu_ctx = GpuContext::new(window)?;
        let (w, h) = scene.frame.size();
        let presenter = FramePresenter::new(&gpu_ctx, w as u32, h as u32);
        Ok(Self {
            scene,
            gpu_ctx,
            presenter,
            cursor: None,
        })
    }

    /// Window pixels to screen pixels; the frame is stretched over the window
    fn window_to_screen(&self, x: f64, y: f64) -> (i32, i32) {
        let (fw, fh) = self.scene.frame.size();
        let (ww, wh) = self.gpu_ctx.size();
        (
            (x * fw as f64 / ww as f64) as i32,
            (y * fh as f64 / wh as f64) as i32,
        )
    }

    fn update_and_render(&mut self) {
        self.scene.update(Instant::now());
        self.scene.render();

        let rgba = self.scene.frame.to_rgba();
        self.presenter
            .upload(&self.gpu_ctx, bytemuck::cast_slice(&rgba));

        if let Err(e) = self.presenter.present(&self.gpu_ctx) {
            log::error!("Present error: {:?}", e);
        }
    }
}

fn key_action(key: KeyCode) -> Option<Action> {
    Some(match key {
        KeyCode::Space => Action::ToggleRunning,
        KeyCode::KeyB => Action::ToggleBreathing,
        KeyCode::KeyJ => Action::ToggleJitter,
        KeyCode::KeyC => Action::ClearWalls,
        KeyCode::Equal | KeyCode::NumpadAdd => Action::WiderBands,
        KeyCode::Minus | KeyCode::NumpadSubtract => Action::NarrowerBands,
        KeyCode::ArrowLeft => Action::Pan(-PAN_STEP, 0),
        KeyCode::ArrowRight => Action::Pan(PAN_STEP, 0),
        KeyCode::ArrowUp => Action::Pan(0, -PAN_STEP),
        KeyCode::ArrowDown => Action::Pan(0, PAN_STEP),
        _ => return None,
    })
}

struct GpuViewerApp {
    config: LanternConfig,
    state: Option<ViewerState>,
}

impl ApplicationHandler for GpuViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let screen = &self.config.screen;
        let attrs = Window::default_attributes()
            .with_title("Lantern - GPU Viewer (ESC to exit)")
            .with_inner_size(winit::dpi::LogicalSize::new(
                (screen.width * screen.scale) as f64,
                (screen.height * screen.scale) as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let state = Scene::new(self.config.clone())
            .map_err(|e| e.to_string())
            .and_then(|scene| ViewerState::new(window, scene));

        match state {
            Ok(state) => {
                println!("=== Lantern GPU Viewer ===");
                state.scene.print_controls();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("Failed to create viewer state: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => state.gpu_ctx.resize(size.width, size.height),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if key == KeyCode::Escape {
                    event_loop.exit();
                } else if let Some(action) = key_action(key) {
                    state.scene.apply_action(action);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (sx, sy) = state.window_to_screen(position.x, position.y);
                state.cursor = Some((sx, sy));
                state.scene.move_lantern(sx, sy);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some((sx, sy)) = state.cursor {
                    state.scene.toggle_wall_at(sx, sy);
                }
            }

            WindowEvent::RedrawRequested => state.update_and_render(),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.gpu_ctx.request_redraw();
        }
    }
}

pub fn run_gpu_viewer(config: LanternConfig) -> Result<(), String> {
    let event_loop = EventLoop::new().map_err(|e| format!("Failed to create event loop: {}", e))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuViewerApp { config, state: None };
    event_loop
        .run_app(&mut app)
        .map_err(|e| format!("Event loop error: {}", e))?;

    Ok(())
}
