use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::input::{Axis, InputAction, ACTIVE_BUMP_DEGREES};
use crate::mesh::MeshLibrary;
use crate::render::GpuRenderer;
use crate::scene::Scene;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_SIZE: u32 = 1024;

/// Windowed frontend: owns the window, the GPU renderer and the scene, and
/// translates raw window events into the scene's discrete input actions.
pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    scene: Scene,
    meshes: MeshLibrary,
    last_frame_time: Instant,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            scene: Scene::new(),
            meshes: MeshLibrary::generate(),
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    pub fn run() -> anyhow::Result<()> {
        let event_loop = EventLoop::new()?;
        let mut app = App::new();

        log::info!(
            "controls: left/middle/right click bump X/Y/Z, 1/2/3 pick the active axis, \
             +/- adjust it, q or Escape quits"
        );
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            log::debug!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn dispatch(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        self.scene.handle_action(action);
        if !self.scene.running {
            event_loop.exit();
        }
    }

    fn action_for_key(key: KeyCode) -> Option<InputAction> {
        match key {
            KeyCode::Escape | KeyCode::KeyQ => Some(InputAction::Quit),
            KeyCode::Digit1 => Some(InputAction::SelectAxis(Axis::X)),
            KeyCode::Digit2 => Some(InputAction::SelectAxis(Axis::Y)),
            KeyCode::Digit3 => Some(InputAction::SelectAxis(Axis::Z)),
            KeyCode::Equal | KeyCode::NumpadAdd => {
                Some(InputAction::BumpActive(ACTIVE_BUMP_DEGREES))
            }
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                Some(InputAction::BumpActive(-ACTIVE_BUMP_DEGREES))
            }
            _ => None,
        }
    }

    fn action_for_button(button: MouseButton) -> Option<InputAction> {
        match button {
            MouseButton::Left => Some(InputAction::BumpAxis(Axis::X)),
            MouseButton::Middle => Some(InputAction::BumpAxis(Axis::Y)),
            MouseButton::Right => Some(InputAction::BumpAxis(Axis::Z)),
            _ => None,
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.update_fps(delta);

        self.scene.tick();
        self.scene.update();

        if let Some(renderer) = &mut self.renderer {
            self.scene.render(renderer);
            if let Err(e) = renderer.render() {
                log::error!("render error: {}", e);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Bicycle Rider")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_SIZE,
                        INITIAL_WINDOW_SIZE,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer =
                match pollster::block_on(GpuRenderer::new(window.clone(), &self.meshes)) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Failed to initialize renderer: {}", e);
                        event_loop.exit();
                        return;
                    }
                };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.dispatch(InputAction::Quit, event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                if let Some(action) = Self::action_for_key(key) {
                    self.dispatch(action, event_loop);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                if let Some(action) = Self::action_for_button(button) {
                    self.dispatch(action, event_loop);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
