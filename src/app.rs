//! Application shell: window creation and the event loop
//!
//! Owns the winit event loop, creates the render engine once a window
//! exists, and drives the per-frame redraw of the static scene.

use anyhow::Context;
use cgmath::Vector3;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::gfx::{
    camera::rig::CameraRig,
    rendering::render_engine::RenderEngine,
    scene::{tank, Scene},
};

/// Top-level application handle
///
/// Created via [`crate::default()`], configured through the builder
/// methods, and consumed by [`ViewerApp::run`].
pub struct ViewerApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
    title: String,
    size: (u32, u32),
    vsync: bool,
}

impl ViewerApp {
    /// Create a new viewer with the default window and tank camera
    ///
    /// The scene starts empty; callers add particles and lines before
    /// calling [`run`](Self::run).
    pub fn new() -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;

        let (width, height) = tank::WINDOW_SIZE;
        let aspect = width as f32 / height as f32;
        let scene = Scene::new(tank::camera(aspect));

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                scene,
                title: tank::WINDOW_TITLE.to_string(),
                size: tank::WINDOW_SIZE,
                vsync: true,
            },
        })
    }

    /// Mutable access to the scene for setup before `run()`
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.app_state.scene
    }

    /// Sets the window title (builder pattern)
    pub fn with_title(mut self, title: &str) -> Self {
        self.app_state.title = title.to_string();
        self
    }

    /// Sets the window size in logical pixels (builder pattern)
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.app_state.size = (width, height);
        self
    }

    /// Enables or disables vsync (builder pattern)
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.app_state.vsync = vsync;
        self
    }

    /// Sets the camera pose, keeping the current aspect ratio (builder pattern)
    ///
    /// Scene variants differ mainly in where the camera sits, so the pose
    /// is a knob alongside the window settings.
    pub fn with_camera(mut self, eye: Vector3<f32>, target: Vector3<f32>) -> Self {
        let aspect = self.app_state.scene.camera.aspect;
        self.app_state.scene.camera = CameraRig::new(eye, target, aspect);
        self
    }

    /// Run the application (consumes self and starts the event loop)
    ///
    /// Blocks until the window is closed or Escape is pressed.
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated abnormally")?;
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.size;
        let attributes = WindowAttributes::default()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let (width, height) = window.inner_size().into();

        let window_clone = window.clone();
        let vsync = self.vsync;
        let renderer = pollster::block_on(async move {
            RenderEngine::new(window_clone, width, height, vsync).await
        });

        let mut renderer = match renderer {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        // The window manager may hand us a different size than requested
        self.scene.camera.resize_projection(width, height);
        self.scene.update();
        renderer.update(&self.scene);
        renderer.prepare_scene(&self.scene);

        self.render_engine = Some(renderer);
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        let Some(window) = self.window.as_ref() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene.camera.resize_projection(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.scene.update();
                render_engine.update(&self.scene);

                match render_engine.render_frame() {
                    Ok(()) => {}
                    // The surface contents need to be rebuilt; reconfigure
                    // at the current size and draw again next frame.
                    Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                        let size = window.inner_size();
                        render_engine.resize(size.width, size.height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("surface out of memory, exiting");
                        event_loop.exit();
                    }
                    Err(e) => {
                        log::warn!("skipping frame: {e}");
                    }
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds the app state directly so tests run without a display server
    fn app() -> ViewerApp {
        ViewerApp {
            event_loop: None,
            app_state: AppState {
                window: None,
                render_engine: None,
                scene: Scene::new(tank::camera(1.0)),
                title: tank::WINDOW_TITLE.to_string(),
                size: tank::WINDOW_SIZE,
                vsync: true,
            },
        }
    }

    #[test]
    fn test_builder_knobs_update_window_settings() {
        let app = app()
            .with_title("Tank Variant")
            .with_window_size(800, 600)
            .with_vsync(false);
        assert_eq!(app.app_state.title, "Tank Variant");
        assert_eq!(app.app_state.size, (800, 600));
        assert!(!app.app_state.vsync);
    }

    #[test]
    fn test_with_camera_sets_pose_and_keeps_aspect() {
        let app = app().with_camera(Vector3::new(0.0, 1.0, 8.0), Vector3::new(0.0, 1.0, 0.0));
        let camera = &app.app_state.scene.camera;
        assert_eq!(camera.eye, Vector3::new(0.0, 1.0, 8.0));
        assert_eq!(camera.target, Vector3::new(0.0, 1.0, 0.0));
        assert!((camera.aspect - 1.0).abs() < f32::EPSILON);
        assert_eq!(camera.uniform.view_position, [0.0, 1.0, 8.0, 1.0]);
    }

    #[test]
    fn test_run_with_consumed_event_loop_errors() {
        let result = app().run();
        assert!(result.is_err());
    }
}
