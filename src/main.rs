//! Wavescape - an animated, shader-colored ocean plane viewed from an
//! orbiting camera, with a live tuning panel for the wave and camera
//! parameters.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Theme, Window, WindowId},
};

use wavescape::camera::CameraSystem;
use wavescape::cli::Args;
use wavescape::ocean::{OceanMesh, GRID_SUBDIVISIONS};
use wavescape::panel;
use wavescape::params::{CameraOrbit, RenderConfig, WaveParams};
use wavescape::rendering::{OceanUniforms, RenderSystem};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    gui_state: Option<egui_winit::State>,

    // Scene
    mesh: OceanMesh,
    camera: CameraSystem,
    waves: WaveParams,

    // Configuration
    render_config: RenderConfig,
    sky_path: PathBuf,

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(args: Args) -> Self {
        let mut render_config = RenderConfig::default();
        render_config.set_size(args.width, args.height);

        Self {
            window: None,
            render_system: None,
            gui_state: None,
            mesh: OceanMesh::new(GRID_SUBDIVISIONS),
            camera: CameraSystem::new(CameraOrbit::default()),
            waves: WaveParams::default(),
            render_config,
            sky_path: args.sky,
            start_time: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        // Reschedule: one redraw per completed frame
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Wavescape")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        // Asset loading and GPU setup happen once, before the first frame.
        // A missing or corrupt sky image is fatal.
        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.mesh,
            &self.sky_path,
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("failed to initialize rendering: {e:#}");
                event_loop.exit();
                return;
            }
        };

        let gui_context = egui::Context::default();
        let viewport_id = gui_context.viewport_id();
        let gui_state = egui_winit::State::new(
            gui_context,
            viewport_id,
            &window,
            Some(window.scale_factor() as f32),
            Some(Theme::Dark),
            None,
        );

        let inner_size = window.inner_size();
        self.render_config.set_size(inner_size.width, inner_size.height);

        log::info!("wavescape is running, press ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.gui_state = Some(gui_state);
        self.start_time = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(gui_state), Some(window)) = (self.gui_state.as_mut(), self.window.as_ref()) {
            if gui_state.on_window_event(window, &event).consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.render_config.set_size(width, height);
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(width, height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

impl App {
    /// Render a single frame
    fn render_frame(&mut self) {
        let (Some(render_system), Some(gui_state), Some(window)) = (
            self.render_system.as_mut(),
            self.gui_state.as_mut(),
            self.window.as_ref(),
        ) else {
            return;
        };

        // Elapsed time since animation start; the driver's only write into
        // the shared parameter state is this value
        let time_s = self.start_time.elapsed().as_secs_f32();

        // Run the panel first so this frame sees fresh edits
        let gui_input = gui_state.take_egui_input(window);
        gui_state.egui_ctx().begin_pass(gui_input);
        panel::draw(gui_state.egui_ctx(), &mut self.waves, self.camera.orbit_mut());
        let egui::FullOutput {
            platform_output,
            textures_delta,
            shapes,
            pixels_per_point,
            ..
        } = gui_state.egui_ctx().end_pass();
        gui_state.handle_platform_output(window, platform_output);
        let paint_jobs = gui_state.egui_ctx().tessellate(shapes, pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [
                self.render_config.window_width,
                self.render_config.window_height,
            ],
            pixels_per_point: window.scale_factor() as f32,
        };

        // Derive the camera pose and shader uniforms from elapsed time
        let (view_proj, _camera_pos) = self
            .camera
            .create_view_proj_matrix(time_s, &self.render_config);

        let uniforms = OceanUniforms::new(view_proj, &self.waves, time_s);
        render_system.update_uniforms(&uniforms);

        match render_system.render(paint_jobs, textures_delta, screen_descriptor) {
            Ok(()) => {}
            // Stale surface: reconfigure and let the next frame retry
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.resize(
                    self.render_config.window_width,
                    self.render_config.window_height,
                );
            }
            // A single dropped frame is invisible; just log it
            Err(e) => log::error!("render error: {e:?}"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut app = App::new(args);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
