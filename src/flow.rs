//! Application event loop.
//!
//! Each frame follows the same pattern: window/keyboard events mutate the
//! control state, `RedrawRequested` computes the delta time since the
//! previous frame, advances the scene animation one tick and renders
//! synchronously. Mesh loading happens once, ahead of the first frame;
//! the loop never starts if a load fails.

use std::sync::Arc;

use instant::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    context::Context,
    controls::Controls,
    data_structures::{scene::Scene, texture::Texture},
    render::GpuScene,
    resources,
};

/// Everything a running viewer owns: GPU context, scene state, controls
/// and the uploaded buffers.
pub struct AppState {
    ctx: Context,
    scene: Scene,
    controls: Controls,
    gpu: GpuScene,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let ctx = Context::new(window).await?;

        let meshes = resources::load_scene_meshes().await?;
        let packed = resources::pack_scene(&meshes)?;
        log::info!(
            "packed {} meshes, {} floats, color block at byte {}",
            packed.ranges.len(),
            packed.data.len(),
            packed.color_offset
        );
        let gpu = GpuScene::new(&ctx, &packed);

        Ok(Self {
            ctx,
            scene: Scene::new(),
            controls: Controls::new(),
            gpu,
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            self.ctx
                .surface
                .configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture = Texture::create_depth_texture(
                &self.ctx.device,
                [self.ctx.config.width, self.ctx.config.height],
                "depth_texture",
            );
        }
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    state: Option<AppState>,
    last_time: Instant,
}

impl App {
    fn new() -> anyhow::Result<Self> {
        let async_runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            async_runtime,
            state: None,
            last_time: Instant::now(),
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window_attributes = Window::default_attributes().with_title("menagerie");
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match self.async_runtime.block_on(AppState::new(window)) {
            Ok(mut state) => {
                let size = state.ctx.window.inner_size();
                state.resize(size.width, size.height);
                state.ctx.window.request_redraw();
                self.last_time = Instant::now();
                self.state = Some(state);
            }
            // A failed or missing mesh load is terminal for the session.
            Err(e) => {
                log::error!("initialization failed: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        state.controls.handle_window_events(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                state.ctx.window.request_redraw();
                if !state.is_surface_configured {
                    return;
                }

                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();

                // Control writes land before the tick, so a UI change is
                // visible by the next frame at the latest.
                state.scene.spin_enabled = state.controls.spin;
                state.scene.tick(dt, state.controls.heart_y);

                match state
                    .gpu
                    .render(&mut state.ctx, &state.scene, &state.controls)
                {
                    Ok(()) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("unable to render: {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Run the viewer until its window closes.
pub fn run() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        eprintln!("Warning: could not initialize logger: {}", e);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new()?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
