//! Gallery - static image layouts
//!
//! Draws one of the layout presets (`framed_pair` or `stacked`) with the
//! images named in the `[gallery.images]` config table. Nothing moves, so
//! frames are only drawn when the window asks for one.

use std::process::ExitCode;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use spritebox::config::AppConfig;
use spritebox::input::{InputAction, InputMapper};
use spritebox::layout::Layout;
use spritebox::systems::{GallerySystem, RenderError, RenderSystem, WindowSystem};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    gallery: Option<GallerySystem>,
    failed: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window: None,
            render: None,
            gallery: None,
            failed: false,
        }
    }

    /// Create window, GPU state and load every image in the layout
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window_config = &self.config.window;
        let window = WindowSystem::create(event_loop, window_config)?;

        let mut render = RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            window_config.width,
            window_config.height,
            window_config.vsync,
        )?;

        let layout = Layout::preset(self.config.gallery.layout);
        let assets = &self.config.assets;
        let gallery = GallerySystem::new(
            &layout,
            &self.config.gallery.images,
            window_config.width,
            window_config.height,
            |file| render.load_texture(assets.path_of(file)),
        )?;
        log::info!(
            "Layout {:?}: {} sprites, {} textures",
            self.config.gallery.layout,
            gallery.draws().len(),
            render.texture_count()
        );

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        self.gallery = Some(gallery);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.start(event_loop) {
                log::error!("Failed to start: {}", e);
                self.failed = true;
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if InputMapper::map_keyboard(key, event.state) == Some(InputAction::Quit) {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(render), Some(gallery)) = (&mut self.render, &self.gallery) else {
                    return;
                };

                match render.render_frame(gallery.draws()) {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => {
                        render.recover_surface();
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        self.failed = true;
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("{}", e),
                }
            }

            _ => {}
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();
    log::info!("Starting gallery");

    let config = AppConfig::load_for("gallery").unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    if app.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
