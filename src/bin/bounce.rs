//! Bounce - one sprite bouncing off the window edges
//!
//! The ball starts near the centre with a random velocity and advances one
//! tick per frame interval, reflecting off whichever wall it reaches.

use std::process::ExitCode;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use spritebox::config::AppConfig;
use spritebox::input::{InputAction, InputMapper};
use spritebox::systems::{BounceSystem, FramePacer, RenderError, RenderSystem, WindowSystem};
use spritebox_sim::{Boundary, SimRng};

/// Ticks between window title refreshes
const TITLE_REFRESH_TICKS: u64 = 25;

/// Main application state
struct App {
    config: AppConfig,
    /// Seeded once at start; only used to place the ball
    rng: SimRng,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    bounce: Option<BounceSystem>,
    pacer: FramePacer,
    failed: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let rng = match config.bounce.seed {
            Some(seed) => SimRng::seeded(seed),
            None => SimRng::from_time(),
        };
        log::info!("Random seed: {}", rng.seed());

        let pacer = FramePacer::from_millis(config.bounce.frame_interval_ms);

        Self {
            config,
            rng,
            window: None,
            render: None,
            bounce: None,
            pacer,
            failed: false,
        }
    }

    /// Create window, GPU state, sprite texture and simulation
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

        let sprite_path = self.config.assets.path_of(&self.config.bounce.sprite);
        let sprite = render.load_texture(&sprite_path)?;

        let boundary = Boundary::from((window_config.width, window_config.height));
        let bounce = BounceSystem::new(&self.config.bounce, boundary, &mut self.rng, sprite)?;
        log::info!("Ball placed: {}", bounce.status());

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        self.bounce = Some(bounce);
        Ok(())
    }

    fn quit(&self, event_loop: &ActiveEventLoop) {
        log::info!("Quit requested");
        event_loop.exit();
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
            WindowEvent::CloseRequested => self.quit(event_loop),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if InputMapper::map_keyboard(key, event.state) == Some(InputAction::Quit) {
                        self.quit(event_loop);
                    }
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(render), Some(bounce)) = (&mut self.render, &mut self.bounce) else {
                    return;
                };

                if self.pacer.try_tick(Instant::now()) {
                    bounce.update();
                    if bounce.simulation().ticks() % TITLE_REFRESH_TICKS == 0 {
                        if let Some(window) = &self.window {
                            window.update_title(&bounce.status());
                        }
                    }
                }

                match render.render_frame(&[bounce.draw()]) {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => render.recover_surface(),
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

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        if self.pacer.is_due(Instant::now()) {
            window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else if let Some(deadline) = self.pacer.next_deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();
    log::info!("Starting bounce");

    let config = AppConfig::load_for("bounce").unwrap_or_else(|e| {
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
