//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Sprite pipeline and loaded textures
//! - Frame rendering

use std::path::Path;
use std::sync::Arc;
use winit::window::Window;
use spritebox_render::{
    AssetError, ContextError, RenderContext, SpriteDraw, SpritePipeline, TextureKey, TextureStore,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU set-up failed
    Context(ContextError),
    /// Surface was lost (window moved between displays, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU initialisation failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: SpritePipeline,
    textures: TextureStore,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// Sprite rectangles are given in a `screen_width` x `screen_height`
    /// logical pixel space, independent of the surface's physical size.
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        screen_width: u32,
        screen_height: u32,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = SpritePipeline::new(&context.device, context.config.format);
        pipeline.update_screen(&context.queue, screen_width, screen_height);
        let textures = TextureStore::new(&context.device);

        Ok(Self {
            context,
            pipeline,
            textures,
            clear_color: render_config.wgpu_clear_color(),
        })
    }

    /// Load an image file into a texture
    pub fn load_texture(&mut self, path: impl AsRef<Path>) -> Result<TextureKey, AssetError> {
        self.textures.load(
            &self.context.device,
            &self.context.queue,
            self.pipeline.texture_layout(),
            path,
        )
    }

    /// Number of textures loaded so far
    pub fn texture_count(&self) -> usize {
        self.textures.count()
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface after [`RenderError::SurfaceLost`]
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(&mut self, draws: &[SpriteDraw]) -> Result<(), RenderError> {
        self.pipeline
            .prepare(&self.context.device, &self.context.queue, draws);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Sprite Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, &self.textures, draws, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert!(format!("{}", RenderError::from(ContextError::AdapterNotFound))
            .contains("No compatible GPU adapter"));
    }
}
