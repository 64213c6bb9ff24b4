//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//!    - gallery only: the window size of the selected layout
//! 2. `config/<demo>.toml` (per-demo overrides, e.g. `config/gallery.toml`)
//! 3. `config/user.toml` (gitignored, user overrides)
//! 4. Environment variables (`SPRITEBOX_SECTION__KEY`)
//!
//! Everything here is read once at start-up; nothing is reloaded while a demo runs.

use figment::{Figment, providers::{Env, Format, Serialized, Toml}};
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Asset locations
    #[serde(default)]
    pub assets: AssetConfig,
    /// Bouncing ball demo
    #[serde(default)]
    pub bounce: BounceConfig,
    /// Static image gallery demo
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl AppConfig {
    /// Load the shared configuration from `config/`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config", None)
    }

    /// Load configuration for one demo, layering `config/<demo>.toml` over the defaults
    pub fn load_for(demo: &str) -> Result<Self, ConfigError> {
        Self::load_from("config", Some(demo))
    }

    /// Load configuration from a specific config directory
    ///
    /// For the gallery the window size of the chosen layout sits just above
    /// `default.toml`, so the demo file, user file and environment can still
    /// override it.
    pub fn load_from<P: AsRef<Path>>(config_dir: P, demo: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let mut layout_size = None;
        if demo == Some("gallery") {
            let layout: LayoutKind = Self::layered(config_dir, demo, None)
                .extract_inner("gallery.layout")
                .unwrap_or_default();
            layout_size = Some(layout.window_size());
        }

        Self::layered(config_dir, demo, layout_size)
            .extract()
            .map_err(ConfigError::from)
    }

    fn layered(config_dir: &Path, demo: Option<&str>, window_size: Option<(u32, u32)>) -> Figment {
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if let Some((width, height)) = window_size {
            figment = figment
                .merge(Serialized::default("window.width", width))
                .merge(Serialized::default("window.height", height));
        }

        if let Some(demo) = demo {
            let demo_path = config_dir.join(format!("{}.toml", demo));
            if demo_path.exists() {
                figment = figment.merge(Toml::file(&demo_path));
            }
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SPRITEBOX_WINDOW__TITLE=Test -> window.title = "Test"
        figment.merge(Env::prefixed("SPRITEBOX_").split("__"))
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Drawable width in pixels; also the bounce boundary width
    pub width: u32,
    /// Drawable height in pixels; also the bounce boundary height
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "2D Rendering".to_string(),
            width: 800,
            height: 600,
            vsync: true,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Clear color [r, g, b, a]
    pub clear_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            clear_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl RenderingConfig {
    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        let c = &self.clear_color;
        wgpu::Color {
            r: c[0] as f64,
            g: c[1] as f64,
            b: c[2] as f64,
            a: c[3] as f64,
        }
    }
}

/// Asset locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory image file names are resolved against
    pub dir: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: "Assets".to_string(),
        }
    }
}

impl AssetConfig {
    /// Full path of an image file
    pub fn path_of(&self, file: &str) -> PathBuf {
        Path::new(&self.dir).join(file)
    }
}

/// Bouncing ball demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BounceConfig {
    /// Ball image file, relative to the asset directory
    pub sprite: String,
    /// Ball edge length in pixels
    pub size: u32,
    /// Largest initial speed per axis, pixels per tick
    pub max_speed: i32,
    /// Delay between simulation ticks in milliseconds
    pub frame_interval_ms: u64,
    /// Fixed random seed; seeded from the clock when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            sprite: "ball.png".to_string(),
            size: 72,
            max_speed: 5,
            frame_interval_ms: 10,
            seed: None,
        }
    }
}

/// Which layout table the gallery shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Background with two framed pictures side by side
    #[default]
    FramedPair,
    /// Two pictures stacked top and bottom
    Stacked,
}

impl LayoutKind {
    /// Window size the layout was designed for
    pub const fn window_size(self) -> (u32, u32) {
        match self {
            LayoutKind::FramedPair => (1000, 600),
            LayoutKind::Stacked => (800, 600),
        }
    }
}

/// Static image gallery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Layout to display
    pub layout: LayoutKind,
    /// Image file for each layout entry name
    pub images: BTreeMap<String, String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let images = [
            ("background", "brick11.jpg"),
            ("left_frame", "Frame.png"),
            ("right_frame", "Frame.png"),
            ("left_image", "blender.jpg"),
            ("right_image", "openglcube.png"),
            ("top", "ball.png"),
            ("bottom", "grassfloor.png"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            layout: LayoutKind::default(),
            images,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.bounce.size, 72);
        assert_eq!(config.bounce.max_speed, 5);
        assert_eq!(config.bounce.frame_interval_ms, 10);
        assert!(config.bounce.seed.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("frame_interval_ms"));
        assert!(toml.contains("framed_pair"));
    }

    #[test]
    fn test_layout_kind_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            layout: LayoutKind,
        }
        let w: Wrapper = toml::from_str("layout = \"stacked\"").unwrap();
        assert_eq!(w.layout, LayoutKind::Stacked);
        let w: Wrapper = toml::from_str("layout = \"framed_pair\"").unwrap();
        assert_eq!(w.layout, LayoutKind::FramedPair);
    }

    #[test]
    fn test_layout_window_sizes() {
        assert_eq!(LayoutKind::FramedPair.window_size(), (1000, 600));
        assert_eq!(LayoutKind::Stacked.window_size(), (800, 600));
        assert_eq!(LayoutKind::default(), LayoutKind::FramedPair);
    }

    #[test]
    fn test_asset_path() {
        let assets = AssetConfig::default();
        assert_eq!(assets.path_of("ball.png"), Path::new("Assets").join("ball.png"));
    }

    #[test]
    fn test_clear_color_conversion() {
        let c = RenderingConfig::default().wgpu_clear_color();
        assert_eq!(c, wgpu::Color::WHITE);
    }
}
