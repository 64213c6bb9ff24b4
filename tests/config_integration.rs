//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use spritebox::config::{AppConfig, LayoutKind};
use spritebox::layout::Layout;
use spritebox_render::Rect;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SPRITEBOX_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SPRITEBOX_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_table() {
    std::env::set_var("SPRITEBOX_GALLERY__LAYOUT", "stacked");
    std::env::set_var("SPRITEBOX_BOUNCE__SEED", "42");
    let config = AppConfig::load_for("gallery").unwrap();
    assert_eq!(config.gallery.layout, LayoutKind::Stacked);
    assert_eq!(config.bounce.seed, Some(42));
    std::env::remove_var("SPRITEBOX_GALLERY__LAYOUT");
    std::env::remove_var("SPRITEBOX_BOUNCE__SEED");
}

#[test]
#[serial]
fn test_default_file_loading() {
    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 600);
    assert_eq!(config.bounce.sprite, "ball.png");
    assert_eq!(config.bounce.frame_interval_ms, 10);
    assert_eq!(config.gallery.images["left_frame"], "Frame.png");
}

#[test]
#[serial]
fn test_demo_file_overrides_defaults() {
    let config = AppConfig::load_for("gallery").unwrap();
    assert_eq!(config.window.width, 1000);
    assert_eq!(config.window.height, 600);
    // Untouched sections keep the shared defaults
    assert_eq!(config.bounce.size, 72);

    let config = AppConfig::load_for("bounce").unwrap();
    assert_eq!(config.window.width, 800);
}

#[test]
#[serial]
fn test_stacked_gallery_uses_its_own_window_size() {
    std::env::set_var("SPRITEBOX_GALLERY__LAYOUT", "stacked");
    let config = AppConfig::load_for("gallery").unwrap();
    std::env::remove_var("SPRITEBOX_GALLERY__LAYOUT");

    assert_eq!(config.gallery.layout, LayoutKind::Stacked);
    assert_eq!((config.window.width, config.window.height), (800, 600));

    let rects = Layout::preset(config.gallery.layout)
        .resolve(config.window.width, config.window.height)
        .unwrap();
    assert_eq!(
        rects,
        vec![
            ("top".to_string(), Rect::new(200, 30, 400, 200)),
            ("bottom".to_string(), Rect::new(200, 370, 400, 200)),
        ]
    );
}

#[test]
#[serial]
fn test_explicit_window_size_beats_layout_size() {
    std::env::set_var("SPRITEBOX_GALLERY__LAYOUT", "stacked");
    std::env::set_var("SPRITEBOX_WINDOW__WIDTH", "1200");
    let config = AppConfig::load_for("gallery").unwrap();
    std::env::remove_var("SPRITEBOX_GALLERY__LAYOUT");
    std::env::remove_var("SPRITEBOX_WINDOW__WIDTH");

    assert_eq!(config.window.width, 1200);
    assert_eq!(config.window.height, 600);
}

#[test]
#[serial]
fn test_layout_size_only_applies_to_gallery() {
    std::env::set_var("SPRITEBOX_GALLERY__LAYOUT", "framed_pair");
    let config = AppConfig::load_for("bounce").unwrap();
    std::env::remove_var("SPRITEBOX_GALLERY__LAYOUT");
    assert_eq!(config.window.width, 800);
}

#[test]
#[serial]
fn test_missing_directory_falls_back_to_struct_defaults() {
    let config = AppConfig::load_from("no/such/config/dir", None).unwrap();
    assert_eq!(config.window.title, "2D Rendering");
    assert_eq!(config.gallery.layout, LayoutKind::FramedPair);
}
