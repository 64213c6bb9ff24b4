//! spritebox - sprite demos on winit + wgpu
//!
//! Two small programs share this library:
//! - `gallery` draws a static layout of images
//! - `bounce` animates one sprite bouncing off the window edges

pub mod config;
pub mod input;
pub mod layout;
pub mod systems;
