//! Application systems
//!
//! Window, rendering and per-demo frame logic, kept out of the binaries so
//! the non-GPU parts can be tested.

mod bounce;
mod frame_pacer;
mod gallery;
mod render;
mod window;

pub use bounce::BounceSystem;
pub use frame_pacer::FramePacer;
pub use gallery::{GalleryError, GallerySystem};
pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
