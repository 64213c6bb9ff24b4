//! Sprite rendering library
//!
//! This crate provides the wgpu side of the spritebox demos: a surface and
//! device wrapper, image loading into GPU textures, and a pipeline that
//! draws textured rectangles given in window pixels.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`asset::ImageData`] - Decoded RGBA8 image ready for upload
//! - [`texture::TextureStore`] - Loaded GPU textures keyed by [`texture::TextureKey`]
//! - [`pipeline::SpritePipeline`] - Textured quad pipeline
//! - [`rect::Rect`] / [`SpriteDraw`] - What to draw and where

pub mod asset;
pub mod context;
pub mod pipeline;
pub mod rect;
pub mod texture;

pub use asset::{AssetError, ImageData};
pub use context::{ContextError, RenderContext};
pub use pipeline::{SpriteDraw, SpritePipeline};
pub use rect::Rect;
pub use texture::{GpuTexture, TextureKey, TextureStore};
