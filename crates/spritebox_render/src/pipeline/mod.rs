//! Rendering pipeline components
//!
//! A single textured-quad pipeline. Each sprite is one instance carrying its
//! pixel rectangle; the quad corners are generated in the vertex shader.

pub mod sprite_pipeline;
pub mod types;

pub use sprite_pipeline::{build_instances, SpriteDraw, SpritePipeline};
pub use types::{ScreenUniforms, SpriteInstance, INITIAL_INSTANCE_CAPACITY, QUAD_VERTEX_COUNT};
