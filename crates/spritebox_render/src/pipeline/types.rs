//! GPU-compatible data types for the sprite pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// Per-sprite instance data
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Destination rectangle in pixels: x, y, width, height
    pub rect: [f32; 4],
}

/// Screen uniforms (must match sprite.wgsl ScreenUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Logical screen size in pixels
    pub screen_size: [f32; 2],
    /// Padding to 16 bytes
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen_size: [width.max(1) as f32, height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Two triangles per sprite
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Instance slots allocated up front; the buffer grows on demand
pub const INITIAL_INSTANCE_CAPACITY: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_sprite_instance_size() {
        assert_eq!(size_of::<SpriteInstance>(), 16);
    }

    #[test]
    fn test_screen_uniforms_size() {
        assert_eq!(size_of::<ScreenUniforms>(), 16);
    }

    #[test]
    fn test_screen_uniforms_never_zero() {
        let u = ScreenUniforms::new(0, 0);
        assert_eq!(u.screen_size, [1.0, 1.0]);
    }
}
