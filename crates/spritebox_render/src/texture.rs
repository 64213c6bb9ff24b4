//! GPU textures loaded from image files
//!
//! [`TextureStore`] uploads decoded images and hands out generational
//! [`TextureKey`]s. Loading the same path twice returns the key of the
//! texture already uploaded.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use slotmap::{new_key_type, SlotMap};
use wgpu::util::DeviceExt;

use crate::asset::{AssetError, ImageData};

new_key_type! {
    /// Key to a texture in a [`TextureStore`]
    pub struct TextureKey;
}

/// Bind group layout shared by every sprite texture: texture + sampler
pub fn texture_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Sprite Texture Bind Group Layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// An uploaded texture with its bind group
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
}

/// All textures loaded by a demo
pub struct TextureStore {
    textures: SlotMap<TextureKey, GpuTexture>,
    path_index: HashMap<PathBuf, TextureKey>,
    sampler: wgpu::Sampler,
}

impl TextureStore {
    /// Create an empty store with a linear clamp-to-edge sampler
    pub fn new(device: &wgpu::Device) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Sprite Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            textures: SlotMap::with_key(),
            path_index: HashMap::new(),
            sampler,
        }
    }

    /// Load an image file into a texture, or return the existing key if the
    /// path was loaded before
    ///
    /// # Errors
    ///
    /// Returns an [`AssetError`] if the file cannot be read or decoded.
    pub fn load(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        path: impl AsRef<Path>,
    ) -> Result<TextureKey, AssetError> {
        let path = path.as_ref().to_path_buf();
        if let Some(key) = self.key_for_path(&path) {
            log::debug!("Texture '{}' already loaded", path.display());
            return Ok(key);
        }

        let image = ImageData::load_from_file(&path)?;
        let label = path.display().to_string();
        let key = self.insert_image(device, queue, layout, &label, &image);
        self.path_index.insert(path, key);

        log::info!("Loaded texture '{}' ({}x{})", label, image.width, image.height);
        Ok(key)
    }

    /// Upload already decoded pixels
    pub fn insert_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        image: &ImageData,
    ) -> TextureKey {
        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width: image.width,
                    height: image.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &image.pixels,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        self.textures.insert(GpuTexture {
            texture,
            view,
            bind_group,
            width: image.width,
            height: image.height,
        })
    }

    /// Look up a texture
    pub fn get(&self, key: TextureKey) -> Option<&GpuTexture> {
        self.textures.get(key)
    }

    /// Key previously assigned to `path`, if loaded
    pub fn key_for_path(&self, path: impl AsRef<Path>) -> Option<TextureKey> {
        self.path_index.get(path.as_ref()).copied()
    }

    /// Number of loaded textures
    pub fn count(&self) -> usize {
        self.textures.len()
    }
}
