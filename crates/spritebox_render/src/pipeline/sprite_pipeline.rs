//! Sprite pipeline for drawing textured rectangles
//!
//! Draws are issued in list order, so later sprites paint over earlier ones.

use wgpu::util::DeviceExt;

use super::types::{ScreenUniforms, SpriteInstance, INITIAL_INSTANCE_CAPACITY, QUAD_VERTEX_COUNT};
use crate::rect::Rect;
use crate::texture::{texture_bind_group_layout, TextureKey, TextureStore};

/// One sprite to draw this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteDraw {
    pub texture: TextureKey,
    pub rect: Rect,
}

impl SpriteDraw {
    pub fn new(texture: TextureKey, rect: Rect) -> Self {
        Self { texture, rect }
    }
}

/// Instance data for a draw list, in draw order
pub fn build_instances(draws: &[SpriteDraw]) -> Vec<SpriteInstance> {
    draws.iter().map(|d| d.rect.to_instance()).collect()
}

/// Textured quad pipeline
pub struct SpritePipeline {
    pipeline: wgpu::RenderPipeline,
    /// Layout for per-texture bind groups (group 1)
    texture_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
}

impl SpritePipeline {
    /// Create a new sprite pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Sprite Uniform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let texture_layout = texture_bind_group_layout(device);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/sprite.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::instance_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Uniform Buffer"),
            contents: bytemuck::bytes_of(&ScreenUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Sprite Uniform Bind Group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let instance_buffer = Self::create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY);

        Self {
            pipeline,
            texture_layout,
            uniform_buffer,
            uniform_bind_group,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
        }
    }

    fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sprite Instance Buffer"),
            size: (capacity * std::mem::size_of::<SpriteInstance>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Get the vertex buffer layout for SpriteInstance
    fn instance_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // rect: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 0,
                },
            ],
        }
    }

    /// Layout textures must be bound with
    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }

    /// Set the logical screen size that sprite rectangles are expressed in
    pub fn update_screen(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        let uniforms = ScreenUniforms::new(width, height);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Upload instance data for `draws`, growing the buffer if needed
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, draws: &[SpriteDraw]) {
        if draws.len() > self.instance_capacity {
            let capacity = draws.len().next_power_of_two();
            log::debug!("Growing sprite instance buffer to {} slots", capacity);
            self.instance_buffer = Self::create_instance_buffer(device, capacity);
            self.instance_capacity = capacity;
        }
        if !draws.is_empty() {
            let instances = build_instances(draws);
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
    }

    /// Clear `view` and draw the prepared sprites
    ///
    /// `draws` must be the slice last passed to [`prepare`](Self::prepare).
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        textures: &TextureStore,
        draws: &[SpriteDraw],
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sprite Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));

        for (i, draw) in draws.iter().enumerate().take(self.instance_capacity) {
            let Some(texture) = textures.get(draw.texture) else {
                log::warn!("Skipping sprite with unknown texture {:?}", draw.texture);
                continue;
            };
            let instance = i as u32;
            render_pass.set_bind_group(1, &texture.bind_group, &[]);
            render_pass.draw(0..QUAD_VERTEX_COUNT, instance..instance + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_instance_buffer_layout_stride() {
        let layout = SpritePipeline::instance_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<SpriteInstance>() as u64);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
    }

    #[test]
    fn test_build_instances_keeps_draw_order() {
        let mut keys: SlotMap<TextureKey, ()> = SlotMap::with_key();
        let background = keys.insert(());
        let frame = keys.insert(());

        let draws = [
            SpriteDraw::new(background, Rect::screen(1000, 600)),
            SpriteDraw::new(frame, Rect::new(75, 175, 350, 250)),
        ];
        let instances = build_instances(&draws);
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].rect, [0.0, 0.0, 1000.0, 600.0]);
        assert_eq!(instances[1].rect, [75.0, 175.0, 350.0, 250.0]);
    }
}
