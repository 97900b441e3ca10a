//! One renderer per shading program, in the prepare/render shape: `prepare`
//! uploads this frame's instances (capped at capacity), `render` records the
//! draw into an open pass.

use wgpu::util::DeviceExt;

use super::camera::CameraBinding;
use super::pipeline::{create_program_pipeline, ProgramPipelineDesc};
use super::texture::GpuTexture;
use crate::expand::RECT_VERTEX_COUNT;
use crate::instance::{
    cap_instances, BorderedInstance, ColoredVertex, OffsetInstance, PositionVertex,
    TexturedVertex, TintedInstance, RECT_INDICES,
};
use crate::program::HEX_TILE_VERTICES;
use crate::scene::QuadBatch;
use crate::shaders::{
    BORDERED_RECT_SHADER, HEX_TILE_SHADER, SPRITE_SHADER, TINT_SHADER, TRIANGLE_SHADER,
};
use crate::texture::{Sampler, Texture2d};

// ---------------------------------------------------------------------------
// Instance buffer
// ---------------------------------------------------------------------------

/// Fixed-capacity per-instance vertex buffer.
struct InstanceBuffer {
    label: &'static str,
    buffer: wgpu::Buffer,
    capacity: u32,
    count: u32,
}

impl InstanceBuffer {
    fn new<T: bytemuck::Pod>(device: &wgpu::Device, label: &'static str, capacity: u32) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: u64::from(capacity.max(1)) * std::mem::size_of::<T>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            label,
            buffer,
            capacity,
            count: 0,
        }
    }

    fn write<T: bytemuck::Pod>(&mut self, queue: &wgpu::Queue, instances: &[T]) {
        let kept = cap_instances(instances, self.capacity as usize, self.label);
        self.count = kept.len() as u32;
        if !kept.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(kept));
        }
    }
}

/// Records a per-frame buffer needs for `len` instances under the cap.
pub(crate) fn batch_capacity(len: usize, max_instances: u32) -> u32 {
    u32::try_from(len).map_or(max_instances, |len| len.min(max_instances))
}

fn index_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&RECT_INDICES),
        usage: wgpu::BufferUsages::INDEX,
    })
}

// ---------------------------------------------------------------------------
// Sprites
// ---------------------------------------------------------------------------

/// Textured sprites sharing one texture and one edge length.
pub struct SpriteRenderer {
    pipeline: wgpu::RenderPipeline,
    texture: GpuTexture,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instances: InstanceBuffer,
}

impl SpriteRenderer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        camera: &CameraBinding,
        texture: &Texture2d,
        sampler: &Sampler,
        size: f32,
        max_instances: u32,
    ) -> Self {
        let texture = GpuTexture::upload(device, queue, texture, sampler);
        let pipeline = create_program_pipeline(
            device,
            &ProgramPipelineDesc {
                label: "sprite",
                shader_source: SPRITE_SHADER,
                format,
                bind_group_layouts: &[camera.layout(), texture.layout()],
                buffers: &[TexturedVertex::layout(), OffsetInstance::layout()],
            },
        );
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sprite vertices"),
            contents: bytemuck::cast_slice(&TexturedVertex::centered_quad(size)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            texture,
            vertex_buffer,
            index_buffer: index_buffer(device, "sprite indices"),
            instances: InstanceBuffer::new::<OffsetInstance>(device, "sprites", max_instances),
        }
    }

    pub fn prepare(&mut self, queue: &wgpu::Queue, instances: &[OffsetInstance]) {
        self.instances.write(queue, instances);
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, camera: &CameraBinding) {
        if self.instances.count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera.bind_group(), &[]);
        pass.set_bind_group(1, self.texture.bind_group(), &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instances.buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..RECT_INDICES.len() as u32, 0, 0..self.instances.count);
    }
}

// ---------------------------------------------------------------------------
// Flat-tinted quads
// ---------------------------------------------------------------------------

struct QuadBuffers {
    vertex_buffer: wgpu::Buffer,
    instances: InstanceBuffer,
}

/// Flat-tinted quads. Each size gets its own vertex buffer and an instance
/// buffer sized to that batch.
pub struct TintRenderer {
    pipeline: wgpu::RenderPipeline,
    index_buffer: wgpu::Buffer,
    batches: Vec<QuadBuffers>,
    max_instances: u32,
}

impl TintRenderer {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        camera: &CameraBinding,
        max_instances: u32,
    ) -> Self {
        let pipeline = create_program_pipeline(
            device,
            &ProgramPipelineDesc {
                label: "tint",
                shader_source: TINT_SHADER,
                format,
                bind_group_layouts: &[camera.layout()],
                buffers: &[PositionVertex::layout(), TintedInstance::layout()],
            },
        );

        Self {
            pipeline,
            index_buffer: index_buffer(device, "quad indices"),
            batches: Vec::new(),
            max_instances,
        }
    }

    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, batches: &[QuadBatch]) {
        self.batches = batches
            .iter()
            .map(|batch| {
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("quad vertices"),
                    contents: bytemuck::cast_slice(&PositionVertex::rect(
                        batch.size[0],
                        batch.size[1],
                    )),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let capacity = batch_capacity(batch.instances.len(), self.max_instances);
                let mut instances =
                    InstanceBuffer::new::<TintedInstance>(device, "quads", capacity);
                instances.write(queue, &batch.instances);
                QuadBuffers {
                    vertex_buffer,
                    instances,
                }
            })
            .collect();
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, camera: &CameraBinding) {
        if self.batches.iter().all(|b| b.instances.count == 0) {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera.bind_group(), &[]);
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        for batch in &self.batches {
            if batch.instances.count == 0 {
                continue;
            }
            pass.set_vertex_buffer(0, batch.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, batch.instances.buffer.slice(..));
            pass.draw_indexed(0..RECT_INDICES.len() as u32, 0, 0..batch.instances.count);
        }
    }
}

// ---------------------------------------------------------------------------
// Bordered panels
// ---------------------------------------------------------------------------

/// Bordered rectangles expanded in the vertex shader; no vertex buffer.
pub struct BorderedRectRenderer {
    pipeline: wgpu::RenderPipeline,
    instances: InstanceBuffer,
}

impl BorderedRectRenderer {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        camera: &CameraBinding,
        max_instances: u32,
    ) -> Self {
        let pipeline = create_program_pipeline(
            device,
            &ProgramPipelineDesc {
                label: "bordered rect",
                shader_source: BORDERED_RECT_SHADER,
                format,
                bind_group_layouts: &[camera.layout()],
                buffers: &[BorderedInstance::layout()],
            },
        );

        Self {
            pipeline,
            instances: InstanceBuffer::new::<BorderedInstance>(device, "panels", max_instances),
        }
    }

    pub fn prepare(&mut self, queue: &wgpu::Queue, instances: &[BorderedInstance]) {
        self.instances.write(queue, instances);
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, camera: &CameraBinding) {
        if self.instances.count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera.bind_group(), &[]);
        pass.set_vertex_buffer(0, self.instances.buffer.slice(..));
        pass.draw(0..RECT_VERTEX_COUNT, 0..self.instances.count);
    }
}

// ---------------------------------------------------------------------------
// Hex tiles
// ---------------------------------------------------------------------------

pub struct HexTileRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    instances: InstanceBuffer,
}

impl HexTileRenderer {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        camera: &CameraBinding,
        max_instances: u32,
    ) -> Self {
        let pipeline = create_program_pipeline(
            device,
            &ProgramPipelineDesc {
                label: "hex tile",
                shader_source: HEX_TILE_SHADER,
                format,
                bind_group_layouts: &[camera.layout()],
                buffers: &[PositionVertex::layout(), TintedInstance::layout()],
            },
        );
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("hex tile vertices"),
            contents: bytemuck::cast_slice(&HEX_TILE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            instances: InstanceBuffer::new::<TintedInstance>(device, "tiles", max_instances),
        }
    }

    pub fn prepare(&mut self, queue: &wgpu::Queue, instances: &[TintedInstance]) {
        self.instances.write(queue, instances);
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, camera: &CameraBinding) {
        if self.instances.count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera.bind_group(), &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instances.buffer.slice(..));
        pass.draw(0..HEX_TILE_VERTICES.len() as u32, 0..self.instances.count);
    }
}

// ---------------------------------------------------------------------------
// Raw triangles
// ---------------------------------------------------------------------------

/// Clip-space colored triangles; no camera, no instancing.
pub struct TriangleRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl TriangleRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let pipeline = create_program_pipeline(
            device,
            &ProgramPipelineDesc {
                label: "triangle",
                shader_source: TRIANGLE_SHADER,
                format,
                bind_group_layouts: &[],
                buffers: &[ColoredVertex::layout()],
            },
        );

        Self {
            pipeline,
            vertex_buffer: None,
            vertex_count: 0,
        }
    }

    pub fn prepare(&mut self, device: &wgpu::Device, vertices: &[ColoredVertex]) {
        self.vertex_count = vertices.len() as u32;
        self.vertex_buffer = (!vertices.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("triangle vertices"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        let Some(vertex_buffer) = &self.vertex_buffer else {
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}
