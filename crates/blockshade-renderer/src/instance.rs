//! Per-vertex and per-instance records.
//!
//! Every record is `#[repr(C)]` Pod so a slice of them uploads straight into
//! a vertex buffer. Field order is the wire layout; `layout()` describes it
//! to wgpu with the shader locations the matching WGSL program declares.

use blockshade_common::Color;

// ---------------------------------------------------------------------------
// Vertex descriptors
// ---------------------------------------------------------------------------

/// Bare 2D position.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 2],
}

impl PositionVertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }

    /// Two triangles covering `[0,0]-[width,height]`, for indexed drawing
    /// with [`RECT_INDICES`].
    pub fn rect(width: f32, height: f32) -> [Self; 4] {
        [
            Self::new(width, 0.0),
            Self::new(0.0, 0.0),
            Self::new(0.0, height),
            Self::new(width, height),
        ]
    }
}

/// Position plus texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl TexturedVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }

    /// Square sprite of edge `size` centered on the origin, drawn with
    /// [`RECT_INDICES`]. Texture v runs top to bottom.
    pub fn centered_quad(size: f32) -> [Self; 4] {
        let h = size * 0.5;
        [
            Self { position: [h, -h], tex_coords: [1.0, 0.0] },
            Self { position: [-h, -h], tex_coords: [0.0, 0.0] },
            Self { position: [-h, h], tex_coords: [0.0, 1.0] },
            Self { position: [h, h], tex_coords: [1.0, 1.0] },
        ]
    }
}

/// Position plus opaque vertex color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColoredVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl ColoredVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Index list splitting a four-corner rect into two triangles sharing the
/// 0-2 diagonal.
pub const RECT_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ---------------------------------------------------------------------------
// Instance descriptors
// ---------------------------------------------------------------------------

/// Offset-only instance (sprites).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OffsetInstance {
    pub offset: [f32; 2],
}

impl OffsetInstance {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x2];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Offset and tint (hex tiles and flat-tint quads).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TintedInstance {
    pub offset: [f32; 2],
    pub color: Color,
}

impl TintedInstance {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![1 => Float32x2, 2 => Float32x4];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Rectangle with a solid border; its shape comes from the vertex index.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BorderedInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub fill_color: Color,
    pub border_size: f32,
    pub border_color: Color,
}

impl BorderedInstance {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
            0 => Float32x2,
            1 => Float32x2,
            2 => Float32x4,
            3 => Float32,
            4 => Float32x4
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

/// The closed set of per-instance layouts, one per instanced program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstanceDescriptor {
    Offset(OffsetInstance),
    SizedColored(BorderedInstance),
    SizedTinted(TintedInstance),
}

impl InstanceDescriptor {
    /// Raw bytes as they sit in the instance buffer.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            InstanceDescriptor::Offset(i) => bytemuck::bytes_of(i),
            InstanceDescriptor::SizedColored(i) => bytemuck::bytes_of(i),
            InstanceDescriptor::SizedTinted(i) => bytemuck::bytes_of(i),
        }
    }
}

impl From<OffsetInstance> for InstanceDescriptor {
    fn from(i: OffsetInstance) -> Self {
        InstanceDescriptor::Offset(i)
    }
}

impl From<BorderedInstance> for InstanceDescriptor {
    fn from(i: BorderedInstance) -> Self {
        InstanceDescriptor::SizedColored(i)
    }
}

impl From<TintedInstance> for InstanceDescriptor {
    fn from(i: TintedInstance) -> Self {
        InstanceDescriptor::SizedTinted(i)
    }
}

/// Clamp a batch to `max` instances, warning when anything is dropped.
pub fn cap_instances<'a, T>(instances: &'a [T], max: usize, batch: &str) -> &'a [T] {
    if instances.len() > max {
        tracing::warn!(
            batch,
            requested = instances.len(),
            max,
            "instance buffer full, truncating batch"
        );
        &instances[..max]
    } else {
        instances
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sizes() {
        assert_eq!(std::mem::size_of::<PositionVertex>(), 8);
        assert_eq!(std::mem::size_of::<TexturedVertex>(), 16);
        assert_eq!(std::mem::size_of::<ColoredVertex>(), 20);
        assert_eq!(std::mem::size_of::<OffsetInstance>(), 8);
        assert_eq!(std::mem::size_of::<TintedInstance>(), 24);
        assert_eq!(std::mem::size_of::<BorderedInstance>(), 52); // 13 floats
    }

    #[test]
    fn layouts_match_record_strides() {
        assert_eq!(PositionVertex::layout().array_stride, 8);
        assert_eq!(TexturedVertex::layout().array_stride, 16);
        assert_eq!(ColoredVertex::layout().array_stride, 20);
        assert_eq!(OffsetInstance::layout().array_stride, 8);
        assert_eq!(TintedInstance::layout().array_stride, 24);
        assert_eq!(BorderedInstance::layout().array_stride, 52);
    }

    #[test]
    fn instance_layouts_step_per_instance() {
        for layout in [
            OffsetInstance::layout(),
            TintedInstance::layout(),
            BorderedInstance::layout(),
        ] {
            assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        }
        assert_eq!(
            TexturedVertex::layout().step_mode,
            wgpu::VertexStepMode::Vertex
        );
    }

    #[test]
    fn bordered_attribute_offsets_follow_field_order() {
        let offsets: Vec<u64> = BorderedInstance::layout()
            .attributes
            .iter()
            .map(|a| a.offset)
            .collect();
        assert_eq!(offsets, vec![0, 8, 16, 32, 36]);
    }

    #[test]
    fn sprite_locations_do_not_collide() {
        let mut locations: Vec<u32> = TexturedVertex::layout()
            .attributes
            .iter()
            .chain(OffsetInstance::layout().attributes)
            .map(|a| a.shader_location)
            .collect();
        locations.sort_unstable();
        locations.dedup();
        assert_eq!(locations, vec![0, 1, 2]);
    }

    #[test]
    fn rect_corners_cover_extent() {
        let rect = PositionVertex::rect(3.0, 2.0);
        assert_eq!(rect[0].position, [3.0, 0.0]);
        assert_eq!(rect[1].position, [0.0, 0.0]);
        assert_eq!(rect[2].position, [0.0, 2.0]);
        assert_eq!(rect[3].position, [3.0, 2.0]);
    }

    #[test]
    fn centered_quad_spans_size() {
        let quad = TexturedVertex::centered_quad(10.0);
        assert_eq!(quad[1].position, [-5.0, -5.0]);
        assert_eq!(quad[1].tex_coords, [0.0, 0.0]);
        assert_eq!(quad[3].position, [5.0, 5.0]);
        assert_eq!(quad[3].tex_coords, [1.0, 1.0]);
    }

    #[test]
    fn cap_instances_truncates() {
        let items = [1, 2, 3, 4];
        assert_eq!(cap_instances(&items, 2, "test"), &[1, 2]);
        assert_eq!(cap_instances(&items, 10, "test"), &items);
    }

    #[test]
    fn descriptor_bytes_are_the_wire_record() {
        let tinted = TintedInstance {
            offset: [4.0, 5.0],
            color: Color::WHITE,
        };
        let desc = InstanceDescriptor::from(tinted);
        assert_eq!(desc, InstanceDescriptor::SizedTinted(tinted));
        assert_eq!(desc.as_bytes(), bytemuck::bytes_of(&tinted));
        assert_eq!(&desc.as_bytes()[..8], bytemuck::bytes_of(&[4.0f32, 5.0]));

        let bordered = BorderedInstance {
            position: [1.0, 2.0],
            size: [10.0, 10.0],
            fill_color: Color::BLACK,
            border_size: 1.0,
            border_color: Color::WHITE,
        };
        assert_eq!(InstanceDescriptor::from(bordered).as_bytes().len(), 52);
        let offset = OffsetInstance { offset: [0.0, 1.0] };
        assert_eq!(InstanceDescriptor::from(offset).as_bytes().len(), 8);
    }
}
