use blockshade_common::Color;
use glam::Vec2;

use super::{lerp_vec2, transform, Fragment, ShadingProgram, Varying, VertexOutput};
use crate::camera::CameraUniform;
use crate::classify::shade_hex;
use crate::instance::{PositionVertex, TintedInstance};

/// World-space edge length of one tile. The unit shape is scaled by this
/// before the instance offset is applied.
pub const TILE_SCALE: f32 = 30.0;

/// Unit square as two triangles, one vertex per draw index.
pub const HEX_TILE_VERTICES: [PositionVertex; 6] = [
    PositionVertex::new(1.0, 0.0),
    PositionVertex::new(0.0, 0.0),
    PositionVertex::new(0.0, 1.0),
    PositionVertex::new(1.0, 0.0),
    PositionVertex::new(0.0, 1.0),
    PositionVertex::new(1.0, 1.0),
];

/// Hex tile with direction-dependent shading of its tint.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexTileProgram;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexVaryings {
    /// Unscaled position on the unit tile.
    pub local: Vec2,
    pub color: Color,
}

impl Varying for HexVaryings {
    fn interpolate(v: [&Self; 3], w: [f32; 3]) -> Self {
        Self {
            local: lerp_vec2([v[0].local, v[1].local, v[2].local], w),
            color: v[0].color,
        }
    }
}

impl ShadingProgram for HexTileProgram {
    type Vertex = PositionVertex;
    type Instance = TintedInstance;
    type Varyings = HexVaryings;

    fn shade_vertex(
        &self,
        camera: &CameraUniform,
        _vertex_index: u32,
        vertex: &PositionVertex,
        instance: &TintedInstance,
    ) -> VertexOutput<HexVaryings> {
        let local = Vec2::from(vertex.position);
        VertexOutput {
            clip_position: transform(camera, local, TILE_SCALE, Vec2::from(instance.offset)),
            varyings: HexVaryings {
                local,
                color: instance.color,
            },
        }
    }

    fn shade_fragment(&self, v: &HexVaryings) -> Fragment {
        Fragment::Written(shade_hex(v.color, v.local))
    }
}
