use blockshade_common::Color;
use glam::{Vec3, Vec4};

use super::{lerp_vec3, Fragment, ShadingProgram, Varying, VertexOutput};
use crate::camera::CameraUniform;
use crate::instance::ColoredVertex;

/// Plain colored triangle mesh. Positions are already in clip space; the
/// camera is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleProgram;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleVaryings {
    pub color: Vec3,
}

impl Varying for TriangleVaryings {
    fn interpolate(v: [&Self; 3], w: [f32; 3]) -> Self {
        Self {
            color: lerp_vec3([v[0].color, v[1].color, v[2].color], w),
        }
    }
}

impl ShadingProgram for TriangleProgram {
    type Vertex = ColoredVertex;
    type Instance = ();
    type Varyings = TriangleVaryings;

    fn shade_vertex(
        &self,
        _camera: &CameraUniform,
        _vertex_index: u32,
        vertex: &ColoredVertex,
        _instance: &(),
    ) -> VertexOutput<TriangleVaryings> {
        let [x, y] = vertex.position;
        VertexOutput {
            clip_position: Vec4::new(x, y, 0.0, 1.0),
            varyings: TriangleVaryings {
                color: Vec3::from(vertex.color),
            },
        }
    }

    fn shade_fragment(&self, v: &TriangleVaryings) -> Fragment {
        Fragment::Written(Color::rgb(v.color.x, v.color.y, v.color.z))
    }
}
