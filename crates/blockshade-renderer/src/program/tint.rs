use blockshade_common::Color;
use glam::Vec2;

use super::{transform, Fragment, ShadingProgram, Varying, VertexOutput};
use crate::camera::CameraUniform;
use crate::instance::{PositionVertex, TintedInstance};

/// Flat-tinted instanced quad. Emits the instance color unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TintProgram;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintVaryings {
    pub color: Color,
}

impl Varying for TintVaryings {
    fn interpolate(v: [&Self; 3], _w: [f32; 3]) -> Self {
        *v[0]
    }
}

impl ShadingProgram for TintProgram {
    type Vertex = PositionVertex;
    type Instance = TintedInstance;
    type Varyings = TintVaryings;

    fn shade_vertex(
        &self,
        camera: &CameraUniform,
        _vertex_index: u32,
        vertex: &PositionVertex,
        instance: &TintedInstance,
    ) -> VertexOutput<TintVaryings> {
        VertexOutput {
            clip_position: transform(
                camera,
                Vec2::from(vertex.position),
                1.0,
                Vec2::from(instance.offset),
            ),
            varyings: TintVaryings {
                color: instance.color,
            },
        }
    }

    fn shade_fragment(&self, varyings: &TintVaryings) -> Fragment {
        Fragment::Written(varyings.color)
    }
}
