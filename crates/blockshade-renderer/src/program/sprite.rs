use glam::Vec2;

use super::{lerp_vec2, transform, Fragment, ShadingProgram, Varying, VertexOutput};
use crate::camera::CameraUniform;
use crate::instance::{OffsetInstance, TexturedVertex};
use crate::texture::{Sampler, Texture2d};

/// Textured instanced sprite: one filtered lookup, emitted as-is.
#[derive(Debug, Clone)]
pub struct SpriteProgram {
    pub texture: Texture2d,
    pub sampler: Sampler,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteVaryings {
    pub tex_coords: Vec2,
}

impl Varying for SpriteVaryings {
    fn interpolate(v: [&Self; 3], w: [f32; 3]) -> Self {
        Self {
            tex_coords: lerp_vec2([v[0].tex_coords, v[1].tex_coords, v[2].tex_coords], w),
        }
    }
}

impl ShadingProgram for SpriteProgram {
    type Vertex = TexturedVertex;
    type Instance = OffsetInstance;
    type Varyings = SpriteVaryings;

    fn shade_vertex(
        &self,
        camera: &CameraUniform,
        _vertex_index: u32,
        vertex: &TexturedVertex,
        instance: &OffsetInstance,
    ) -> VertexOutput<SpriteVaryings> {
        VertexOutput {
            clip_position: transform(
                camera,
                Vec2::from(vertex.position),
                1.0,
                Vec2::from(instance.offset),
            ),
            varyings: SpriteVaryings {
                tex_coords: Vec2::from(vertex.tex_coords),
            },
        }
    }

    fn shade_fragment(&self, varyings: &SpriteVaryings) -> Fragment {
        Fragment::Written(self.sampler.sample(&self.texture, varyings.tex_coords))
    }
}
