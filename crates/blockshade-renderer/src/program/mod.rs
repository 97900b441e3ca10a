//! CPU reference shading programs.
//!
//! Each program mirrors one WGSL shader in [`crate::shaders`]: the vertex
//! stage maps a local shape plus instance data into clip space, and the
//! fragment stage decides the color. The software rasterizer drives these;
//! the tests pin their behavior so both forms stay in agreement.

mod bordered;
mod hex;
mod sprite;
mod triangle;
mod tint;

pub use bordered::*;
pub use hex::*;
pub use sprite::*;
pub use triangle::*;
pub use tint::*;

use blockshade_common::Color;
use glam::{Vec2, Vec3, Vec4};

use crate::camera::CameraUniform;

// ---------------------------------------------------------------------------
// Stage outputs
// ---------------------------------------------------------------------------

/// Result of the fragment stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fragment {
    Written(Color),
    Discarded,
}

impl Fragment {
    pub fn color(self) -> Option<Color> {
        match self {
            Fragment::Written(c) => Some(c),
            Fragment::Discarded => None,
        }
    }
}

/// Result of the vertex stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput<V> {
    pub clip_position: Vec4,
    pub varyings: V,
}

/// Values handed from the vertex stage to the fragment stage.
///
/// `weights` are perspective-corrected barycentrics summing to one. Fields
/// that come from the instance stay flat and copy the first (provoking)
/// vertex.
pub trait Varying: Copy {
    fn interpolate(vertices: [&Self; 3], weights: [f32; 3]) -> Self;
}

pub trait ShadingProgram: Send + Sync {
    type Vertex;
    type Instance;
    type Varyings: Varying;

    fn shade_vertex(
        &self,
        camera: &CameraUniform,
        vertex_index: u32,
        vertex: &Self::Vertex,
        instance: &Self::Instance,
    ) -> VertexOutput<Self::Varyings>;

    fn shade_fragment(&self, varyings: &Self::Varyings) -> Fragment;
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// `camera * (local * scale + offset, 0, 1)`.
pub fn transform(camera: &CameraUniform, local: Vec2, scale: f32, offset: Vec2) -> Vec4 {
    camera.project(local * scale + offset)
}

pub fn lerp_vec2(v: [Vec2; 3], w: [f32; 3]) -> Vec2 {
    v[0] * w[0] + v[1] * w[1] + v[2] * w[2]
}

pub fn lerp_vec3(v: [Vec3; 3], w: [f32; 3]) -> Vec3 {
    v[0] * w[0] + v[1] * w[1] + v[2] * w[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_color() {
        assert_eq!(Fragment::Written(Color::WHITE).color(), Some(Color::WHITE));
        assert_eq!(Fragment::Discarded.color(), None);
    }

    #[test]
    fn transform_scales_then_offsets() {
        let clip = transform(
            &CameraUniform::identity(),
            Vec2::new(1.0, 0.5),
            2.0,
            Vec2::new(-1.0, 0.0),
        );
        assert_eq!(clip, Vec4::new(1.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn lerp_with_unit_weight_picks_vertex() {
        let v = [Vec2::X, Vec2::Y, Vec2::ONE];
        assert_eq!(lerp_vec2(v, [0.0, 1.0, 0.0]), Vec2::Y);
        let mid = lerp_vec2(v, [1.0 / 3.0; 3]);
        assert!((mid - Vec2::splat(2.0 / 3.0)).length() < 1e-6);
    }

    #[test]
    fn programs_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpriteProgram>();
        assert_send_sync::<TintProgram>();
        assert_send_sync::<BorderedRectProgram>();
        assert_send_sync::<HexTileProgram>();
        assert_send_sync::<TriangleProgram>();
    }
}
