//! Camera uniform: the single view-projection matrix shared by a batch.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. The host updates it once
//! per frame; programs only read it.

use glam::{Mat4, Vec2, Vec4};

/// GPU-side camera uniform, 64 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn identity() -> Self {
        Self::from_matrix(Mat4::IDENTITY)
    }

    pub fn from_matrix(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }

    /// Pixel-space camera: origin at the top-left corner, y pointing down.
    pub fn orthographic(width: f32, height: f32) -> Self {
        Self::ortho_bounds(0.0, width, height, 0.0)
    }

    /// Orthographic camera mapping the given world rectangle onto clip space.
    pub fn ortho_bounds(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self::from_matrix(Mat4::orthographic_lh(left, right, bottom, top, 0.0, 1.0))
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view_proj)
    }

    /// Project a world-space point lying on the z = 0 plane.
    pub fn project(&self, world: Vec2) -> Vec4 {
        self.matrix() * world.extend(0.0).extend(1.0)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::identity()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec4, b: Vec4) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn camera_uniform_is_64_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
        assert_eq!(bytemuck::bytes_of(&CameraUniform::identity()).len(), 64);
    }

    #[test]
    fn identity_projects_point_unchanged() {
        let p = CameraUniform::identity().project(Vec2::new(0.25, -0.5));
        assert!(approx(p, Vec4::new(0.25, -0.5, 0.0, 1.0)));
    }

    #[test]
    fn orthographic_maps_frame_corners_to_clip_corners() {
        let cam = CameraUniform::orthographic(640.0, 480.0);
        assert!(approx(cam.project(Vec2::ZERO), Vec4::new(-1.0, 1.0, 0.0, 1.0)));
        assert!(approx(
            cam.project(Vec2::new(640.0, 480.0)),
            Vec4::new(1.0, -1.0, 0.0, 1.0)
        ));
        assert!(approx(
            cam.project(Vec2::new(320.0, 240.0)),
            Vec4::new(0.0, 0.0, 0.0, 1.0)
        ));
    }

    #[test]
    fn matrix_round_trips() {
        let m = Mat4::from_scale(glam::Vec3::new(2.0, 3.0, 1.0));
        assert_eq!(CameraUniform::from_matrix(m).matrix(), m);
    }
}
