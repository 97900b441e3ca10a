use blockshade_common::Color;
use glam::Vec2;

use super::{lerp_vec2, transform, Fragment, ShadingProgram, Varying, VertexOutput};
use crate::camera::CameraUniform;
use crate::classify::{classify_border, BorderRegion};
use crate::expand::expand_rect_vertex;
use crate::instance::BorderedInstance;

/// Rectangle with a solid border, shape synthesized from the vertex index.
///
/// A fill whose alpha is exactly zero is discarded. Any other fill is
/// written unmodified; nothing is composited.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderedRectProgram;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderedVaryings {
    /// Position inside the rect, `[0,0]-[size]`. Interpolated.
    pub local: Vec2,
    pub size: Vec2,
    pub fill_color: Color,
    pub border_size: f32,
    pub border_color: Color,
}

impl Varying for BorderedVaryings {
    fn interpolate(v: [&Self; 3], w: [f32; 3]) -> Self {
        Self {
            local: lerp_vec2([v[0].local, v[1].local, v[2].local], w),
            ..*v[0]
        }
    }
}

impl ShadingProgram for BorderedRectProgram {
    type Vertex = ();
    type Instance = BorderedInstance;
    type Varyings = BorderedVaryings;

    fn shade_vertex(
        &self,
        camera: &CameraUniform,
        vertex_index: u32,
        _vertex: &(),
        instance: &BorderedInstance,
    ) -> VertexOutput<BorderedVaryings> {
        let size = Vec2::from(instance.size);
        let local = expand_rect_vertex(vertex_index, size);
        VertexOutput {
            clip_position: transform(camera, local, 1.0, Vec2::from(instance.position)),
            varyings: BorderedVaryings {
                local,
                size,
                fill_color: instance.fill_color,
                border_size: instance.border_size,
                border_color: instance.border_color,
            },
        }
    }

    fn shade_fragment(&self, v: &BorderedVaryings) -> Fragment {
        match classify_border(v.local, v.size, v.border_size) {
            BorderRegion::Border => Fragment::Written(v.border_color),
            BorderRegion::Fill if v.fill_color.a == 0.0 => Fragment::Discarded,
            BorderRegion::Fill => Fragment::Written(v.fill_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const FILL: Color = Color::new(0.1, 0.2, 0.3, 1.0);
    const BORDER: Color = Color::new(0.9, 0.8, 0.7, 1.0);

    fn varyings(local: Vec2, fill_color: Color) -> BorderedVaryings {
        BorderedVaryings {
            local,
            size: Vec2::new(100.0, 100.0),
            fill_color,
            border_size: 5.0,
            border_color: BORDER,
        }
    }

    #[test]
    fn border_and_fill_colors() {
        let p = BorderedRectProgram;
        for local in [
            Vec2::new(2.0, 50.0),
            Vec2::new(50.0, 2.0),
            Vec2::new(98.0, 50.0),
            Vec2::new(50.0, 98.0),
        ] {
            assert_eq!(p.shade_fragment(&varyings(local, FILL)), Fragment::Written(BORDER));
        }
        assert_eq!(
            p.shade_fragment(&varyings(Vec2::new(50.0, 50.0), FILL)),
            Fragment::Written(FILL)
        );
    }

    #[test]
    fn transparent_fill_discards() {
        let fill = Color::new(0.1, 0.2, 0.3, 0.0);
        let p = BorderedRectProgram;
        assert_eq!(
            p.shade_fragment(&varyings(Vec2::new(50.0, 50.0), fill)),
            Fragment::Discarded
        );
        // The border is still drawn.
        assert_eq!(
            p.shade_fragment(&varyings(Vec2::new(2.0, 50.0), fill)),
            Fragment::Written(BORDER)
        );
    }

    #[test]
    fn nearly_transparent_fill_is_written_unmodified() {
        let fill = Color::new(0.1, 0.2, 0.3, 0.0001);
        assert_eq!(
            BorderedRectProgram.shade_fragment(&varyings(Vec2::new(50.0, 50.0), fill)),
            Fragment::Written(fill)
        );
    }

    #[test]
    fn vertex_expands_from_index() {
        let instance = BorderedInstance {
            position: [10.0, 20.0],
            size: [30.0, 40.0],
            fill_color: FILL,
            border_size: 2.0,
            border_color: BORDER,
        };
        let cam = CameraUniform::identity();
        let out = BorderedRectProgram.shade_vertex(&cam, 5, &(), &instance);
        assert_eq!(out.varyings.local, Vec2::new(30.0, 40.0));
        assert_eq!(out.clip_position, Vec4::new(40.0, 60.0, 0.0, 1.0));

        let out = BorderedRectProgram.shade_vertex(&cam, 0, &(), &instance);
        assert_eq!(out.varyings.local, Vec2::new(30.0, 0.0));
        assert_eq!(out.varyings.size, Vec2::new(30.0, 40.0));
        assert_eq!(out.varyings.border_size, 2.0);
    }

    #[test]
    fn only_local_is_interpolated() {
        let a = varyings(Vec2::new(0.0, 0.0), FILL);
        let mut b = varyings(Vec2::new(100.0, 0.0), FILL);
        b.border_size = 50.0;
        let v = BorderedVaryings::interpolate([&a, &b, &b], [0.5, 0.5, 0.0]);
        assert_eq!(v.local, Vec2::new(50.0, 0.0));
        assert_eq!(v.border_size, 5.0);
    }
}
