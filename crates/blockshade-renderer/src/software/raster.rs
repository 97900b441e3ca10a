//! Triangle-list rasterizer driving a [`ShadingProgram`].
//!
//! Vertices are snapped to a fixed-point grid with [`SUBPIXEL_BITS`] of
//! fraction, and coverage uses integer edge functions with a top-left fill
//! rule, so a pixel center on an edge shared by two triangles is shaded once.
//! Edge setup runs in `i128` on the unclamped vertices; only the pixel walk
//! is limited to the frame.

use std::ops::AddAssign;

use glam::Vec4;

use super::Framebuffer;
use crate::camera::CameraUniform;
use crate::program::{Fragment, ShadingProgram, Varying, VertexOutput};

pub const SUBPIXEL_BITS: u32 = 8;
const SUBPIXEL_ONE: i128 = 1 << SUBPIXEL_BITS;

/// 2^48 pixels. Snapped coordinates stay below 2^56, so edge products fit in
/// `i128`. Triangles reaching further out are skipped.
const MAX_SCREEN_COORD: f64 = 281_474_976_710_656.0;

/// One instanced draw: a triangle list over `vertices`, optionally indexed,
/// repeated for every instance.
pub struct DrawCall<'a, P: ShadingProgram> {
    pub vertices: &'a [P::Vertex],
    pub indices: Option<&'a [u16]>,
    pub instances: &'a [P::Instance],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub triangles: u64,
    pub fragments_written: u64,
    pub fragments_discarded: u64,
}

impl AddAssign for DrawStats {
    fn add_assign(&mut self, rhs: Self) {
        self.triangles += rhs.triangles;
        self.fragments_written += rhs.fragments_written;
        self.fragments_discarded += rhs.fragments_discarded;
    }
}

/// Run `program` over every triangle of every instance and write the
/// surviving fragments into `framebuffer`, replacing what was there.
pub fn rasterize<P: ShadingProgram>(
    framebuffer: &mut Framebuffer,
    program: &P,
    camera: &CameraUniform,
    call: &DrawCall<'_, P>,
) -> DrawStats {
    let indices: Vec<u32> = match call.indices {
        Some(indices) => indices.iter().map(|&i| u32::from(i)).collect(),
        None => (0..call.vertices.len() as u32).collect(),
    };

    let mut stats = DrawStats::default();
    for instance in call.instances {
        for tri in indices.chunks_exact(3) {
            let mut outputs = Vec::with_capacity(3);
            for &index in tri {
                let Some(vertex) = call.vertices.get(index as usize) else {
                    tracing::warn!(index, "vertex index out of range, skipping triangle");
                    break;
                };
                outputs.push(program.shade_vertex(camera, index, vertex, instance));
            }
            if let [a, b, c] = outputs.as_slice() {
                stats.triangles += 1;
                stats += draw_triangle(framebuffer, program, [a, b, c]);
            }
        }
    }
    stats
}

// ---------------------------------------------------------------------------
// Triangle setup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    /// Fixed-point pixel coordinates, y down.
    x: i128,
    y: i128,
    /// 1 / clip w, for perspective-correct weights.
    inv_w: f32,
}

fn to_screen(clip: Vec4, width: u32, height: u32) -> Option<ScreenVertex> {
    if clip.w <= 0.0 || !clip.is_finite() {
        return None;
    }
    let w = f64::from(clip.w);
    let (ndc_x, ndc_y) = (f64::from(clip.x) / w, f64::from(clip.y) / w);
    let px = (ndc_x + 1.0) * 0.5 * f64::from(width);
    let py = (1.0 - ndc_y) * 0.5 * f64::from(height);
    if px.abs() > MAX_SCREEN_COORD || py.abs() > MAX_SCREEN_COORD {
        return None;
    }
    let one = SUBPIXEL_ONE as f64;
    Some(ScreenVertex {
        x: (px * one).round() as i128,
        y: (py * one).round() as i128,
        inv_w: 1.0 / clip.w,
    })
}

/// Twice the signed area of `(a, b, p)`; positive when `p` lies clockwise of
/// `a -> b` on a y-down screen.
fn edge(a: ScreenVertex, b: ScreenVertex, px: i128, py: i128) -> i128 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

/// Top-left rule for a clockwise (positive area) triangle on a y-down screen.
fn is_top_left(a: ScreenVertex, b: ScreenVertex) -> bool {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    (dy == 0 && dx > 0) || dy < 0
}

fn draw_triangle<P: ShadingProgram>(
    fb: &mut Framebuffer,
    program: &P,
    outputs: [&VertexOutput<P::Varyings>; 3],
) -> DrawStats {
    let mut stats = DrawStats::default();
    let screen = [
        to_screen(outputs[0].clip_position, fb.width, fb.height),
        to_screen(outputs[1].clip_position, fb.width, fb.height),
        to_screen(outputs[2].clip_position, fb.width, fb.height),
    ];
    let [Some(s0), Some(s1), Some(s2)] = screen else {
        return stats;
    };

    // Either winding is accepted: flip to clockwise, keeping the first
    // vertex (the provoking one for flat varyings) in place.
    let area = edge(s0, s1, s2.x, s2.y);
    if area == 0 {
        return stats;
    }
    let (v, order) = if area > 0 {
        ([s0, s1, s2], [0, 1, 2])
    } else {
        ([s0, s2, s1], [0, 2, 1])
    };
    let area = area.abs();
    let varyings = [
        &outputs[order[0]].varyings,
        &outputs[order[1]].varyings,
        &outputs[order[2]].varyings,
    ];

    let bias = [
        if is_top_left(v[1], v[2]) { 0 } else { -1 },
        if is_top_left(v[2], v[0]) { 0 } else { -1 },
        if is_top_left(v[0], v[1]) { 0 } else { -1 },
    ];

    // Pixel range whose centers can fall inside the triangle.
    let to_pixel = |fixed: i128| fixed.div_euclid(SUBPIXEL_ONE);
    let min_x = to_pixel(v.iter().map(|p| p.x).min().unwrap_or(0)).max(0);
    let min_y = to_pixel(v.iter().map(|p| p.y).min().unwrap_or(0)).max(0);
    let max_x =
        to_pixel(v.iter().map(|p| p.x).max().unwrap_or(0)).min(i128::from(fb.width) - 1);
    let max_y =
        to_pixel(v.iter().map(|p| p.y).max().unwrap_or(0)).min(i128::from(fb.height) - 1);

    let half = SUBPIXEL_ONE / 2;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (x * SUBPIXEL_ONE + half, y * SUBPIXEL_ONE + half);
            let e = [
                edge(v[1], v[2], px, py),
                edge(v[2], v[0], px, py),
                edge(v[0], v[1], px, py),
            ];
            if e[0] + bias[0] < 0 || e[1] + bias[1] < 0 || e[2] + bias[2] < 0 {
                continue;
            }

            let weights = perspective_weights(e, area, [v[0].inv_w, v[1].inv_w, v[2].inv_w]);
            let interpolated = P::Varyings::interpolate(varyings, weights);
            match program.shade_fragment(&interpolated) {
                Fragment::Written(color) => {
                    fb.set(x as u32, y as u32, color);
                    stats.fragments_written += 1;
                }
                Fragment::Discarded => stats.fragments_discarded += 1,
            }
        }
    }
    stats
}

fn perspective_weights(e: [i128; 3], area: i128, inv_w: [f32; 3]) -> [f32; 3] {
    let area = area as f32;
    let w = [
        e[0] as f32 / area * inv_w[0],
        e[1] as f32 / area * inv_w[1],
        e[2] as f32 / area * inv_w[2],
    ];
    let sum = w[0] + w[1] + w[2];
    if sum <= 0.0 {
        return [1.0, 0.0, 0.0];
    }
    [w[0] / sum, w[1] / sum, w[2] / sum]
}

// =============================================================================
// Tests
// =============================================================================
