//! Vertex expansion: synthesize a rectangle corner from the vertex index.
//!
//! Bordered rectangles have no vertex buffer. Six invocations per instance
//! cover `[0,0]-[size]` as two triangles sharing the 0-2 diagonal.

use glam::Vec2;

/// Vertices emitted per expanded rectangle.
pub const RECT_VERTEX_COUNT: u32 = 6;

/// Local position of vertex `index` within a rectangle of the given size.
///
/// | index | corner          |
/// |-------|-----------------|
/// | 0, 3  | `(size.x, 0)`   |
/// | 1     | `(0, 0)`        |
/// | 2, 4  | `(0, size.y)`   |
/// | 5     | `size`          |
///
/// Any other index yields the origin.
pub fn expand_rect_vertex(index: u32, size: Vec2) -> Vec2 {
    match index {
        0 | 3 => Vec2::new(size.x, 0.0),
        1 => Vec2::ZERO,
        2 | 4 => Vec2::new(0.0, size.y),
        5 => size,
        _ => Vec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(100.0, 40.0);

    #[test]
    fn table_corners() {
        assert_eq!(expand_rect_vertex(0, SIZE), Vec2::new(100.0, 0.0));
        assert_eq!(expand_rect_vertex(1, SIZE), Vec2::new(0.0, 0.0));
        assert_eq!(expand_rect_vertex(2, SIZE), Vec2::new(0.0, 40.0));
        assert_eq!(expand_rect_vertex(3, SIZE), Vec2::new(100.0, 0.0));
        assert_eq!(expand_rect_vertex(4, SIZE), Vec2::new(0.0, 40.0));
        assert_eq!(expand_rect_vertex(5, SIZE), Vec2::new(100.0, 40.0));
    }

    #[test]
    fn shared_diagonal() {
        assert_eq!(expand_rect_vertex(0, SIZE), expand_rect_vertex(3, SIZE));
        assert_eq!(expand_rect_vertex(2, SIZE), expand_rect_vertex(4, SIZE));
    }

    #[test]
    fn out_of_range_is_origin() {
        assert_eq!(expand_rect_vertex(6, SIZE), Vec2::ZERO);
        assert_eq!(expand_rect_vertex(u32::MAX, SIZE), Vec2::ZERO);
    }

    #[test]
    fn two_triangles_cover_rect_area() {
        let area = |a: u32, b: u32, c: u32| {
            let (p0, p1, p2) = (
                expand_rect_vertex(a, SIZE),
                expand_rect_vertex(b, SIZE),
                expand_rect_vertex(c, SIZE),
            );
            ((p1 - p0).perp_dot(p2 - p0) * 0.5).abs()
        };
        let total = area(0, 1, 2) + area(3, 4, 5);
        assert!((total - SIZE.x * SIZE.y).abs() < 1e-3);
    }
}
