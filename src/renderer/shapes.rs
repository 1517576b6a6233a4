//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in surface pixel coordinates.

use glam::Vec2;

use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Segments used for each rounded corner
pub const CORNER_SEGMENTS: u32 = 6;

/// Generate vertices for a solid rectangle
pub fn rect(r: &Rect, color: Color) -> Vec<Vertex> {
    vertical_gradient(r, color, color)
}

/// Generate vertices for a rectangle whose color blends from `top` to `bottom`
pub fn vertical_gradient(r: &Rect, top: Color, bottom: Color) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y1, bottom),
    ]
}

/// Point on a quadratic Bezier curve
fn quadratic(p0: Vec2, control: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + control * (2.0 * u * t) + p1 * (t * t)
}

/// Outline of a rectangle whose corners are quadratic curves through the
/// rectangle's own corners, clockwise from the top edge
pub fn rounded_rect_outline(r: &Rect, radius: f32, segments: u32) -> Vec<Vec2> {
    let radius = radius.clamp(0.0, r.size.x.min(r.size.y) / 2.0);
    let (x0, y0, x1, y1) = (r.left(), r.top(), r.right(), r.bottom());

    // (start, control, end) for each corner, clockwise starting top-right
    let corners = [
        (Vec2::new(x1 - radius, y0), Vec2::new(x1, y0), Vec2::new(x1, y0 + radius)),
        (Vec2::new(x1, y1 - radius), Vec2::new(x1, y1), Vec2::new(x1 - radius, y1)),
        (Vec2::new(x0 + radius, y1), Vec2::new(x0, y1), Vec2::new(x0, y1 - radius)),
        (Vec2::new(x0, y0 + radius), Vec2::new(x0, y0), Vec2::new(x0 + radius, y0)),
    ];

    let segments = segments.max(1);
    let mut points = Vec::with_capacity(corners.len() * (segments as usize + 1));
    for (start, control, end) in corners {
        for i in 0..=segments {
            let t = i as f32 / segments as f32;
            points.push(quadratic(start, control, end, t));
        }
    }
    points
}

/// Generate vertices for a filled rounded rectangle
///
/// The outline is convex, so it is fanned from the rectangle's center.
pub fn rounded_rect(r: &Rect, radius: f32, color: Color) -> Vec<Vertex> {
    let outline = rounded_rect_outline(r, radius, CORNER_SEGMENTS);
    let center = r.pos + r.size / 2.0;

    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for (i, p1) in outline.iter().enumerate() {
        let p2 = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        for vertex in &v {
            let [x, y] = vertex.position;
            assert!(x == 10.0 || x == 40.0);
            assert!(y == 20.0 || y == 60.0);
        }
    }

    #[test]
    fn test_gradient_colors_by_edge() {
        let top = [1.0, 0.0, 0.0, 1.0];
        let bottom = [0.0, 0.0, 1.0, 1.0];
        let v = vertical_gradient(&Rect::new(0.0, 0.0, 100.0, 50.0), top, bottom);
        for vertex in &v {
            if vertex.position[1] == 0.0 {
                assert_eq!(vertex.color, top);
            } else {
                assert_eq!(vertex.color, bottom);
            }
        }
    }

    #[test]
    fn test_rounded_outline_stays_inside_rect() {
        let r = Rect::new(10.0, 10.0, 40.0, 20.0);
        let outline = rounded_rect_outline(&r, 6.0, 8);
        assert_eq!(outline.len(), 4 * 9);
        for p in &outline {
            assert!(p.x >= r.left() - 1e-4 && p.x <= r.right() + 1e-4);
            assert!(p.y >= r.top() - 1e-4 && p.y <= r.bottom() + 1e-4);
        }
        // Corners are cut: the exact rectangle corner is never on the outline
        assert!(!outline.contains(&Vec2::new(10.0, 10.0)));
        // Edges are reached
        assert!(outline.contains(&Vec2::new(44.0, 10.0)));
        assert!(outline.contains(&Vec2::new(50.0, 16.0)));
    }

    #[test]
    fn test_radius_clamped_to_half_size() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0);
        let outline = rounded_rect_outline(&r, 100.0, 4);
        for p in &outline {
            assert!(p.x >= -1e-4 && p.x <= 10.0 + 1e-4);
            assert!(p.y >= -1e-4 && p.y <= 4.0 + 1e-4);
        }
    }

    #[test]
    fn test_rounded_rect_vertex_count() {
        let v = rounded_rect(&Rect::new(0.0, 0.0, 40.0, 20.0), 6.0, [1.0; 4]);
        assert_eq!(v.len(), 4 * (CORNER_SEGMENTS as usize + 1) * 3);
    }
}
