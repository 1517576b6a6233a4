//! CPU-side vertex batch that implements [`Surface`]

use super::Surface;
use super::shapes;
use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Collects tessellated shapes for one frame
#[derive(Debug, Clone)]
pub struct VertexBatch {
    width: f32,
    height: f32,
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Surface for VertexBatch {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(shapes::rect(&rect, color));
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        self.vertices
            .extend(shapes::vertical_gradient(&rect, top, bottom));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::rounded_rect(&rect, radius, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_previous_frame() {
        let mut batch = VertexBatch::new(100.0, 100.0);
        batch.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), [1.0; 4]);
        assert_eq!(batch.len(), 6);

        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.size(), (100.0, 100.0));
    }
}
