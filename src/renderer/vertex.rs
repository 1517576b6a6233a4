//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA color, components in 0..=1 (sRGB, not linearized)
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Color {
        hex_alpha(rgb, 1.0)
    }

    /// Color from a `0xRRGGBB` literal with explicit alpha
    pub const fn hex_alpha(rgb: u32, alpha: f32) -> Color {
        [
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
            alpha,
        ]
    }

    pub const BACKGROUND_TOP: Color = hex(0x07173a);
    pub const BACKGROUND_BOTTOM: Color = hex(0x000814);
    pub const PLAYER: Color = hex(0x3fa7d6);
    pub const PLAYER_GLOW: Color = hex_alpha(0x3fa7d6, 0.12);
    pub const OBSTACLE: Color = hex(0xb5e2fa);
    /// Clear color (fully transparent, like a cleared canvas)
    pub const CLEAR: Color = [0.0, 0.0, 0.0, 0.0];
}
