//! Rendering module
//!
//! `render` paints a `GameState` onto any [`Surface`]. In the browser the
//! surface is a [`VertexBatch`] that the WebGPU pipeline uploads each frame.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::VertexBatch;
pub use pipeline::RenderState;
pub use vertex::{Color, Vertex, colors};

use crate::config::RenderOptions;
use crate::sim::{GameState, Rect};

/// Player corner radius
pub const PLAYER_CORNER_RADIUS: f32 = 6.0;
/// Glow padding around the player (horizontal, vertical)
pub const GLOW_PADDING: (f32, f32) = (4.0, 6.0);

/// A 2D drawing target in pixel coordinates (origin top-left, y down)
pub trait Surface {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (f32, f32);
    /// Erase everything drawn so far
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color);
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);
}

/// Draw the current frame. Never mutates state; safe to call in any phase.
pub fn render(surface: &mut impl Surface, state: &GameState, options: &RenderOptions) {
    let (width, height) = surface.size();

    surface.clear();
    surface.fill_vertical_gradient(
        Rect::new(0.0, 0.0, width, height),
        colors::BACKGROUND_TOP,
        colors::BACKGROUND_BOTTOM,
    );

    let player = state.player.rect();
    if options.glow {
        let (dx, dy) = GLOW_PADDING;
        surface.fill_rect(player.expand(dx, dy), colors::PLAYER_GLOW);
    }
    surface.fill_rounded_rect(player, PLAYER_CORNER_RADIUS, colors::PLAYER);

    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.rect(), colors::OBSTACLE);
    }
}
