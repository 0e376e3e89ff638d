//! Rendering module
//!
//! Drawing is backend-agnostic: each screen is described as calls on a
//! `Canvas`, which a windowing backend (or the recorder) implements.

pub mod recorder;
pub mod scene;
pub mod text;

pub use recorder::{DrawCommand, DrawList};
pub use scene::draw;
pub use text::TextLayout;

use glam::Vec2;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Drawing primitives supplied by the frame backend
pub trait Canvas {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);
    /// Filled axis-aligned rectangle from its top-left corner
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Pixel width of `text` at `font_size`
    fn measure_text(&self, text: &str, font_size: f32) -> f32;
    /// Draw text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: f32, color: Color);
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [0.0, 0.89, 0.19, 1.0];
    pub const TEXT_DIM: Color = [0.0, 0.62, 0.18, 1.0];
    pub const PADDLE: Color = [0.0, 0.89, 0.19, 1.0];
    pub const BALL: Color = [1.0, 1.0, 1.0, 1.0];

    /// Brick colors by row, top to bottom
    pub const BRICK_ROWS: [Color; 5] = [
        [0.9, 0.16, 0.22, 1.0],
        [1.0, 0.63, 0.0, 1.0],
        [0.99, 0.98, 0.0, 1.0],
        [0.0, 0.89, 0.19, 1.0],
        [0.0, 0.47, 0.95, 1.0],
    ];

    pub fn brick(row: usize) -> Color {
        BRICK_ROWS[row % BRICK_ROWS.len()]
    }
}
