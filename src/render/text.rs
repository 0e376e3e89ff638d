//! Screen-anchored text placement

use glam::Vec2;

use super::{Canvas, Color};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Places text relative to the screen center, with pixel padding offsets
#[derive(Debug, Clone, Copy)]
pub struct TextLayout {
    pub screen: Vec2,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            screen: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }
}

impl TextLayout {
    /// Top-left corner for `text` centered on screen, shifted by padding
    pub fn center_pos(&self, canvas: &dyn Canvas, text: &str, font_size: f32, pad: Vec2) -> Vec2 {
        let width = canvas.measure_text(text, font_size);
        Vec2::new(
            (self.screen.x / 2.0 - width / 2.0 + pad.x).floor(),
            (self.screen.y / 2.0 - font_size / 2.0 + pad.y).floor(),
        )
    }

    /// Top-left corner for `text` at a fixed x, vertically relative to center
    pub fn left_pos(&self, font_size: f32, pad: Vec2) -> Vec2 {
        Vec2::new(pad.x, (self.screen.y / 2.0 - font_size / 2.0 + pad.y).floor())
    }

    pub fn draw_center(
        &self,
        canvas: &mut dyn Canvas,
        text: &str,
        font_size: f32,
        color: Color,
        pad: Vec2,
    ) {
        let pos = self.center_pos(canvas, text, font_size, pad);
        canvas.draw_text(text, pos, font_size, color);
    }

    pub fn draw_left(
        &self,
        canvas: &mut dyn Canvas,
        text: &str,
        font_size: f32,
        color: Color,
        pad: Vec2,
    ) {
        let pos = self.left_pos(font_size, pad);
        canvas.draw_text(text, pos, font_size, color);
    }
}
