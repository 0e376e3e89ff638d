//! Brick grid layout
//!
//! A fixed rows x cols wall of bricks, centered horizontally and starting at
//! a fixed vertical offset. The layout is a pure function of the constants.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// true = visible and solid, false = destroyed
    pub active: bool,
    pub row: usize,
    pub col: usize,
}

/// The full brick wall, stored row-major (left-to-right, top-to-bottom)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub bricks: Vec<Brick>,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickGrid {
    /// Build a fresh grid with every brick active
    pub fn new() -> Self {
        let mut grid = Self { bricks: Vec::new() };
        grid.init_bricks();
        grid
    }

    /// Replace any existing bricks with the standard layout
    pub fn init_bricks(&mut self) {
        let total_width =
            BRICK_COLS as f32 * BRICK_WIDTH + (BRICK_COLS as f32 - 1.0) * BRICK_PADDING;
        let start_x = (SCREEN_WIDTH - total_width) / 2.0;
        let size = Vec2::new(BRICK_WIDTH, BRICK_HEIGHT);

        self.bricks.clear();
        self.bricks.reserve(BRICK_ROWS * BRICK_COLS);

        for row in 0..BRICK_ROWS {
            let y = BRICK_TOP_OFFSET + row as f32 * (BRICK_HEIGHT + BRICK_PADDING);
            for col in 0..BRICK_COLS {
                let x = start_x + col as f32 * (BRICK_WIDTH + BRICK_PADDING);
                self.bricks.push(Brick {
                    rect: Rect::new(Vec2::new(x, y), size),
                    active: true,
                    row,
                    col,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Bricks still standing
    pub fn active(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// True once every brick has been destroyed
    pub fn is_cleared(&self) -> bool {
        !self.bricks.is_empty() && self.bricks.iter().all(|b| !b.active)
    }
}
