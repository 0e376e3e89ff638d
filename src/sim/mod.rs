//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta supplied by the caller
//! - Fixed layouts, no randomness
//! - Stable iteration order (bricks are row-major)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bricks;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use bricks::{Brick, BrickGrid};
pub use collision::{StepOutcome, advance_ball};
pub use geometry::{Contact, Rect, circle_rect_contact, reflect_axis};
pub use state::{Ball, BallState, GameEvent, GameState, Paddle, Screen, Tuning};
pub use tick::{TickInput, tick};
