//! Axis-aligned geometry for the playfield
//!
//! Everything on screen is either a circle (the ball) or an axis-aligned
//! rectangle (paddle, bricks), so the only overlap test needed is
//! circle-vs-rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner (screen space, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Closest point inside the rectangle to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.pos, self.pos + self.size)
    }
}

/// Result of a circle-vs-rectangle check
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Closest point on the rectangle
    pub point: Vec2,
    /// Surface normal pointing toward the circle center
    pub normal: Vec2,
    /// Overlap depth
    pub penetration: f32,
}

/// Check overlap between a circle and a rectangle
///
/// When the circle center is inside the rectangle the normal points out of
/// the nearest face.
pub fn circle_rect_contact(center: Vec2, radius: f32, rect: &Rect) -> Option<Contact> {
    let point = rect.closest_point(center);
    let delta = center - point;
    let dist_sq = delta.length_squared();

    if dist_sq > radius * radius {
        return None;
    }

    if dist_sq > f32::EPSILON {
        let dist = dist_sq.sqrt();
        return Some(Contact {
            point,
            normal: delta / dist,
            penetration: radius - dist,
        });
    }

    // Center is inside: push out through the nearest face
    let faces = [
        (center.x - rect.left(), Vec2::NEG_X),
        (rect.right() - center.x, Vec2::X),
        (center.y - rect.top(), Vec2::NEG_Y),
        (rect.bottom() - center.y, Vec2::Y),
    ];
    let (depth, normal) = faces
        .into_iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .unwrap_or((0.0, Vec2::NEG_Y));

    Some(Contact {
        point,
        normal,
        penetration: radius + depth,
    })
}

/// Reflect the velocity component along the dominant axis of `normal`
///
/// Axis-aligned surfaces only ever flip one component; corner hits pick the
/// axis the ball is pressing into hardest.
pub fn reflect_axis(velocity: Vec2, normal: Vec2) -> Vec2 {
    if normal.x.abs() > normal.y.abs() {
        Vec2::new(-velocity.x, velocity.y)
    } else {
        Vec2::new(velocity.x, -velocity.y)
    }
}
