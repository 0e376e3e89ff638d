//! Ball collision detection and response
//!
//! Resolution runs in a fixed order every step: side walls, else ceiling,
//! then the floor, then the paddle, then bricks.

use glam::Vec2;

use super::bricks::BrickGrid;
use super::geometry::{circle_rect_contact, reflect_axis};
use super::state::{Ball, Paddle};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// What happened to a moving ball in one step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepOutcome {
    /// Bounced off a side wall or the ceiling
    pub wall: bool,
    /// Fell past the bottom of the screen
    pub missed: bool,
    /// Normalized hit offset along the paddle, if the paddle was hit
    pub paddle_offset: Option<f32>,
    /// Index of the brick destroyed this step
    pub brick: Option<usize>,
}

/// Advance a moving ball by `dt` and resolve its collisions
pub fn advance_ball(ball: &mut Ball, paddle: &Paddle, bricks: &mut BrickGrid, dt: f32) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    ball.pos += ball.vel * dt;

    outcome.wall = ball_wall_collision(ball);

    if ball_floor_collision(ball) {
        outcome.missed = true;
        return outcome;
    }

    outcome.paddle_offset = ball_paddle_collision(ball, paddle);
    outcome.brick = ball_brick_collision(ball, bricks);

    outcome
}

/// Side walls and ceiling; a side-wall bounce skips the ceiling check
pub fn ball_wall_collision(ball: &mut Ball) -> bool {
    let r = ball.radius;
    if ball.pos.x - r <= 0.0 || ball.pos.x + r >= SCREEN_WIDTH {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = ball.pos.x.clamp(r, SCREEN_WIDTH - r);
        true
    } else if ball.pos.y - r <= 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = r;
        true
    } else {
        false
    }
}

/// True if the ball has dropped to the bottom edge
#[inline]
pub fn ball_floor_collision(ball: &Ball) -> bool {
    ball.pos.y + ball.radius >= SCREEN_HEIGHT
}

/// Bounce off the paddle top with spin proportional to the hit offset
///
/// Returns the normalized offset in [0, 1] on a hit. Only a descending ball
/// can hit, so it never re-triggers while leaving the paddle.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> Option<f32> {
    let rect = paddle.rect();
    let bottom = ball.pos.y + ball.radius;
    let top = ball.pos.y - ball.radius;

    let touching = bottom >= rect.top() && top <= rect.bottom();
    let within = ball.pos.x >= rect.left() && ball.pos.x <= rect.right();

    if !(touching && within && ball.vel.y > 0.0) {
        return None;
    }

    let offset = ((ball.pos.x - paddle.pos.x) / paddle.width).clamp(0.0, 1.0);
    ball.vel.y = -ball.vel.y;
    ball.vel.x = (offset - 0.5) * ball.speed;
    ball.pos.y = rect.top() - ball.radius;

    Some(offset)
}

/// Destroy the first active brick the ball overlaps and bounce off it
pub fn ball_brick_collision(ball: &mut Ball, bricks: &mut BrickGrid) -> Option<usize> {
    let (index, contact) = bricks
        .bricks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.active)
        .find_map(|(i, b)| circle_rect_contact(ball.pos, ball.radius, &b.rect).map(|c| (i, c)))?;

    bricks.bricks[index].active = false;

    if ball.vel.dot(contact.normal) < 0.0 {
        ball.vel = reflect_axis(ball.vel, contact.normal);
    }
    ball.pos += contact.normal * contact.penetration;

    Some(index)
}

/// Where the ball's center will cross `y`, ignoring walls
pub fn predict_x_at(pos: Vec2, vel: Vec2, y: f32) -> Option<f32> {
    if vel.y.abs() < f32::EPSILON {
        return None;
    }
    let t = (y - pos.y) / vel.y;
    (t >= 0.0).then(|| pos.x + vel.x * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::BallState;

    fn moving_ball(pos: Vec2, vel: Vec2) -> (Ball, Paddle) {
        let paddle = Paddle::new(PADDLE_SPEED);
        let mut ball = Ball::new(&paddle, BALL_SPEED);
        ball.state = BallState::Moving;
        ball.pos = pos;
        ball.vel = vel;
        (ball, paddle)
    }

    fn empty_grid() -> BrickGrid {
        BrickGrid { bricks: Vec::new() }
    }

    #[test]
    fn test_left_wall_flips_x_only() {
        let (mut ball, paddle) = moving_ball(Vec2::new(12.0, 400.0), Vec2::new(-480.0, -480.0));
        let out = advance_ball(&mut ball, &paddle, &mut empty_grid(), 1.0 / 60.0);
        assert!(out.wall);
        assert_eq!(ball.vel, Vec2::new(480.0, -480.0));
        assert!(ball.pos.x >= ball.radius);
    }

    #[test]
    fn test_right_wall_flips_x_only() {
        let (mut ball, paddle) = moving_ball(Vec2::new(SCREEN_WIDTH - 12.0, 400.0), Vec2::new(480.0, -480.0));
        let out = advance_ball(&mut ball, &paddle, &mut empty_grid(), 1.0 / 60.0);
        assert!(out.wall);
        assert_eq!(ball.vel, Vec2::new(-480.0, -480.0));
        assert!(ball.pos.x + ball.radius <= SCREEN_WIDTH);
    }

    #[test]
    fn test_wall_and_ceiling_are_exclusive() {
        // In the top-left corner only the side wall reflects
        let (mut ball, _) = moving_ball(Vec2::new(5.0, 5.0), Vec2::new(-480.0, -480.0));
        ball_wall_collision(&mut ball);
        assert_eq!(ball.vel, Vec2::new(480.0, -480.0));
    }

    #[test]
    fn test_ceiling_flips_y_only() {
        let (mut ball, paddle) = moving_ball(Vec2::new(450.0, 12.0), Vec2::new(480.0, -480.0));
        let out = advance_ball(&mut ball, &paddle, &mut empty_grid(), 1.0 / 60.0);
        assert!(out.wall);
        assert_eq!(ball.vel, Vec2::new(480.0, 480.0));
    }

    #[test]
    fn test_floor_miss() {
        let (mut ball, paddle) = moving_ball(Vec2::new(50.0, SCREEN_HEIGHT - 5.0), Vec2::new(0.0, 480.0));
        let out = advance_ball(&mut ball, &paddle, &mut empty_grid(), 1.0 / 60.0);
        assert!(out.missed);
        assert_eq!(out.paddle_offset, None);
    }

    fn paddle_hit_vx(x_on_paddle: f32) -> f32 {
        let paddle = Paddle::new(PADDLE_SPEED);
        let pos = Vec2::new(paddle.pos.x + x_on_paddle, paddle.pos.y - BALL_RADIUS + 1.0);
        let (mut ball, _) = moving_ball(pos, Vec2::new(BALL_SPEED, BALL_SPEED));
        let offset = ball_paddle_collision(&mut ball, &paddle);
        assert!(offset.is_some());
        assert_eq!(ball.vel.y, -BALL_SPEED);
        ball.vel.x
    }

    #[test]
    fn test_paddle_spin() {
        assert!(paddle_hit_vx(PADDLE_WIDTH / 2.0).abs() < 0.001);
        assert!((paddle_hit_vx(0.0) + BALL_SPEED / 2.0).abs() < 0.001);
        assert!((paddle_hit_vx(PADDLE_WIDTH) - BALL_SPEED / 2.0).abs() < 0.001);
    }

    #[test]
    fn test_paddle_ignores_rising_ball() {
        let paddle = Paddle::new(PADDLE_SPEED);
        let pos = Vec2::new(paddle.pos.x + 10.0, paddle.pos.y);
        let (mut ball, _) = moving_ball(pos, Vec2::new(0.0, -BALL_SPEED));
        assert_eq!(ball_paddle_collision(&mut ball, &paddle), None);
        assert_eq!(ball.vel, Vec2::new(0.0, -BALL_SPEED));
    }

    #[test]
    fn test_paddle_miss_outside_span() {
        let paddle = Paddle::new(PADDLE_SPEED);
        let pos = Vec2::new(paddle.pos.x - 15.0, paddle.pos.y);
        let (mut ball, _) = moving_ball(pos, Vec2::new(0.0, BALL_SPEED));
        assert_eq!(ball_paddle_collision(&mut ball, &paddle), None);
    }

    #[test]
    fn test_brick_hit_from_below() {
        let mut grid = BrickGrid::new();
        let target = grid.bricks[45].rect;
        let pos = Vec2::new(target.center().x, target.bottom() + BALL_RADIUS - 2.0);
        let (mut ball, _) = moving_ball(pos, Vec2::new(100.0, -BALL_SPEED));

        assert_eq!(ball_brick_collision(&mut ball, &mut grid), Some(45));
        assert!(!grid.bricks[45].active);
        assert_eq!(ball.vel, Vec2::new(100.0, BALL_SPEED));
        assert_eq!(grid.active_count(), 49);
    }

    #[test]
    fn test_brick_hit_from_side() {
        let mut grid = BrickGrid::new();
        let target = grid.bricks[0].rect;
        let pos = Vec2::new(target.left() - BALL_RADIUS + 2.0, target.center().y);
        let (mut ball, _) = moving_ball(pos, Vec2::new(BALL_SPEED, -BALL_SPEED));

        assert_eq!(ball_brick_collision(&mut ball, &mut grid), Some(0));
        assert_eq!(ball.vel, Vec2::new(-BALL_SPEED, -BALL_SPEED));
    }

    #[test]
    fn test_destroyed_bricks_are_ignored() {
        let mut grid = BrickGrid::new();
        grid.bricks[45].active = false;
        let target = grid.bricks[45].rect;
        let pos = Vec2::new(target.center().x, target.bottom() + BALL_RADIUS - 2.0);
        let (mut ball, _) = moving_ball(pos, Vec2::new(0.0, -BALL_SPEED));
        assert_eq!(ball_brick_collision(&mut ball, &mut grid), None);
    }

    #[test]
    fn test_predict_x_at() {
        let x = predict_x_at(Vec2::new(100.0, 100.0), Vec2::new(50.0, 100.0), 300.0);
        assert_eq!(x, Some(200.0));
        assert_eq!(predict_x_at(Vec2::new(100.0, 100.0), Vec2::new(50.0, -100.0), 300.0), None);
    }
}
