//! Demo controller
//!
//! Plays the game by itself: launches whenever the ball is stuck and steers
//! the paddle under the point where the ball will come down. Used by the
//! headless driver.

use super::collision::predict_x_at;
use super::state::{BallState, GameState, Screen};
use super::tick::TickInput;
use crate::consts::SCREEN_WIDTH;

/// Dead zone (pixels) so the paddle doesn't jitter around its target
const DEAD_ZONE: f32 = 6.0;

/// Produce this frame's input for the given state
pub fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    match state.screen {
        Screen::Menu => input.enter = true,
        Screen::Playing => {}
        // End screens and menus are left for the driver to decide
        _ => return input,
    }

    let ball = &state.ball;
    let paddle = &state.paddle;

    let target_x = match ball.state {
        BallState::Stuck => {
            input.launch = true;
            return input;
        }
        BallState::Moving if ball.vel.y > 0.0 => {
            let landing = predict_x_at(ball.pos, ball.vel, paddle.pos.y - ball.radius)
                .map(fold_into_field)
                .unwrap_or(ball.pos.x);
            // Aim slightly off-center so the rebound carries some spin
            landing + paddle.width * 0.1 * (state.time_ticks % 3) as f32
                - paddle.width * 0.1
        }
        _ => ball.pos.x,
    };

    let center = paddle.pos.x + paddle.width / 2.0;
    if target_x < center - DEAD_ZONE {
        input.left = true;
    } else if target_x > center + DEAD_ZONE {
        input.right = true;
    }

    input
}

/// Mirror an unbounded x coordinate into the playfield (wall bounces)
fn fold_into_field(x: f32) -> f32 {
    let period = SCREEN_WIDTH * 2.0;
    let x = x.rem_euclid(period);
    if x > SCREEN_WIDTH { period - x } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;
    use glam::Vec2;

    #[test]
    fn test_autopilot_starts_and_launches() {
        let mut state = GameState::default();
        let input = autopilot(&state);
        assert!(input.enter);

        tick(&mut state, &input, 1.0 / 60.0);
        assert_eq!(state.screen, Screen::Playing);
        assert!(autopilot(&state).launch);
    }

    #[test]
    fn test_autopilot_steers_toward_ball() {
        let mut state = GameState::default();
        state.screen = Screen::Playing;
        state.ball.launch();
        state.ball.pos = Vec2::new(100.0, 600.0);
        state.ball.vel = Vec2::new(0.0, 480.0);
        assert!(autopilot(&state).left);

        state.ball.pos = Vec2::new(800.0, 600.0);
        assert!(autopilot(&state).right);
    }

    #[test]
    fn test_fold_into_field() {
        assert_eq!(fold_into_field(100.0), 100.0);
        assert_eq!(fold_into_field(1000.0), 800.0);
        assert_eq!(fold_into_field(-100.0), 100.0);
    }

    #[test]
    fn test_autopilot_clears_bricks_eventually() {
        let mut state = GameState::default();
        let start = state.bricks.active_count();
        for _ in 0..60 * 60 {
            let input = autopilot(&state);
            tick(&mut state, &input, 1.0 / 60.0);
            if state.screen.is_terminal() {
                break;
            }
        }
        assert!(state.bricks.active_count() < start);
    }
}
