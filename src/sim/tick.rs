//! Per-frame simulation step
//!
//! Dispatches on the current screen: menus only react to key presses,
//! Playing advances the paddle and ball physics.

use super::collision::advance_ball;
use super::state::{BallState, GameEvent, GameState, Screen};
use crate::consts::BRICK_POINTS;

/// Input for a single frame
///
/// `left`/`right` are held keys; everything else is a press that happened
/// this frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left (held)
    pub left: bool,
    /// Move paddle right (held)
    pub right: bool,
    /// Launch the ball (Space)
    pub launch: bool,
    /// Confirm / start / resume (Enter)
    pub enter: bool,
    /// Pause from Playing, back out of Paused and HighScores (B)
    pub back: bool,
    /// Restart the run (R)
    pub reset: bool,
    /// Open the leaderboard from the menu (H)
    pub high_scores: bool,
    /// Return to the menu from an end screen (Q)
    pub quit: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    match state.screen {
        Screen::Menu => {
            if input.enter {
                state.set_screen(Screen::Playing);
            } else if input.high_scores {
                state.set_screen(Screen::HighScores);
            }
        }

        Screen::HighScores => {
            if input.back {
                state.set_screen(Screen::Menu);
            }
        }

        Screen::Playing => {
            if input.back {
                state.set_screen(Screen::Paused);
                return;
            }
            step_playing(state, input, dt);
        }

        Screen::Paused => {
            if input.enter {
                state.set_screen(Screen::Playing);
            } else if input.back {
                state.reset_to(Screen::Menu);
            } else if input.reset {
                state.reset();
            }
        }

        Screen::GameOver => {
            if input.reset {
                state.reset_to(Screen::Playing);
            } else if input.enter || input.quit {
                state.reset();
            }
        }

        Screen::Victory => {
            if input.quit {
                state.reset_to(Screen::Menu);
            } else if input.reset {
                state.reset();
            }
        }
    }
}

fn step_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;
    state.paddle.update(input.left, input.right, dt);

    match state.ball.state {
        BallState::Stuck => {
            state.ball.stick_to(&state.paddle);
            if input.launch {
                state.ball.launch();
                state.events.push(GameEvent::Launched);
            }
        }

        BallState::Moving => {
            let outcome = advance_ball(&mut state.ball, &state.paddle, &mut state.bricks, dt);

            if outcome.wall {
                state.events.push(GameEvent::WallBounce);
            }

            if outcome.missed {
                state.lives = state.lives.saturating_sub(1);
                state.ball.respawn(&state.paddle);
                state.events.push(GameEvent::BallLost {
                    lives_left: state.lives,
                });
                if state.lives == 0 {
                    state.set_screen(Screen::GameOver);
                }
                return;
            }

            if let Some(offset) = outcome.paddle_offset {
                state.events.push(GameEvent::PaddleHit { offset });
            }

            if let Some(index) = outcome.brick {
                let brick = &state.bricks.bricks[index];
                state.score += BRICK_POINTS;
                state.events.push(GameEvent::BrickDestroyed {
                    row: brick.row,
                    col: brick.col,
                });
                if state.bricks.is_cleared() {
                    state.set_screen(Screen::Victory);
                }
            }
        }

        BallState::PowerUp => {}
    }
}
