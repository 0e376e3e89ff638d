//! Per-screen drawing
//!
//! Pure presentation: reads the game state and issues canvas calls, never
//! mutates anything.

use glam::Vec2;

use super::text::TextLayout;
use super::{Canvas, colors};
use crate::highscores::HighScores;
use crate::sim::{BallState, GameState, Screen};

const TITLE_SIZE: f32 = 30.0;
const BODY_SIZE: f32 = 25.0;
const HUD_SIZE: f32 = 25.0;

/// Draw one frame for the current screen
pub fn draw(state: &GameState, high_scores: &HighScores, canvas: &mut dyn Canvas) {
    let text = TextLayout::default();
    canvas.clear(colors::BACKGROUND);

    match state.screen {
        Screen::Menu => {
            let lines = [
                ("Block Breaker Game", TITLE_SIZE, 0.0),
                ("Press 'Enter' To Play...", TITLE_SIZE, 50.0),
                ("Press 'H' For High Scores", BODY_SIZE, 100.0),
            ];
            for (line, size, y) in lines {
                text.draw_center(canvas, line, size, colors::TEXT, Vec2::new(0.0, y));
            }
        }

        Screen::HighScores => draw_high_scores(&text, high_scores, canvas),

        Screen::Playing => {
            draw_field(state, canvas);
            draw_hud(&text, state, canvas);
            if state.ball.state == BallState::Stuck {
                text.draw_center(
                    canvas,
                    "Press 'Space' to launch",
                    BODY_SIZE,
                    colors::TEXT_DIM,
                    Vec2::new(0.0, 150.0),
                );
            }
        }

        Screen::Paused => {
            let lines = [
                ("Paused", TITLE_SIZE, 0.0),
                ("Press 'Enter' to return to the game", BODY_SIZE, 50.0),
                ("Press 'R' to reset the game", BODY_SIZE, 85.0),
                ("Press 'B' to return to menu", BODY_SIZE, 120.0),
            ];
            for (line, size, y) in lines {
                text.draw_center(canvas, line, size, colors::TEXT, Vec2::new(0.0, y));
            }
        }

        Screen::Victory => {
            let score = format!("Final score: {}", state.score);
            let lines = [
                ("You won!!!", TITLE_SIZE, 0.0),
                (score.as_str(), BODY_SIZE, 40.0),
                ("Press 'Q' to return to menu", BODY_SIZE, 80.0),
                ("Or press 'R' to play again", BODY_SIZE, 115.0),
            ];
            for (line, size, y) in lines {
                text.draw_center(canvas, line, size, colors::TEXT, Vec2::new(0.0, y));
            }
        }

        Screen::GameOver => {
            let score = format!("Final score: {}", state.score);
            let lines = [
                ("Game Over", TITLE_SIZE, 0.0),
                (score.as_str(), BODY_SIZE, 40.0),
                ("Press 'Enter' to return to menu", BODY_SIZE, 80.0),
                ("Or press 'R' to play again", BODY_SIZE, 115.0),
            ];
            for (line, size, y) in lines {
                text.draw_center(canvas, line, size, colors::TEXT, Vec2::new(0.0, y));
            }
        }
    }
}

/// Bricks, paddle and ball
fn draw_field(state: &GameState, canvas: &mut dyn Canvas) {
    for brick in state.bricks.active() {
        canvas.fill_rect(brick.rect.pos, brick.rect.size, colors::brick(brick.row));
    }

    let paddle = state.paddle.rect();
    canvas.fill_rect(paddle.pos, paddle.size, colors::PADDLE);
    canvas.fill_circle(state.ball.pos, state.ball.radius, colors::BALL);
}

fn draw_hud(text: &TextLayout, state: &GameState, canvas: &mut dyn Canvas) {
    let score = format!("Score: {}", state.score);
    let lives = format!("Lives: {}", state.lives);
    text.draw_left(canvas, &score, HUD_SIZE, colors::TEXT, Vec2::new(20.0, -400.0));
    text.draw_left(canvas, &lives, HUD_SIZE, colors::TEXT, Vec2::new(20.0, -370.0));
}

fn draw_high_scores(text: &TextLayout, high_scores: &HighScores, canvas: &mut dyn Canvas) {
    text.draw_center(canvas, "High Scores", TITLE_SIZE, colors::TEXT, Vec2::new(0.0, -250.0));

    if high_scores.is_empty() {
        text.draw_center(canvas, "No scores yet", BODY_SIZE, colors::TEXT_DIM, Vec2::ZERO);
    }

    for (i, entry) in high_scores.entries.iter().enumerate() {
        let marker = if entry.won { " *" } else { "" };
        let line = format!(
            "{:>2}. {:>6}   {} bricks{}",
            i + 1,
            entry.score,
            entry.bricks_cleared,
            marker
        );
        let y = -180.0 + i as f32 * 35.0;
        text.draw_center(canvas, &line, BODY_SIZE, colors::TEXT, Vec2::new(0.0, y));
    }

    text.draw_center(
        canvas,
        "Press 'B' to go back",
        BODY_SIZE,
        colors::TEXT_DIM,
        Vec2::new(0.0, 240.0),
    );
}
