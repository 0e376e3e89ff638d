//! End-to-end run through the frame driver

use block_breaker::consts::*;
use block_breaker::render::DrawList;
use block_breaker::sim::{BallState, Screen, TickInput};
use block_breaker::{App, Settings};
use glam::Vec2;

const DT: f32 = 1.0 / TARGET_FPS as f32;

fn key(f: impl FnOnce(&mut TickInput)) -> TickInput {
    let mut input = TickInput::default();
    f(&mut input);
    input
}

/// Launch and step with no input until the ball drops past the floor
fn lose_ball(app: &mut App, canvas: &mut DrawList) {
    app.frame(DT, &key(|i| i.launch = true), canvas);
    assert_eq!(app.state.ball.state, BallState::Moving);
    assert_eq!(app.state.ball.vel, Vec2::new(BALL_SPEED, -BALL_SPEED));

    // Steer the ball straight down next to the paddle
    app.state.ball.pos = Vec2::new(40.0, SCREEN_HEIGHT / 2.0);
    app.state.ball.vel = Vec2::new(0.0, BALL_SPEED);

    let lives = app.state.lives;
    for _ in 0..(TARGET_FPS * 5) {
        canvas.reset();
        app.frame(DT, &TickInput::default(), canvas);
        if app.state.lives < lives {
            break;
        }
    }
    assert_eq!(app.state.lives, lives - 1);
    assert_eq!(app.state.ball.state, BallState::Stuck);
}

#[test]
fn test_menu_to_game_over() {
    let mut app = App::new(Settings::default());
    let mut canvas = DrawList::new();

    app.frame(DT, &TickInput::default(), &mut canvas);
    assert_eq!(app.state.screen, Screen::Menu);
    assert!(canvas.has_text("Block Breaker Game"));

    canvas.reset();
    app.frame(DT, &key(|i| i.enter = true), &mut canvas);
    assert_eq!(app.state.screen, Screen::Playing);
    assert!(canvas.has_text("Lives: 3"));

    lose_ball(&mut app, &mut canvas);
    assert_eq!(app.state.lives, 2);
    assert_eq!(app.state.screen, Screen::Playing);

    lose_ball(&mut app, &mut canvas);
    lose_ball(&mut app, &mut canvas);
    assert_eq!(app.state.lives, 0);
    assert_eq!(app.state.screen, Screen::GameOver);
    assert!(canvas.has_text("Game Over"));

    canvas.reset();
    app.frame(DT, &key(|i| i.enter = true), &mut canvas);
    assert_eq!(app.state.screen, Screen::Menu);
    assert_eq!(app.state.lives, STARTING_LIVES);
}

#[test]
fn test_high_scores_screen_round_trip() {
    let mut app = App::new(Settings::default());
    let mut canvas = DrawList::new();

    app.frame(DT, &key(|i| i.high_scores = true), &mut canvas);
    assert_eq!(app.state.screen, Screen::HighScores);
    assert!(canvas.has_text("High Scores"));

    canvas.reset();
    app.frame(DT, &key(|i| i.back = true), &mut canvas);
    assert_eq!(app.state.screen, Screen::Menu);
}

#[test]
fn test_custom_lives_from_settings() {
    let settings = Settings::from_json(r#"{ "starting_lives": 1 }"#).unwrap();
    let mut app = App::new(settings);
    let mut canvas = DrawList::new();

    app.frame(DT, &key(|i| i.enter = true), &mut canvas);
    lose_ball(&mut app, &mut canvas);
    assert_eq!(app.state.screen, Screen::GameOver);
}
