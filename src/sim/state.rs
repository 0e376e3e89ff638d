//! Game state and core simulation types
//!
//! `GameState` is the single owner of every entity plus the score and lives
//! counters. Nothing here is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::BrickGrid;
use super::geometry::Rect;
use crate::consts::*;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    /// Title screen, waiting for Enter
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen
    Paused,
    /// Every brick destroyed
    Victory,
    /// Out of lives
    GameOver,
    /// Session leaderboard
    HighScores,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Menu => "Menu",
            Screen::Playing => "Playing",
            Screen::Paused => "Paused",
            Screen::Victory => "Victory",
            Screen::GameOver => "GameOver",
            Screen::HighScores => "HighScores",
        }
    }

    /// Screens that end a run
    pub fn is_terminal(&self) -> bool {
        matches!(self, Screen::Victory | Screen::GameOver)
    }
}

/// Ball motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Riding on top of the paddle, waiting for launch
    Stuck,
    /// Free-moving
    Moving,
    /// Reserved for power-up effects; never entered
    PowerUp,
}

/// Gameplay balance knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Paddle speed (pixels/s)
    pub paddle_speed: f32,
    /// Ball speed per axis (pixels/s)
    pub ball_speed: f32,
    /// Lives at the start of a run
    pub starting_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
            starting_lives: STARTING_LIVES,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Signed horizontal velocity from the last update
    pub vel_x: f32,
}

impl Paddle {
    /// Create a paddle at the bottom center of the screen
    pub fn new(speed: f32) -> Self {
        let width = PADDLE_WIDTH;
        let height = PADDLE_HEIGHT;
        Self {
            pos: Vec2::new(
                SCREEN_WIDTH / 2.0 - width / 2.0,
                SCREEN_HEIGHT - height - PADDLE_BOTTOM_MARGIN,
            ),
            width,
            height,
            speed,
            vel_x: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }

    /// Rightmost legal x for the paddle's left edge
    #[inline]
    pub fn max_x(&self) -> f32 {
        SCREEN_WIDTH - self.width
    }

    /// Move from held direction keys, staying inside the screen
    pub fn update(&mut self, left: bool, right: bool, dt: f32) {
        let mut dir = 0.0;
        if left && self.pos.x > 0.0 {
            dir -= 1.0;
        }
        if right && self.pos.x < self.max_x() {
            dir += 1.0;
        }

        self.vel_x = dir * self.speed;
        self.pos.x = (self.pos.x + self.vel_x * dt).clamp(0.0, self.max_x());
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub state: BallState,
}

impl Ball {
    /// Create a stuck ball resting on the paddle
    pub fn new(paddle: &Paddle, speed: f32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            speed,
            state: BallState::Stuck,
        };
        ball.stick_to(paddle);
        ball
    }

    /// Pin the ball above the paddle center
    pub fn stick_to(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(
            paddle.pos.x + paddle.width / 2.0,
            paddle.pos.y - self.radius * 2.0,
        );
    }

    /// Launch up-and-right at 45 degrees
    pub fn launch(&mut self) {
        if self.state == BallState::Stuck {
            self.vel = Vec2::new(self.speed, -self.speed);
            self.state = BallState::Moving;
        }
    }

    /// Put the ball back on the paddle after a miss (velocity is left stale)
    pub fn respawn(&mut self, paddle: &Paddle) {
        self.state = BallState::Stuck;
        self.stick_to(paddle);
    }
}

/// Things that happened during a tick, for logging and feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    WallBounce,
    PaddleHit { offset: f32 },
    BrickDestroyed { row: usize, col: usize },
    BallLost { lives_left: u8 },
    ScreenChanged { from: Screen, to: Screen },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current screen
    pub screen: Screen,
    pub tuning: Tuning,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub score: u64,
    pub lives: u8,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a new game sitting on the menu
    pub fn new(tuning: Tuning) -> Self {
        let paddle = Paddle::new(tuning.paddle_speed);
        let ball = Ball::new(&paddle, tuning.ball_speed);
        Self {
            screen: Screen::Menu,
            tuning,
            paddle,
            ball,
            bricks: BrickGrid::new(),
            score: 0,
            lives: tuning.starting_lives,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Rebuild every entity and counter for a fresh run
    ///
    /// From Menu or GameOver the result is the Menu; from anywhere else the
    /// run restarts immediately in Playing.
    pub fn reset(&mut self) {
        let target = match self.screen {
            Screen::Menu | Screen::GameOver => Screen::Menu,
            _ => Screen::Playing,
        };
        self.reset_to(target);
    }

    /// Rebuild the run and land on an explicit screen
    pub fn reset_to(&mut self, screen: Screen) {
        self.paddle = Paddle::new(self.tuning.paddle_speed);
        self.ball = Ball::new(&self.paddle, self.tuning.ball_speed);
        self.bricks.init_bricks();
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.time_ticks = 0;
        self.set_screen(screen);
    }

    /// Switch screens, recording the transition
    pub fn set_screen(&mut self, to: Screen) {
        if self.screen != to {
            self.events.push(GameEvent::ScreenChanged {
                from: self.screen,
                to,
            });
            self.screen = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_paddle_starts_bottom_center() {
        let paddle = Paddle::new(PADDLE_SPEED);
        assert!((paddle.pos.x + paddle.width / 2.0 - SCREEN_WIDTH / 2.0).abs() < 0.001);
        assert!((paddle.pos.y - (SCREEN_HEIGHT - PADDLE_HEIGHT - 10.0)).abs() < 0.001);
    }

    #[test]
    fn test_paddle_records_velocity() {
        let mut paddle = Paddle::new(PADDLE_SPEED);
        let x0 = paddle.pos.x;
        paddle.update(true, false, 0.1);
        assert_eq!(paddle.vel_x, -PADDLE_SPEED);
        assert!((paddle.pos.x - (x0 - PADDLE_SPEED * 0.1)).abs() < 0.001);

        paddle.update(false, false, 0.1);
        assert_eq!(paddle.vel_x, 0.0);
    }

    #[test]
    fn test_paddle_stops_at_wall() {
        let mut paddle = Paddle::new(PADDLE_SPEED);
        paddle.pos.x = 0.0;
        paddle.update(true, false, 1.0 / 60.0);
        assert_eq!(paddle.pos.x, 0.0);
        assert_eq!(paddle.vel_x, 0.0);
    }

    #[test]
    fn test_ball_rides_paddle() {
        let mut paddle = Paddle::new(PADDLE_SPEED);
        let mut ball = Ball::new(&paddle, BALL_SPEED);
        paddle.pos.x = 200.0;
        ball.stick_to(&paddle);
        assert_eq!(ball.pos, Vec2::new(200.0 + PADDLE_WIDTH / 2.0, paddle.pos.y - 20.0));
    }

    #[test]
    fn test_launch_sets_diagonal_velocity() {
        let paddle = Paddle::new(PADDLE_SPEED);
        let mut ball = Ball::new(&paddle, BALL_SPEED);
        ball.launch();
        assert_eq!(ball.state, BallState::Moving);
        assert_eq!(ball.vel, Vec2::new(BALL_SPEED, -BALL_SPEED));
    }

    #[test]
    fn test_reset_is_idempotent_from_menu() {
        let mut state = GameState::default();
        state.reset();
        let (paddle, ball, bricks) = (state.paddle.clone(), state.ball.clone(), state.bricks.clone());
        state.reset();
        assert_eq!(state.screen, Screen::Menu);
        assert_eq!(state.paddle, paddle);
        assert_eq!(state.ball, ball);
        assert_eq!(state.bricks, bricks);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_reset_target_screen() {
        let mut state = GameState::default();
        state.screen = Screen::GameOver;
        state.reset();
        assert_eq!(state.screen, Screen::Menu);

        state.screen = Screen::Paused;
        state.score = 120;
        state.lives = 1;
        state.reset();
        assert_eq!(state.screen, Screen::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.ball.state, BallState::Stuck);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_screen(
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..0.5), 1..200)
        ) {
            let mut paddle = Paddle::new(PADDLE_SPEED);
            for (left, right, dt) in moves {
                paddle.update(left, right, dt);
                prop_assert!(paddle.pos.x >= 0.0);
                prop_assert!(paddle.pos.x <= SCREEN_WIDTH - paddle.width);
            }
        }
    }
}
