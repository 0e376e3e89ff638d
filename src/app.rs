//! Frame driver
//!
//! Owns the game and the session leaderboard. The windowing backend calls
//! `frame` once per frame with the elapsed time and that frame's input.

use log::{debug, info, trace};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::highscores::HighScores;
use crate::render::{self, Canvas, DrawList};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Screen, TickInput, autopilot, tick};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub frames: u32,
    pub screen: Screen,
    pub score: u64,
    pub lives: u8,
    pub bricks_left: usize,
}

/// Game instance plus per-frame bookkeeping
pub struct App {
    pub state: GameState,
    pub high_scores: HighScores,
    settings: Settings,
    /// Unsimulated time carried between frames
    accumulator: f32,
    /// Presses not yet consumed by a simulation step
    pending: TickInput,
    frame_dts: [f32; FPS_WINDOW],
    frame_index: usize,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(settings.tuning()),
            high_scores: HighScores::new(),
            settings,
            accumulator: 0.0,
            pending: TickInput::default(),
            frame_dts: [0.0; FPS_WINDOW],
            frame_index: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Advance the simulation by one frame, in fixed `SIM_DT` substeps
    ///
    /// Presses apply to the first substep only; held keys apply to all of
    /// them. A press on a frame too short for any substep waits for the next.
    pub fn update(&mut self, dt: f32, input: &TickInput) {
        self.frame_dts[self.frame_index] = dt;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        self.pending.left = input.left;
        self.pending.right = input.right;
        self.pending.launch |= input.launch;
        self.pending.enter |= input.enter;
        self.pending.back |= input.back;
        self.pending.reset |= input.reset;
        self.pending.high_scores |= input.high_scores;
        self.pending.quit |= input.quit;

        self.accumulator += dt.clamp(0.0, self.settings.max_frame_dt);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let step_input = self.pending.clone();
            tick(&mut self.state, &step_input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.pending = TickInput {
                left: step_input.left,
                right: step_input.right,
                ..Default::default()
            };

            for event in std::mem::take(&mut self.state.events) {
                self.handle_event(event);
            }
        }

        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than chase it next frame
            self.accumulator = self.accumulator.min(SIM_DT);
        }
    }

    /// Draw the current screen
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        render::draw(&self.state, &self.high_scores, canvas);
    }

    /// update -> draw
    pub fn frame(&mut self, dt: f32, input: &TickInput, canvas: &mut dyn Canvas) {
        self.update(dt, input);
        self.draw(canvas);
    }

    /// Average frames per second over the last `FPS_WINDOW` frames
    pub fn fps(&self) -> f32 {
        let (sum, count) = self
            .frame_dts
            .iter()
            .filter(|dt| **dt > 0.0)
            .fold((0.0f32, 0u32), |(sum, n), dt| (sum + *dt, n + 1));
        if count == 0 { 0.0 } else { count as f32 / sum }
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::ScreenChanged { from, to } => {
                info!("Screen {} -> {}", from.as_str(), to.as_str());
                if to.is_terminal() {
                    self.record_run(to == Screen::Victory);
                }
            }
            GameEvent::Launched => debug!("Ball launched"),
            GameEvent::BallLost { lives_left } => debug!("Ball lost, {lives_left} lives left"),
            GameEvent::BrickDestroyed { row, col } => {
                debug!("Brick ({row}, {col}) destroyed, score {}", self.state.score)
            }
            GameEvent::PaddleHit { offset } => trace!("Paddle hit at {offset:.2}"),
            GameEvent::WallBounce => trace!("Wall bounce"),
        }
    }

    fn record_run(&mut self, won: bool) {
        let score = self.state.score;
        let cleared = (self.state.bricks.len() - self.state.bricks.active_count()) as u32;
        match self.high_scores.add_score(score, cleared, won) {
            Some(rank) => info!("Run ended with {score} points (rank #{rank})"),
            None => info!("Run ended with {score} points"),
        }
    }

    /// Let the autopilot play until the run ends or `demo_frames` elapse
    pub fn run_headless(&mut self) -> SessionSummary {
        let dt = self.settings.frame_dt();
        let mut canvas = DrawList::new();
        let mut frames = 0;

        while frames < self.settings.demo_frames {
            let input = autopilot(&self.state);
            canvas.reset();
            self.frame(dt, &input, &mut canvas);
            frames += 1;

            if self.state.screen.is_terminal() {
                break;
            }
        }

        SessionSummary {
            frames,
            screen: self.state.screen,
            score: self.state.score,
            lives: self.state.lives,
            bricks_left: self.state.bricks.active_count(),
        }
    }
}
