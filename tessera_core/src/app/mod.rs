//! Utilities for driver initialization and the frame loop.

use std::time::Duration;

use thiserror::Error;

use crate::config::Config;
use crate::render::{colors, Canvas, Color};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("target frame rate must not be zero")]
    ZeroFrameRate,

    #[error("window size must not be empty, got {0}x{1}")]
    EmptyWindow(u32, u32),
}

/// Type which represents duration between two frames.
pub type DeltaTime = Duration;

/// Events which the driver sends to the game.
pub enum Event<'a> {
    /// Sent once before the first frame.
    Created,
    /// Game state should advance by the given time.
    Update(DeltaTime),
    /// Game should draw the current state on the canvas.
    /// Canvas is already cleared with the background color.
    Render(&'a mut dyn Canvas),
    /// Sent once after the last frame.
    Destroyed,
}

/// What the driver should do after the game has handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlFlow {
    #[default]
    Continue,
    Exit,
}

/// Summary of finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Count of fully rendered frames.
    pub frames: u64,
    /// `true` if the game asked to exit before the frame limit.
    pub exited: bool,
}

/// Creates new application, validating the configuration.
pub fn init<C>(config: Config, canvas: C) -> Result<Application<C>>
where
    C: Canvas,
{
    Application::new(config, canvas)
}

/// General context of the driver.
///
/// Runs the fixed-step frame loop and forwards every step to the game callback.
/// Can be created using [`init`] function.
///
pub struct Application<C>
where
    C: Canvas,
{
    config: Config,
    canvas: C,
    background: Color,
    delta_time: DeltaTime,
}

impl<C> Application<C>
where
    C: Canvas,
{
    fn new(config: Config, canvas: C) -> Result<Self> {
        let delta_time = config.frame_time().ok_or(AppError::ZeroFrameRate)?;
        let (width, height) = config.window_size();
        if width == 0 || height == 0 {
            return Err(AppError::EmptyWindow(width, height));
        }
        log::info!(
            "initialized {} version {} ({}x{} at {} FPS)",
            config.name(),
            config.version(),
            width,
            height,
            config.target_fps(),
        );
        Ok(Self {
            config,
            canvas,
            background: colors::RAYWHITE,
            delta_time,
        })
    }

    /// Sets color which the canvas is cleared with before each frame.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Returns the canvas, finishing the application.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Runs the frame loop until the frame limit is reached or the game asks to exit.
    ///
    /// Every frame the game receives [`Event::Update`] followed by [`Event::Render`].
    /// [`Event::Created`] and [`Event::Destroyed`] are always sent exactly once.
    ///
    pub fn run<F>(&mut self, mut callback: F) -> RunStats
    where
        F: FnMut(Event<'_>) -> ControlFlow,
    {
        let mut stats = RunStats {
            frames: 0,
            exited: false,
        };
        stats.exited = callback(Event::Created) == ControlFlow::Exit;

        let limit = self.config.frames();
        while !stats.exited && limit.map_or(true, |limit| stats.frames < limit) {
            if callback(Event::Update(self.delta_time)) == ControlFlow::Exit {
                stats.exited = true;
                break;
            }

            self.canvas.begin_frame(stats.frames);
            self.canvas.clear(self.background);
            let flow = callback(Event::Render(&mut self.canvas));
            self.canvas.end_frame();
            stats.frames += 1;
            stats.exited = flow == ControlFlow::Exit;
        }

        callback(Event::Destroyed);
        log::info!(
            "closing {} after {} frame(s)",
            self.config.name(),
            stats.frames,
        );
        stats
    }
}
