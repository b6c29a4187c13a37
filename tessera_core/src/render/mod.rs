//! Draw commands which the game issues every frame.
//!
//! The driver itself draws nothing: it hands a [`Canvas`] to the game, and the canvas
//! decides what to do with the commands (record them, log them, rasterize them).

use palette::Srgb;
use ultraviolet::Vec2;

/// Color of the drawn primitive.
pub type Color = Srgb<u8>;

/// Named colors used by the examples.
pub mod colors {
    use super::Color;

    pub const RAYWHITE: Color = Color::new(245, 245, 245);
    pub const RED: Color = Color::new(230, 41, 55);
    pub const BLUE: Color = Color::new(0, 121, 241);
    pub const GREEN: Color = Color::new(0, 228, 48);
}

/// Single drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fills the whole frame with color.
    Clear(Color),
    /// Filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Target of draw commands.
pub trait Canvas {
    /// Called by the driver before anything is drawn in the frame.
    fn begin_frame(&mut self, frame: u64);

    fn draw(&mut self, command: DrawCommand);

    /// Called by the driver after the game has drawn the frame.
    fn end_frame(&mut self) {}

    fn clear(&mut self, color: Color) {
        self.draw(DrawCommand::Clear(color))
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw(DrawCommand::Circle {
            center,
            radius,
            color,
        })
    }
}

/// Canvas which keeps all commands of every frame.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    frames: Vec<Vec<DrawCommand>>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of all frames begun so far.
    pub fn frames(&self) -> &[Vec<DrawCommand>] {
        &self.frames
    }

    /// Commands of the latest frame.
    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Circles of the given frame, in the order of drawing.
    pub fn circles(&self, frame: usize) -> Vec<(Vec2, f32, Color)> {
        self.frames
            .get(frame)
            .into_iter()
            .flatten()
            .filter_map(|command| match *command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => Some((center, radius, color)),
                DrawCommand::Clear(_) => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn begin_frame(&mut self, _frame: u64) {
        self.frames.push(Vec::new())
    }

    fn draw(&mut self, command: DrawCommand) {
        match self.frames.last_mut() {
            Some(frame) => frame.push(command),
            None => log::warn!("draw command {:?} issued outside of frame", command),
        }
    }
}
