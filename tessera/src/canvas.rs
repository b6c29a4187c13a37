//! Canvas which writes draw commands to the log.

use tessera_core::render::{Canvas, DrawCommand};

#[derive(Debug, Default)]
pub struct LogCanvas {
    frame: u64,
    commands: u64,
}

impl LogCanvas {
    /// Count of commands drawn over all frames.
    pub fn commands(&self) -> u64 {
        self.commands
    }
}

impl Canvas for LogCanvas {
    fn begin_frame(&mut self, frame: u64) {
        self.frame = frame;
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands += 1;
        match command {
            DrawCommand::Clear(color) => {
                log::trace!(target: "tessera::canvas", "frame {}: clear {:?}", self.frame, color)
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => log::debug!(
                target: "tessera::canvas",
                "frame {}: circle at ({:.1}, {:.1}) r={} rgb({}, {}, {})",
                self.frame,
                center.x,
                center.y,
                radius,
                color.red,
                color.green,
                color.blue,
            ),
        }
    }
}
