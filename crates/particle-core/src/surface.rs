//! Drawing seam between the simulation and whatever paints it.

use crate::color::Color;
use glam::DVec2;

/// Canvas-like immediate-mode drawing target.
///
/// Colour, line width, alpha and font are sticky state, as on a 2D canvas.
pub trait Surface {
    fn clear(&mut self, origin: DVec2, size: DVec2);
    fn set_fill_color(&mut self, color: &Color);
    fn set_stroke_color(&mut self, color: &Color);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_font(&mut self, font: &str);
    fn fill_circle(&mut self, center: DVec2, radius: f64);
    fn stroke_line(&mut self, from: DVec2, to: DVec2);
    /// Stroke a connected path through `points`. Fewer than two points draws nothing.
    fn stroke_polyline(&mut self, points: &[DVec2]);
    fn fill_text(&mut self, text: &str, at: DVec2);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { origin: DVec2, size: DVec2 },
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    GlobalAlpha(f64),
    Font(String),
    Circle { center: DVec2, radius: f64 },
    Line { from: DVec2, to: DVec2 },
    Polyline(Vec<DVec2>),
    Text { text: String, at: DVec2 },
}

/// Surface that only records what it was asked to draw. Used for headless
/// runs and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, origin: DVec2, size: DVec2) {
        self.commands.push(DrawCommand::Clear { origin, size });
    }
    fn set_fill_color(&mut self, color: &Color) {
        self.commands.push(DrawCommand::FillColor(*color));
    }
    fn set_stroke_color(&mut self, color: &Color) {
        self.commands.push(DrawCommand::StrokeColor(*color));
    }
    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }
    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_owned()));
    }
    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }
    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }
    fn stroke_polyline(&mut self, points: &[DVec2]) {
        if points.len() >= 2 {
            self.commands.push(DrawCommand::Polyline(points.to_vec()));
        }
    }
    fn fill_text(&mut self, text: &str, at: DVec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at,
        });
    }
}
