//! Replayable stroke commands.

use super::color::Color;
use crate::tools::{Tool, ToolKind};
use serde::{Deserialize, Serialize};

/// A sampled pointer position in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The canvas origin, used when no pointer position is known yet.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// A committed drawing command: the tool and color captured at creation plus the sampled points.
///
/// Strokes are plain data. Replaying them is the render pipeline's job
/// (see [`crate::draw::render_stroke`]), so they can be compared, serialized
/// and tested without a drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Sampled points in insertion order (exactly one for stamp tools)
    points: Vec<Point>,
    /// Color captured when the stroke began
    color: Color,
    /// Tool the stroke was started with
    tool: Tool,
}

impl Stroke {
    /// Starts a stroke at `start`, bound to `tool` and `color`.
    pub fn new(tool: Tool, start: Point, color: Color) -> Self {
        Self {
            points: vec![start],
            color,
            tool,
        }
    }

    /// Records another pointer sample while the stroke is being dragged.
    ///
    /// Marker strokes append to their path; sticker strokes move their single anchor.
    pub fn extend(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        match self.tool.kind() {
            ToolKind::Marker { .. } => self.points.push(point),
            ToolKind::Sticker { .. } => {
                self.points.clear();
                self.points.push(point);
            }
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }
}
