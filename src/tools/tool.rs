//! Drawing tool strategies.

use crate::draw::{Color, Point, Stroke, Surface};
use serde::{Deserialize, Serialize};

/// Smallest side length of the marker cursor square, in canvas pixels.
const MIN_PREVIEW_SIZE: f64 = 2.0;

/// The behaviour variant of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolKind {
    /// Freehand marker - connected polyline through every sample
    Marker {
        /// Line width in canvas pixels
        width: f64,
    },
    /// Sticker stamp - a single glyph at the latest pointer position
    Sticker {
        /// Glyph or short text to stamp
        glyph: String,
        /// Glyph size in canvas pixels
        size: f64,
    },
}

/// A named drawing tool.
///
/// The name is the display label and the registry lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    name: String,
    kind: ToolKind,
}

/// Transient cursor visual produced by [`Tool::preview`].
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewSpec {
    /// Filled square centered on the pointer (markers)
    Square {
        center: Point,
        size: f64,
        color: Color,
    },
    /// Glyph centered on the pointer (stickers)
    Glyph {
        anchor: Point,
        glyph: String,
        size: f64,
        color: Color,
    },
}

impl PreviewSpec {
    /// Position the preview is anchored at.
    pub fn anchor(&self) -> Point {
        match self {
            PreviewSpec::Square { center, .. } => *center,
            PreviewSpec::Glyph { anchor, .. } => *anchor,
        }
    }
}

impl Tool {
    /// Creates a marker tool with the given line width.
    pub fn marker(name: impl Into<String>, width: f64) -> Self {
        Self {
            name: name.into(),
            kind: ToolKind::Marker { width },
        }
    }

    /// Creates a sticker tool stamping `glyph` at `size` pixels.
    pub fn sticker(name: impl Into<String>, glyph: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            kind: ToolKind::Sticker {
                glyph: glyph.into(),
                size,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ToolKind {
        &self.kind
    }

    /// Configures the surface's paint parameters for drawing with this tool in `color`.
    ///
    /// Idempotent, and touches nothing but the surface paint state.
    pub fn activate(&self, surface: &mut Surface, color: Color) {
        let paint = surface.paint_mut();
        paint.stroke_color = color;
        paint.fill_color = color;
        match &self.kind {
            ToolKind::Marker { width } => {
                paint.line_width = *width;
            }
            ToolKind::Sticker { size, .. } => {
                paint.line_width = 1.0;
                paint.font_size = *size;
            }
        }
    }

    /// Builds the cursor preview for a pointer at `(x, y)`.
    pub fn preview(&self, x: f64, y: f64, color: Color) -> PreviewSpec {
        let anchor = Point::new(x, y);
        match &self.kind {
            ToolKind::Marker { width } => PreviewSpec::Square {
                center: anchor,
                size: width.max(MIN_PREVIEW_SIZE),
                color,
            },
            ToolKind::Sticker { glyph, size } => PreviewSpec::Glyph {
                anchor,
                glyph: glyph.clone(),
                size: *size,
                color,
            },
        }
    }

    /// Starts a stroke with this tool at `(x, y)`, capturing `color`.
    pub fn begin_stroke(&self, x: f64, y: f64, color: Color) -> Stroke {
        Stroke::new(self.clone(), Point::new(x, y), color)
    }
}
