//! Rendering primitives and the stroke model (Cairo-based).
//!
//! This module defines the core drawing types of the sketchpad:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Surface`]: raster surface plus the paint state tools configure
//! - [`Stroke`]: a replayable drawing command bound to a tool and color
//! - [`History`]: committed and redoable strokes
//! - Rendering functions that replay the whole scene onto a surface

pub mod color;
pub mod font;
pub mod history;
pub mod render;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
pub use history::History;
pub use render::{render_preview, render_scene, render_stroke, render_strokes};
pub use stroke::{Point, Stroke};
pub use surface::{PaintState, Surface, SurfaceError};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
