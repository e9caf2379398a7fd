//! Input handling and the interaction controller.
//!
//! This module translates host input events (pointer, tool buttons, color
//! picker, history buttons, export) into model operations. It owns the
//! session state and triggers the synchronous redraw after every change.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::{InputEvent, ParseEventError, parse_line, parse_script};
pub use state::{Controller, ControllerOptions, SessionState};
