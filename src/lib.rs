//! Sticker sketchpad engine.
//!
//! Strokes and stickers are recorded as replayable commands, kept in an
//! undo/redo history, and replayed in full onto a Cairo raster surface after
//! every model change. A transient tool preview is drawn on top of the live
//! canvas but never enters the history or an export.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod notify;
pub mod tools;

pub use config::Config;
pub use input::{Controller, ControllerOptions, InputEvent};
pub use notify::{Notification, Observer};
