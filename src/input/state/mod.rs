mod actions;
mod core;
mod pointer;

pub use core::{Controller, ControllerOptions, SessionState};
