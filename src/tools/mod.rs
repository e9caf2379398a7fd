//! Pluggable drawing tools and the registry that orders them.
//!
//! - [`Tool`]: a named strategy (marker or sticker) that configures paint
//!   state, produces cursor previews and starts strokes
//! - [`ToolRegistry`]: the ordered tool list plus the current selection

pub mod registry;
pub mod tool;

pub use registry::{DEFAULT_STICKER_SIZE, ToolRegistry};
pub use tool::{PreviewSpec, Tool, ToolKind};
