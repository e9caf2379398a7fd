//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::tools::DEFAULT_STICKER_SIZE;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Live canvas settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: i32,

    /// Background color painted before strokes are replayed
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the initial color and the look of sticker glyphs.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen color - either a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Sticker glyph size in pixels (valid range: 8.0 - 128.0)
    #[serde(default = "default_sticker_font_size")]
    pub sticker_font_size: f64,

    /// Font family used for sticker glyphs (e.g., "Sans", "Noto Color Emoji")
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            sticker_font_size: default_sticker_font_size(),
            font_family: default_font_family(),
        }
    }
}

/// A marker entry in the tool list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarkerSpec {
    /// Display name and lookup key
    pub name: String,
    /// Line width in pixels (valid range: 0.5 - 50.0)
    pub width: f64,
}

/// A sticker entry in the tool list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StickerSpec {
    /// Display name and lookup key
    pub name: String,
    /// Glyph or short text to stamp
    pub glyph: String,
}

/// The tools offered at startup, in display order (markers first, then stickers).
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    #[serde(default = "default_markers")]
    pub markers: Vec<MarkerSpec>,

    #[serde(default = "default_stickers")]
    pub stickers: Vec<StickerSpec>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            stickers: default_stickers(),
        }
    }
}

/// Export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Exported image width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_export_size")]
    pub width: i32,

    /// Exported image height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_export_size")]
    pub height: i32,

    /// Directory exported images are written to (`~` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// File name template, with chrono format specifiers
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: default_export_size(),
            height: default_export_size(),
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_size() -> i32 {
    256
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_sticker_font_size() -> f64 {
    DEFAULT_STICKER_SIZE
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_markers() -> Vec<MarkerSpec> {
    vec![
        MarkerSpec {
            name: "thin".to_string(),
            width: 2.0,
        },
        MarkerSpec {
            name: "thick".to_string(),
            width: 6.0,
        },
    ]
}

fn default_stickers() -> Vec<StickerSpec> {
    ["🙂", "🌮", "⭐"]
        .into_iter()
        .map(|glyph| StickerSpec {
            name: glyph.to_string(),
            glyph: glyph.to_string(),
        })
        .collect()
}

fn default_export_size() -> i32 {
    1024
}

fn default_save_directory() -> String {
    "~/Pictures/Sketchpad".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
