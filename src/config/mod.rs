//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the canvas size and
//! background, the initial color, the tool list, and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, MarkerSpec, StickerSpec, ToolsConfig};

use crate::draw::{BLACK, Color, WHITE};
use crate::tools::Tool;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 256
/// height = 256
/// background = "white"
///
/// [drawing]
/// default_color = [121, 45, 230]
/// sticker_font_size = 32.0
///
/// [[tools.markers]]
/// name = "thin"
/// width = 2.0
///
/// [[tools.stickers]]
/// name = "taco"
/// glyph = "🌮"
///
/// [export]
/// width = 1024
/// height = 1024
/// save_directory = "~/Pictures/Sketchpad"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Live canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial color and sticker font settings
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Tools available at startup
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Export resolution and destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 16 - 4096
    /// - `export.width` / `export.height`: 16 - 8192
    /// - `drawing.sticker_font_size`: 8.0 - 128.0
    /// - marker `width`: 0.5 - 50.0
    ///
    /// Tool entries with a blank name (or a blank sticker glyph) are dropped.
    fn validate_and_clamp(&mut self) {
        clamp_dimension("canvas.width", &mut self.canvas.width, 16, 4096);
        clamp_dimension("canvas.height", &mut self.canvas.height, 16, 4096);
        clamp_dimension("export.width", &mut self.export.width, 16, 8192);
        clamp_dimension("export.height", &mut self.export.height, 16, 8192);

        if !(8.0..=128.0).contains(&self.drawing.sticker_font_size) {
            warn!(
                "Invalid sticker_font_size {:.1}, clamping to 8.0-128.0 range",
                self.drawing.sticker_font_size
            );
            self.drawing.sticker_font_size = self.drawing.sticker_font_size.clamp(8.0, 128.0);
        }

        if self.drawing.font_family.trim().is_empty() {
            warn!("Empty font_family, falling back to 'Sans'");
            self.drawing.font_family = "Sans".to_string();
        }

        self.tools.markers.retain(|marker| {
            let keep = !marker.name.trim().is_empty();
            if !keep {
                warn!("Dropping marker with an empty name");
            }
            keep
        });
        for marker in &mut self.tools.markers {
            if !(0.5..=50.0).contains(&marker.width) {
                warn!(
                    "Invalid width {:.1} for marker '{}', clamping to 0.5-50.0 range",
                    marker.width, marker.name
                );
                marker.width = marker.width.clamp(0.5, 50.0);
            }
        }

        self.tools.stickers.retain(|sticker| {
            let keep = !sticker.name.trim().is_empty() && !sticker.glyph.trim().is_empty();
            if !keep {
                warn!("Dropping sticker '{}' with an empty name or glyph", sticker.name);
            }
            keep
        });
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Initial drawing color.
    pub fn default_color(&self) -> Color {
        self.drawing.default_color.to_color_or(BLACK)
    }

    /// Canvas background color.
    pub fn background(&self) -> Color {
        self.canvas.background.to_color_or(WHITE)
    }

    /// Builds the startup tool list: markers first, then stickers.
    pub fn build_tools(&self) -> Vec<Tool> {
        let size = self.drawing.sticker_font_size;
        self.tools
            .markers
            .iter()
            .map(|marker| Tool::marker(marker.name.clone(), marker.width))
            .chain(
                self.tools
                    .stickers
                    .iter()
                    .map(|sticker| Tool::sticker(sticker.name.clone(), sticker.glyph.clone(), size)),
            )
            .collect()
    }
}

fn clamp_dimension(field: &str, value: &mut i32, min: i32, max: i32) {
    if !(min..=max).contains(value) {
        warn!("Invalid {field} {value}, clamping to {min}-{max} range");
        *value = (*value).clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;
    use crate::tools::ToolKind;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.canvas.width, 256);
        assert_eq!(config.export.width, 1024);
        assert_eq!(config.default_color(), BLACK);
        assert_eq!(config.background(), WHITE);

        let names: Vec<_> = config
            .build_tools()
            .iter()
            .map(|tool| tool.name().to_string())
            .collect();
        assert_eq!(names, ["thin", "thick", "🙂", "🌮", "⭐"]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [canvas]
            width = 2
            height = 99999

            [drawing]
            sticker_font_size = 500.0

            [[tools.markers]]
            name = "huge"
            width = 120.0

            [export]
            width = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 4096);
        assert_eq!(config.export.width, 16);
        assert_eq!(config.drawing.sticker_font_size, 128.0);
        assert_eq!(config.tools.markers[0].width, 50.0);
    }

    #[test]
    fn blank_tool_entries_are_dropped() {
        let config = Config::from_toml_str(
            r#"
            [tools]
            markers = [{ name = " ", width = 3.0 }, { name = "pen", width = 3.0 }]
            stickers = [{ name = "ghost", glyph = "" }, { name = "cat", glyph = "🐱" }]
            "#,
        )
        .unwrap();

        let tools = config.build_tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].kind(), &ToolKind::Marker { width: 3.0 });
        assert_eq!(
            tools[1].kind(),
            &ToolKind::Sticker {
                glyph: "🐱".to_string(),
                size: 32.0
            }
        );
    }

    #[test]
    fn rgb_default_color_is_parsed() {
        let config = Config::from_toml_str("[drawing]\ndefault_color = [121, 45, 230]\n").unwrap();
        assert_eq!(config.default_color(), Color::from_rgb8(121, 45, 230));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("[canvas\nwidth = 3").is_err());
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["canvas", "drawing", "tools", "export"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
