//! Configuration enum types.

use crate::draw::{Color, color::name_to_color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [121, 45, 230]  # Marker purple
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, purple, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`], using `fallback` for unknown names.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {}", name, fallback.to_css());
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn named_and_rgb_specs_convert() {
        assert_eq!(ColorSpec::Name("white".into()).to_color_or(BLACK), WHITE);
        assert_eq!(
            ColorSpec::Rgb([255, 0, 0]).to_color_or(BLACK),
            Color::from_rgb8(255, 0, 0)
        );
    }

    #[test]
    fn unknown_name_uses_fallback() {
        assert_eq!(ColorSpec::Name("mauve".into()).to_color_or(WHITE), WHITE);
    }
}
