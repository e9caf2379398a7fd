//! Stroke colors and the named palette accepted in config files.

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color, each channel in `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let purple = Color::from_rgb8(0x79, 0x2d, 0xe6);
/// assert_eq!(purple.to_css(), "rgb(121, 45, 230)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0-1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 channel values, as delivered by the color picker.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Returns the 0-255 channel values (alpha is dropped).
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Composes the channels into a CSS-style color string, e.g. `rgb(255, 0, 0)`.
    pub fn to_css(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgb({r}, {g}, {b})")
    }

    /// Applies this color as the current Cairo source.
    pub(crate) fn set_source(self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

/// Looks up a palette entry by name, ignoring case.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_ascii_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "purple" => Some(PURPLE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

const fn opaque(r: f64, g: f64, b: f64) -> Color {
    Color { r, g, b, a: 1.0 }
}

pub const RED: Color = opaque(1.0, 0.0, 0.0);
pub const GREEN: Color = opaque(0.0, 1.0, 0.0);
pub const BLUE: Color = opaque(0.0, 0.0, 1.0);
pub const YELLOW: Color = opaque(1.0, 1.0, 0.0);
pub const ORANGE: Color = opaque(1.0, 0.5, 0.0);
/// Magenta; the config name is "pink".
pub const PINK: Color = opaque(1.0, 0.0, 1.0);
/// Marker purple, #792de6.
pub const PURPLE: Color = opaque(121.0 / 255.0, 45.0 / 255.0, 230.0 / 255.0);
pub const WHITE: Color = opaque(1.0, 1.0, 1.0);
pub const BLACK: Color = opaque(0.0, 0.0, 0.0);
