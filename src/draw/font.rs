//! Font descriptor for sticker glyph rendering.

use serde::{Deserialize, Serialize};

/// Family and weight used for sticker glyphs.
///
/// Part of the surface paint state so that sticker previews and committed
/// sticker strokes go through the same font selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Noto Color Emoji")
    pub family: String,

    /// Font weight (e.g., "normal", "bold")
    pub weight: String,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified family and weight.
    pub fn new(family: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
        }
    }

    /// Pango description string such as `"Sans 32"` or `"Sans Bold 24"`.
    ///
    /// A "normal" weight is left out so Pango falls back to the family default.
    pub fn to_pango_string(&self, size: f64) -> String {
        let size = size.round() as i32;
        if self.weight.eq_ignore_ascii_case("normal") || self.weight.is_empty() {
            return format!("{} {size}", self.family);
        }
        let mut weight = self.weight.to_ascii_lowercase();
        if let Some(head) = weight.get_mut(..1) {
            head.make_ascii_uppercase();
        }
        format!("{} {weight} {size}", self.family)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Sans", "normal")
    }
}
