//! Scene export.
//!
//! Renders the committed strokes onto an off-screen surface of the export
//! resolution (never the live canvas, never the tool preview), encodes it as
//! PNG and hands the bytes to an [`ExportSink`].

pub mod file;
pub mod types;

pub use file::FileSink;
pub use types::{ExportError, ExportSink};

use crate::draw::{Color, FontDescriptor, Stroke, Surface, render_scene};

/// Renders export images at a fixed resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Exporter {
    width: i32,
    height: i32,
    /// Sticker font; must match the live canvas font for the export to show the same scene
    font: FontDescriptor,
}

impl Exporter {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            font: FontDescriptor::default(),
        }
    }

    /// Sets the font sticker glyphs are drawn with.
    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Replays `strokes` from a `canvas_width` x `canvas_height` canvas onto a fresh export surface.
    ///
    /// Canvas coordinates are scaled to fill the export resolution. No tool
    /// preview is ever drawn.
    pub fn render(
        &self,
        canvas_width: i32,
        canvas_height: i32,
        background: Color,
        strokes: &[Stroke],
    ) -> Result<Surface, ExportError> {
        let sx = self.width as f64 / canvas_width.max(1) as f64;
        let sy = self.height as f64 / canvas_height.max(1) as f64;
        let mut surface = Surface::with_scale(self.width, self.height, sx, sy)?;
        surface.paint_mut().font = self.font.clone();
        render_scene(&mut surface, background, strokes, None);
        Ok(surface)
    }

    /// Like [`Exporter::render`], but returns the encoded PNG.
    pub fn render_png(
        &self,
        canvas_width: i32,
        canvas_height: i32,
        background: Color,
        strokes: &[Stroke],
    ) -> Result<Vec<u8>, ExportError> {
        let surface = self.render(canvas_width, canvas_height, background, strokes)?;
        let png = surface.to_png()?;
        log::debug!(
            "Rendered {} strokes into a {}x{} export ({} bytes)",
            strokes.len(),
            self.width,
            self.height,
            png.len()
        );
        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, WHITE};
    use crate::tools::Tool;

    #[test]
    fn export_scales_canvas_strokes_to_export_size() {
        let mut stroke = Tool::marker("thick", 4.0).begin_stroke(0.0, 8.0, RED);
        stroke.extend(16.0, 8.0);

        let surface = Exporter::new(64, 64).render(16, 16, WHITE, &[stroke]).unwrap();

        assert_eq!(surface.width(), 64);
        assert_eq!(surface.pixel(32, 32).unwrap(), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(32, 2).unwrap(), Some([255, 255, 255, 255]));
        assert_eq!(surface.pixel(63, 63).unwrap(), Some([255, 255, 255, 255]));
    }

    #[test]
    fn export_surface_uses_configured_font() {
        let font = FontDescriptor::new("Monospace", "bold");
        let exporter = Exporter::new(32, 32).with_font(font.clone());
        let surface = exporter.render(16, 16, WHITE, &[]).unwrap();
        assert_eq!(surface.paint().font, font);
        assert_eq!(Exporter::new(32, 32).font(), &FontDescriptor::default());
    }

    #[test]
    fn export_png_has_png_signature() {
        let png = Exporter::new(32, 32).render_png(16, 16, WHITE, &[]).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
