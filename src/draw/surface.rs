//! Raster drawing surface with an explicit paint state.
//!
//! A [`Surface`] owns a Cairo image surface plus the paint parameters tools
//! configure through `activate`. Drawing helpers read the paint state at draw
//! time, so swapping it is the only thing a tool needs to do.

use super::color::{BLACK, Color};
use super::font::FontDescriptor;
use super::stroke::Point;
use thiserror::Error;

/// Errors raised while acquiring or reading a drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data is borrowed elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Paint parameters consulted by every drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintState {
    /// Line width for stroked paths, in canvas pixels
    pub line_width: f64,
    /// Color used for stroked paths
    pub stroke_color: Color,
    /// Color used for filled shapes and glyphs
    pub fill_color: Color,
    /// Font used for glyph stamping
    pub font: FontDescriptor,
    /// Glyph size in canvas pixels
    pub font_size: f64,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            stroke_color: BLACK,
            fill_color: BLACK,
            font: FontDescriptor::default(),
            font_size: 32.0,
        }
    }
}

/// An off-screen ARGB32 raster surface plus its Cairo context and paint state.
pub struct Surface {
    image: cairo::ImageSurface,
    ctx: cairo::Context,
    width: i32,
    height: i32,
    paint: PaintState,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("paint", &self.paint)
            .finish()
    }
}

impl Surface {
    /// Acquires a surface of the given pixel size with a 1:1 coordinate space.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        Self::with_scale(width, height, 1.0, 1.0)
    }

    /// Acquires a surface whose user space is scaled by `(sx, sy)`.
    ///
    /// Used for export, where canvas coordinates are mapped onto a larger image.
    pub fn with_scale(width: i32, height: i32, sx: f64, sy: f64) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let ctx = cairo::Context::new(&image)?;
        ctx.scale(sx, sy);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        Ok(Self {
            image,
            ctx,
            width,
            height,
            paint: PaintState::default(),
        })
    }

    /// Surface width in device pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Surface height in device pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Current paint parameters.
    pub fn paint(&self) -> &PaintState {
        &self.paint
    }

    /// Mutable access to the paint parameters (used by tool activation).
    pub fn paint_mut(&mut self) -> &mut PaintState {
        &mut self.paint
    }

    /// Runs `f` with the paint state and Cairo graphics state saved, restoring both afterward.
    ///
    /// Anything `f` changes (tool activation, captured stroke colors, transforms)
    /// is discarded once it returns.
    pub fn with_saved_paint<R>(&mut self, f: impl FnOnce(&mut Surface) -> R) -> R {
        let saved = self.paint.clone();
        let _ = self.ctx.save();
        let result = f(self);
        let _ = self.ctx.restore();
        self.paint = saved;
        result
    }

    /// Fills the full device area of this surface with `color`.
    ///
    /// Uses the surface's own dimensions in device space, so it covers the
    /// whole image regardless of any user-space scale.
    pub fn fill_background(&mut self, color: Color) {
        let _ = self.ctx.save();
        self.ctx.identity_matrix();
        self.ctx.set_operator(cairo::Operator::Source);
        color.set_source(&self.ctx);
        self.ctx.rectangle(0.0, 0.0, self.width as f64, self.height as f64);
        let _ = self.ctx.fill();
        let _ = self.ctx.restore();
    }

    /// Strokes a single segment with the current stroke color and line width.
    ///
    /// A zero-length segment renders as a round dot.
    pub fn stroke_segment(&mut self, from: Point, to: Point) {
        self.paint.stroke_color.set_source(&self.ctx);
        self.ctx.set_line_width(self.paint.line_width);
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        let _ = self.ctx.stroke();
    }

    /// Fills an axis-aligned square of side `size` centered on `(cx, cy)`.
    pub fn fill_square(&mut self, cx: f64, cy: f64, size: f64) {
        let half = size / 2.0;
        self.paint.fill_color.set_source(&self.ctx);
        self.ctx.rectangle(cx - half, cy - half, size, size);
        let _ = self.ctx.fill();
    }

    /// Draws `glyph` centered on `(x, y)` with the current font and fill color.
    pub fn draw_glyph(&mut self, x: f64, y: f64, glyph: &str) {
        let layout = pangocairo::functions::create_layout(&self.ctx);
        let desc = pango::FontDescription::from_string(
            &self.paint.font.to_pango_string(self.paint.font_size),
        );
        layout.set_font_description(Some(&desc));
        layout.set_text(glyph);

        let (w, h) = layout.pixel_size();
        self.paint.fill_color.set_source(&self.ctx);
        self.ctx.move_to(x - w as f64 / 2.0, y - h as f64 / 2.0);
        pangocairo::functions::show_layout(&self.ctx, &layout);
        self.ctx.new_path();
    }

    /// Copies the raw ARGB32 pixel data (row stride included).
    pub fn snapshot(&self) -> Result<Vec<u8>, SurfaceError> {
        self.image.flush();
        let mut pixels = Vec::new();
        self.image.with_data(|data| pixels.extend_from_slice(data))?;
        Ok(pixels)
    }

    /// Returns the (premultiplied) `[r, g, b, a]` bytes of one device pixel.
    pub fn pixel(&self, x: i32, y: i32) -> Result<Option<[u8; 4]>, SurfaceError> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Ok(None);
        }
        let offset = y as usize * self.image.stride() as usize + x as usize * 4;
        self.image.flush();
        let mut word = 0u32;
        self.image.with_data(|data| {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&data[offset..offset + 4]);
            word = u32::from_ne_bytes(bytes);
        })?;
        Ok(Some([
            (word >> 16) as u8,
            (word >> 8) as u8,
            word as u8,
            (word >> 24) as u8,
        ]))
    }

    /// Encodes the surface as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.image.flush();
        let mut bytes = Vec::new();
        self.image.write_to_png(&mut bytes)?;
        Ok(bytes)
    }
}
