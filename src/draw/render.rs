//! Full-scene redraw: background, committed strokes, then the tool preview.

use super::color::Color;
use super::stroke::{Point, Stroke};
use super::surface::Surface;
use crate::tools::{PreviewSpec, ToolKind};

/// Redraws the whole scene onto `surface`.
///
/// Fills the surface's own device area with `background`, replays `strokes`
/// oldest first (later strokes land on top), then draws `preview` above
/// everything. Reads nothing but its arguments, so the same inputs always
/// produce the same pixels, on the live canvas or on an export surface.
pub fn render_scene(
    surface: &mut Surface,
    background: Color,
    strokes: &[Stroke],
    preview: Option<&PreviewSpec>,
) {
    surface.fill_background(background);
    render_strokes(surface, strokes);
    if let Some(preview) = preview {
        render_preview(surface, preview);
    }
}

/// Replays strokes in order.
pub fn render_strokes(surface: &mut Surface, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(surface, stroke);
    }
}

/// Replays a single stroke with its own tool and captured color.
///
/// The surface paint state is saved before the stroke's tool is activated and
/// restored afterward, so the next stroke (or live drawing) starts from the
/// paint state that was current before this call.
pub fn render_stroke(surface: &mut Surface, stroke: &Stroke) {
    surface.with_saved_paint(|s| {
        stroke.tool().activate(s, stroke.color());
        match stroke.tool().kind() {
            ToolKind::Marker { .. } => render_marker_path(s, stroke.points()),
            ToolKind::Sticker { glyph, .. } => {
                if let Some(anchor) = stroke.points().last() {
                    s.draw_glyph(anchor.x, anchor.y, glyph);
                }
            }
        }
    });
}

/// Draws the transient tool preview.
pub fn render_preview(surface: &mut Surface, preview: &PreviewSpec) {
    surface.with_saved_paint(|s| match preview {
        PreviewSpec::Square {
            center,
            size,
            color,
        } => {
            s.paint_mut().fill_color = *color;
            s.fill_square(center.x, center.y, *size);
        }
        PreviewSpec::Glyph {
            anchor,
            glyph,
            size,
            color,
        } => {
            let paint = s.paint_mut();
            paint.fill_color = *color;
            paint.font_size = *size;
            s.draw_glyph(anchor.x, anchor.y, glyph);
        }
    });
}

/// Open path through `points` in insertion order, one stroke operation per segment.
fn render_marker_path(surface: &mut Surface, points: &[Point]) {
    match points {
        [] => {}
        [only] => surface.stroke_segment(*only, *only),
        _ => {
            for pair in points.windows(2) {
                surface.stroke_segment(pair[0], pair[1]);
            }
        }
    }
}
