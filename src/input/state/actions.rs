use crate::draw::{Color, Point};
use crate::export::ExportError;
use crate::input::events::InputEvent;
use crate::notify::Notification;
use crate::tools::Tool;
use log::{debug, info};
use std::path::PathBuf;

use super::Controller;

impl Controller {
    /// Dispatches a single input event.
    ///
    /// # Errors
    /// Only [`InputEvent::Export`] can fail; every other event either succeeds
    /// or is a defined no-op.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), ExportError> {
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::PointerLeave => self.on_pointer_leave(),
            InputEvent::SelectTool(name) => self.select_tool(&name),
            InputEvent::AddCustomTool { name, glyph } => {
                self.add_custom_tool(&name, &glyph);
            }
            InputEvent::ColorChange { r, g, b } => self.set_color(r, g, b),
            InputEvent::Undo => {
                self.undo();
            }
            InputEvent::Redo => {
                self.redo();
            }
            InputEvent::Clear => self.clear(),
            InputEvent::Export => {
                self.export()?;
            }
        }
        Ok(())
    }

    /// Selects a tool by name (unknown names fall back to the first tool).
    ///
    /// The tool is activated on the live canvas right away and the preview is
    /// rebuilt at its last position, or at the origin if there is none.
    pub fn select_tool(&mut self, name: &str) {
        self.session.tools.select(name);
        let tool = self.session.tools.current().clone();
        tool.activate(&mut self.surface, self.session.color);

        let anchor = self.session.preview_anchor.unwrap_or(Point::ORIGIN);
        self.show_preview_at(anchor);
        self.notify(Notification::ToolMoved);
    }

    /// Registers a custom sticker tool at the end of the tool list.
    ///
    /// Blank names or glyphs and names that are already taken are ignored
    /// without notification. Returns whether a tool was added.
    pub fn add_custom_tool(&mut self, name: &str, glyph: &str) -> bool {
        let (name, glyph) = (name.trim(), glyph.trim());
        if name.is_empty() || glyph.is_empty() {
            debug!("Ignoring custom tool with an empty name or glyph");
            return false;
        }

        if !self
            .session
            .tools
            .register(Tool::sticker(name, glyph, self.sticker_size))
        {
            debug!("Tool '{name}' already exists; custom tool rejected");
            return false;
        }

        info!("Added custom sticker '{name}' ({glyph})");
        self.notify(Notification::ToolListChanged);
        true
    }

    /// Sets the color for strokes started from now on.
    ///
    /// Existing strokes keep the color they captured. A visible preview is
    /// repainted in the new color.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.session.color = Color::from_rgb8(r, g, b);
        debug!("Color set to {}", self.session.color.to_css());

        let tool = self.session.tools.current().clone();
        tool.activate(&mut self.surface, self.session.color);

        if let Some(anchor) = self.session.preview_anchor {
            self.show_preview_at(anchor);
            self.notify(Notification::ToolMoved);
        }
    }

    /// Undoes the most recent stroke. Returns `false` (and notifies nobody) if there is none.
    pub fn undo(&mut self) -> bool {
        self.finish_stroke();
        if !self.session.history.undo() {
            debug!("Nothing to undo");
            return false;
        }
        self.notify(Notification::ModelChanged);
        true
    }

    /// Redoes the most recently undone stroke. Returns `false` (and notifies nobody) if there is none.
    pub fn redo(&mut self) -> bool {
        self.finish_stroke();
        if !self.session.history.redo() {
            debug!("Nothing to redo");
            return false;
        }
        self.notify(Notification::ModelChanged);
        true
    }

    /// Discards all committed and redoable strokes.
    pub fn clear(&mut self) {
        self.finish_stroke();
        self.session.history.clear();
        self.notify(Notification::ModelChanged);
    }

    /// Renders the committed strokes at export resolution and hands the PNG to the sink.
    ///
    /// The live canvas, the history and the preview are left untouched.
    pub fn export(&mut self) -> Result<Option<PathBuf>, ExportError> {
        let png = self.exporter.render_png(
            self.surface.width(),
            self.surface.height(),
            self.background,
            self.session.history.committed(),
        )?;
        let saved = self.sink.save(&png)?;
        match &saved {
            Some(path) => info!("Exported sketch to {}", path.display()),
            None => info!("Exported sketch ({} bytes)", png.len()),
        }
        Ok(saved)
    }
}
