//! Session state and the controller that owns it.

use crate::config::Config;
use crate::draw::{
    Color, FontDescriptor, History, Point, Surface, SurfaceError, WHITE, render_scene,
};
use crate::export::{ExportSink, Exporter};
use crate::notify::{Notification, NotificationBus, Observer};
use crate::tools::{DEFAULT_STICKER_SIZE, PreviewSpec, Tool, ToolRegistry};
use log::{debug, info};

/// Everything the drawing session knows, in one place.
///
/// The [`Controller`] is the only writer; the render pipeline only reads it.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Color stamped into new strokes
    pub(crate) color: Color,
    /// Available tools and the current selection
    pub(crate) tools: ToolRegistry,
    /// Committed and redoable strokes
    pub(crate) history: History,
    /// Transient cursor preview (never part of history or export)
    pub(crate) preview: Option<PreviewSpec>,
    /// Where the preview was last shown; `None` once the pointer leaves
    pub(crate) preview_anchor: Option<Point>,
    /// Whether the top-most committed stroke is still being dragged
    pub(crate) painting: bool,
}

impl SessionState {
    pub fn new(tools: ToolRegistry, color: Color) -> Self {
        Self {
            color,
            tools,
            history: History::new(),
            preview: None,
            preview_anchor: None,
            painting: false,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn preview(&self) -> Option<&PreviewSpec> {
        self.preview.as_ref()
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }
}

/// Construction parameters for a [`Controller`].
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Live canvas width in pixels
    pub canvas_width: i32,
    /// Live canvas height in pixels
    pub canvas_height: i32,
    /// Background painted under the strokes
    pub background: Color,
    /// Color of the first stroke
    pub initial_color: Color,
    /// Startup tools in display order
    pub tools: Vec<Tool>,
    /// Glyph size for stickers added at runtime
    pub sticker_size: f64,
    /// Font used for sticker glyphs
    pub font: FontDescriptor,
    /// Export image width in pixels
    pub export_width: i32,
    /// Export image height in pixels
    pub export_height: i32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            canvas_width: 256,
            canvas_height: 256,
            background: WHITE,
            initial_color: crate::draw::BLACK,
            tools: ToolRegistry::default_tools(),
            sticker_size: DEFAULT_STICKER_SIZE,
            font: FontDescriptor::default(),
            export_width: 1024,
            export_height: 1024,
        }
    }
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        Self {
            canvas_width: config.canvas.width,
            canvas_height: config.canvas.height,
            background: config.background(),
            initial_color: config.default_color(),
            tools: config.build_tools(),
            sticker_size: config.drawing.sticker_font_size,
            font: FontDescriptor::new(config.drawing.font_family.clone(), "normal"),
            export_width: config.export.width,
            export_height: config.export.height,
        }
    }
}

/// Translates input events into model changes and keeps the live canvas in sync.
///
/// Every mutation ends in [`Controller::notify`], which redraws the live
/// surface synchronously and then informs host observers. Handlers take
/// `&mut self`, so no two of them can interleave.
pub struct Controller {
    pub(super) session: SessionState,
    pub(super) surface: Surface,
    pub(super) background: Color,
    pub(super) sticker_size: f64,
    pub(super) exporter: Exporter,
    pub(super) sink: Box<dyn ExportSink>,
    bus: NotificationBus,
    redraws: usize,
}

impl Controller {
    /// Acquires the live canvas and sets up an idle session.
    ///
    /// # Errors
    /// Fails if the drawing surface cannot be created; nothing can run without it.
    pub fn new(options: ControllerOptions, sink: Box<dyn ExportSink>) -> Result<Self, SurfaceError> {
        let mut surface = Surface::new(options.canvas_width, options.canvas_height)?;
        surface.paint_mut().font = options.font.clone();

        let session = SessionState::new(ToolRegistry::new(options.tools), options.initial_color);
        session.tools.current().activate(&mut surface, session.color);

        info!(
            "Canvas ready: {}x{}, {} tools, current '{}'",
            options.canvas_width,
            options.canvas_height,
            session.tools.list().len(),
            session.tools.current().name()
        );

        let mut controller = Self {
            session,
            surface,
            background: options.background,
            sticker_size: options.sticker_size,
            exporter: Exporter::new(options.export_width, options.export_height)
                .with_font(options.font),
            sink,
            bus: NotificationBus::new(),
            redraws: 0,
        };
        controller.redraw();
        Ok(controller)
    }

    /// Builds a controller from loaded configuration.
    pub fn from_config(config: &Config, sink: Box<dyn ExportSink>) -> Result<Self, SurfaceError> {
        Self::new(ControllerOptions::from(config), sink)
    }

    /// Registers a host observer for notifications.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.bus.subscribe(Box::new(observer));
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The live canvas.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Number of full redraws performed so far (including the initial one).
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Reacts to a model change: redraw first, then tell the host.
    pub(super) fn notify(&mut self, notification: Notification) {
        if notification.needs_redraw() {
            self.redraw();
        }
        debug!("Notify {:?}", notification);
        self.bus.emit(notification);
    }

    /// Clears the live canvas and replays the committed strokes plus the preview.
    fn redraw(&mut self) {
        render_scene(
            &mut self.surface,
            self.background,
            self.session.history.committed(),
            self.session.preview.as_ref(),
        );
        self.redraws += 1;
    }

    /// Rebuilds the preview for the current tool and color at `anchor`.
    pub(super) fn show_preview_at(&mut self, anchor: Point) {
        let tool = self.session.tools.current();
        self.session.preview = Some(tool.preview(anchor.x, anchor.y, self.session.color));
        self.session.preview_anchor = Some(anchor);
    }

    /// Ends any in-progress drag so its stroke becomes immutable.
    pub(super) fn finish_stroke(&mut self) {
        if self.session.painting {
            self.session.painting = false;
            debug!("Stroke finalized");
        }
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("session", &self.session)
            .field("surface", &self.surface)
            .field("exporter", &self.exporter)
            .field("bus", &self.bus)
            .field("redraws", &self.redraws)
            .finish()
    }
}
