use crate::draw::Point;
use crate::notify::Notification;
use log::trace;

use super::Controller;

impl Controller {
    /// Processes a pointer press over the canvas.
    ///
    /// Starts a stroke with the current tool and color, commits it as the
    /// in-progress stroke (which invalidates redo) and enters painting mode.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let stroke = self
            .session
            .tools
            .current()
            .begin_stroke(x, y, self.session.color);
        self.session.history.commit(stroke);
        self.session.painting = true;
        self.notify(Notification::ModelChanged);
    }

    /// Processes pointer motion over the canvas.
    ///
    /// The preview always follows the pointer. While painting, the in-progress
    /// stroke is extended as well.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.show_preview_at(Point::new(x, y));
        self.notify(Notification::ToolMoved);

        if self.session.painting {
            if let Some(stroke) = self.session.history.in_progress_mut() {
                stroke.extend(x, y);
                trace!("Extended stroke to {} points", stroke.points().len());
            }
            self.notify(Notification::ModelChanged);
        }
    }

    /// Processes a pointer release: the in-progress stroke is final from now on.
    pub fn on_pointer_up(&mut self) {
        self.finish_stroke();
    }

    /// Processes the pointer leaving the canvas.
    ///
    /// Finalizes any in-progress stroke and removes the preview so no stale
    /// cursor lingers at the edge.
    pub fn on_pointer_leave(&mut self) {
        self.finish_stroke();
        self.session.preview = None;
        self.session.preview_anchor = None;
        self.notify(Notification::ToolMoved);
    }
}
