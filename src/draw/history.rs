//! Undo/redo history of committed strokes.

use super::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// Committed strokes plus the stack of undone ones.
///
/// `committed` is also the render order (first = bottom layer, last = top
/// layer). `redoable` is a stack: the most recently undone stroke is last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    committed: Vec<Stroke>,
    redoable: Vec<Stroke>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strokes in drawing order.
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    /// Undone strokes, most recently undone last.
    pub fn redoable(&self) -> &[Stroke] {
        &self.redoable
    }

    /// Pushes a freshly started stroke on top and invalidates the redo stack.
    pub fn commit(&mut self, stroke: Stroke) {
        self.committed.push(stroke);
        self.redoable.clear();
    }

    /// The top-most committed stroke, which is the one being dragged while painting.
    pub fn in_progress_mut(&mut self) -> Option<&mut Stroke> {
        self.committed.last_mut()
    }

    /// Moves the last committed stroke onto the redo stack.
    ///
    /// Returns `false` without changing anything if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.redoable.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone stroke back on top of the committed strokes.
    ///
    /// Returns `false` without changing anything if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redoable.pop() {
            Some(stroke) => {
                self.committed.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Empties both stacks.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redoable.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }
}
